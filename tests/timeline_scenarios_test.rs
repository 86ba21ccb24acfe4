use chrono::NaiveDate;
use experience_timeline::core::timeline::assemble;
use experience_timeline::{ExperienceKind, ExperienceRecord, GroupViewModel, Timeline};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> NaiveDate {
    date(2024, 6, 1)
}

fn at_acme(id: &str, start: NaiveDate, end: Option<NaiveDate>) -> ExperienceRecord {
    ExperienceRecord::new(id, ExperienceKind::Work, format!("Role {}", id))
        .with_organization(Some("acme-1"), Some("Acme"))
        .with_dates(Some(start), end)
}

fn only_group(timeline: &Timeline) -> (Option<&str>, bool, usize, usize) {
    assert_eq!(timeline.groups.len(), 1);
    match &timeline.groups[0] {
        GroupViewModel::Grouped {
            duration_text,
            is_current,
            members,
            summary,
            ..
        } => (
            duration_text.as_deref(),
            *is_current,
            members.len(),
            summary.as_ref().map(|s| s.disjoint.len()).unwrap_or(0),
        ),
        other => panic!("expected grouped view model, got {:?}", other),
    }
}

#[test]
fn test_separate_years_with_gap() {
    let records = vec![
        at_acme("a", date(2020, 1, 1), Some(date(2021, 1, 1))),
        at_acme("b", date(2022, 1, 1), Some(date(2023, 1, 1))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, current, members, disjoint) = only_group(&timeline);

    assert_eq!(duration, Some("2 years"));
    assert!(!current);
    assert_eq!(members, 2);
    assert_eq!(disjoint, 2);
}

#[test]
fn test_overlap_is_not_double_counted() {
    let records = vec![
        at_acme("a", date(2020, 1, 1), Some(date(2022, 6, 1))),
        at_acme("b", date(2021, 6, 1), Some(date(2023, 1, 1))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, disjoint) = only_group(&timeline);

    assert_eq!(duration, Some("3 years"));
    assert_eq!(disjoint, 1);
    if let GroupViewModel::Grouped {
        summary: Some(summary),
        ..
    } = &timeline.groups[0]
    {
        assert_eq!(summary.disjoint[0].start, date(2020, 1, 1));
        assert_eq!(summary.disjoint[0].end, date(2023, 1, 1));
        assert_eq!(summary.total_duration_months, 36);
    }
}

#[test]
fn test_three_records_with_two_gaps() {
    let records = vec![
        at_acme("a", date(2019, 1, 1), Some(date(2020, 1, 1))),
        at_acme("b", date(2021, 1, 1), Some(date(2022, 1, 1))),
        at_acme("c", date(2023, 1, 1), Some(date(2024, 1, 1))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, disjoint) = only_group(&timeline);

    assert_eq!(duration, Some("3 years"));
    assert_eq!(disjoint, 3);
}

#[test]
fn test_year_and_months_phrase() {
    let records = vec![
        at_acme("a", date(2021, 1, 1), Some(date(2021, 7, 1))),
        at_acme("b", date(2022, 1, 1), Some(date(2023, 4, 1))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, _) = only_group(&timeline);

    assert_eq!(duration, Some("1 year 9 months"));
}

#[test]
fn test_short_stints_are_less_than_a_month() {
    let records = vec![
        at_acme("a", date(2023, 1, 1), Some(date(2023, 1, 10))),
        at_acme("b", date(2023, 1, 15), Some(date(2023, 1, 20))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, _) = only_group(&timeline);

    assert_eq!(duration, Some("Less than a month"));
}

#[test]
fn test_february_only_stints_read_as_less_than_a_month() {
    let records = vec![
        at_acme("a", date(2023, 2, 1), Some(date(2023, 2, 10))),
        at_acme("b", date(2023, 2, 10), Some(date(2023, 3, 1))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, disjoint) = only_group(&timeline);

    assert_eq!(duration, Some("Less than a month"));
    assert_eq!(disjoint, 1);
}

#[test]
fn test_touching_partial_months_read_as_one_month() {
    let records = vec![
        at_acme("a", date(2020, 1, 15), Some(date(2020, 2, 14))),
        at_acme("b", date(2020, 2, 14), Some(date(2020, 3, 15))),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, _, _, disjoint) = only_group(&timeline);

    assert_eq!(duration, Some("1 month"));
    assert_eq!(disjoint, 1);
}

#[test]
fn test_ongoing_record_uses_now() {
    let records = vec![
        at_acme("a", date(2018, 1, 1), Some(date(2020, 1, 1))),
        at_acme("b", date(2021, 6, 1), None),
    ];
    let timeline = assemble(&records, now()).unwrap();
    let (duration, current, _, _) = only_group(&timeline);

    assert!(current);
    // 24 closed months plus 2021-06..2024-06.
    assert_eq!(duration, Some("5 years"));

    let later = assemble(&records, date(2025, 3, 1)).unwrap();
    let (duration, _, _, _) = only_group(&later);
    assert_eq!(duration, Some("5 years 9 months"));
}

#[test]
fn test_same_input_same_now_is_identical() {
    let records = vec![
        at_acme("a", date(2018, 1, 1), None),
        at_acme("b", date(2017, 4, 1), Some(date(2019, 1, 1))),
        ExperienceRecord::new("c", ExperienceKind::OpenSource, "Reviewer")
            .with_repository(None, Some("serde-rs/serde"))
            .with_dates(Some(date(2020, 1, 1)), None),
    ];

    let first = assemble(&records, now()).unwrap();
    let second = assemble(&records, now()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_mixed_profile_grouping() {
    let records = vec![
        ExperienceRecord::new("oss-1", ExperienceKind::OpenSource, "Contributor")
            .with_repository(None, Some("tokio-rs/tokio"))
            .with_dates(Some(date(2021, 1, 1)), Some(date(2022, 1, 1))),
        at_acme("job-1", date(2019, 1, 1), Some(date(2020, 1, 1))),
        ExperienceRecord::new("edu-1", ExperienceKind::Education, "MSc")
            .with_custom_organization("Uni of Somewhere")
            .with_dates(Some(date(2016, 9, 1)), Some(date(2018, 6, 1))),
        ExperienceRecord::new("oss-2", ExperienceKind::OpenSource, "Maintainer")
            .with_repository(Some("tokio-rs"), Some("tokio-rs/axum"))
            .with_dates(Some(date(2022, 1, 1)), None),
    ];
    let timeline = assemble(&records, now()).unwrap();

    let keys: Vec<&str> = timeline.groups.iter().map(GroupViewModel::key).collect();
    assert_eq!(keys, vec!["owner:tokio-rs", "org:acme-1", "name:uni of somewhere"]);

    match &timeline.groups[0] {
        GroupViewModel::Grouped {
            label,
            duration_text,
            is_current,
            ..
        } => {
            assert_eq!(label, "tokio-rs");
            assert_eq!(duration_text.as_deref(), Some("3 years 5 months"));
            assert!(*is_current);
        }
        other => panic!("expected grouped view model, got {:?}", other),
    }
    assert!(matches!(timeline.groups[1], GroupViewModel::Single { .. }));
    assert!(matches!(timeline.groups[2], GroupViewModel::Single { .. }));
}
