use chrono::NaiveDate;
use serde::Serialize;

use crate::core::group_key;
use crate::domain::model::{ExperienceKind, ExperienceRecord, GroupViewModel, OutputFormat, Timeline};
use crate::utils::error::{Result, TimelineError};

pub fn render(timeline: &Timeline, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(timeline)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(timeline)?),
        OutputFormat::Csv => render_csv(timeline),
    }
}

fn month_year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| "Undated".to_string())
}

fn date_range(record: &ExperienceRecord) -> String {
    let end = match record.end {
        Some(end) => month_year(Some(end)),
        None => "Present".to_string(),
    };
    format!("{} - {}", month_year(record.start), end)
}

pub fn render_text(timeline: &Timeline) -> String {
    let mut lines = Vec::new();

    for group in &timeline.groups {
        match group {
            GroupViewModel::Single { record, .. } => {
                lines.push(format!("{} · {}", record.title, date_range(record)));
            }
            GroupViewModel::Grouped {
                label,
                duration_text,
                is_current,
                members,
                ..
            } => {
                let mut header = label.clone();
                if let Some(duration) = duration_text {
                    header.push_str(" · ");
                    header.push_str(duration);
                }
                if *is_current {
                    header.push_str(" · Current");
                }
                lines.push(header);
                for member in members {
                    lines.push(format!("  {} · {}", member.title, date_range(member)));
                }
            }
        }
    }

    if !timeline.issues.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for issue in &timeline.issues {
            lines.push(format!("  - {}", issue));
        }
    }

    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    group_key: &'a str,
    group_label: String,
    group_duration: Option<&'a str>,
    group_current: bool,
    record_id: &'a str,
    kind: ExperienceKind,
    title: &'a str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

pub fn render_csv(timeline: &Timeline) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for group in &timeline.groups {
        let (label, duration, current) = match group {
            GroupViewModel::Single { record, .. } => {
                (group_key::label(record), None, record.is_ongoing())
            }
            GroupViewModel::Grouped {
                label,
                duration_text,
                is_current,
                ..
            } => (label.clone(), duration_text.as_deref(), *is_current),
        };

        for member in group.members() {
            writer.serialize(CsvRow {
                group_key: group.key(),
                group_label: label.clone(),
                group_duration: duration,
                group_current: current,
                record_id: &member.id,
                kind: member.kind,
                title: &member.title,
                start: member.start,
                end: member.end,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TimelineError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| TimelineError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
