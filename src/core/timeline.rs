use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::{duration, group_key, interval};
use crate::domain::model::{ExperienceRecord, GroupViewModel, MemberOrder, Timeline};
use crate::utils::error::{RecordIssue, Result};

/// Turns a flat record list into render-ready groups.
///
/// Every open-ended record in one call resolves against the same `now`.
#[derive(Debug, Clone, Copy)]
pub struct TimelineAssembler {
    now: NaiveDate,
    member_order: MemberOrder,
}

impl TimelineAssembler {
    pub fn new(now: NaiveDate) -> Self {
        Self {
            now,
            member_order: MemberOrder::default(),
        }
    }

    pub fn with_member_order(mut self, member_order: MemberOrder) -> Self {
        self.member_order = member_order;
        self
    }

    pub fn assemble(&self, records: &[ExperienceRecord]) -> Result<Timeline> {
        let mut issues = Vec::new();
        let mut groups = Vec::new();

        for (key, members) in partition(records) {
            let view_model = match members.as_slice() {
                [record] => {
                    if let Err(issue @ RecordIssue::InvalidRange { .. }) = record.date_span() {
                        tracing::warn!("{}", issue);
                        issues.push(issue);
                    }
                    GroupViewModel::Single {
                        key,
                        record: (*record).clone(),
                    }
                }
                _ => self.build_group(key, &members, &mut issues)?,
            };
            groups.push(view_model);
        }

        Ok(Timeline {
            now: self.now,
            groups,
            issues,
        })
    }

    fn build_group(
        &self,
        key: String,
        members: &[&ExperienceRecord],
        issues: &mut Vec<RecordIssue>,
    ) -> Result<GroupViewModel> {
        let mut spans = Vec::with_capacity(members.len());
        for member in members {
            match member.date_span() {
                Ok(span) => spans.push(span),
                Err(issue) => {
                    tracing::warn!(group = %key, "{}; excluded from duration", issue);
                    issues.push(issue);
                }
            }
        }

        let summary = if spans.is_empty() {
            None
        } else {
            Some(interval::merge(&spans, self.now)?)
        };
        let duration_text = summary
            .as_ref()
            .map(|s| duration::format_duration(s.total_duration_months, s.is_sub_month));

        tracing::debug!(
            group = %key,
            members = members.len(),
            counted = spans.len(),
            duration = duration_text.as_deref().unwrap_or("-"),
            "assembled group"
        );

        Ok(GroupViewModel::Grouped {
            label: group_key::label(members[0]),
            key,
            duration_text,
            is_current: members.iter().any(|member| member.is_ongoing()),
            members: self.order_members(members),
            summary,
        })
    }

    fn order_members(&self, members: &[&ExperienceRecord]) -> Vec<ExperienceRecord> {
        let mut ordered: Vec<ExperienceRecord> = members.iter().map(|m| (*m).clone()).collect();
        match self.member_order {
            MemberOrder::Input => {}
            MemberOrder::StartDescending => ordered.sort_by(start_descending),
        }
        ordered
    }
}

/// Groups records by key. Both the groups and the members inside each group
/// keep first-seen input order.
fn partition(records: &[ExperienceRecord]) -> Vec<(String, Vec<&ExperienceRecord>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&ExperienceRecord>)> = Vec::new();

    for record in records {
        let key = group_key::resolve(record);
        match index.get(&key) {
            Some(&position) => groups[position].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

fn start_descending(a: &ExperienceRecord, b: &ExperienceRecord) -> Ordering {
    b.start
        .is_some()
        .cmp(&a.start.is_some())
        .then(a.end.is_some().cmp(&b.end.is_some()))
        .then(b.start.cmp(&a.start))
}

pub fn assemble(records: &[ExperienceRecord], now: NaiveDate) -> Result<Timeline> {
    TimelineAssembler::new(now).assemble(records)
}
