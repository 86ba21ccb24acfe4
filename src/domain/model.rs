use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::RecordIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceKind {
    Work,
    Education,
    Project,
    Certification,
    Volunteering,
    OpenSource,
}

/// One entry on a person's timeline, as supplied by the profile data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: String,
    pub kind: ExperienceKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_owner: Option<String>,
    /// Repository full name, `owner/name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, with = "crate::domain::date::option")]
    pub start: Option<NaiveDate>,
    /// Absent means the record is ongoing.
    #[serde(default, with = "crate::domain::date::option")]
    pub end: Option<NaiveDate>,
}

impl ExperienceRecord {
    pub fn new(id: impl Into<String>, kind: ExperienceKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            organization_id: None,
            organization_name: None,
            custom_organization_name: None,
            repository_owner: None,
            repository: None,
            start: None,
            end: None,
        }
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_organization(mut self, id: Option<&str>, name: Option<&str>) -> Self {
        self.organization_id = id.map(str::to_string);
        self.organization_name = name.map(str::to_string);
        self
    }

    pub fn with_custom_organization(mut self, name: &str) -> Self {
        self.custom_organization_name = Some(name.to_string());
        self
    }

    pub fn with_repository(mut self, owner: Option<&str>, full_name: Option<&str>) -> Self {
        self.repository_owner = owner.map(str::to_string);
        self.repository = full_name.map(str::to_string);
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// The record's placement on the timeline, or the reason it has none.
    pub fn date_span(&self) -> std::result::Result<DateSpan, RecordIssue> {
        let start = self.start.ok_or_else(|| RecordIssue::MissingStartDate {
            record_id: self.id.clone(),
        })?;

        match self.end {
            Some(end) if end < start => Err(RecordIssue::InvalidRange {
                record_id: self.id.clone(),
                start,
                end,
            }),
            end => Ok(DateSpan { start, end }),
        }
    }
}

/// A validated `(start, end)` pair; `end == None` marks an open-ended span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateSpan {
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

/// A resolved interval. `end` is always concrete; `is_open_ended` remembers
/// whether it came from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub is_open_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    pub disjoint: Vec<Interval>,
    pub is_current: bool,
    pub total_duration_months: u32,
    pub total_duration_days: i64,
    pub is_sub_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GroupViewModel {
    #[serde(rename_all = "camelCase")]
    Single {
        key: String,
        record: ExperienceRecord,
    },
    #[serde(rename_all = "camelCase")]
    Grouped {
        key: String,
        label: String,
        /// `None` when no member could be placed on the timeline.
        duration_text: Option<String>,
        is_current: bool,
        members: Vec<ExperienceRecord>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<MergeSummary>,
    },
}

impl GroupViewModel {
    pub fn key(&self) -> &str {
        match self {
            GroupViewModel::Single { key, .. } | GroupViewModel::Grouped { key, .. } => key,
        }
    }

    pub fn members(&self) -> &[ExperienceRecord] {
        match self {
            GroupViewModel::Single { record, .. } => std::slice::from_ref(record),
            GroupViewModel::Grouped { members, .. } => members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub now: NaiveDate,
    pub groups: Vec<GroupViewModel>,
    pub issues: Vec<RecordIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum MemberOrder {
    /// Members keep the order they had in the input.
    #[default]
    Input,
    /// Ongoing first, then latest start; undated members last.
    #[serde(rename = "start-desc")]
    #[cfg_attr(feature = "cli", value(name = "start-desc"))]
    StartDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Input files are either a bare array or `{ "records": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordFile {
    Bare(Vec<ExperienceRecord>),
    Wrapped { records: Vec<ExperienceRecord> },
}

impl RecordFile {
    pub fn into_records(self) -> Vec<ExperienceRecord> {
        match self {
            RecordFile::Bare(records) | RecordFile::Wrapped { records } => records,
        }
    }
}
