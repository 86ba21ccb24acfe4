use chrono::{Local, NaiveDate};

use crate::core::render;
use crate::core::timeline::TimelineAssembler;
use crate::domain::model::{MemberOrder, OutputFormat, Timeline};
use crate::domain::ports::{ConfigProvider, RecordSource, Storage};
use crate::utils::error::Result;

pub struct TimelineEngine<R: RecordSource> {
    source: R,
    member_order: MemberOrder,
}

impl<R: RecordSource> TimelineEngine<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            member_order: MemberOrder::default(),
        }
    }

    pub fn with_member_order(mut self, member_order: MemberOrder) -> Self {
        self.member_order = member_order;
        self
    }

    pub async fn run(&self, now: NaiveDate) -> Result<Timeline> {
        tracing::info!("Loading experience records");
        let records = self.source.load_records().await?;
        tracing::info!("Loaded {} records", records.len());

        let timeline = TimelineAssembler::new(now)
            .with_member_order(self.member_order)
            .assemble(&records)?;

        tracing::info!(
            "Assembled {} groups as of {} ({} record issues)",
            timeline.groups.len(),
            now,
            timeline.issues.len()
        );
        Ok(timeline)
    }
}

/// The configured reference date, or today's local date.
pub fn resolve_now<C: ConfigProvider>(config: &C) -> NaiveDate {
    config
        .now_override()
        .unwrap_or_else(|| Local::now().date_naive())
}

pub async fn export<S: Storage>(
    storage: &S,
    path: &str,
    timeline: &Timeline,
    format: OutputFormat,
) -> Result<String> {
    let rendered = render::render(timeline, format)?;
    tracing::debug!("Writing {} bytes of {:?} output to {}", rendered.len(), format, path);
    storage.write_file(path, rendered.as_bytes()).await?;
    Ok(path.to_string())
}
