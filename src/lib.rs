pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{JsonFileSource, LocalStorage};
pub use config::TimelineSettings;
pub use crate::core::{engine::TimelineEngine, timeline::TimelineAssembler};
pub use domain::model::{
    ExperienceKind, ExperienceRecord, GroupViewModel, MemberOrder, OutputFormat, Timeline,
};
pub use utils::error::{RecordIssue, Result, TimelineError};
