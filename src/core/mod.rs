pub mod duration;
pub mod engine;
pub mod group_key;
pub mod interval;
pub mod render;
pub mod timeline;

pub use crate::domain::model::{ExperienceRecord, GroupViewModel, Timeline};
pub use crate::domain::ports::{ConfigProvider, RecordSource, Storage};
pub use crate::utils::error::Result;
