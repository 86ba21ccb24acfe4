use crate::domain::model::{ExperienceRecord, MemberOrder, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn member_order(&self) -> MemberOrder;
    /// Fixed reference date; `None` means "today" captured once per run.
    fn now_override(&self) -> Option<NaiveDate>;
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load_records(&self) -> Result<Vec<ExperienceRecord>>;
}
