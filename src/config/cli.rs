use crate::domain::model::{ExperienceRecord, RecordFile};
use crate::domain::ports::{RecordSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Reads records from a JSON file through a [`Storage`].
#[derive(Debug, Clone)]
pub struct JsonFileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> JsonFileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> RecordSource for JsonFileSource<S> {
    async fn load_records(&self) -> Result<Vec<ExperienceRecord>> {
        tracing::debug!("Reading records from {}", self.path);
        let data = self.storage.read_file(&self.path).await?;
        let file: RecordFile = serde_json::from_slice(&data)?;
        Ok(file.into_records())
    }
}
