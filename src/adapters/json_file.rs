use crate::core::file_store::FileStore;
use crate::domain::model::AnimalRecord;
use crate::domain::ports::{AnimalSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_DATA_FILE: &str = "animals_data.json";

/// Reads the whole dataset from a local JSON file; the search term is not
/// used for filtering.
pub struct JsonFileSource<S: Storage> {
    files: FileStore<S>,
    path: String,
}

impl<S: Storage> JsonFileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            files: FileStore::new(storage),
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> AnimalSource for JsonFileSource<S> {
    async fn fetch(&self, _search_term: &str) -> Result<Option<Vec<AnimalRecord>>> {
        let animals: Vec<AnimalRecord> = self.files.load_json(&self.path).await?;
        tracing::debug!("Loaded {} animal(s) from {}", animals.len(), self.path);
        Ok(Some(animals))
    }
}
