use crate::domain::model::AnimalRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where animal records come from for a given search term.
///
/// `Ok(None)` means the source answered but has nothing usable; it renders
/// the same way as an empty list.
#[async_trait]
pub trait AnimalSource: Send + Sync {
    async fn fetch(&self, search_term: &str) -> Result<Option<Vec<AnimalRecord>>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn search_term(&self) -> Result<String>;
    async fn extract(&self, search_term: &str) -> Result<Option<Vec<AnimalRecord>>>;
    async fn transform(
        &self,
        records: Option<Vec<AnimalRecord>>,
        search_term: &str,
    ) -> Result<String>;
    async fn load(&self, document: String) -> Result<String>;
}
