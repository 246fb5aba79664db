use super::domain::{ResponseId, ResponseRecord};

/// Storage abstraction for submitted responses.
pub trait ResponseRepository: Send + Sync {
    fn insert(&self, record: ResponseRecord) -> Result<ResponseRecord, RepositoryError>;
    fn fetch(&self, id: ResponseId) -> Result<Option<ResponseRecord>, RepositoryError>;
    /// All records, oldest first.
    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError>;
    fn delete(&self, id: ResponseId) -> Result<ResponseRecord, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
