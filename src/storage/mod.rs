use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::Link;

/// Persistence interface consumed by the link registry
///
/// `insert` and `update` must surface a duplicate-`name` uniqueness
/// violation as `RedlinkError::DuplicateName`. `increment_visits` must be
/// atomic: concurrent calls for the same id may not lose updates.
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool>;
    async fn find(&self, id: &str) -> Result<Option<Link>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Link>>;
    async fn insert(&self, link: &Link) -> Result<()>;
    async fn update(&self, link: &Link) -> Result<()>;
    /// Removing an absent id is not an error
    async fn remove(&self, id: &str) -> Result<()>;
    /// Returns false when no record with that id exists
    async fn increment_visits(&self, id: &str) -> Result<bool>;
    fn backend_name(&self) -> &str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<dyn LinkStore>> {
        let config = crate::config::get_config();
        let database_url = &config.database.database_url;

        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = backend::SeaOrmStorage::new(database_url, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
