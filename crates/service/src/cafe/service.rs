use std::sync::Arc;

use models::cafe::{self, NewCafe};
use tracing::{info, instrument, warn};

use crate::cafe::repository::CafeStore;
use crate::errors::ServiceError;

/// Application service over a `CafeStore`.
/// Owns the shared secret that authorises deletions.
#[derive(Clone)]
pub struct CafeService {
    store: Arc<dyn CafeStore>,
    api_key: Arc<str>,
}

impl CafeService {
    pub fn new(store: Arc<dyn CafeStore>, api_key: impl Into<Arc<str>>) -> Self {
        Self { store, api_key: api_key.into() }
    }

    pub async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError> {
        self.store.list_all().await
    }

    pub async fn random_one(&self) -> Result<cafe::Model, ServiceError> {
        self.store.random_one().await
    }

    /// Empty result is returned as-is; callers decide whether that is an error.
    #[instrument(skip(self))]
    pub async fn search_by_location(&self, substring: &str) -> Result<Vec<cafe::Model>, ServiceError> {
        let hits = self.store.search_by_location(substring).await?;
        info!(count = hits.len(), "cafe_search");
        Ok(hits)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<cafe::Model>, ServiceError> {
        self.store.get_by_id(id).await
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn insert(&self, new: NewCafe) -> Result<cafe::Model, ServiceError> {
        let created = self.store.insert(new).await?;
        info!(id = created.id, "cafe_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update_price(&self, id: i32, new_price: &str) -> Result<cafe::Model, ServiceError> {
        let updated = self.store.update_price(id, new_price).await?;
        info!(id, "cafe_price_updated");
        Ok(updated)
    }

    /// `Forbidden` unless `api_key` equals the shared secret.
    pub fn authorize(&self, api_key: Option<&str>) -> Result<(), ServiceError> {
        if api_key != Some(&*self.api_key) {
            warn!("cafe_delete_forbidden");
            return Err(ServiceError::Forbidden("api key mismatch".into()));
        }
        Ok(())
    }

    /// Delete after checking `api_key` against the shared secret.
    /// The key is checked before the lookup, so a bad key never reveals
    /// whether the id exists.
    #[instrument(skip(self, api_key))]
    pub async fn report_closed(&self, id: i32, api_key: Option<&str>) -> Result<(), ServiceError> {
        self.authorize(api_key)?;
        self.store.delete(id).await?;
        info!(id, "cafe_deleted");
        Ok(())
    }
}
