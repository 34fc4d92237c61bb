use std::sync::Arc;

use crate::application::catalog::CatalogService;
use crate::infra::cache::CacheClient;
use crate::infra::db::PostgresRepositories;

#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
    pub db: Arc<PostgresRepositories>,
    /// Absent when no cache url is configured; the health endpoint then
    /// skips the cache probe.
    pub cache: Option<CacheClient>,
}
