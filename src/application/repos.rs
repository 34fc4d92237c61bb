//! Repository port describing persistence access for the catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PageInfo, Sake};

#[derive(Debug, Error)]
pub enum RepoError {
    /// A row referenced during hydration does not exist. A dangling foreign
    /// key is a data-integrity fault, not something to skip over.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    /// Any other store-level failure. The cause is kept for diagnostics and
    /// never rendered to clients.
    #[error("{context}: {cause}")]
    Database {
        context: &'static str,
        cause: String,
    },
}

impl RepoError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn database(context: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Database {
            context,
            cause: cause.to_string(),
        }
    }
}

/// Filter and pagination descriptor for one list query. An unset id filter
/// means "ignore this predicate", never "match nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SakeListFilter {
    pub type_id: Option<i32>,
    pub brewery_id: Option<i32>,
    pub offset: i32,
    pub limit: i32,
}

#[async_trait]
pub trait SakeRepo: Send + Sync {
    /// Fetch one fully hydrated page of sakes plus the total matching count.
    async fn list(&self, filter: SakeListFilter) -> Result<(Vec<Sake>, PageInfo), RepoError>;
}
