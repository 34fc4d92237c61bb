//! Catalog use cases.

use std::sync::Arc;

use tracing::instrument;

use crate::application::repos::{RepoError, SakeListFilter, SakeRepo};
use crate::domain::entities::{PageInfo, Sake};

pub const DEFAULT_LIMIT: i32 = 20;
pub const MAX_LIMIT: i32 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSakesInput {
    pub type_id: Option<i32>,
    pub brewery_id: Option<i32>,
    pub offset: i32,
    pub limit: i32,
}

#[derive(Debug, Clone)]
pub struct ListSakesOutput {
    pub sakes: Vec<Sake>,
    pub page: PageInfo,
}

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn SakeRepo>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn SakeRepo>) -> Self {
        Self { repo }
    }

    /// List sakes matching the optional type/brewery filters.
    ///
    /// Out-of-range pagination values are clamped silently: a negative
    /// offset becomes 0 and a limit outside [1, 100] becomes 20. Boundary
    /// validation belongs to the HTTP layer; the clamp covers callers that
    /// invoke the use case directly. Repository errors pass through
    /// unchanged so the presentation layer can classify them.
    #[instrument(skip(self), name = "catalog.list_sakes")]
    pub async fn list_sakes(&self, input: ListSakesInput) -> Result<ListSakesOutput, RepoError> {
        let offset = if input.offset < 0 { 0 } else { input.offset };
        let limit = if input.limit < 1 || input.limit > MAX_LIMIT {
            DEFAULT_LIMIT
        } else {
            input.limit
        };

        let (sakes, page) = self
            .repo
            .list(SakeListFilter {
                type_id: input.type_id,
                brewery_id: input.brewery_id,
                offset,
                limit,
            })
            .await?;

        Ok(ListSakesOutput { sakes, page })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingRepo {
        seen: Mutex<Option<SakeListFilter>>,
        fail: bool,
    }

    #[async_trait]
    impl SakeRepo for RecordingRepo {
        async fn list(&self, filter: SakeListFilter) -> Result<(Vec<Sake>, PageInfo), RepoError> {
            *self.seen.lock().expect("filter slot") = Some(filter);
            if self.fail {
                return Err(RepoError::database("failed to list sakes", "boom"));
            }
            Ok((
                Vec::new(),
                PageInfo {
                    total: 0,
                    offset: filter.offset,
                    limit: filter.limit,
                },
            ))
        }
    }

    fn service(repo: Arc<RecordingRepo>) -> CatalogService {
        CatalogService::new(repo)
    }

    fn seen(repo: &RecordingRepo) -> SakeListFilter {
        repo.seen
            .lock()
            .expect("filter slot")
            .expect("repo was called")
    }

    #[tokio::test]
    async fn negative_offset_is_clamped_to_zero() {
        let repo = Arc::new(RecordingRepo::default());
        let output = service(repo.clone())
            .list_sakes(ListSakesInput {
                offset: -1,
                limit: 20,
                ..Default::default()
            })
            .await
            .expect("list succeeds");

        assert_eq!(seen(&repo).offset, 0);
        assert_eq!(output.page.offset, 0);
    }

    #[tokio::test]
    async fn out_of_range_limit_falls_back_to_default() {
        for limit in [0, -7, 101, 1000] {
            let repo = Arc::new(RecordingRepo::default());
            service(repo.clone())
                .list_sakes(ListSakesInput {
                    limit,
                    ..Default::default()
                })
                .await
                .expect("list succeeds");
            assert_eq!(seen(&repo).limit, DEFAULT_LIMIT, "limit {limit}");
        }
    }

    #[tokio::test]
    async fn in_range_pagination_passes_through() {
        for (offset, limit) in [(0, 1), (40, 100), (7, 20)] {
            let repo = Arc::new(RecordingRepo::default());
            service(repo.clone())
                .list_sakes(ListSakesInput {
                    offset,
                    limit,
                    ..Default::default()
                })
                .await
                .expect("list succeeds");
            let filter = seen(&repo);
            assert_eq!(filter.offset, offset);
            assert_eq!(filter.limit, limit);
        }
    }

    #[tokio::test]
    async fn id_filters_are_forwarded_untouched() {
        let repo = Arc::new(RecordingRepo::default());
        service(repo.clone())
            .list_sakes(ListSakesInput {
                type_id: Some(3),
                brewery_id: Some(9),
                offset: 0,
                limit: 20,
            })
            .await
            .expect("list succeeds");

        let filter = seen(&repo);
        assert_eq!(filter.type_id, Some(3));
        assert_eq!(filter.brewery_id, Some(9));
    }

    #[tokio::test]
    async fn repository_errors_pass_through_unchanged() {
        let repo = Arc::new(RecordingRepo {
            fail: true,
            ..Default::default()
        });
        let err = service(repo)
            .list_sakes(ListSakesInput {
                offset: 0,
                limit: 20,
                ..Default::default()
            })
            .await
            .expect_err("repo failure surfaces");

        assert!(matches!(
            err,
            RepoError::Database {
                context: "failed to list sakes",
                ..
            }
        ));
    }
}
