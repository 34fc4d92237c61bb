use tracing::error;

use crate::application::repos::RepoError;

/// Wrap a sqlx failure as a database error, logging the underlying cause.
/// Missing rows are handled by the callers through `fetch_optional`, so
/// `RowNotFound` never reaches this path.
pub(crate) fn map_sqlx_error(context: &'static str, err: sqlx::Error) -> RepoError {
    error!(target: "sakaya::db", context, error = %err, "database query failed");
    RepoError::database(context, err)
}
