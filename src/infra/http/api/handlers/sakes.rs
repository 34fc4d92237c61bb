//! Sake list handler.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::application::catalog::ListSakesInput;
use crate::application::repos::RepoError;

use super::SakeListQuery;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::ListSakesResponse;
use crate::infra::http::api::state::ApiState;

// Wire-level defaults applied after validation passes; the use case keeps
// its own clamp for callers that skip this layer.
const DEFAULT_OFFSET: i32 = 0;
const DEFAULT_LIMIT: i32 = 20;

pub async fn list_sakes(
    State(state): State<ApiState>,
    Query(query): Query<SakeListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    validate_list_params(&query)?;

    let input = ListSakesInput {
        type_id: query.type_id,
        brewery_id: query.brewery_id,
        offset: query.offset.unwrap_or(DEFAULT_OFFSET),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };

    let output = state
        .catalog
        .list_sakes(input)
        .await
        .map_err(repo_error_to_api)?;

    Ok(Json(ListSakesResponse::from(output)))
}

/// Every rule is checked; failures accumulate instead of short-circuiting so
/// the client sees all invalid fields at once.
fn validate_list_params(query: &SakeListQuery) -> Result<(), ApiError> {
    let mut fields: Vec<(&'static str, &'static str)> = Vec::new();

    if let Some(offset) = query.offset {
        if offset < 0 {
            fields.push(("offset", "offset must be at least 0"));
        }
    }
    if let Some(limit) = query.limit {
        if !(1..=100).contains(&limit) {
            fields.push(("limit", "limit must be between 1 and 100"));
        }
    }
    if let Some(type_id) = query.type_id {
        if type_id < 1 {
            fields.push(("type_id", "type_id must be at least 1"));
        }
    }
    if let Some(brewery_id) = query.brewery_id {
        if brewery_id < 1 {
            fields.push(("brewery_id", "brewery_id must be at least 1"));
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(fields))
    }
}

fn repo_error_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound { entity } => ApiError::not_found(entity),
        RepoError::Database { context, cause } => ApiError::database(context, cause),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn valid_params_pass() {
        let query = SakeListQuery {
            type_id: Some(1),
            brewery_id: Some(2),
            offset: Some(0),
            limit: Some(100),
        };
        assert!(validate_list_params(&query).is_ok());
    }

    #[test]
    fn absent_params_pass() {
        assert!(validate_list_params(&SakeListQuery::default()).is_ok());
    }

    #[test]
    fn each_rule_is_checked_independently() {
        let query = SakeListQuery {
            type_id: Some(0),
            brewery_id: Some(-5),
            offset: Some(-1),
            limit: Some(101),
        };
        let err = validate_list_params(&query).expect_err("all four rules fail");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let query = SakeListQuery {
            type_id: None,
            brewery_id: None,
            offset: Some(0),
            limit: Some(1),
        };
        assert!(validate_list_params(&query).is_ok());
    }

    #[test]
    fn not_found_maps_to_404() {
        let api = repo_error_to_api(RepoError::not_found("sake type"));
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_fault_maps_to_500() {
        let api = repo_error_to_api(RepoError::database("failed to count sakes", "timeout"));
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
