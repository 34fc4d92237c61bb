//! Sake list queries and per-row hydration.
//!
//! The total count and the page fetch are two independent queries; under
//! concurrent writes the total may disagree with what adjacent pages show.
//! That gap is accepted for this read-only list endpoint.

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::instrument;

use crate::application::repos::{RepoError, SakeListFilter, SakeRepo};
use crate::domain::entities::{Brewery, DrinkStyle, PageInfo, Sake, SakeType};

use super::PostgresRepositories;
use super::util::map_sqlx_error;

// An unset filter must degrade to a tautology, not "match NULL".
const COUNT_SAKES_SQL: &str = "\
    SELECT COUNT(*) FROM sakes \
    WHERE ($1::int4 IS NULL OR type_id = $1) \
      AND ($2::int4 IS NULL OR brewery_id = $2)";

const LIST_SAKES_SQL: &str = "\
    SELECT id, type_id, brewery_id, name, abv::text AS abv, taste_notes, memo, \
           created_at, updated_at \
    FROM sakes \
    WHERE ($1::int4 IS NULL OR type_id = $1) \
      AND ($2::int4 IS NULL OR brewery_id = $2) \
    ORDER BY created_at DESC \
    LIMIT $3 OFFSET $4";

const GET_SAKE_TYPE_SQL: &str = "SELECT id, name FROM sake_types WHERE id = $1";

const GET_BREWERY_SQL: &str = "\
    SELECT id, name, origin_country, origin_region, \
           ST_AsBinary(position) AS position \
    FROM breweries WHERE id = $1";

const GET_DRINK_STYLES_SQL: &str = "\
    SELECT ds.id, ds.name, ds.description \
    FROM drink_styles ds \
    INNER JOIN sake_drink_styles sds ON sds.drink_style_id = ds.id \
    WHERE sds.sake_id = $1 \
    ORDER BY ds.id ASC";

#[derive(sqlx::FromRow)]
struct SakeRow {
    id: i32,
    type_id: i32,
    brewery_id: i32,
    name: String,
    abv: String,
    taste_notes: String,
    memo: Option<String>,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

#[derive(sqlx::FromRow)]
struct SakeTypeRow {
    id: i32,
    name: String,
}

#[derive(sqlx::FromRow)]
struct BreweryRow {
    id: i32,
    name: String,
    origin_country: String,
    origin_region: Option<String>,
    position: Option<Vec<u8>>,
}

#[derive(sqlx::FromRow)]
struct DrinkStyleRow {
    id: i32,
    name: String,
    description: Option<String>,
}

#[async_trait]
impl SakeRepo for PostgresRepositories {
    #[instrument(skip(self), name = "db.list_sakes")]
    async fn list(&self, filter: SakeListFilter) -> Result<(Vec<Sake>, PageInfo), RepoError> {
        let total: i64 = sqlx::query_scalar(COUNT_SAKES_SQL)
            .bind(filter.type_id)
            .bind(filter.brewery_id)
            .fetch_one(self.pool())
            .await
            .map_err(|err| map_sqlx_error("failed to count sakes", err))?;

        let rows = sqlx::query_as::<_, SakeRow>(LIST_SAKES_SQL)
            .bind(filter.type_id)
            .bind(filter.brewery_id)
            .bind(i64::from(filter.limit))
            .bind(i64::from(filter.offset))
            .fetch_all(self.pool())
            .await
            .map_err(|err| map_sqlx_error("failed to list sakes", err))?;

        // One broken row fails the whole call; partial pages are worse than
        // a clean error.
        let mut sakes = Vec::with_capacity(rows.len());
        for row in rows {
            sakes.push(self.hydrate_sake(row).await?);
        }

        let page = PageInfo {
            total,
            offset: filter.offset,
            limit: filter.limit,
        };

        Ok((sakes, page))
    }
}

impl PostgresRepositories {
    async fn hydrate_sake(&self, row: SakeRow) -> Result<Sake, RepoError> {
        let kind = sqlx::query_as::<_, SakeTypeRow>(GET_SAKE_TYPE_SQL)
            .bind(row.type_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|err| map_sqlx_error("failed to load sake type", err))?
            .ok_or_else(|| RepoError::not_found("sake type"))?;

        let brewery = sqlx::query_as::<_, BreweryRow>(GET_BREWERY_SQL)
            .bind(row.brewery_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|err| map_sqlx_error("failed to load brewery", err))?
            .ok_or_else(|| RepoError::not_found("brewery"))?;

        let style_rows = sqlx::query_as::<_, DrinkStyleRow>(GET_DRINK_STYLES_SQL)
            .bind(row.id)
            .fetch_all(self.pool())
            .await
            .map_err(|err| map_sqlx_error("failed to load drink styles", err))?;

        let drink_styles = style_rows
            .into_iter()
            .map(|style| DrinkStyle {
                id: style.id,
                name: style.name,
                description: style.description,
            })
            .collect();

        let (latitude, longitude) = extract_coordinates(brewery.position.as_deref());

        Ok(Sake {
            id: row.id,
            kind: SakeType {
                id: kind.id,
                name: kind.name,
            },
            brewery: Brewery {
                id: brewery.id,
                name: brewery.name,
                origin_country: brewery.origin_country,
                origin_region: brewery.origin_region,
                latitude,
                longitude,
            },
            name: row.name,
            abv: parse_abv(&row.abv),
            taste_notes: row.taste_notes,
            memo: row.memo,
            drink_styles,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// WKB point decoding is not implemented yet; coordinates are always absent.
fn extract_coordinates(_wkb: Option<&[u8]>) -> (Option<f64>, Option<f64>) {
    (None, None)
}

/// The stored NUMERIC(4, 2) is selected as text; a value that does not
/// parse becomes 0.0 rather than failing the row.
fn parse_abv(raw: &str) -> f32 {
    raw.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abv_parses_two_decimal_values() {
        assert_eq!(parse_abv("15.50"), 15.5);
        assert_eq!(parse_abv("0.00"), 0.0);
        assert_eq!(parse_abv("16"), 16.0);
    }

    #[test]
    fn invalid_abv_falls_back_to_zero() {
        assert_eq!(parse_abv(""), 0.0);
        assert_eq!(parse_abv("NaN%"), 0.0);
        assert_eq!(parse_abv("abv"), 0.0);
    }

    #[test]
    fn coordinates_are_stubbed_to_absent() {
        assert_eq!(extract_coordinates(None), (None, None));
        assert_eq!(extract_coordinates(Some(&[0x01, 0x01, 0x00])), (None, None));
    }
}
