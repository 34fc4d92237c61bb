//! Wire models for the catalog API and their mappings from domain records.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::catalog::ListSakesOutput;
use crate::domain::entities::{Brewery, DrinkStyle, PageInfo, Sake, SakeType};

use super::error::ApiErrorMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SakeTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreweryDto {
    pub id: i32,
    pub name: String,
    pub origin_country: String,
    pub origin_region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkStyleDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SakeDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: SakeTypeDto,
    pub brewery: BreweryDto,
    pub name: String,
    pub abv: f32,
    pub taste_notes: String,
    pub memo: Option<String>,
    pub drink_styles: Vec<DrinkStyleDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListMeta {
    pub total: i64,
    pub offset: i32,
    pub limit: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSakesResponse {
    pub data: Option<Vec<SakeDto>>,
    pub meta: Option<ListMeta>,
    pub errors: Option<Vec<ApiErrorMessage>>,
}

impl From<SakeType> for SakeTypeDto {
    fn from(kind: SakeType) -> Self {
        Self {
            id: kind.id,
            name: kind.name,
        }
    }
}

impl From<Brewery> for BreweryDto {
    fn from(brewery: Brewery) -> Self {
        Self {
            id: brewery.id,
            name: brewery.name,
            origin_country: brewery.origin_country,
            origin_region: brewery.origin_region,
            latitude: brewery.latitude,
            longitude: brewery.longitude,
        }
    }
}

impl From<DrinkStyle> for DrinkStyleDto {
    fn from(style: DrinkStyle) -> Self {
        Self {
            id: style.id,
            name: style.name,
            description: style.description,
        }
    }
}

impl From<Sake> for SakeDto {
    fn from(sake: Sake) -> Self {
        Self {
            id: sake.id,
            kind: sake.kind.into(),
            brewery: sake.brewery.into(),
            name: sake.name,
            abv: sake.abv,
            taste_notes: sake.taste_notes,
            memo: sake.memo,
            drink_styles: sake.drink_styles.into_iter().map(Into::into).collect(),
            created_at: sake.created_at,
            updated_at: sake.updated_at,
        }
    }
}

impl From<PageInfo> for ListMeta {
    fn from(page: PageInfo) -> Self {
        Self {
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

impl From<ListSakesOutput> for ListSakesResponse {
    fn from(output: ListSakesOutput) -> Self {
        Self {
            data: Some(output.sakes.into_iter().map(SakeDto::from).collect()),
            meta: Some(output.page.into()),
            errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn sample_sake() -> Sake {
        Sake {
            id: 7,
            kind: SakeType {
                id: 2,
                name: "junmai ginjo".to_string(),
            },
            brewery: Brewery {
                id: 4,
                name: "Hakkaisan Brewery".to_string(),
                origin_country: "Japan".to_string(),
                origin_region: Some("Niigata".to_string()),
                latitude: None,
                longitude: None,
            },
            name: "Hakkaisan Junmai Ginjo".to_string(),
            abv: 15.50,
            taste_notes: "Dry, crisp, mineral-driven.".to_string(),
            memo: Some("house favorite".to_string()),
            drink_styles: vec![
                DrinkStyle {
                    id: 1,
                    name: "chilled".to_string(),
                    description: Some("Served cold.".to_string()),
                },
                DrinkStyle {
                    id: 3,
                    name: "warm".to_string(),
                    description: None,
                },
            ],
            created_at: datetime!(2024-05-01 10:00 UTC),
            updated_at: datetime!(2024-05-02 09:30 UTC),
        }
    }

    #[test]
    fn sake_round_trips_through_the_wire_model() {
        let dto = SakeDto::from(sample_sake());
        let json = serde_json::to_string(&dto).expect("dto serializes");
        let decoded: SakeDto = serde_json::from_str(&json).expect("dto deserializes");

        assert_eq!(decoded.name, "Hakkaisan Junmai Ginjo");
        assert_eq!(decoded.abv, 15.50);
        assert_eq!(decoded.taste_notes, "Dry, crisp, mineral-driven.");
        assert_eq!(decoded.memo.as_deref(), Some("house favorite"));
        assert_eq!(decoded.brewery.origin_region.as_deref(), Some("Niigata"));
        let names: Vec<_> = decoded
            .drink_styles
            .iter()
            .map(|style| style.name.as_str())
            .collect();
        assert_eq!(names, ["chilled", "warm"]);
    }

    #[test]
    fn type_field_uses_the_reserved_word_on_the_wire() {
        let value = serde_json::to_value(SakeDto::from(sample_sake())).expect("dto serializes");

        assert_eq!(value["type"]["id"], 2);
        assert_eq!(value["type"]["name"], "junmai ginjo");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn absent_memo_stays_distinguishable_from_empty() {
        let mut sake = sample_sake();
        sake.memo = None;
        let value = serde_json::to_value(SakeDto::from(sake)).expect("dto serializes");

        assert!(value["memo"].is_null());
        assert!(value["brewery"]["latitude"].is_null());
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        let value = serde_json::to_value(SakeDto::from(sample_sake())).expect("dto serializes");

        assert_eq!(value["created_at"], "2024-05-01T10:00:00Z");
        assert_eq!(value["updated_at"], "2024-05-02T09:30:00Z");
    }

    #[test]
    fn success_envelope_carries_null_errors() {
        let output = ListSakesOutput {
            sakes: vec![sample_sake()],
            page: PageInfo {
                total: 42,
                offset: 0,
                limit: 20,
            },
        };
        let value =
            serde_json::to_value(ListSakesResponse::from(output)).expect("response serializes");

        assert!(value["errors"].is_null());
        assert_eq!(value["meta"]["total"], 42);
        assert_eq!(value["data"].as_array().map(Vec::len), Some(1));
    }
}
