//! Domain entities mirrored from persistent storage.
//!
//! These are plain records with no behavior. Optional fields stay `Option`
//! so "absent" is never conflated with an empty string or zero.

use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct SakeType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brewery {
    pub id: i32,
    pub name: String,
    pub origin_country: String,
    pub origin_region: Option<String>,
    /// Extracted from the stored geometry column; decoding is not
    /// implemented yet, so both coordinates are always absent.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrinkStyle {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sake {
    pub id: i32,
    pub kind: SakeType,
    pub brewery: Brewery,
    pub name: String,
    pub abv: f32,
    pub taste_notes: String,
    pub memo: Option<String>,
    /// Ordered by drink style id ascending.
    pub drink_styles: Vec<DrinkStyle>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Descriptive pagination metadata for one returned page; not a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total: i64,
    pub offset: i32,
    pub limit: i32,
}
