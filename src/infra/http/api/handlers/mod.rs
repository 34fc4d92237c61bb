//! API handlers organized by resource.

mod health;
mod sakes;

pub use health::*;
pub use sakes::*;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SakeListQuery {
    pub type_id: Option<i32>,
    pub brewery_id: Option<i32>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}
