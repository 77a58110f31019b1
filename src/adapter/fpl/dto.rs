//! Wire shapes of the FPL `bootstrap-static` and `fixtures` endpoints.
//!
//! Only the fields the optimiser reads are declared; everything else in the
//! payload is ignored. Required fields are optional here so that missing
//! ones surface as [`DataError`](crate::error::DataError) with context
//! instead of a bare serde error.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct BootstrapStatic {
    #[serde(default)]
    pub elements: Vec<ElementDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Deserialize)]
pub struct ElementDto {
    pub id: Option<u32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub web_name: Option<String>,
    pub team: Option<u32>,
    pub element_type: Option<u8>,
    /// Price in tenths of a currency unit.
    pub now_cost: Option<i64>,
    #[serde(default)]
    pub ep_next: Option<Value>,
    #[serde(default)]
    pub form: Option<Value>,
    #[serde(default)]
    pub points_per_game: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TeamDto {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}
