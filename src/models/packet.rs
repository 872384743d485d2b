use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Physical description of a parcel. Dimensions carry no unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Packet {
    #[serde(deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub length: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thickness: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fragile: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_perishable: bool,
    pub description: Option<String>,
    pub photo_packet: Option<String>,
    pub designation: Option<String>,
}
