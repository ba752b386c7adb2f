//! Wire structures for the catalog JSON document.
//!
//! Every field is optional; defaults are applied when converting to the public
//! types in the parent module. Unknown fields are ignored.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub data: Option<Vec<RawCourse>>,
}

#[derive(Debug, Deserialize)]
pub struct RawCourse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub materials: Option<Vec<RawMaterial>>,
}

#[derive(Debug, Deserialize)]
pub struct RawMaterial {
    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
