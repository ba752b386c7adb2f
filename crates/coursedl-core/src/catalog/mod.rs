//! Course catalog: parse the JSON document listing courses and their materials.
//!
//! Expected shape (all fields optional):
//!
//! ```json
//! {"data": [{"title": "Algo 101", "uuid": "u1",
//!            "materials": [{"fileName": "notes.pdf", "link": "http://x/notes.pdf"}]}]}
//! ```
//!
//! Missing fields fall back to defaults instead of failing; only text that is not
//! well-formed JSON (or has a field of the wrong type) is rejected.

mod parse;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use parse::{RawCatalog, RawCourse, RawMaterial};

/// Title used when a course has none.
pub const DEFAULT_TITLE: &str = "Unknown";
/// File name used when a material has none (or an empty one).
pub const DEFAULT_FILE_NAME: &str = "unknown_file";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// All courses of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Display title; becomes the course directory name after sanitization.
    pub title: String,
    /// Identifier used only to recognize folder placeholders among materials.
    pub uuid: String,
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub file_name: String,
    /// Source URL; empty for placeholders.
    pub link: String,
}

impl Catalog {
    /// Total number of materials across all courses, placeholders included.
    pub fn material_count(&self) -> usize {
        self.courses.iter().map(|c| c.materials.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<RawCatalog> for Catalog {
    fn from(raw: RawCatalog) -> Self {
        Catalog {
            courses: raw
                .data
                .unwrap_or_default()
                .into_iter()
                .map(Course::from)
                .collect(),
        }
    }
}

impl From<RawCourse> for Course {
    fn from(raw: RawCourse) -> Self {
        Course {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            uuid: raw.uuid.unwrap_or_default(),
            materials: raw
                .materials
                .unwrap_or_default()
                .into_iter()
                .map(Material::from)
                .collect(),
        }
    }
}

impl From<RawMaterial> for Material {
    fn from(raw: RawMaterial) -> Self {
        Material {
            file_name: raw
                .file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            link: raw.link.unwrap_or_default(),
        }
    }
}

/// Parses catalog text.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(text)?;
    let catalog = Catalog::from(raw);
    tracing::debug!(
        courses = catalog.courses.len(),
        materials = catalog.material_count(),
        "parsed catalog"
    );
    Ok(catalog)
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_catalog(&text)
}
