//! coursedl core: parse a course catalog and download every material into
//! `<output>/<course title>/<file name>`.
//!
//! Pipeline: [`catalog`] → [`batch`] → [`fetcher`], with [`naming`] deciding
//! local paths and placeholders.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod logging;
pub mod naming;

pub use batch::{run_catalog, BatchEvent, BatchReport};
pub use catalog::{load_catalog, parse_catalog, Catalog, CatalogError, Course, Material};
pub use config::FetchConfig;
pub use fetcher::{FetchError, Fetcher, MaterialOutcome};
