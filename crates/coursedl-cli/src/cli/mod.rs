//! CLI for the coursedl batch downloader.

mod report;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use coursedl_core::config::{self, FetchConfig};
use coursedl_core::{load_catalog, parse_catalog, run_catalog, Catalog, Fetcher};
use std::fs;
use std::path::PathBuf;

use report::ConsoleReporter;

/// Download every material of a course catalog into `<output-dir>/<course>/<file>`.
#[derive(Debug, Parser)]
#[command(name = "coursedl", version)]
#[command(about = "Download course materials listed in a JSON catalog", long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["json_file", "json_string"]),
))]
pub struct Cli {
    /// Path to the JSON file containing course data.
    pub json_file: Option<PathBuf>,

    /// JSON text containing course data (alternative to JSON_FILE).
    #[arg(long, value_name = "JSON")]
    pub json_string: Option<String>,

    /// Output directory for downloaded files.
    #[arg(short, long, default_value = "downloads", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Config file to use instead of ~/.config/coursedl/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (default: none).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pause after each download, in seconds (default: 0.5).
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,
}

/// Where the catalog text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Text(String),
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Parses the catalog, then downloads everything. Any error returned here
    /// happened before the first download started.
    pub fn run(self) -> Result<()> {
        let catalog = self.read_catalog()?;
        let cfg = self.fetch_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("create output directory: {}", self.output_dir.display())
        })?;

        let mut fetcher = Fetcher::new(&cfg)?;
        let mut reporter = ConsoleReporter::new(cfg.disallowed());
        let report = run_catalog(
            &catalog,
            &self.output_dir,
            &mut fetcher,
            cfg.delay(),
            |event| reporter.on_event(event),
        );
        reporter.print_summary(&report);
        Ok(())
    }

    pub fn source(&self) -> Option<CatalogSource> {
        match (&self.json_string, &self.json_file) {
            (Some(text), _) => Some(CatalogSource::Text(text.clone())),
            (None, Some(path)) => Some(CatalogSource::File(path.clone())),
            (None, None) => None,
        }
    }

    fn read_catalog(&self) -> Result<Catalog> {
        let catalog = match self.source() {
            Some(CatalogSource::Text(text)) => parse_catalog(&text)?,
            Some(CatalogSource::File(path)) => load_catalog(&path)?,
            None => anyhow::bail!("either a JSON file or --json-string must be provided"),
        };
        tracing::info!(
            courses = catalog.courses.len(),
            materials = catalog.material_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Config file values with command-line overrides applied.
    fn fetch_config(&self) -> Result<FetchConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config_or_default(config::load_or_init()),
        };
        if let Some(timeout) = self.timeout {
            cfg.timeout_secs = Some(timeout);
        }
        if let Some(delay) = self.delay {
            cfg.delay_between_requests_secs = delay;
        }
        cfg.validate().context("invalid settings")?;
        Ok(cfg)
    }
}

/// The default config file is optional: if it cannot be read or created, run
/// with built-in defaults. An explicit `--config` path stays fatal.
fn config_or_default(loaded: Result<FetchConfig>) -> FetchConfig {
    loaded.unwrap_or_else(|e| {
        tracing::warn!("could not load config, using defaults: {:#}", e);
        FetchConfig::default()
    })
}
