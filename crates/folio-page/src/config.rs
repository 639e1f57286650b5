use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Page build configuration loaded explicitly from environment variables.
///
/// Only the origin is required; the control values default to the page's
/// initial state (empty search, "all" categories).
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin serving `assets/data/*.json`, e.g. "https://example.github.io".
    pub base_url: String,
    /// Per-request timeout for document fetches.
    pub timeout: Duration,
    /// Initial search box value applied before rendering.
    pub query: String,
    /// Initial category selector value ("all" disables the filter).
    pub category: String,
    /// Output file for the rendered fragment; stdout when absent.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `FOLIO_BASE_URL`: origin the documents are fetched from
    ///
    /// Optional:
    /// - `FOLIO_TIMEOUT_SECS`: fetch timeout in seconds (default 30)
    /// - `FOLIO_QUERY`: initial search value (default empty)
    /// - `FOLIO_CATEGORY`: initial category selection (default "all")
    /// - `FOLIO_OUTPUT`: output file path (default: write to stdout)
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = std::env::var("FOLIO_BASE_URL").map_err(|_| {
            AppError::Config("FOLIO_BASE_URL environment variable is required".to_string())
        })?;

        let timeout = std::env::var("FOLIO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let query = std::env::var("FOLIO_QUERY").unwrap_or_default();
        let category = std::env::var("FOLIO_CATEGORY").unwrap_or_else(|_| "all".to_string());
        let output = std::env::var("FOLIO_OUTPUT").ok().map(PathBuf::from);

        Ok(Self {
            base_url,
            timeout,
            query,
            category,
            output,
        })
    }
}
