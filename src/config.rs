//! Run configuration.

use std::path::PathBuf;

/// Default error-log file name, created beside the catalog file.
pub const DEFAULT_ERROR_LOG_NAME: &str = "errors.log";

/// Default line printed when the process exits.
pub const DEFAULT_FAREWELL: &str = "Thank you for using the Library Book Tracker.";

/// Required suffix of the catalog file name.
pub const CATALOG_EXTENSION: &str = ".txt";

/// Configuration for a [`crate::Tracker`] run.
///
/// # Examples
///
/// ```
/// use booktrack::TrackerConfig;
///
/// let config = TrackerConfig::default().with_error_log_path("/tmp/catalog-errors.log");
/// assert_eq!(config.error_log_name, "errors.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// File name of the error log in the catalog's directory.
    pub error_log_name: String,
    /// Explicit error-log path; overrides `error_log_name` when set.
    pub error_log_path: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            error_log_name: DEFAULT_ERROR_LOG_NAME.to_string(),
            error_log_path: None,
        }
    }
}

impl TrackerConfig {
    /// Log errors to an explicit path instead of beside the catalog.
    #[must_use]
    pub fn with_error_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log_path = Some(path.into());
        self
    }
}
