//! Runtime configuration for the report assembler.

use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the statistics service.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh/v3/covid-19";

/// Default directory that finished reports are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Default per-request timeout for the statistics service.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for a report assembler instance.
///
/// Everything lives in an explicit value rather than ambient globals, so
/// tests can point an assembler at throwaway directories and unreachable
/// endpoints without touching process state.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Base URL of the statistics service.
    pub base_url: String,
    /// Directory that report files are written into.  Must already exist;
    /// the assembler never creates it.
    pub output_dir: PathBuf,
    /// Per-request timeout enforced by the HTTP client.
    pub request_timeout: Duration,
    /// Optional JSON annotation file.  `None` means no annotations.
    pub annotations_file: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            annotations_file: None,
        }
    }
}

impl ReportConfig {
    /// Sets the statistics service base URL and returns the updated config.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the output directory and returns the updated config.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the request timeout and returns the updated config.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the annotation file and returns the updated config.
    pub fn with_annotations_file(mut self, file: impl Into<Option<PathBuf>>) -> Self {
        self.annotations_file = file.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportConfig, DEFAULT_BASE_URL};
    use std::path::PathBuf;

    #[test]
    fn defaults_point_at_the_public_service() {
        let config = ReportConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(config.annotations_file.is_none());
    }

    #[test]
    fn builders_replace_individual_fields() {
        let config = ReportConfig::default()
            .with_base_url("http://localhost:9000")
            .with_output_dir("/tmp/reports")
            .with_annotations_file(Some(PathBuf::from("notes.json")));

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.annotations_file, Some(PathBuf::from("notes.json")));
    }
}
