//! Statistics retrieval from the remote epidemiology service.

use std::time::Duration;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Sentinel target identifier that selects the global aggregate endpoint.
pub const GLOBAL_TARGET: &str = "all";

/// Raw numeric record returned by the statistics service.
///
/// Every field is optional.  The service omits or nulls values it has no data
/// for, and a partially populated record still produces a useful report; the
/// formatting layer substitutes a placeholder for the gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatisticsRecord {
    /// Population of the reporting region.
    #[serde(default)]
    pub population: Option<u64>,
    /// Currently active cases.
    #[serde(default)]
    pub active: Option<u64>,
    /// Cases in critical condition.
    #[serde(default)]
    pub critical: Option<u64>,
    /// Recovered cases.
    #[serde(default)]
    pub recovered: Option<u64>,
    /// Cumulative confirmed cases.
    #[serde(default)]
    pub cases: Option<u64>,
    /// Cumulative deaths.
    #[serde(default)]
    pub deaths: Option<u64>,
    /// Tests performed.
    #[serde(default)]
    pub tests: Option<u64>,
}

/// Read-only source of statistics records.
///
/// Failure is expressed as `None` rather than an error.  The assembler treats
/// missing data as a degraded document, never as a reason to abort, so the
/// seam deliberately cannot carry error details upward.
pub trait StatisticsSource {
    /// Fetches the record for a target identifier, or `None` on any failure.
    fn fetch(&self, target: &str) -> Option<StatisticsRecord>;
}

#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error("response body is not a JSON object")]
    UnexpectedShape,
}

/// Statistics source backed by the remote HTTP service.
///
/// The client is constructed per request; the source itself stays cheap to
/// clone and free of connection state between reports.
#[derive(Clone, Debug)]
pub struct HttpStatisticsSource {
    base_url: String,
    timeout: Duration,
}

impl HttpStatisticsSource {
    /// Creates a source for the given service base URL and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, timeout }
    }

    /// Returns the endpoint queried for a target identifier.
    ///
    /// The [`GLOBAL_TARGET`] sentinel maps to the aggregate endpoint; every
    /// other identifier selects the per-country route.
    pub fn endpoint(&self, target: &str) -> String {
        if target == GLOBAL_TARGET {
            format!("{}/all", self.base_url)
        } else {
            format!("{}/countries/{}", self.base_url, target)
        }
    }

    fn request(&self, url: &str) -> Result<StatisticsRecord, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let body = client.get(url).send()?.error_for_status()?.text()?;
        decode_record(&body)
    }
}

/// Decodes a response body, accepting only the JSON object form.
///
/// The derived record shape would also accept serde's sequence form, so an
/// array body must be ruled out before field decoding.
fn decode_record(body: &str) -> Result<StatisticsRecord, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::UnexpectedShape);
    }
    Ok(serde_json::from_value(value)?)
}

impl StatisticsSource for HttpStatisticsSource {
    fn fetch(&self, target: &str) -> Option<StatisticsRecord> {
        let url = self.endpoint(target);
        match self.request(&url) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("statistics fetch from {url} failed: {err}");
                None
            }
        }
    }
}
