//! Publishing histogram payloads to a plotting service
//!
//! Behind the `network` cargo feature: the analysis pipeline works fully
//! offline, and callers that want the rendered plot opt in.

use crate::error::{LocalignError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Default HTTP timeout (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// POST a histogram payload to a Plotly-compatible endpoint
///
/// Returns the service's response body on success. All transport and
/// non-2xx failures surface as [`LocalignError::Network`].
///
/// # Example
///
/// ```no_run
/// use localign::analysis::{plotly_histogram_payload, publish_histogram};
///
/// # fn main() -> localign::Result<()> {
/// let payload = plotly_histogram_payload(&[1, 2, 2, 7], "basic-histogram");
/// let reply = publish_histogram("https://plot.ly/clientresp", &payload)?;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
pub fn publish_histogram(url: &str, payload: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| LocalignError::Network(e.to_string()))?;

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(payload.to_string())
        .send()
        .map_err(|e| LocalignError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LocalignError::Network(format!(
            "server returned {}",
            status
        )));
    }

    response
        .text()
        .map_err(|e| LocalignError::Network(e.to_string()))
}
