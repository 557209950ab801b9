use reqwest::{header, Client};

/// Everything the engine needs from one GET: the status line and where the
/// server tried to send us. Consumed immediately, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    /// Raw `Location` header, if the response carried one.
    pub location: Option<String>,
    /// True when the client auto-followed at least one redirect hop.
    pub redirected: bool,
}

/// Issue a single GET against `url` with whatever redirect policy the
/// client was built with.
pub async fn probe_url(client: &Client, url: &str) -> Result<ProbeOutcome, reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let redirected = response.url().as_str() != url;
    Ok(ProbeOutcome { status, location, redirected })
}

/// Coarse label for transport failures, used in skip logs.
pub fn transport_error_kind(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_redirect() {
        "redirect-loop"
    } else {
        "transport"
    }
}
