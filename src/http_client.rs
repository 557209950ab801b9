use reqwest::{redirect, Client, ClientBuilder};
use std::time::Duration;

/// Build the pooled client used for candidate probes. Connections are
/// reused across requests to avoid repeated TLS handshakes.
///
/// Redirects are only followed when `follow_redirects` is set; otherwise
/// 301/302 responses surface directly with their `Location` header intact.
pub fn build_probe_client(follow_redirects: bool, timeout_secs: u64) -> Client {
    let policy = if follow_redirects {
        redirect::Policy::limited(5)
    } else {
        redirect::Policy::none()
    };

    ClientBuilder::new()
        // Connection pooling - reuse connections aggressively
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        // Timeouts
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        // TLS
        .use_rustls_tls()
        .redirect(policy)
        .user_agent(concat!("path_hunter/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
}

/// Client for directory-classification probes: never follows redirects, so
/// a slash-suffixed `Location` is always observable.
pub fn build_classify_client(timeout_secs: u64) -> Client {
    build_probe_client(false, timeout_secs)
}
