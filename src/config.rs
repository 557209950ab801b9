use anyhow::{bail, Context, Result};
use url::Url;

/// Immutable snapshot of one scan run's parameters. Every worker gets its
/// own handle; nothing here is mutated after launch. Recursion depth is not
/// a field: it travels as an explicit argument through each walker call, so
/// branches never share a counter.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Normalized base URL, always ends with `/`.
    pub target: String,
    pub workers: usize,
    pub quiet: bool,
    pub follow_redirects: bool,
    pub recursive: bool,
    pub max_depth: usize,
    pub timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            workers: 10,
            quiet: false,
            follow_redirects: false,
            recursive: false,
            max_depth: 1,
            timeout_secs: 10,
        }
    }
}

/// Validate and normalize the target base URL: strip a literal trailing
/// `FUZZ` marker and make sure the result ends with `/` so candidate paths
/// can be appended directly.
pub fn normalize_target(raw: &str) -> Result<String> {
    let mut target = raw.trim().trim_end_matches("FUZZ").to_string();
    if !target.ends_with('/') {
        target.push('/');
    }
    let parsed = Url::parse(&target).with_context(|| format!("invalid target URL: {raw}"))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported scheme '{other}' in target URL, expected http or https"),
    }
    Ok(target)
}
