use std::path::Path;

use anyhow::{Context, Result};

/// Read a newline-delimited wordlist into memory. Blank lines are skipped,
/// order is preserved. An empty file is valid and yields zero work.
pub async fn load(path: &Path) -> Result<Vec<String>> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;
    Ok(parse(&data))
}

fn parse(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
