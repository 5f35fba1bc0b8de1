//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite database location exists at startup.

use std::path::Path;

use tracing::info;

/// Extracts the file path from a `sqlite:` URL. Returns `None` for
/// in-memory databases and non-SQLite URLs.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(path)
}

/// Ensure the parent directory of a SQLite database file exists.
pub async fn ensure_db_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else { return Ok(()) };
    let path = Path::new(file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    if tokio::fs::metadata(path).await.is_err() {
        info!(db_file = %file, "sqlite database file not found; it will be created");
    }
    Ok(())
}
