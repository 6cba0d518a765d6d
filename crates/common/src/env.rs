//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use std::path::Path;

use tracing::warn;

/// Returns whether the admin page directory exists; warns when it does not,
/// since the API keeps working and only static assets will 404.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%static_dir, "static path is not a directory; admin page disabled");
            false
        }
        Err(_) => {
            warn!(%static_dir, "static assets directory not found; admin page will 404");
            false
        }
    }
}

/// Returns the `index.html` path inside `static_dir`.
pub fn index_file(static_dir: &str) -> std::path::PathBuf {
    Path::new(static_dir).join("index.html")
}
