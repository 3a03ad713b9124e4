//! Screenshot persistence

use crate::error::{BrowserError, Result};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};
use uxv_core::ScreenshotArtifact;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Write captured PNG bytes to `path`, creating parent directories
///
/// An existing file at `path` is overwritten.
pub async fn write_png(path: &Path, data: &[u8]) -> Result<ScreenshotArtifact> {
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(BrowserError::Screenshot(format!(
            "Refusing to write {}: capture is not a PNG ({} bytes)",
            path.display(),
            data.len()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating screenshot directory {}", parent.display());
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, data).await?;

    info!("Screenshot stored: {} ({} bytes)", path.display(), data.len());

    Ok(ScreenshotArtifact {
        path: path.to_path_buf(),
        size_bytes: data.len() as u64,
        captured_at: Utc::now(),
    })
}
