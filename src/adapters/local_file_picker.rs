use anyhow::{Context, Result};
use std::path::Path;

use crate::core::models::SelectedFile;

/// Reads a local file the way a browser file input exposes it: the bare file
/// name, a media type declared from the extension, and the raw bytes.
pub async fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("Path {:?} does not name a file", path))?
        .to_string();

    let media_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;

    log::info!(
        "[FILE_PICKER] File selected: {} {} {} bytes",
        name,
        media_type,
        bytes.len()
    );

    Ok(SelectedFile::new(name, media_type, bytes))
}
