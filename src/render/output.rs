// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::error::RenderError;
use crate::listing::HomeListing;

async fn ensure_parent_dir(path: &Path) -> Result<(), RenderError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RenderError::CreateDirectoryFailed {
                path: parent.to_path_buf(),
                source: e,
            }),
        _ => Ok(()),
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| RenderError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Write the rendered page, creating parent directories as needed
pub async fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    write_file(path, html.as_bytes()).await
}

/// Write the listing as pretty-printed page props JSON
pub async fn write_props(path: &Path, listing: &HomeListing) -> Result<(), RenderError> {
    let json = serde_json::to_string_pretty(listing)?;
    write_file(path, json.as_bytes()).await
}
