// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching the episode list from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to fetch episodes from {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse episodes JSON from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while turning raw API records into episodes
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Episode '{id}' has an invalid duration '{value}'")]
    InvalidDuration { id: String, value: String },

    #[error("Episode '{id}' has an invalid publish date '{value}'")]
    InvalidDate { id: String, value: String },
}

/// Errors that can occur when writing the rendered page
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page props: {0}")]
    PropsSerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for a page build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
