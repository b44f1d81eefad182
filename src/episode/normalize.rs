// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::RawEpisode;
use crate::error::NormalizeError;

use super::date::{format_publish_date, parse_publish_date};
use super::duration::format_duration;

/// A display-ready episode
///
/// Field names serialize in camelCase to match the page props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    /// Localized short publish date, e.g. "8 jan 21"
    pub published_at: String,
    pub thumbnail: String,
    /// Length in whole seconds
    pub duration: u64,
    /// `duration` as `HH:MM:SS`
    pub duration_as_string: String,
    /// Audio file URL
    pub url: String,
}

impl Episode {
    /// Normalize a raw API record
    pub fn from_raw(raw: RawEpisode) -> Result<Self, NormalizeError> {
        let duration = raw.file.duration.seconds().ok_or_else(|| {
            NormalizeError::InvalidDuration {
                id: raw.id.clone(),
                value: raw.file.duration.to_string(),
            }
        })?;

        let published_at = parse_publish_date(&raw.published_at)
            .map(|dt| format_publish_date(&dt))
            .ok_or_else(|| NormalizeError::InvalidDate {
                id: raw.id.clone(),
                value: raw.published_at.clone(),
            })?;

        Ok(Self {
            id: raw.id,
            title: raw.title,
            members: raw.members,
            published_at,
            thumbnail: raw.thumbnail,
            duration,
            duration_as_string: format_duration(duration),
            url: raw.file.url,
        })
    }
}

/// Normalize every raw record, keeping the API's order
///
/// Stops at the first invalid record.
pub fn normalize_episodes(raw: Vec<RawEpisode>) -> Result<Vec<Episode>, NormalizeError> {
    let episodes = raw
        .into_iter()
        .map(Episode::from_raw)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = episodes.len(), "normalized episodes");
    Ok(episodes)
}
