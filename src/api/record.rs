// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// One episode record exactly as the API returns it
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published_at: String,
    pub file: RawFile,
}

/// Audio file information attached to a raw episode
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    pub duration: RawDuration,
    pub url: String,
}

/// Duration in seconds, sent either as a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(serde_json::Number),
    Text(String),
}

impl RawDuration {
    /// Whole, non-negative seconds, or `None` if the value is anything else
    pub fn seconds(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for RawDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}

/// Parse an API response body into raw episode records
pub fn parse_episodes(json: &[u8]) -> Result<Vec<RawEpisode>, serde_json::Error> {
    serde_json::from_slice(json)
}
