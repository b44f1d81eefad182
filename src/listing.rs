// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::episode::Episode;

/// Number of episodes shown in the "latest" strip
pub const LATEST_EPISODE_COUNT: usize = 2;

/// Episodes split into the two sections of the home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeListing {
    #[serde(rename = "latestEpisodes")]
    pub latest: Vec<Episode>,
    #[serde(rename = "allEpisodes")]
    pub all: Vec<Episode>,
}

impl HomeListing {
    /// Split an ordered episode list into the latest strip and the rest
    ///
    /// Both parts keep the input order. With fewer episodes than the strip
    /// holds, `all` is empty.
    pub fn from_episodes(mut episodes: Vec<Episode>) -> Self {
        let split_at = LATEST_EPISODE_COUNT.min(episodes.len());
        let all = episodes.split_off(split_at);

        Self {
            latest: episodes,
            all,
        }
    }

    /// Total number of episodes across both sections
    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_episode(id: usize) -> Episode {
        Episode {
            id: format!("ep-{id}"),
            title: format!("Episode {id}"),
            members: "Host".to_string(),
            published_at: "8 jan 21".to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            duration: 60,
            duration_as_string: "00:01:00".to_string(),
            url: "https://example.com/ep.mp3".to_string(),
        }
    }

    fn ids(episodes: &[Episode]) -> Vec<&str> {
        episodes.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn splits_first_two_from_the_rest() {
        for n in 2..=12 {
            let listing = HomeListing::from_episodes((0..n).map(make_episode).collect());

            assert_eq!(listing.latest.len(), 2);
            assert_eq!(listing.all.len(), n - 2);
            assert_eq!(listing.len(), n);
        }
    }

    #[test]
    fn keeps_order_without_overlap() {
        let listing = HomeListing::from_episodes((0..5).map(make_episode).collect());

        assert_eq!(ids(&listing.latest), ["ep-0", "ep-1"]);
        assert_eq!(ids(&listing.all), ["ep-2", "ep-3", "ep-4"]);
        assert!(listing.latest.iter().all(|e| !listing.all.contains(e)));
    }

    #[test]
    fn fewer_than_two_leaves_all_empty() {
        let empty = HomeListing::from_episodes(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.all.is_empty());

        let single = HomeListing::from_episodes(vec![make_episode(0)]);
        assert_eq!(ids(&single.latest), ["ep-0"]);
        assert!(single.all.is_empty());
        assert!(!single.is_empty());
    }

    #[test]
    fn serializes_as_page_props() {
        let listing = HomeListing::from_episodes((0..3).map(make_episode).collect());
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["latestEpisodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["allEpisodes"][0]["id"], "ep-2");
    }
}
