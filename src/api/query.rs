// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

/// Number of episodes requested when no limit is given
pub const DEFAULT_EPISODE_LIMIT: usize = 12;

const EPISODES_PATH: &str = "episodes";
const SORT_FIELD: &str = "published_at";
const SORT_ORDER: &str = "desc";

/// Query for one page of episodes, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeQuery {
    pub limit: usize,
}

impl EpisodeQuery {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Build the full request URL below the given API base
    ///
    /// The base is treated as a directory, so `https://host/api` and
    /// `https://host/api/` both resolve to `https://host/api/episodes`.
    pub fn to_url(&self, api_base: &Url) -> Result<Url, url::ParseError> {
        let mut base = api_base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(EPISODES_PATH)?;
        url.query_pairs_mut()
            .append_pair("_limit", &self.limit.to_string())
            .append_pair("_sort", SORT_FIELD)
            .append_pair("_order", SORT_ORDER);

        Ok(url)
    }
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self::new(DEFAULT_EPISODE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_requests_twelve_newest_episodes() {
        let base = Url::parse("http://localhost:3333").unwrap();
        let url = EpisodeQuery::default().to_url(&base).unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn base_path_is_kept_with_or_without_trailing_slash() {
        let query = EpisodeQuery::new(5);

        let without = query
            .to_url(&Url::parse("https://api.example.com/v1").unwrap())
            .unwrap();
        let with = query
            .to_url(&Url::parse("https://api.example.com/v1/").unwrap())
            .unwrap();

        assert_eq!(without.path(), "/v1/episodes");
        assert_eq!(without, with);
        assert_eq!(without.query(), Some("_limit=5&_sort=published_at&_order=desc"));
    }

    #[test]
    fn base_query_string_is_dropped() {
        let base = Url::parse("https://api.example.com/?token=abc").unwrap();
        let url = EpisodeQuery::default().to_url(&base).unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|(key, _)| key != "token"));
    }
}
