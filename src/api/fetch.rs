// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::http::HttpClient;

use super::query::EpisodeQuery;
use super::record::{RawEpisode, parse_episodes};

/// Fetch raw episode records from a fully built request URL
pub async fn fetch_episodes_from<C: HttpClient>(
    client: &C,
    url: &Url,
) -> Result<Vec<RawEpisode>, FetchError> {
    debug!(%url, "requesting episodes");

    let response = client
        .get(url)
        .await
        .map_err(|e| FetchError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let episodes = parse_episodes(&response.body).map_err(|e| FetchError::InvalidJson {
        url: url.to_string(),
        source: e,
    })?;

    debug!(count = episodes.len(), "received episodes");
    Ok(episodes)
}

/// Fetch one page of episodes, newest first, from the API below `api_base`
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    api_base: &Url,
    query: &EpisodeQuery,
) -> Result<Vec<RawEpisode>, FetchError> {
    let url = query.to_url(api_base)?;
    fetch_episodes_from(client, &url).await
}
