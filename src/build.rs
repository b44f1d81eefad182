// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::api::{DEFAULT_EPISODE_LIMIT, EpisodeQuery, fetch_episodes_from};
use crate::episode::normalize_episodes;
use crate::error::{BuildError, FetchError};
use crate::http::HttpClient;
use crate::listing::HomeListing;
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::render::{DEFAULT_PAGE_TITLE, render_home_page, write_page, write_props};

/// Output file used when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";

/// Options for a page build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base URL of the episodes API
    pub api_base: Url,
    /// Number of episodes to request
    pub limit: usize,
    /// Where the HTML page is written
    pub output_path: PathBuf,
    /// Where the page props JSON is written (None = skip)
    pub props_path: Option<PathBuf>,
    /// Document title
    pub page_title: String,
}

impl BuildOptions {
    /// Options with defaults for everything except the API base
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            limit: DEFAULT_EPISODE_LIMIT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            props_path: None,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

/// Result of a page build
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Episodes shown in the latest strip
    pub latest_count: usize,
    /// Episodes shown in the full table
    pub all_count: usize,
    /// Path of the written HTML page
    pub output_path: PathBuf,
    /// Path of the written props JSON, if requested
    pub props_path: Option<PathBuf>,
}

/// Build the home page
///
/// This is the main entry point for the library. It:
/// 1. Fetches one page of episodes, newest first
/// 2. Normalizes every record
/// 3. Splits them into the latest strip and the full table
/// 4. Renders and writes the HTML page (and props JSON if requested)
///
/// Any failure aborts the build; nothing is written unless every record
/// was normalized.
pub async fn build_home_page<C: HttpClient>(
    client: &C,
    options: &BuildOptions,
    reporter: SharedProgressReporter,
) -> Result<BuildResult, BuildError> {
    let url = EpisodeQuery::new(options.limit)
        .to_url(&options.api_base)
        .map_err(FetchError::from)?;

    reporter.report(ProgressEvent::FetchingEpisodes {
        url: url.to_string(),
    });

    let raw = fetch_episodes_from(client, &url).await?;

    reporter.report(ProgressEvent::EpisodesFetched { count: raw.len() });

    let listing = HomeListing::from_episodes(normalize_episodes(raw)?);
    let latest_count = listing.latest.len();
    let all_count = listing.all.len();

    reporter.report(ProgressEvent::EpisodesNormalized {
        latest_count,
        all_count,
    });

    let html = render_home_page(&listing, &options.page_title);
    write_page(&options.output_path, &html).await?;
    info!(path = %options.output_path.display(), "wrote page");

    reporter.report(ProgressEvent::PageWritten {
        path: options.output_path.clone(),
    });

    if let Some(props_path) = &options.props_path {
        write_props(props_path, &listing).await?;
        info!(path = %props_path.display(), "wrote page props");

        reporter.report(ProgressEvent::PropsWritten {
            path: props_path.clone(),
        });
    }

    reporter.report(ProgressEvent::BuildCompleted {
        episode_count: listing.len(),
    });

    Ok(BuildResult {
        latest_count,
        all_count,
        output_path: options.output_path.clone(),
        props_path: options.props_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use bytes::Bytes;
    use tempfile::tempdir;

    use crate::error::NormalizeError;
    use crate::http::HttpResponse;
    use crate::progress::{NoopReporter, ProgressReporter};

    #[derive(Clone)]
    struct MockHttpClient {
        status: u16,
        body: String,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, _url: &Url) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from(self.body.clone()),
            })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Mutex<Vec<ProgressEvent>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, event: ProgressEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn episode_json(id: usize, duration: &str) -> String {
        format!(
            r#"{{
                "id": "ep-{id}",
                "title": "Episode {id}",
                "members": "Diego Fernandes",
                "published_at": "2021-01-{day:02} 19:00:00",
                "thumbnail": "https://example.com/{id}.jpg",
                "file": {{ "url": "https://example.com/{id}.m4a", "duration": "{duration}" }}
            }}"#,
            day = 20 - id,
        )
    }

    fn feed(count: usize) -> String {
        let records: Vec<String> = (0..count).map(|i| episode_json(i, "3665")).collect();
        format!("[{}]", records.join(","))
    }

    fn ok_client(body: String) -> MockHttpClient {
        MockHttpClient { status: 200, body }
    }

    fn options_in(dir: &std::path::Path) -> BuildOptions {
        BuildOptions {
            output_path: dir.join("out").join("index.html"),
            ..BuildOptions::new(Url::parse("http://localhost:3333").unwrap())
        }
    }

    #[test]
    fn options_have_defaults() {
        let options = BuildOptions::new(Url::parse("http://localhost:3333").unwrap());

        assert_eq!(options.limit, 12);
        assert_eq!(options.output_path, PathBuf::from("index.html"));
        assert_eq!(options.page_title, "Podcastr");
        assert!(options.props_path.is_none());
    }

    #[tokio::test]
    async fn build_writes_page_with_both_sections() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path());

        let result = build_home_page(&ok_client(feed(5)), &options, NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(result.latest_count, 2);
        assert_eq!(result.all_count, 3);
        assert!(result.props_path.is_none());

        let html = std::fs::read_to_string(&options.output_path).unwrap();
        assert_eq!(html.matches("<a href=\"/episode/").count(), 5);
        assert!(html.contains("<span>20 jan 21</span>"));
        assert!(html.contains("01:01:05"));
    }

    #[tokio::test]
    async fn build_writes_props_when_requested() {
        let dir = tempdir().unwrap();
        let options = BuildOptions {
            props_path: Some(dir.path().join("props.json")),
            ..options_in(dir.path())
        };

        build_home_page(&ok_client(feed(3)), &options, NoopReporter::shared())
            .await
            .unwrap();

        let json = std::fs::read_to_string(dir.path().join("props.json")).unwrap();
        let listing: HomeListing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing.latest.len(), 2);
        assert_eq!(listing.all.len(), 1);
        assert_eq!(listing.all[0].id, "ep-2");
        assert_eq!(listing.all[0].duration_as_string, "01:01:05");
    }

    #[tokio::test]
    async fn build_handles_single_episode() {
        let dir = tempdir().unwrap();

        let result = build_home_page(
            &ok_client(feed(1)),
            &options_in(dir.path()),
            NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert_eq!(result.latest_count, 1);
        assert_eq!(result.all_count, 0);
    }

    #[tokio::test]
    async fn build_reports_progress_in_order() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path());
        let reporter = Arc::new(RecordingReporter::default());

        build_home_page(&ok_client(feed(4)), &options, reporter.clone())
            .await
            .unwrap();

        let events = reporter.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ProgressEvent::FetchingEpisodes {
                    url: "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
                        .to_string(),
                },
                ProgressEvent::EpisodesFetched { count: 4 },
                ProgressEvent::EpisodesNormalized {
                    latest_count: 2,
                    all_count: 2,
                },
                ProgressEvent::PageWritten {
                    path: options.output_path.clone(),
                },
                ProgressEvent::BuildCompleted { episode_count: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn build_fails_on_http_error_without_writing() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path());
        let client = MockHttpClient {
            status: 500,
            body: "Internal Server Error".to_string(),
        };

        let err = build_home_page(&client, &options, NoopReporter::shared())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Fetch(FetchError::HttpStatus { status: 500, .. })
        ));
        assert!(!options.output_path.exists());
    }

    #[tokio::test]
    async fn build_fails_on_bad_record_without_writing() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path());
        let body = format!("[{},{}]", episode_json(0, "60"), episode_json(1, "1:00"));

        let err = build_home_page(&ok_client(body), &options, NoopReporter::shared())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Normalize(NormalizeError::InvalidDuration { ref id, .. }) if id == "ep-1"
        ));
        assert!(!options.output_path.exists());
    }
}
