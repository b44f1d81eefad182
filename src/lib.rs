// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod api;
pub mod build;
pub mod episode;
pub mod error;
pub mod http;
pub mod listing;
pub mod progress;
pub mod render;

// Re-export main types for convenience
pub use api::{EpisodeQuery, RawEpisode, fetch_episodes};
pub use build::{BuildOptions, BuildResult, build_home_page};
pub use episode::{Episode, format_duration, normalize_episodes};
pub use error::{BuildError, FetchError, NormalizeError, RenderError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use listing::{HomeListing, LATEST_EPISODE_COUNT};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use render::render_home_page;
