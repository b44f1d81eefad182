// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted while building the page, for progress reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The episode list is being requested
    FetchingEpisodes { url: String },

    /// The API answered with this many records
    EpisodesFetched { count: usize },

    /// All records were normalized and split into sections
    EpisodesNormalized {
        latest_count: usize,
        all_count: usize,
    },

    /// The HTML page was written
    PageWritten { path: PathBuf },

    /// The page props JSON was written
    PropsWritten { path: PathBuf },

    /// Build finished successfully
    BuildCompleted { episode_count: usize },
}

/// Trait for reporting progress events during a page build.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
