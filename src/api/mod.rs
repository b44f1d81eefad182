// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod fetch;
mod query;
mod record;

pub use fetch::{fetch_episodes, fetch_episodes_from};
pub use query::{DEFAULT_EPISODE_LIMIT, EpisodeQuery};
pub use record::{RawDuration, RawEpisode, RawFile, parse_episodes};
