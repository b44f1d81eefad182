// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod date;
mod duration;
mod normalize;

pub use date::{DISPLAY_LOCALE, format_publish_date, parse_publish_date};
pub use duration::format_duration;
pub use normalize::{Episode, normalize_episodes};
