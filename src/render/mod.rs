// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod output;
mod page;

pub use output::{write_page, write_props};
pub use page::{DEFAULT_PAGE_TITLE, episode_href, render_home_page};
