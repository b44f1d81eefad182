// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::episode::Episode;
use crate::listing::HomeListing;

/// Title used when none is configured
pub const DEFAULT_PAGE_TITLE: &str = "Podcastr";

const LATEST_THUMBNAIL_SIZE: u32 = 192;
const TABLE_THUMBNAIL_SIZE: u32 = 120;
const PLAY_ICON: &str = "/play-green.svg";

/// Route of the detail page for an episode
pub fn episode_href(episode: &Episode) -> String {
    format!("/episode/{}", urlencoding::encode(&episode.id))
}

/// Render the full home page document
pub fn render_home_page(listing: &HomeListing, page_title: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", text(page_title)));
    html.push_str("</head>\n<body>\n<div class=\"home-page\">\n");

    html.push_str(&render_latest_section(&listing.latest));
    html.push_str(&render_all_section(&listing.all));

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_latest_section(episodes: &[Episode]) -> String {
    let mut html = String::new();

    html.push_str("<section class=\"latest-episodes\">\n");
    html.push_str("<h2>Últimos lançamentos</h2>\n<ul>\n");

    for episode in episodes {
        html.push_str(&format!("<li data-episode-id=\"{}\">\n", attr(&episode.id)));
        html.push_str(&thumbnail(episode, LATEST_THUMBNAIL_SIZE));
        html.push_str("\n<div class=\"episode-details\">\n");
        html.push_str(&title_link(episode));
        html.push_str(&format!(
            "\n<p>{}</p>\n<span>{}</span>\n<span>{}</span>\n</div>\n",
            text(&episode.members),
            text(&episode.published_at),
            text(&episode.duration_as_string),
        ));
        html.push_str(&play_button(episode));
        html.push_str("\n</li>\n");
    }

    html.push_str("</ul>\n</section>\n");
    html
}

fn render_all_section(episodes: &[Episode]) -> String {
    let mut html = String::new();

    html.push_str("<section class=\"all-episodes\">\n");
    html.push_str("<h2>Todos episódios</h2>\n");
    html.push_str("<table cellspacing=\"0\">\n<thead>\n<tr>\n");
    html.push_str("<th></th>\n<th>Podcast</th>\n<th>Integrantes</th>\n");
    html.push_str("<th>Data</th>\n<th>Duração</th>\n<th></th>\n");
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for episode in episodes {
        html.push_str(&format!("<tr data-episode-id=\"{}\">\n", attr(&episode.id)));
        html.push_str(&format!(
            "<td style=\"width: 70px\">{}</td>\n",
            thumbnail(episode, TABLE_THUMBNAIL_SIZE)
        ));
        html.push_str(&format!("<td>{}</td>\n", title_link(episode)));
        html.push_str(&format!("<td>{}</td>\n", text(&episode.members)));
        html.push_str(&format!(
            "<td style=\"width: 100px\">{}</td>\n",
            text(&episode.published_at)
        ));
        html.push_str(&format!("<td>{}</td>\n", text(&episode.duration_as_string)));
        html.push_str(&format!("<td>{}</td>\n", play_button(episode)));
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</section>\n");
    html
}

fn thumbnail(episode: &Episode, size: u32) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\" style=\"object-fit: cover\">",
        attr(&episode.thumbnail),
        attr(&episode.title),
    )
}

fn title_link(episode: &Episode) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        attr(&episode_href(episode)),
        text(&episode.title)
    )
}

fn play_button(episode: &Episode) -> String {
    format!(
        "<button type=\"button\" data-audio-url=\"{}\"><img src=\"{PLAY_ICON}\" alt=\"Tocar\"></button>",
        attr(&episode.url)
    )
}
