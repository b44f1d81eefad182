// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use url::Url;

use podlist::api::DEFAULT_EPISODE_LIMIT;
use podlist::build::DEFAULT_OUTPUT_PATH;
use podlist::render::DEFAULT_PAGE_TITLE;
use podlist::{
    BuildOptions, NoopReporter, ProgressEvent, ProgressReporter, ReqwestClient,
    SharedProgressReporter, build_home_page,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "[>] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");

/// Render a static podcast listing page from an episodes API
#[derive(Parser, Debug)]
#[command(name = "podlist")]
#[command(about = "Render a static podcast listing page from an episodes API")]
#[command(version)]
struct Args {
    /// Base URL of the episodes API (e.g. http://localhost:3333)
    api_base: Url,

    /// Path of the generated HTML page
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Number of episodes to request
    #[arg(short, long, default_value_t = DEFAULT_EPISODE_LIMIT)]
    limit: usize,

    /// Also write the page props as JSON to this path
    #[arg(long)]
    props: Option<PathBuf>,

    /// Document title of the generated page
    #[arg(long, default_value = DEFAULT_PAGE_TITLE)]
    title: String,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode - print debug logs to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { spinner }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingEpisodes { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Fetching episodes: {}", url.cyan()));
            }

            ProgressEvent::EpisodesFetched { count } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} episodes received",
                    count.to_string().cyan()
                ));
            }

            ProgressEvent::EpisodesNormalized {
                latest_count,
                all_count,
            } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}Rendering {} latest, {} more",
                    latest_count.to_string().green(),
                    all_count.to_string().yellow()
                ));
            }

            ProgressEvent::PageWritten { path } => {
                self.spinner.println(format!(
                    "  {PAGE}Page: {}",
                    path.display().to_string().cyan()
                ));
            }

            ProgressEvent::PropsWritten { path } => {
                self.spinner.println(format!(
                    "  {PAGE}Props: {}",
                    path.display().to_string().cyan()
                ));
            }

            ProgressEvent::BuildCompleted { episode_count } => {
                self.spinner.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} episodes listed\n",
                    "Build complete:".bold().green(),
                    episode_count.to_string().green().bold(),
                );
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "podlist=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podlist".bold().magenta(),
            "- Podcast Listing".dimmed()
        );
    }

    let client = ReqwestClient::new();

    let options = BuildOptions {
        api_base: args.api_base,
        limit: args.limit,
        output_path: args.output,
        props_path: args.props,
        page_title: args.title,
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    build_home_page(&client, &options, reporter)
        .await
        .context("Failed to build podcast page")?;

    Ok(())
}
