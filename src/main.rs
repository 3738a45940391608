use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use epguide::{
    DEFAULT_SEED, NoopReporter, PipelineOptions, ProgressEvent, ProgressReporter, ReqwestClient,
    SharedProgressReporter, TrailingPolicy, render_json, render_text, run_pipeline,
};

// Emoji with fallback for terminals without Unicode support
static TV: Emoji<'_, '_> = Emoji("📺 ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static FILM: Emoji<'_, '_> = Emoji("🎬 ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Output format of the episode report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Extract episode titles, summaries and links from a TV episode guide page
#[derive(Parser, Debug)]
#[command(name = "epguide")]
#[command(about = "Extract episodes from a TV episode guide page")]
#[command(version)]
struct Args {
    /// Episode guide page(s) to scrape
    #[arg(default_value = DEFAULT_SEED)]
    seeds: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also emit the last episode on the page, which is otherwise dropped
    #[arg(long)]
    flush_trailing: bool,

    /// Give up on a page after this many seconds (no limit by default)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Quiet mode - suppress progress output and non-error logs
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Progress reporter drawing a spinner on stderr
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Result<Self> {
        let style = ProgressStyle::default_spinner().template("{spinner:.green} {wide_msg}")?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));

        Ok(Self { spinner })
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingPage { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Fetching {}", url.cyan()));
            }

            ProgressEvent::PageScanned {
                url,
                bytes,
                fragments,
                ..
            } => {
                self.spinner.println(format!(
                    "{FILM}Scanned {} ({} bytes, {} fragments)",
                    url.cyan(),
                    bytes,
                    fragments.to_string().green()
                ));
            }

            ProgressEvent::PageFailed { url, error } => {
                self.spinner.println(format!(
                    "{FAILURE}{} - {}",
                    url.red(),
                    error.dimmed()
                ));
            }

            ProgressEvent::EpisodeAssembled { count } => {
                self.spinner
                    .set_message(format!("{TV}{} episodes assembled", count.to_string().yellow()));
            }

            ProgressEvent::ExtractionCompleted { .. } => {
                self.spinner.finish_and_clear();
            }
        }
    }
}

/// Sets up the tracing subscriber, logging to stderr
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("epguide=warn,error"),
            1 => EnvFilter::new("epguide=debug,info"),
            _ => EnvFilter::new("epguide=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose, args.quiet);

    let client = match args.timeout {
        Some(secs) => ReqwestClient::with_timeout(Duration::from_secs(secs))
            .context("Failed to build HTTP client")?,
        None => ReqwestClient::new(),
    };

    let options = PipelineOptions {
        seeds: args.seeds,
        trailing: if args.flush_trailing {
            TrailingPolicy::Flush
        } else {
            TrailingPolicy::Drop
        },
        ..Default::default()
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new()?)
    };

    let result = run_pipeline(&client, &options, reporter).await;

    let report = match args.format {
        Format::Text => render_text(&result.episodes),
        Format::Json => render_json(&result.episodes).context("Failed to render report")? + "\n",
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;

    if !args.quiet && !result.failed_pages.is_empty() {
        eprintln!("\n{}", "Failed pages:".red().bold());
        for (url, error) in &result.failed_pages {
            eprintln!("  {}{} - {}", CROSS, url.yellow(), error.dimmed());
        }
    }

    // Failed fetches still exit successfully with whatever was found
    Ok(())
}
