use chrono::{Local, NaiveDate};
use clap::Args;
use philo_census::census::{render_artifact, render_console, run_census, CensusReport};
use philo_census::config::{parse_timeout_secs, AppConfig, SourceConfig};
use philo_census::error::AppError;
use philo_census::sources::{TitleSource, YtDlpSource};
use philo_census::telemetry;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Args, Debug, Default)]
pub(crate) struct ScanArgs {
    /// Channel videos URL handed to yt-dlp
    #[arg(long, conflicts_with = "titles_file")]
    pub(crate) channel_url: Option<String>,
    /// Read titles from a file (one per line) instead of running yt-dlp
    #[arg(long)]
    pub(crate) titles_file: Option<PathBuf>,
    /// Seconds to wait for yt-dlp before giving up
    #[arg(long, value_parser = parse_timeout_arg)]
    pub(crate) timeout_secs: Option<u64>,
    /// Where to write the alphabetical text report
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the census summary as JSON instead of the console report
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_timeout_arg(raw: &str) -> Result<u64, String> {
    parse_timeout_secs(raw).map_err(|err| err.to_string())
}

pub(crate) async fn run_scan(args: ScanArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(url) = args.channel_url {
        config.source.channel_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.source.timeout_secs = secs;
    }
    if let Some(output) = args.output {
        config.report.output_path = output;
    }

    telemetry::init(&config.telemetry)?;

    let source = select_source(args.titles_file, &config.source);
    let today = Local::now().date_naive();
    let stdout = execute(&source, &config.report.output_path, today, args.json).await?;
    print!("{stdout}");
    Ok(())
}

fn select_source(titles_file: Option<PathBuf>, config: &SourceConfig) -> TitleSource {
    match titles_file {
        Some(path) => TitleSource::File(path),
        None => TitleSource::YtDlp(YtDlpSource::from_config(config)),
    }
}

/// Runs one census and writes the text report. Returns what belongs on
/// stdout.
async fn execute(
    source: &TitleSource,
    output_path: &Path,
    today: NaiveDate,
    json: bool,
) -> Result<String, AppError> {
    let titles = collect_titles(source).await;
    let report = run_census(&titles);

    write_artifact(output_path, &report, today)?;

    if json {
        let mut rendered = serde_json::to_string_pretty(&report.summary())?;
        rendered.push('\n');
        return Ok(rendered);
    }

    let mut rendered = render_console(&report);
    rendered.push_str(&format!("\nReport saved to: {}\n", output_path.display()));
    Ok(rendered)
}

/// A failing source leaves the census with no titles rather than aborting.
async fn collect_titles(source: &TitleSource) -> Vec<String> {
    match source.fetch_titles().await {
        Ok(titles) => titles,
        Err(err) => {
            error!(source = %source.describe(), error = %err, "could not list titles");
            eprintln!("could not list titles: {err}");
            Vec::new()
        }
    }
}

fn write_artifact(path: &Path, report: &CensusReport, today: NaiveDate) -> Result<(), AppError> {
    std::fs::write(path, render_artifact(report, today))?;
    info!(path = %path.display(), names = report.tally().unique_names(), "report written");
    Ok(())
}
