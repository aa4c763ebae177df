use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CHANNEL_URL: &str = "https://www.youtube.com/@casapaleologu/videos";
pub const DEFAULT_YTDLP_PROGRAM: &str = "yt-dlp";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REPORT_PATH: &str = "filozofi_casa_paleologu.txt";

/// Top-level configuration for a census run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let channel_url =
            env::var("CENSUS_CHANNEL_URL").unwrap_or_else(|_| DEFAULT_CHANNEL_URL.to_string());
        let program =
            env::var("CENSUS_YTDLP_BIN").unwrap_or_else(|_| DEFAULT_YTDLP_PROGRAM.to_string());
        let timeout_secs = match env::var("CENSUS_FETCH_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let output_path = env::var("CENSUS_REPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            source: SourceConfig {
                channel_url,
                program,
                timeout_secs,
            },
            report: ReportConfig { output_path },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the external title listing tool.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub channel_url: String,
    pub program: String,
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where the flat text report is written.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_path: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "CENSUS_FETCH_TIMEOUT_SECS must be a positive number of seconds (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
