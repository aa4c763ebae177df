//! Where census titles come from. Every source yields trimmed, non-empty
//! titles in listing order.

mod ytdlp;

pub use ytdlp::YtDlpSource;

use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum TitleSourceError {
    #[error("title listing tool '{program}' is not installed or not executable")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("title listing timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("title listing exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("failed to read titles from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub enum TitleSource {
    YtDlp(YtDlpSource),
    File(PathBuf),
}

impl TitleSource {
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub async fn fetch_titles(&self) -> Result<Vec<String>, TitleSourceError> {
        match self {
            TitleSource::YtDlp(source) => source.fetch_titles().await,
            TitleSource::File(path) => read_title_file(path).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TitleSource::YtDlp(source) => source.channel_url().to_string(),
            TitleSource::File(path) => path.display().to_string(),
        }
    }
}

async fn read_title_file(path: &Path) -> Result<Vec<String>, TitleSourceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TitleSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let titles = parse_title_lines(&raw);
    info!(path = %path.display(), titles = titles.len(), "loaded titles from file");
    Ok(titles)
}

/// One title per line; surrounding whitespace and blank lines are dropped.
pub fn parse_title_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
