use super::{parse_title_lines, TitleSourceError};
use crate::config::SourceConfig;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

/// Lists a channel's video titles through `yt-dlp --flat-playlist`.
#[derive(Debug, Clone)]
pub struct YtDlpSource {
    program: String,
    channel_url: String,
    timeout: Duration,
}

impl YtDlpSource {
    pub fn new(
        program: impl Into<String>,
        channel_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            channel_url: channel_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.program, &config.channel_url, config.timeout())
    }

    pub fn channel_url(&self) -> &str {
        &self.channel_url
    }

    pub(crate) fn args(&self) -> [&str; 5] {
        [
            "--flat-playlist",
            "--print",
            "%(title)s",
            "--no-warnings",
            self.channel_url.as_str(),
        ]
    }

    pub async fn fetch_titles(&self) -> Result<Vec<String>, TitleSourceError> {
        info!(program = %self.program, url = %self.channel_url, "listing channel titles");

        let mut command = Command::new(&self.program);
        command.args(self.args()).kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                if source.kind() == ErrorKind::NotFound {
                    warn!(program = %self.program, "title listing tool not found");
                }
                return Err(TitleSourceError::Unavailable {
                    program: self.program.clone(),
                    source,
                });
            }
            Err(_) => {
                warn!(seconds = self.timeout.as_secs(), "title listing timed out");
                return Err(TitleSourceError::Timeout {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if !output.status.success() {
            return Err(TitleSourceError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let titles = parse_title_lines(&String::from_utf8_lossy(&output.stdout));
        info!(titles = titles.len(), "channel titles listed");
        Ok(titles)
    }
}
