use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{MetagenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub host: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

/// Append-only activity log, one line per event.
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Logger writing to `~/.metagen/activity.log`.
    pub fn new() -> Result<Self> {
        let user_dirs = directories::UserDirs::new()
            .ok_or_else(|| MetagenError::Other("could not determine home directory".into()))?;
        let dir = user_dirs.home_dir().join(".metagen");
        fs::create_dir_all(&dir)?;
        Ok(Self::with_path(dir.join("activity.log")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        host: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            host: host.map(|h| h.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        // Details go last and must stay on one line.
        let details = entry.details.as_deref().unwrap_or("").replace('\n', " ");

        writeln!(
            file,
            "{} {} {} {} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            entry.level.marker(),
            entry.event,
            entry.host.as_deref().unwrap_or("*"),
            details
        )?;

        Ok(())
    }

    /// Matching lines, most recent first.
    pub fn read_logs(&self, host_filter: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let file = fs::File::open(&self.log_path)?;
        let reader = BufReader::new(file);
        let mut matching_lines = Vec::new();

        for line in reader.lines() {
            let line = line?;

            if errors_only && !line.contains(LogLevel::Error.marker()) {
                continue;
            }

            if let Some(host) = host_filter {
                if !line.contains(host) {
                    continue;
                }
            }

            matching_lines.push(line);
        }

        matching_lines.reverse();
        Ok(matching_lines)
    }

    pub fn info(&self, host: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, host, event, details)
    }

    pub fn error(&self, host: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, host, event, details)
    }
}
