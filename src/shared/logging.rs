use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LEVEL_INFO: &str = "info";
pub const LEVEL_WARN: &str = "warn";
pub const LEVEL_DEBUG: &str = "debug";

/// Append-only JSON-lines event log. A detached log drops every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn detached() -> Self {
        Self { path: None }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, event: &str, message: &str) {
        self.append(LEVEL_INFO, event, message);
    }

    pub fn warn(&self, event: &str, message: &str) {
        self.append(LEVEL_WARN, event, message);
    }

    pub fn debug(&self, event: &str, message: &str) {
        self.append(LEVEL_DEBUG, event, message);
    }

    pub fn append(&self, level: &str, event: &str, message: &str) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let _ = append_event_line(path, level, event, message);
    }
}

pub fn event_line(level: &str, event: &str, message: &str) -> serde_json::Result<String> {
    let payload = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "level": level,
        "event": event,
        "message": message,
    });
    serde_json::to_string(&payload)
}

fn append_event_line(path: &Path, level: &str, event: &str, message: &str) -> std::io::Result<()> {
    let line = event_line(level, event, message).map_err(std::io::Error::other)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{line}")
}
