use crate::config::ConfigError;
use std::path::{Path, PathBuf};

pub const STATE_DIR: &str = ".mhia";
pub const PROGRESS_FILE_NAME: &str = "wizard-progress.json";
pub const OUTBOX_DIR_NAME: &str = "outbox";
pub const LOG_FILE_PATH: &str = "logs/wizard.log";

pub fn default_state_root() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(STATE_DIR))
}

pub fn progress_path(state_root: &Path) -> PathBuf {
    state_root.join(PROGRESS_FILE_NAME)
}

pub fn outbox_dir(state_root: &Path) -> PathBuf {
    state_root.join(OUTBOX_DIR_NAME)
}

pub fn log_path(state_root: &Path) -> PathBuf {
    state_root.join(LOG_FILE_PATH)
}
