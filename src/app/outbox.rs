use crate::config::{ConfigError, ConfigModel};
use crate::shared::fs_atomic::atomic_write_file;
use crate::wizard::{SimulationRequest, SubmitGateway, SubmitOutcome};
use std::fs;
use std::future::Future;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutboxError {
    #[error(transparent)]
    Request(#[from] ConfigError),
    #[error("failed to encode simulation request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to create outbox directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write simulation request {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Delivers simulation requests as JSON files in a local directory.
#[derive(Debug, Clone)]
pub struct OutboxGateway {
    dir: PathBuf,
}

impl OutboxGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn request_path(&self, simulation_name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", request_file_stem(simulation_name)))
    }

    pub fn deliver(&self, config: &ConfigModel) -> Result<PathBuf, OutboxError> {
        let request = SimulationRequest::from_config(config)?;
        let body = serde_json::to_vec_pretty(&request).map_err(OutboxError::Encode)?;
        fs::create_dir_all(&self.dir).map_err(|source| OutboxError::CreateDir {
            path: self.dir.display().to_string(),
            source,
        })?;
        let path = self.request_path(&request.name);
        atomic_write_file(&path, &body).map_err(|source| OutboxError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

impl SubmitGateway for OutboxGateway {
    fn submit(&self, config: ConfigModel) -> impl Future<Output = SubmitOutcome> {
        let delivered = self.deliver(&config);
        async move {
            match delivered {
                Ok(path) => SubmitOutcome::Success {
                    message: Some(path.display().to_string()),
                },
                Err(err) => SubmitOutcome::failure(err.to_string()),
            }
        }
    }
}

/// File-name-safe form of a simulation name.
pub fn request_file_stem(simulation_name: &str) -> String {
    let stem: String = simulation_name
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        "simulation".to_string()
    } else {
        stem.to_string()
    }
}
