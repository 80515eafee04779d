#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to resolve home directory for wizard state root")]
    HomeDirectoryUnavailable,
    #[error("failed to encode configuration: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to render configuration as yaml: {0}")]
    Render(#[source] serde_yaml::Error),
}
