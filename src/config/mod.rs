pub mod error;
pub mod merge;
pub mod model;
pub mod paths;
pub mod sections;
pub mod typed_fields;

pub use error::ConfigError;
pub use merge::{FieldSource, MergeMode, Overlay};
pub use model::{build_initial, merge_section, ConfigModel, SectionName, ALL_SECTIONS};
pub use paths::{
    default_state_root, log_path, outbox_dir, progress_path, LOG_FILE_PATH, OUTBOX_DIR_NAME,
    PROGRESS_FILE_NAME, STATE_DIR,
};
pub use sections::{
    AnthropoceneConfig, AquiferConfig, BasinConfig, Benefits, CalibrationConfig, CapitalCosts,
    EconomicConfig, ExecutionConfig, FinancialTerms, FlowThresholds, InfrastructureCost, LandCost,
    LandUse, LandUseChanges, ModelComponents, ObservedPeriods, OperatingCosts,
    OptimizationSettings, OutputSettings, ParameterRange, ParameterRanges, PhysicalRanges,
    ProjectConfig, SocioRanges, SocioeconomicConfig,
};
pub use typed_fields::{
    AquiferType, CalibrationMetric, ChartType, Choice, ClimateScenario, ConfigurationMode,
    ExportFormat, OperationMode, OptimizationAlgorithm, TimeStep,
};

/// Renders a config the way the command line prints it.
pub fn render_yaml(config: &ConfigModel) -> Result<String, ConfigError> {
    serde_yaml::to_string(config).map_err(ConfigError::Render)
}
