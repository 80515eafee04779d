use super::merge::{FieldSource, MergeMode, Overlay};
use super::sections::{
    AnthropoceneConfig, AquiferConfig, BasinConfig, CalibrationConfig, EconomicConfig,
    ExecutionConfig, ProjectConfig, SocioeconomicConfig,
};
use serde::Serialize;
use serde_json::Value;

/// The closed set of configuration sections. Each one is also the id of the
/// wizard step that edits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionName {
    Project,
    Basin,
    Anthropocene,
    Socioeconomic,
    Aquifer,
    Economic,
    Calibration,
    Execution,
}

pub const ALL_SECTIONS: [SectionName; 8] = [
    SectionName::Project,
    SectionName::Basin,
    SectionName::Anthropocene,
    SectionName::Socioeconomic,
    SectionName::Aquifer,
    SectionName::Economic,
    SectionName::Calibration,
    SectionName::Execution,
];

impl SectionName {
    /// Key of the section inside the serialized config.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Project => "project",
            SectionName::Basin => "basin",
            SectionName::Anthropocene => "anthropocene",
            SectionName::Socioeconomic => "socioeconomic",
            SectionName::Aquifer => "aquifer",
            SectionName::Economic => "economic",
            SectionName::Calibration => "calibration",
            SectionName::Execution => "execution",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "project" => Ok(Self::Project),
            "basin" => Ok(Self::Basin),
            "anthropocene" | "anthropocene-projection" => Ok(Self::Anthropocene),
            "socioeconomic" => Ok(Self::Socioeconomic),
            "aquifer" => Ok(Self::Aquifer),
            "economic" => Ok(Self::Economic),
            "calibration" => Ok(Self::Calibration),
            "execution" => Ok(Self::Execution),
            other => Err(format!(
                "unknown section `{other}`; valid sections: project, basin, anthropocene, socioeconomic, aquifer, economic, calibration, execution"
            )),
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every section of a simulation configuration, always fully populated.
///
/// The optional add-on sections (aquifer, economic, calibration) exist even
/// while the matching `project.include*` flag is off, so turning a flag on
/// mid-flow finds defaults already in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigModel {
    pub project: ProjectConfig,
    pub basin: BasinConfig,
    pub anthropocene: AnthropoceneConfig,
    pub socioeconomic: SocioeconomicConfig,
    pub aquifer: AquiferConfig,
    pub economic: EconomicConfig,
    pub calibration: CalibrationConfig,
    pub execution: ExecutionConfig,
}

impl Overlay for ConfigModel {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            project: self.project.overlay(source.record(SectionName::Project.as_str())),
            basin: self.basin.overlay(source.record(SectionName::Basin.as_str())),
            anthropocene: self
                .anthropocene
                .overlay(source.record(SectionName::Anthropocene.as_str())),
            socioeconomic: self
                .socioeconomic
                .overlay(source.record(SectionName::Socioeconomic.as_str())),
            aquifer: self.aquifer.overlay(source.record(SectionName::Aquifer.as_str())),
            economic: self.economic.overlay(source.record(SectionName::Economic.as_str())),
            calibration: self
                .calibration
                .overlay(source.record(SectionName::Calibration.as_str())),
            execution: self.execution.overlay(source.record(SectionName::Execution.as_str())),
        }
    }
}

impl ConfigModel {
    /// JSON view of one section, as a step panel would bind to it.
    pub fn section_value(&self, section: SectionName) -> serde_json::Result<Value> {
        match section {
            SectionName::Project => serde_json::to_value(&self.project),
            SectionName::Basin => serde_json::to_value(&self.basin),
            SectionName::Anthropocene => serde_json::to_value(&self.anthropocene),
            SectionName::Socioeconomic => serde_json::to_value(&self.socioeconomic),
            SectionName::Aquifer => serde_json::to_value(&self.aquifer),
            SectionName::Economic => serde_json::to_value(&self.economic),
            SectionName::Calibration => serde_json::to_value(&self.calibration),
            SectionName::Execution => serde_json::to_value(&self.execution),
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Overlays an arbitrarily partial seed onto `defaults`, field by field.
///
/// Absent or `null` fields take the default; a field whose seed value has the
/// wrong shape falls back to its default without affecting its siblings.
pub fn build_initial(defaults: &ConfigModel, seed: Option<&Value>) -> ConfigModel {
    defaults.overlay(FieldSource::new(seed, MergeMode::Seed))
}

/// Returns a new config with `update` merged into one section.
///
/// Values go through input coercion, so a numeric field given `"abc"` stores
/// `0`. `config` itself is never modified.
pub fn merge_section(config: &ConfigModel, section: SectionName, update: &Value) -> ConfigModel {
    let source = FieldSource::new(Some(update), MergeMode::Input);
    let mut next = config.clone();
    match section {
        SectionName::Project => next.project = config.project.overlay(source),
        SectionName::Basin => next.basin = config.basin.overlay(source),
        SectionName::Anthropocene => next.anthropocene = config.anthropocene.overlay(source),
        SectionName::Socioeconomic => next.socioeconomic = config.socioeconomic.overlay(source),
        SectionName::Aquifer => next.aquifer = config.aquifer.overlay(source),
        SectionName::Economic => next.economic = config.economic.overlay(source),
        SectionName::Calibration => next.calibration = config.calibration.overlay(source),
        SectionName::Execution => next.execution = config.execution.overlay(source),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_initial_without_seed_equals_defaults() {
        assert_eq!(build_initial(&ConfigModel::default(), None), ConfigModel::default());
    }

    #[test]
    fn build_initial_keeps_valid_siblings_of_a_broken_field() {
        let seed = json!({
            "basin": { "basinArea": "not a number", "meanSlope": 9, "landUse": [1, 2] },
            "project": "garbage",
        });
        let config = build_initial(&ConfigModel::default(), Some(&seed));
        assert_eq!(config.basin.basin_area, 1000.0);
        assert_eq!(config.basin.mean_slope, 9.0);
        assert_eq!(config.basin.land_use, Default::default());
        assert_eq!(config.project, Default::default());
    }

    #[test]
    fn merge_section_merges_nested_records_field_by_field() {
        let config = ConfigModel::default();
        let next = merge_section(
            &config,
            SectionName::Basin,
            &json!({ "landUse": { "urban": "35" } }),
        );
        assert_eq!(next.basin.land_use.urban, 35.0);
        assert_eq!(next.basin.land_use.forest, 30.0);
        assert_eq!(next.basin.basin_area, 1000.0);
        assert_eq!(config.basin.land_use.urban, 20.0);
    }

    #[test]
    fn section_names_parse_the_step_alias() {
        assert_eq!(
            SectionName::parse("anthropocene-projection"),
            Ok(SectionName::Anthropocene)
        );
        assert!(SectionName::parse("landing").is_err());
        for section in ALL_SECTIONS {
            assert_eq!(SectionName::parse(section.as_str()), Ok(section));
        }
    }

    #[test]
    fn section_value_uses_wire_field_names() {
        let value = ConfigModel::default()
            .section_value(SectionName::Aquifer)
            .expect("serialize aquifer");
        assert_eq!(value["nativeTDS"], json!(500.0));
        assert_eq!(value["flowThresholds"]["rechargeMinFlow"], json!(15.0));
    }
}
