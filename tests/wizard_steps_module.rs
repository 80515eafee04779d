use mhia_wizard::config::{merge_section, ConfigModel, SectionName};
use mhia_wizard::wizard::{StepRegistry, STANDARD_STEPS};
use serde_json::json;

fn ids(config: &ConfigModel) -> Vec<SectionName> {
    StepRegistry::standard()
        .visible_steps(config)
        .into_iter()
        .map(|step| step.id)
        .collect()
}

fn with_project(update: serde_json::Value) -> ConfigModel {
    merge_section(&ConfigModel::default(), SectionName::Project, &update)
}

#[test]
fn standard_registry_orders_all_eight_sections() {
    let ids: Vec<SectionName> = STANDARD_STEPS.iter().map(|step| step.id).collect();
    assert_eq!(
        ids,
        vec![
            SectionName::Project,
            SectionName::Basin,
            SectionName::Anthropocene,
            SectionName::Socioeconomic,
            SectionName::Aquifer,
            SectionName::Economic,
            SectionName::Calibration,
            SectionName::Execution,
        ]
    );
    assert_eq!(STANDARD_STEPS[7].label, "Run Configuration");
}

#[test]
fn optional_steps_follow_project_flags() {
    assert_eq!(
        ids(&ConfigModel::default()),
        vec![
            SectionName::Project,
            SectionName::Basin,
            SectionName::Anthropocene,
            SectionName::Socioeconomic,
            SectionName::Execution,
        ]
    );
    let config = with_project(json!({ "includeEconomicAnalysis": true, "includeCalibration": "true" }));
    assert_eq!(
        ids(&config),
        vec![
            SectionName::Project,
            SectionName::Basin,
            SectionName::Anthropocene,
            SectionName::Socioeconomic,
            SectionName::Economic,
            SectionName::Calibration,
            SectionName::Execution,
        ]
    );
}

#[test]
fn completion_rules_match_step_table() {
    let registry = StepRegistry::standard();
    let complete = |config: &ConfigModel, id: SectionName| {
        registry
            .descriptor(id)
            .expect("descriptor")
            .is_complete(config)
    };
    let defaults = ConfigModel::default();
    for step in STANDARD_STEPS.iter() {
        assert!(step.is_complete(&defaults), "{} incomplete", step.id);
    }

    let blank_name = with_project(json!({ "simulationName": "" }));
    assert!(!complete(&blank_name, SectionName::Project));

    let no_area = merge_section(&defaults, SectionName::Basin, &json!({ "basinArea": -5 }));
    assert!(!complete(&no_area, SectionName::Basin));

    let no_people = merge_section(
        &defaults,
        SectionName::Socioeconomic,
        &json!({ "currentPopulation": "none" }),
    );
    assert!(!complete(&no_people, SectionName::Socioeconomic));

    let empty_aquifer = merge_section(&defaults, SectionName::Aquifer, &json!({ "storageCapacity": 0 }));
    assert!(complete(&empty_aquifer, SectionName::Aquifer));
    let included = merge_section(&empty_aquifer, SectionName::Project, &json!({ "includeAquifer": true }));
    assert!(!complete(&included, SectionName::Aquifer));

    let no_start = merge_section(
        &with_project(json!({ "includeCalibration": true })),
        SectionName::Calibration,
        &json!({ "observedData": { "calibrationStart": "" } }),
    );
    assert!(!complete(&no_start, SectionName::Calibration));

    assert!(complete(&no_start, SectionName::Anthropocene));
    assert!(complete(&no_start, SectionName::Execution));
}

#[test]
fn statuses_mark_active_and_hidden_steps() {
    let statuses = StepRegistry::standard().step_statuses(&ConfigModel::default(), 3);
    assert_eq!(statuses.len(), 8);
    assert!(statuses[3].active);
    assert_eq!(statuses.iter().filter(|status| status.active).count(), 1);
    assert!(!statuses[4].visible);
    assert!(statuses[4].complete);
}
