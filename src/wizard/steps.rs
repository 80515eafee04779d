use crate::config::{ConfigModel, SectionName};

/// Static metadata for one wizard step.
#[derive(Clone, Copy)]
pub struct StepDescriptor {
    pub id: SectionName,
    pub order: usize,
    pub label: &'static str,
    pub description: &'static str,
    visible: fn(&ConfigModel) -> bool,
    complete: fn(&ConfigModel) -> bool,
}

impl StepDescriptor {
    /// Re-evaluated on every call; never cached across mutations.
    pub fn is_visible(&self, config: &ConfigModel) -> bool {
        (self.visible)(config)
    }

    /// Drives the indicator checkmark only. Never blocks navigation.
    pub fn is_complete(&self, config: &ConfigModel) -> bool {
        (self.complete)(config)
    }
}

impl std::fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("id", &self.id)
            .field("order", &self.order)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for StepDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.order == other.order
    }
}

impl Eq for StepDescriptor {}

fn always(_: &ConfigModel) -> bool {
    true
}

fn aquifer_included(config: &ConfigModel) -> bool {
    config.project.include_aquifer
}

fn economic_included(config: &ConfigModel) -> bool {
    config.project.include_economic_analysis
}

fn calibration_included(config: &ConfigModel) -> bool {
    config.project.include_calibration
}

fn project_complete(config: &ConfigModel) -> bool {
    !config.project.simulation_name.is_empty()
}

fn basin_complete(config: &ConfigModel) -> bool {
    config.basin.basin_area > 0.0
}

fn socioeconomic_complete(config: &ConfigModel) -> bool {
    config.socioeconomic.current_population > 0
}

// The optional steps report complete while excluded, so a flow that skips
// them can still reach the final step with every visible indicator checked.
fn aquifer_complete(config: &ConfigModel) -> bool {
    !config.project.include_aquifer || config.aquifer.storage_capacity > 0.0
}

fn economic_complete(config: &ConfigModel) -> bool {
    !config.project.include_economic_analysis || config.economic.capex.land.area > 0.0
}

fn calibration_complete(config: &ConfigModel) -> bool {
    !config.project.include_calibration
        || !config.calibration.observed_data.calibration_start.is_empty()
}

pub const STEP_COUNT: usize = 8;

pub static STANDARD_STEPS: [StepDescriptor; STEP_COUNT] = [
    StepDescriptor {
        id: SectionName::Project,
        order: 0,
        label: "Project Setup",
        description: "Basic simulation configuration",
        visible: always,
        complete: project_complete,
    },
    StepDescriptor {
        id: SectionName::Basin,
        order: 1,
        label: "Basin Characteristics",
        description: "Physical basin and climate data",
        visible: always,
        complete: basin_complete,
    },
    StepDescriptor {
        id: SectionName::Anthropocene,
        order: 2,
        label: "Future Projections",
        description: "Climate change and land use scenarios",
        visible: always,
        complete: always,
    },
    StepDescriptor {
        id: SectionName::Socioeconomic,
        order: 3,
        label: "Social Dynamics",
        description: "Population and water demand parameters",
        visible: always,
        complete: socioeconomic_complete,
    },
    StepDescriptor {
        id: SectionName::Aquifer,
        order: 4,
        label: "Artificial Aquifer",
        description: "ASR/MAR system design (optional)",
        visible: aquifer_included,
        complete: aquifer_complete,
    },
    StepDescriptor {
        id: SectionName::Economic,
        order: 5,
        label: "Economic Analysis",
        description: "Financial feasibility assessment (optional)",
        visible: economic_included,
        complete: economic_complete,
    },
    StepDescriptor {
        id: SectionName::Calibration,
        order: 6,
        label: "Calibration",
        description: "Parameter optimization (optional)",
        visible: calibration_included,
        complete: calibration_complete,
    },
    StepDescriptor {
        id: SectionName::Execution,
        order: 7,
        label: "Run Configuration",
        description: "Execution settings and scenario analysis",
        visible: always,
        complete: always,
    },
];

/// What a step indicator needs to render one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStatus {
    pub order: usize,
    pub id: SectionName,
    pub label: &'static str,
    pub visible: bool,
    pub complete: bool,
    pub active: bool,
}

/// The ordered, immutable step list of one wizard session.
#[derive(Debug, Clone, Copy)]
pub struct StepRegistry {
    steps: &'static [StepDescriptor],
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl StepRegistry {
    pub fn standard() -> Self {
        Self {
            steps: &STANDARD_STEPS,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_order(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn get(&self, order: usize) -> Option<&'static StepDescriptor> {
        self.steps.get(order)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static StepDescriptor> {
        self.steps.iter()
    }

    pub fn descriptor(&self, id: SectionName) -> Option<&'static StepDescriptor> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn visible_steps(&self, config: &ConfigModel) -> Vec<&'static StepDescriptor> {
        self.steps
            .iter()
            .filter(|step| step.is_visible(config))
            .collect()
    }

    pub fn step_statuses(&self, config: &ConfigModel, current_order: usize) -> Vec<StepStatus> {
        self.steps
            .iter()
            .map(|step| StepStatus {
                order: step.order,
                id: step.id,
                label: step.label,
                visible: step.is_visible(config),
                complete: step.is_complete(config),
                active: step.order == current_order,
            })
            .collect()
    }

    /// First visible order strictly after `from`.
    pub fn next_visible(&self, config: &ConfigModel, from: usize) -> Option<usize> {
        self.steps
            .iter()
            .skip(from.saturating_add(1))
            .find(|step| step.is_visible(config))
            .map(|step| step.order)
    }

    /// Last visible order strictly before `from`.
    pub fn prev_visible(&self, config: &ConfigModel, from: usize) -> Option<usize> {
        self.steps
            .iter()
            .take(from.min(self.steps.len()))
            .rev()
            .find(|step| step.is_visible(config))
            .map(|step| step.order)
    }
}
