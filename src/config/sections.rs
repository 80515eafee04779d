use super::merge::{FieldSource, Overlay};
use super::typed_fields::{
    AquiferType, CalibrationMetric, ChartType, ClimateScenario, ConfigurationMode, ExportFormat,
    OperationMode, OptimizationAlgorithm, TimeStep,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub simulation_name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub time_step: TimeStep,
    pub output_directory: String,
    pub configuration_mode: ConfigurationMode,
    pub include_aquifer: bool,
    pub include_economic_analysis: bool,
    pub include_calibration: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            simulation_name: "MHIA_Simulation".to_string(),
            description: String::new(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-12-31".to_string(),
            time_step: TimeStep::Daily,
            output_directory: "./outputs".to_string(),
            configuration_mode: ConfigurationMode::Simplified,
            include_aquifer: false,
            include_economic_analysis: false,
            include_calibration: false,
        }
    }
}

impl Overlay for ProjectConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            simulation_name: source.text("simulationName", &self.simulation_name),
            description: source.text("description", &self.description),
            start_date: source.text("startDate", &self.start_date),
            end_date: source.text("endDate", &self.end_date),
            time_step: source.choice("timeStep", self.time_step),
            output_directory: source.text("outputDirectory", &self.output_directory),
            configuration_mode: source.choice("configurationMode", self.configuration_mode),
            include_aquifer: source.flag("includeAquifer", self.include_aquifer),
            include_economic_analysis: source
                .flag("includeEconomicAnalysis", self.include_economic_analysis),
            include_calibration: source.flag("includeCalibration", self.include_calibration),
        }
    }
}

/// Land use shares of the basin, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandUse {
    pub forest: f64,
    pub agricultural: f64,
    pub urban: f64,
    pub water: f64,
}

impl Default for LandUse {
    fn default() -> Self {
        Self {
            forest: 30.0,
            agricultural: 40.0,
            urban: 20.0,
            water: 10.0,
        }
    }
}

impl Overlay for LandUse {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            forest: source.float("forest", self.forest),
            agricultural: source.float("agricultural", self.agricultural),
            urban: source.float("urban", self.urban),
            water: source.float("water", self.water),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasinConfig {
    pub basin_area: f64,
    pub mean_elevation: f64,
    pub mean_slope: f64,
    pub soil_depth: f64,
    pub soil_porosity: f64,
    pub hydraulic_conductivity: f64,
    pub land_use: LandUse,
    pub annual_precipitation: f64,
    pub mean_temperature: f64,
    pub mean_flow: f64,
}

impl Default for BasinConfig {
    fn default() -> Self {
        Self {
            basin_area: 1000.0,
            mean_elevation: 500.0,
            mean_slope: 5.0,
            soil_depth: 2.0,
            soil_porosity: 0.4,
            hydraulic_conductivity: 0.5,
            land_use: LandUse::default(),
            annual_precipitation: 1200.0,
            mean_temperature: 18.0,
            mean_flow: 20.0,
        }
    }
}

impl Overlay for BasinConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            basin_area: source.float("basinArea", self.basin_area),
            mean_elevation: source.float("meanElevation", self.mean_elevation),
            mean_slope: source.float("meanSlope", self.mean_slope),
            soil_depth: source.float("soilDepth", self.soil_depth),
            soil_porosity: source.float("soilPorosity", self.soil_porosity),
            hydraulic_conductivity: source
                .float("hydraulicConductivity", self.hydraulic_conductivity),
            land_use: self.land_use.overlay(source.record("landUse")),
            annual_precipitation: source.float("annualPrecipitation", self.annual_precipitation),
            mean_temperature: source.float("meanTemperature", self.mean_temperature),
            mean_flow: source.float("meanFlow", self.mean_flow),
        }
    }
}

/// Annual rates of land use change, as fractions per year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandUseChanges {
    pub forest_change_rate: f64,
    pub urban_change_rate: f64,
    pub agricultural_change_rate: f64,
    pub water_change_rate: f64,
}

impl Default for LandUseChanges {
    fn default() -> Self {
        Self {
            forest_change_rate: -0.005,
            urban_change_rate: 0.007,
            agricultural_change_rate: -0.002,
            water_change_rate: 0.0,
        }
    }
}

impl Overlay for LandUseChanges {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            forest_change_rate: source.float("forestChangeRate", self.forest_change_rate),
            urban_change_rate: source.float("urbanChangeRate", self.urban_change_rate),
            agricultural_change_rate: source
                .float("agriculturalChangeRate", self.agricultural_change_rate),
            water_change_rate: source.float("waterChangeRate", self.water_change_rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnthropoceneConfig {
    pub climate_scenario: ClimateScenario,
    pub temperature_increase_rate: f64,
    pub precipitation_change_rate: f64,
    pub extreme_intensity_factor: f64,
    pub temperature_threshold: f64,
    pub land_use_changes: LandUseChanges,
    pub forest_threshold: f64,
    pub urban_threshold: f64,
    pub population_growth_rate: f64,
    pub gdp_growth_rate: f64,
    pub water_demand_growth_rate: f64,
}

impl Default for AnthropoceneConfig {
    fn default() -> Self {
        Self {
            climate_scenario: ClimateScenario::Rcp45,
            temperature_increase_rate: 0.03,
            precipitation_change_rate: -0.003,
            extreme_intensity_factor: 1.2,
            temperature_threshold: 2.0,
            land_use_changes: LandUseChanges::default(),
            forest_threshold: 15.0,
            urban_threshold: 40.0,
            population_growth_rate: 1.5,
            gdp_growth_rate: 2.5,
            water_demand_growth_rate: 0.5,
        }
    }
}

impl Overlay for AnthropoceneConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            climate_scenario: source.choice("climateScenario", self.climate_scenario),
            temperature_increase_rate: source
                .float("temperatureIncreaseRate", self.temperature_increase_rate),
            precipitation_change_rate: source
                .float("precipitationChangeRate", self.precipitation_change_rate),
            extreme_intensity_factor: source
                .float("extremeIntensityFactor", self.extreme_intensity_factor),
            temperature_threshold: source.float("temperatureThreshold", self.temperature_threshold),
            land_use_changes: self
                .land_use_changes
                .overlay(source.record("landUseChanges")),
            forest_threshold: source.float("forestThreshold", self.forest_threshold),
            urban_threshold: source.float("urbanThreshold", self.urban_threshold),
            population_growth_rate: source
                .float("populationGrowthRate", self.population_growth_rate),
            gdp_growth_rate: source.float("gdpGrowthRate", self.gdp_growth_rate),
            water_demand_growth_rate: source
                .float("waterDemandGrowthRate", self.water_demand_growth_rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioeconomicConfig {
    pub current_population: i64,
    pub population_growth_rate: f64,
    pub per_capita_demand: f64,
    pub agricultural_demand: f64,
    pub industrial_demand: f64,
    pub gdp_per_capita: f64,
    pub water_price: f64,
    pub governance_index: f64,
    pub initial_risk_perception: f64,
    pub initial_memory: f64,
    pub memory_decay_rate: f64,
    pub adaptation_rate: f64,
}

impl Default for SocioeconomicConfig {
    fn default() -> Self {
        Self {
            current_population: 100_000,
            population_growth_rate: 1.5,
            per_capita_demand: 150.0,
            agricultural_demand: 12_000.0,
            industrial_demand: 7_500.0,
            gdp_per_capita: 10_000.0,
            water_price: 0.5,
            governance_index: 0.6,
            initial_risk_perception: 0.3,
            initial_memory: 0.2,
            memory_decay_rate: 0.9,
            adaptation_rate: 0.1,
        }
    }
}

impl Overlay for SocioeconomicConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            current_population: source.int("currentPopulation", self.current_population),
            population_growth_rate: source
                .float("populationGrowthRate", self.population_growth_rate),
            per_capita_demand: source.float("perCapitaDemand", self.per_capita_demand),
            agricultural_demand: source.float("agriculturalDemand", self.agricultural_demand),
            industrial_demand: source.float("industrialDemand", self.industrial_demand),
            gdp_per_capita: source.float("gdpPerCapita", self.gdp_per_capita),
            water_price: source.float("waterPrice", self.water_price),
            governance_index: source.float("governanceIndex", self.governance_index),
            initial_risk_perception: source
                .float("initialRiskPerception", self.initial_risk_perception),
            initial_memory: source.float("initialMemory", self.initial_memory),
            memory_decay_rate: source.float("memoryDecayRate", self.memory_decay_rate),
            adaptation_rate: source.float("adaptationRate", self.adaptation_rate),
        }
    }
}

/// River flow thresholds (m3/s) that switch recharge and recovery in
/// threshold operation mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowThresholds {
    pub recharge_min_flow: f64,
    pub recovery_max_flow: f64,
}

impl Default for FlowThresholds {
    fn default() -> Self {
        Self {
            recharge_min_flow: 15.0,
            recovery_max_flow: 10.0,
        }
    }
}

impl Overlay for FlowThresholds {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            recharge_min_flow: source.float("rechargeMinFlow", self.recharge_min_flow),
            recovery_max_flow: source.float("recoveryMaxFlow", self.recovery_max_flow),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AquiferConfig {
    pub aquifer_type: AquiferType,
    pub storage_capacity: f64,
    pub max_recharge_rate: f64,
    pub max_recovery_rate: f64,
    pub recovery_efficiency: f64,
    pub hydraulic_conductivity: f64,
    pub porosity: f64,
    pub aquifer_thickness: f64,
    pub aquifer_area: f64,
    pub initial_water_level: f64,
    #[serde(rename = "nativeTDS")]
    pub native_tds: f64,
    #[serde(rename = "rechargeTDS")]
    pub recharge_tds: f64,
    #[serde(rename = "maxAcceptableTDS")]
    pub max_acceptable_tds: f64,
    pub operation_mode: OperationMode,
    pub recharge_months: Vec<u8>,
    pub recovery_months: Vec<u8>,
    pub flow_thresholds: FlowThresholds,
}

impl Default for AquiferConfig {
    fn default() -> Self {
        Self {
            aquifer_type: AquiferType::Asr,
            storage_capacity: 500_000.0,
            max_recharge_rate: 5_000.0,
            max_recovery_rate: 4_000.0,
            recovery_efficiency: 80.0,
            hydraulic_conductivity: 5.0,
            porosity: 0.2,
            aquifer_thickness: 50.0,
            aquifer_area: 10_000_000.0,
            initial_water_level: 10.0,
            native_tds: 500.0,
            recharge_tds: 250.0,
            max_acceptable_tds: 1_000.0,
            operation_mode: OperationMode::Seasonal,
            recharge_months: vec![1, 2, 3, 4, 12],
            recovery_months: vec![6, 7, 8, 9],
            flow_thresholds: FlowThresholds::default(),
        }
    }
}

impl Overlay for AquiferConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            aquifer_type: source.choice("aquiferType", self.aquifer_type),
            storage_capacity: source.float("storageCapacity", self.storage_capacity),
            max_recharge_rate: source.float("maxRechargeRate", self.max_recharge_rate),
            max_recovery_rate: source.float("maxRecoveryRate", self.max_recovery_rate),
            recovery_efficiency: source.float("recoveryEfficiency", self.recovery_efficiency),
            hydraulic_conductivity: source
                .float("hydraulicConductivity", self.hydraulic_conductivity),
            porosity: source.float("porosity", self.porosity),
            aquifer_thickness: source.float("aquiferThickness", self.aquifer_thickness),
            aquifer_area: source.float("aquiferArea", self.aquifer_area),
            initial_water_level: source.float("initialWaterLevel", self.initial_water_level),
            native_tds: source.float("nativeTDS", self.native_tds),
            recharge_tds: source.float("rechargeTDS", self.recharge_tds),
            max_acceptable_tds: source.float("maxAcceptableTDS", self.max_acceptable_tds),
            operation_mode: source.choice("operationMode", self.operation_mode),
            recharge_months: source.months("rechargeMonths", &self.recharge_months),
            recovery_months: source.months("recoveryMonths", &self.recovery_months),
            flow_thresholds: self
                .flow_thresholds
                .overlay(source.record("flowThresholds")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandCost {
    pub area: f64,
    pub unit_cost: f64,
}

impl Default for LandCost {
    fn default() -> Self {
        Self {
            area: 10.0,
            unit_cost: 50_000.0,
        }
    }
}

impl Overlay for LandCost {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            area: source.float("area", self.area),
            unit_cost: source.float("unitCost", self.unit_cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureCost {
    pub intake_capacity: f64,
    pub intake_unit_cost: f64,
    pub infiltration_area: f64,
    pub infiltration_unit_cost: f64,
    pub recovery_capacity: f64,
    pub recovery_unit_cost: f64,
    pub treatment_capacity: f64,
    pub treatment_unit_cost: f64,
}

impl Default for InfrastructureCost {
    fn default() -> Self {
        Self {
            intake_capacity: 5_000.0,
            intake_unit_cost: 1_000.0,
            infiltration_area: 5_000.0,
            infiltration_unit_cost: 200.0,
            recovery_capacity: 4_000.0,
            recovery_unit_cost: 1_200.0,
            treatment_capacity: 4_000.0,
            treatment_unit_cost: 800.0,
        }
    }
}

impl Overlay for InfrastructureCost {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            intake_capacity: source.float("intakeCapacity", self.intake_capacity),
            intake_unit_cost: source.float("intakeUnitCost", self.intake_unit_cost),
            infiltration_area: source.float("infiltrationArea", self.infiltration_area),
            infiltration_unit_cost: source
                .float("infiltrationUnitCost", self.infiltration_unit_cost),
            recovery_capacity: source.float("recoveryCapacity", self.recovery_capacity),
            recovery_unit_cost: source.float("recoveryUnitCost", self.recovery_unit_cost),
            treatment_capacity: source.float("treatmentCapacity", self.treatment_capacity),
            treatment_unit_cost: source.float("treatmentUnitCost", self.treatment_unit_cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalCosts {
    pub land: LandCost,
    pub infrastructure: InfrastructureCost,
    pub studies: f64,
    pub contingency: f64,
}

impl Default for CapitalCosts {
    fn default() -> Self {
        Self {
            land: LandCost::default(),
            infrastructure: InfrastructureCost::default(),
            studies: 500_000.0,
            contingency: 15.0,
        }
    }
}

impl Overlay for CapitalCosts {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            land: self.land.overlay(source.record("land")),
            infrastructure: self.infrastructure.overlay(source.record("infrastructure")),
            studies: source.float("studies", self.studies),
            contingency: source.float("contingency", self.contingency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingCosts {
    pub fixed_annual_cost: f64,
    pub variable_unit_cost: f64,
    pub energy_cost: f64,
    pub labor_cost: f64,
    pub materials_percent: f64,
}

impl Default for OperatingCosts {
    fn default() -> Self {
        Self {
            fixed_annual_cost: 200_000.0,
            variable_unit_cost: 0.1,
            energy_cost: 0.12,
            labor_cost: 150_000.0,
            materials_percent: 2.0,
        }
    }
}

impl Overlay for OperatingCosts {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            fixed_annual_cost: source.float("fixedAnnualCost", self.fixed_annual_cost),
            variable_unit_cost: source.float("variableUnitCost", self.variable_unit_cost),
            energy_cost: source.float("energyCost", self.energy_cost),
            labor_cost: source.float("laborCost", self.labor_cost),
            materials_percent: source.float("materialsPercent", self.materials_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTerms {
    pub discount_rate: f64,
    pub project_life: i64,
    pub inflation_rate: f64,
    pub debt_ratio: f64,
    pub interest_rate: f64,
}

impl Default for FinancialTerms {
    fn default() -> Self {
        Self {
            discount_rate: 6.0,
            project_life: 30,
            inflation_rate: 2.5,
            debt_ratio: 70.0,
            interest_rate: 5.0,
        }
    }
}

impl Overlay for FinancialTerms {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            discount_rate: source.float("discountRate", self.discount_rate),
            project_life: source.int("projectLife", self.project_life),
            inflation_rate: source.float("inflationRate", self.inflation_rate),
            debt_ratio: source.float("debtRatio", self.debt_ratio),
            interest_rate: source.float("interestRate", self.interest_rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    pub water_supply_value: f64,
    pub avoided_costs: f64,
    pub environmental_benefits: f64,
    pub flood_protection_value: f64,
}

impl Default for Benefits {
    fn default() -> Self {
        Self {
            water_supply_value: 1.5,
            avoided_costs: 100_000.0,
            environmental_benefits: 50_000.0,
            flood_protection_value: 25_000.0,
        }
    }
}

impl Overlay for Benefits {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            water_supply_value: source.float("waterSupplyValue", self.water_supply_value),
            avoided_costs: source.float("avoidedCosts", self.avoided_costs),
            environmental_benefits: source
                .float("environmentalBenefits", self.environmental_benefits),
            flood_protection_value: source
                .float("floodProtectionValue", self.flood_protection_value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicConfig {
    pub capex: CapitalCosts,
    pub opex: OperatingCosts,
    pub financial: FinancialTerms,
    pub benefits: Benefits,
}

impl Overlay for EconomicConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            capex: self.capex.overlay(source.record("capex")),
            opex: self.opex.overlay(source.record("opex")),
            financial: self.financial.overlay(source.record("financial")),
            benefits: self.benefits.overlay(source.record("benefits")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedPeriods {
    pub calibration_start: String,
    pub calibration_end: String,
    pub validation_start: String,
    pub validation_end: String,
}

impl Default for ObservedPeriods {
    fn default() -> Self {
        Self {
            calibration_start: "2020-01-01".to_string(),
            calibration_end: "2022-12-31".to_string(),
            validation_start: "2023-01-01".to_string(),
            validation_end: "2023-12-31".to_string(),
        }
    }
}

impl Overlay for ObservedPeriods {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            calibration_start: source.text("calibrationStart", &self.calibration_start),
            calibration_end: source.text("calibrationEnd", &self.calibration_end),
            validation_start: source.text("validationStart", &self.validation_start),
            validation_end: source.text("validationEnd", &self.validation_end),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Overlay for ParameterRange {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            min: source.float("min", self.min),
            max: source.float("max", self.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalRanges {
    pub soil_hydraulic_conductivity: ParameterRange,
    pub soil_porosity: ParameterRange,
    pub runoff_partition: ParameterRange,
    pub baseflow_recession: ParameterRange,
}

impl Default for PhysicalRanges {
    fn default() -> Self {
        Self {
            soil_hydraulic_conductivity: ParameterRange::new(0.1, 10.0),
            soil_porosity: ParameterRange::new(0.2, 0.6),
            runoff_partition: ParameterRange::new(0.1, 0.9),
            baseflow_recession: ParameterRange::new(0.85, 0.99),
        }
    }
}

impl Overlay for PhysicalRanges {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            soil_hydraulic_conductivity: self
                .soil_hydraulic_conductivity
                .overlay(source.record("soilHydraulicConductivity")),
            soil_porosity: self.soil_porosity.overlay(source.record("soilPorosity")),
            runoff_partition: self
                .runoff_partition
                .overlay(source.record("runoffPartition")),
            baseflow_recession: self
                .baseflow_recession
                .overlay(source.record("baseflowRecession")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioRanges {
    pub memory_decay: ParameterRange,
    pub memory_impact: ParameterRange,
    pub adaptation_rate: ParameterRange,
    pub conflict_threshold: ParameterRange,
}

impl Default for SocioRanges {
    fn default() -> Self {
        Self {
            memory_decay: ParameterRange::new(0.8, 0.99),
            memory_impact: ParameterRange::new(0.5, 5.0),
            adaptation_rate: ParameterRange::new(0.01, 0.5),
            conflict_threshold: ParameterRange::new(0.5, 2.0),
        }
    }
}

impl Overlay for SocioRanges {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            memory_decay: self.memory_decay.overlay(source.record("memoryDecay")),
            memory_impact: self.memory_impact.overlay(source.record("memoryImpact")),
            adaptation_rate: self.adaptation_rate.overlay(source.record("adaptationRate")),
            conflict_threshold: self
                .conflict_threshold
                .overlay(source.record("conflictThreshold")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterRanges {
    pub physical: PhysicalRanges,
    pub socio: SocioRanges,
}

impl Overlay for ParameterRanges {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            physical: self.physical.overlay(source.record("physical")),
            socio: self.socio.overlay(source.record("socio")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSettings {
    pub algorithm: OptimizationAlgorithm,
    pub max_iterations: i64,
    pub tolerance: f64,
    pub parallel_processes: i64,
    pub random_seed: i64,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            algorithm: OptimizationAlgorithm::DifferentialEvolution,
            max_iterations: 1_000,
            tolerance: 0.001,
            parallel_processes: 4,
            random_seed: 42,
        }
    }
}

impl Overlay for OptimizationSettings {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            algorithm: source.choice("algorithm", self.algorithm),
            max_iterations: source.int("maxIterations", self.max_iterations),
            tolerance: source.float("tolerance", self.tolerance),
            parallel_processes: source.int("parallelProcesses", self.parallel_processes),
            random_seed: source.int("randomSeed", self.random_seed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationConfig {
    pub observed_data: ObservedPeriods,
    pub parameter_ranges: ParameterRanges,
    pub optimization: OptimizationSettings,
    pub metrics: Vec<CalibrationMetric>,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            observed_data: ObservedPeriods::default(),
            parameter_ranges: ParameterRanges::default(),
            optimization: OptimizationSettings::default(),
            metrics: vec![
                CalibrationMetric::Nse,
                CalibrationMetric::Rmse,
                CalibrationMetric::Pbias,
            ],
        }
    }
}

impl Overlay for CalibrationConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            observed_data: self.observed_data.overlay(source.record("observedData")),
            parameter_ranges: self
                .parameter_ranges
                .overlay(source.record("parameterRanges")),
            optimization: self.optimization.overlay(source.record("optimization")),
            metrics: source.choices("metrics", &self.metrics),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelComponents {
    pub run_anthropocene: bool,
    pub run_physical: bool,
    pub run_sociohydrological: bool,
    pub run_artificial_aquifer: bool,
    pub run_economic_analysis: bool,
    pub apply_anthropocene_to_physical: bool,
    pub use_physical_for_socio: bool,
    pub use_integrated_for_aquifer: bool,
}

impl Default for ModelComponents {
    fn default() -> Self {
        Self {
            run_anthropocene: true,
            run_physical: true,
            run_sociohydrological: true,
            run_artificial_aquifer: false,
            run_economic_analysis: false,
            apply_anthropocene_to_physical: true,
            use_physical_for_socio: true,
            use_integrated_for_aquifer: true,
        }
    }
}

impl Overlay for ModelComponents {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            run_anthropocene: source.flag("runAnthropocene", self.run_anthropocene),
            run_physical: source.flag("runPhysical", self.run_physical),
            run_sociohydrological: source.flag("runSociohydrological", self.run_sociohydrological),
            run_artificial_aquifer: source
                .flag("runArtificialAquifer", self.run_artificial_aquifer),
            run_economic_analysis: source.flag("runEconomicAnalysis", self.run_economic_analysis),
            apply_anthropocene_to_physical: source.flag(
                "applyAnthropoceneToPhysical",
                self.apply_anthropocene_to_physical,
            ),
            use_physical_for_socio: source.flag("usePhysicalForSocio", self.use_physical_for_socio),
            use_integrated_for_aquifer: source
                .flag("useIntegratedForAquifer", self.use_integrated_for_aquifer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    pub generate_charts: bool,
    pub save_detailed_results: bool,
    pub save_indicators_only: bool,
    pub export_formats: Vec<ExportFormat>,
    pub chart_types: Vec<ChartType>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            generate_charts: true,
            save_detailed_results: true,
            save_indicators_only: false,
            export_formats: vec![ExportFormat::Csv, ExportFormat::Json],
            chart_types: vec![
                ChartType::Timeseries,
                ChartType::WaterBalance,
                ChartType::Scenarios,
            ],
        }
    }
}

impl Overlay for OutputSettings {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            generate_charts: source.flag("generateCharts", self.generate_charts),
            save_detailed_results: source.flag("saveDetailedResults", self.save_detailed_results),
            save_indicators_only: source.flag("saveIndicatorsOnly", self.save_indicators_only),
            export_formats: source.choices("exportFormats", &self.export_formats),
            chart_types: source.choices("chartTypes", &self.chart_types),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionConfig {
    pub model_components: ModelComponents,
    pub outputs: OutputSettings,
}

impl Overlay for ExecutionConfig {
    fn overlay(&self, source: FieldSource<'_>) -> Self {
        Self {
            model_components: self
                .model_components
                .overlay(source.record("modelComponents")),
            outputs: self.outputs.overlay(source.record("outputs")),
        }
    }
}
