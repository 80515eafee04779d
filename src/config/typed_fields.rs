use serde::{Serialize, Serializer};

/// A closed set of named options stored as its display string.
pub trait Choice: Copy + Sized + 'static {
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                let options: Vec<&str> = Self::all().iter().map(|option| option.as_str()).collect();
                format!("{} must be one of: {}", Self::KIND, options.join(", "))
            })
    }
}

/// Parses every entry, dropping duplicates; fails on the first unknown entry.
pub fn parse_choice_list<T, I, S>(entries: I) -> Result<Vec<T>, String>
where
    T: Choice + PartialEq,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values: Vec<T> = Vec::new();
    for entry in entries {
        let parsed = T::parse(entry.as_ref())?;
        if !values.contains(&parsed) {
            values.push(parsed);
        }
    }
    Ok(values)
}

macro_rules! define_choice {
    ($name:ident, $kind:literal, [$($variant:ident => $text:literal),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

define_choice!(TimeStep, "time step", [Daily => "daily", Monthly => "monthly"]);
define_choice!(
    ConfigurationMode,
    "configuration mode",
    [Simplified => "simplified", Detailed => "detailed"]
);
define_choice!(
    ClimateScenario,
    "climate scenario",
    [Rcp26 => "RCP2.6", Rcp45 => "RCP4.5", Rcp85 => "RCP8.5"]
);
define_choice!(
    AquiferType,
    "aquifer type",
    [Asr => "ASR", Mar => "MAR", BankFiltration => "bank_filtration"]
);
define_choice!(
    OperationMode,
    "operation mode",
    [Seasonal => "seasonal", Threshold => "threshold"]
);
define_choice!(
    OptimizationAlgorithm,
    "optimization algorithm",
    [
        DifferentialEvolution => "differential_evolution",
        NelderMead => "nelder_mead",
        Bfgs => "bfgs",
    ]
);
define_choice!(
    CalibrationMetric,
    "calibration metric",
    [Nse => "NSE", Rmse => "RMSE", Pbias => "PBIAS", Kge => "KGE"]
);
define_choice!(
    ExportFormat,
    "export format",
    [Csv => "CSV", Json => "JSON", Excel => "Excel"]
);
define_choice!(
    ChartType,
    "chart type",
    [
        Timeseries => "timeseries",
        WaterBalance => "water_balance",
        Scenarios => "scenarios",
        Economics => "economics",
    ]
);
