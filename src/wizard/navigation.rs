use crate::config::SectionName;
use serde_json::{Map, Value};

pub const SCRIPT_ENV_VAR: &str = "MHIA_WIZARD_SCRIPT";

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    Advance,
    Retreat,
    JumpTo(usize),
    Update { section: SectionName, patch: Value },
    Submit,
}

impl WizardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardAction::Advance => "advance",
            WizardAction::Retreat => "retreat",
            WizardAction::JumpTo(_) => "jump_to",
            WizardAction::Update { .. } => "update",
            WizardAction::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    None,
    Moved { from: usize, to: usize },
    Updated(SectionName),
    SubmitRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardTransition {
    pub effect: WizardEffect,
    pub feedback: Option<String>,
}

impl WizardTransition {
    pub(crate) fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: WizardEffect::None,
            feedback,
        }
    }

    pub(crate) fn with_effect(effect: WizardEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }
}

/// Builds a one-field section patch from `section.field[.field]` and a raw
/// value. The value stays a string so it is coerced exactly like form input.
pub fn patch_from_path(path: &str, raw_value: &str) -> Result<(SectionName, Value), String> {
    let mut segments = path.split('.').map(str::trim);
    let section = SectionName::parse(segments.next().unwrap_or_default())?;
    let fields: Vec<&str> = segments.collect();
    if fields.is_empty() || fields.iter().any(|field| field.is_empty()) {
        return Err(format!(
            "field path `{path}` must look like <section>.<field>[.<field>]"
        ));
    }
    let mut patch = Value::String(raw_value.to_string());
    for field in fields.iter().rev() {
        let mut record = Map::new();
        record.insert((*field).to_string(), patch);
        patch = Value::Object(record);
    }
    Ok((section, patch))
}

/// Parses a `;`-separated action script:
/// `next`, `back`, `jump:<order>`, `set:<section>.<field>=<value>`, `submit`.
pub fn parse_scripted_actions(raw: &str) -> Result<Vec<WizardAction>, String> {
    let mut actions = Vec::new();
    for token in raw.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (keyword, argument) = match token.split_once(':') {
            Some((keyword, argument)) => (keyword.trim().to_ascii_lowercase(), Some(argument)),
            None => (token.to_ascii_lowercase(), None),
        };
        let action = match (keyword.as_str(), argument) {
            ("next" | "advance", None) => WizardAction::Advance,
            ("back" | "retreat" | "prev", None) => WizardAction::Retreat,
            ("submit", None) => WizardAction::Submit,
            ("jump", Some(order)) => {
                let order = order
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("invalid step order `{}` in `{token}`", order.trim()))?;
                WizardAction::JumpTo(order)
            }
            ("set", Some(assignment)) => {
                let (path, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| format!("`{token}` must use set:<section>.<field>=<value>"))?;
                let (section, patch) = patch_from_path(path.trim(), value.trim())?;
                WizardAction::Update { section, patch }
            }
            _ => {
                return Err(format!(
                    "invalid {SCRIPT_ENV_VAR} token `{token}`; valid tokens: next,back,jump:<order>,set:<section>.<field>=<value>,submit"
                ));
            }
        };
        actions.push(action);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_from_path_nests_fields() {
        let (section, patch) = patch_from_path("economic.capex.land.area", "12").expect("path");
        assert_eq!(section, SectionName::Economic);
        assert_eq!(patch, json!({ "capex": { "land": { "area": "12" } } }));
    }

    #[test]
    fn patch_from_path_requires_a_field() {
        assert!(patch_from_path("basin", "1").is_err());
        assert!(patch_from_path("basin..area", "1").is_err());
        assert!(patch_from_path("nowhere.area", "1").is_err());
    }

    #[test]
    fn set_values_keep_commas_and_case() {
        let actions =
            parse_scripted_actions("set:execution.outputs.exportFormats=CSV,Excel").expect("parse");
        assert_eq!(
            actions,
            vec![WizardAction::Update {
                section: SectionName::Execution,
                patch: json!({ "outputs": { "exportFormats": "CSV,Excel" } }),
            }]
        );
    }
}
