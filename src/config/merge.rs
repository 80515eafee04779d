use super::typed_fields::{parse_choice_list, Choice};
use crate::shared::coerce::{
    finite_or_zero, is_month, parse_csv_values, parse_float_or_zero, parse_int_or_zero,
    parse_month_list, truncate_in_range, truncate_or_zero,
};
use serde_json::{Map, Value};

/// How raw values are interpreted while overlaying them onto a typed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Restoring a previously saved or caller-supplied object. A value with
    /// the wrong shape keeps the existing field.
    Seed,
    /// Writing form input. Numeric fields coerce anything unparsable to zero.
    Input,
}

/// Read-only view over one JSON object level. Missing keys and `null` both
/// mean "unset"; a non-object source behaves as an empty one.
#[derive(Debug, Clone, Copy)]
pub struct FieldSource<'a> {
    fields: Option<&'a Map<String, Value>>,
    mode: MergeMode,
}

impl<'a> FieldSource<'a> {
    pub fn new(value: Option<&'a Value>, mode: MergeMode) -> Self {
        Self {
            fields: value.and_then(Value::as_object),
            mode,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(key))
            .filter(|value| !value.is_null())
    }

    pub fn record(&self, key: &str) -> FieldSource<'a> {
        Self::new(self.get(key), self.mode)
    }

    pub fn float(&self, key: &str, current: f64) -> f64 {
        let Some(value) = self.get(key) else {
            return current;
        };
        match (value, self.mode) {
            (Value::Number(number), _) => number.as_f64().map(finite_or_zero).unwrap_or(current),
            (Value::String(raw), MergeMode::Input) => parse_float_or_zero(raw),
            (Value::String(raw), MergeMode::Seed) => match raw.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => parsed,
                _ => current,
            },
            (_, MergeMode::Input) => 0.0,
            (_, MergeMode::Seed) => current,
        }
    }

    pub fn int(&self, key: &str, current: i64) -> i64 {
        let Some(value) = self.get(key) else {
            return current;
        };
        match (value, self.mode) {
            (Value::Number(number), MergeMode::Input) => truncate_or_zero(number),
            (Value::Number(number), MergeMode::Seed) => {
                truncate_in_range(number).unwrap_or(current)
            }
            (Value::String(raw), MergeMode::Input) => parse_int_or_zero(raw),
            (Value::String(raw), MergeMode::Seed) => raw.trim().parse::<i64>().unwrap_or(current),
            (_, MergeMode::Input) => 0,
            (_, MergeMode::Seed) => current,
        }
    }

    pub fn text(&self, key: &str, current: &str) -> String {
        match (self.get(key), self.mode) {
            (Some(Value::String(raw)), _) => raw.clone(),
            (Some(Value::Number(number)), MergeMode::Input) => number.to_string(),
            (Some(Value::Bool(flag)), MergeMode::Input) => flag.to_string(),
            _ => current.to_string(),
        }
    }

    pub fn flag(&self, key: &str, current: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(raw)) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => current,
            },
            _ => current,
        }
    }

    pub fn choice<T: Choice>(&self, key: &str, current: T) -> T {
        match self.get(key) {
            Some(Value::String(raw)) => T::parse(raw).unwrap_or(current),
            _ => current,
        }
    }

    pub fn choices<T: Choice + PartialEq>(&self, key: &str, current: &[T]) -> Vec<T> {
        let parsed = match self.get(key) {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| entry.as_str().ok_or_else(String::new))
                .collect::<Result<Vec<&str>, String>>()
                .and_then(|entries| parse_choice_list::<T, _, _>(entries)),
            Some(Value::String(raw)) => parse_choice_list::<T, _, _>(parse_csv_values(raw)),
            _ => return current.to_vec(),
        };
        parsed.unwrap_or_else(|_| current.to_vec())
    }

    pub fn months(&self, key: &str, current: &[u8]) -> Vec<u8> {
        let parsed = match self.get(key) {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| {
                    entry
                        .as_u64()
                        .and_then(|month| u8::try_from(month).ok())
                        .filter(|month| is_month(*month))
                })
                .collect::<Option<Vec<u8>>>(),
            Some(Value::String(raw)) => parse_month_list(raw),
            _ => None,
        };
        parsed.unwrap_or_else(|| current.to_vec())
    }
}

/// Produces a copy of `self` with every field present in `source` replaced.
/// Nested records recurse, so a sparse source never blanks sibling fields.
pub trait Overlay: Sized {
    fn overlay(&self, source: FieldSource<'_>) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::typed_fields::ExportFormat;
    use serde_json::json;

    fn input(value: &Value) -> FieldSource<'_> {
        FieldSource::new(Some(value), MergeMode::Input)
    }

    fn seed(value: &Value) -> FieldSource<'_> {
        FieldSource::new(Some(value), MergeMode::Seed)
    }

    #[test]
    fn missing_and_null_keys_keep_current_value() {
        let value = json!({ "area": null });
        assert_eq!(input(&value).float("area", 12.0), 12.0);
        assert_eq!(input(&value).float("other", 3.0), 3.0);
        assert_eq!(seed(&value).text("name", "kept"), "kept");
    }

    #[test]
    fn input_mode_coerces_unparsable_numbers_to_zero() {
        let value = json!({ "area": "abc", "count": true, "list": [1] });
        assert_eq!(input(&value).float("area", 5.0), 0.0);
        assert_eq!(input(&value).int("count", 5), 0);
        assert_eq!(input(&value).float("list", 5.0), 0.0);
    }

    #[test]
    fn seed_mode_falls_back_on_malformed_values() {
        let value = json!({ "area": "abc", "count": "12", "flag": 1, "nested": "oops", "huge": 1e30 });
        assert_eq!(seed(&value).float("area", 5.0), 5.0);
        assert_eq!(seed(&value).int("count", 5), 12);
        assert_eq!(seed(&value).int("huge", 5), 5);
        assert_eq!(input(&value).int("huge", 5), 0);
        assert!(seed(&value).flag("flag", true));
        assert_eq!(seed(&value).record("nested").float("x", 9.0), 9.0);
    }

    #[test]
    fn text_fields_accept_scalars_only_from_input() {
        let value = json!({ "name": 42 });
        assert_eq!(input(&value).text("name", "old"), "42");
        assert_eq!(seed(&value).text("name", "old"), "old");
    }

    #[test]
    fn choice_lists_accept_arrays_or_csv_and_reject_unknown_entries() {
        let current = [ExportFormat::Csv];
        let value = json!({ "a": ["JSON", "Excel"], "b": "csv, json", "c": ["CSV", "PDF"], "d": [1] });
        assert_eq!(
            input(&value).choices("a", &current),
            vec![ExportFormat::Json, ExportFormat::Excel]
        );
        assert_eq!(
            input(&value).choices("b", &current),
            vec![ExportFormat::Csv, ExportFormat::Json]
        );
        assert_eq!(input(&value).choices("c", &current), current.to_vec());
        assert_eq!(input(&value).choices("d", &current), current.to_vec());
    }

    #[test]
    fn months_accept_arrays_or_csv_within_calendar_range() {
        let current = [6u8, 7];
        let value = json!({ "a": [1, 2, 12], "b": "3,4", "c": [0, 5], "d": "x" });
        assert_eq!(input(&value).months("a", &current), vec![1, 2, 12]);
        assert_eq!(input(&value).months("b", &current), vec![3, 4]);
        assert_eq!(input(&value).months("c", &current), current.to_vec());
        assert_eq!(input(&value).months("d", &current), current.to_vec());
    }
}
