//! Lenient text-to-number conversions used for form input.
//!
//! A non-numeric entry collapses to zero instead of surfacing an error, so a
//! half-typed value never breaks the form. Only the leading numeric prefix is
//! considered (`"12.5 km"` reads as `12.5`).

pub fn parse_float_or_zero(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim_start(), true);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

pub fn parse_int_or_zero(raw: &str) -> i64 {
    numeric_prefix(raw.trim_start(), false)
        .parse::<i64>()
        .unwrap_or(0)
}

/// Finite float from a JSON number, or zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Integer from a JSON number: integral values pass through, fractional ones
/// truncate toward zero. `None` when the value does not fit an `i64`.
pub fn truncate_in_range(value: &serde_json::Number) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    match value.as_f64() {
        Some(float) if float.is_finite() && float.abs() < i64::MAX as f64 => {
            Some(float.trunc() as i64)
        }
        _ => None,
    }
}

pub fn truncate_or_zero(value: &serde_json::Number) -> i64 {
    truncate_in_range(value).unwrap_or(0)
}

pub fn parse_csv_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Calendar months from `"1,2,12"`; `None` when any entry is not 1..=12.
pub fn parse_month_list(raw: &str) -> Option<Vec<u8>> {
    parse_csv_values(raw)
        .iter()
        .map(|entry| entry.parse::<u8>().ok().filter(|month| is_month(*month)))
        .collect()
}

pub fn is_month(value: u8) -> bool {
    (1..=12).contains(&value)
}

fn numeric_prefix(raw: &str, allow_fraction: bool) -> &str {
    let bytes = raw.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if allow_fraction {
        if end < bytes.len() && bytes[end] == b'.' {
            let mut frac_end = end + 1;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if has_digits || frac_end > end + 1 {
                has_digits = true;
                end = frac_end;
            }
        }
        if has_digits && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }
    }

    if has_digits {
        &raw[..end]
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_parse_collapses_garbage_to_zero() {
        assert_eq!(parse_float_or_zero("abc"), 0.0);
        assert_eq!(parse_float_or_zero(""), 0.0);
        assert_eq!(parse_float_or_zero("-"), 0.0);
        assert_eq!(parse_float_or_zero("."), 0.0);
        assert_eq!(parse_float_or_zero("inf"), 0.0);
        assert_eq!(parse_float_or_zero("NaN"), 0.0);
        assert_eq!(parse_float_or_zero("1e999"), 0.0);
    }

    #[test]
    fn float_parse_reads_leading_prefix() {
        assert_eq!(parse_float_or_zero("  12.5 km"), 12.5);
        assert_eq!(parse_float_or_zero("-0.003"), -0.003);
        assert_eq!(parse_float_or_zero(".5"), 0.5);
        assert_eq!(parse_float_or_zero("7."), 7.0);
        assert_eq!(parse_float_or_zero("2e3x"), 2000.0);
        assert_eq!(parse_float_or_zero("2e"), 2.0);
        assert_eq!(parse_float_or_zero("1,234"), 1.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert!(parse_float_or_zero("-0").is_sign_positive());
        assert!(finite_or_zero(-0.0).is_sign_positive());
    }

    #[test]
    fn int_parse_stops_at_fraction() {
        assert_eq!(parse_int_or_zero("42.9"), 42);
        assert_eq!(parse_int_or_zero("-17 people"), -17);
        assert_eq!(parse_int_or_zero("abc"), 0);
        assert_eq!(parse_int_or_zero("99999999999999999999"), 0);
    }

    #[test]
    fn json_numbers_truncate_to_integers() {
        let fractional = serde_json::Number::from_f64(12.7).expect("finite");
        assert_eq!(truncate_or_zero(&fractional), 12);
        assert_eq!(truncate_or_zero(&serde_json::Number::from(-3)), -3);
        let huge = serde_json::Number::from_f64(1e30).expect("finite");
        assert_eq!(truncate_in_range(&huge), None);
        assert_eq!(truncate_or_zero(&huge), 0);
    }

    #[test]
    fn month_lists_reject_out_of_range_entries() {
        assert_eq!(parse_month_list("1, 2,12"), Some(vec![1, 2, 12]));
        assert_eq!(parse_month_list("0,5"), None);
        assert_eq!(parse_month_list("13"), None);
        assert_eq!(parse_month_list("may"), None);
        assert_eq!(parse_month_list(""), Some(Vec::new()));
    }
}
