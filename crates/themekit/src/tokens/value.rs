//! Raw style values

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::{Display, Formatter};

/// A raw style value: either a number (`4`, `1.5`) or a string (`"#FF0000"`,
/// `"40em"`, `"uppercase"`).
///
/// Numbers keep their JSON representation, so integer tokens compile to
/// integers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(Number),
    Text(String),
}

impl RawValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(_) => None,
        }
    }

    /// Key used to order list buckets.
    ///
    /// Numbers yield `(n, "")`. Strings yield a key when they are a number
    /// optionally followed by a unit (`"40em"` -> `(40.0, "em")`). The unit is
    /// the trailing run of letters or `%`, so exponents (`"1e3"`) stay part of
    /// the number. Anything else has no key.
    pub fn numeric_key(&self) -> Option<(f64, &str)> {
        match self {
            Self::Number(n) => n.as_f64().map(|v| (v, "")),
            Self::Text(s) => {
                let s = s.trim();
                let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
                let unit = &s[number.len()..];
                number
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| (v, unit))
            }
        }
    }
}

impl Display for RawValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => Display::fmt(n, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value).into())
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value).into())
    }
}

impl From<f64> for RawValue {
    /// Non-finite floats have no JSON representation and become `0`.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Number(0.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_serialize_without_fraction() {
        assert_eq!(serde_json::to_string(&RawValue::from(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&RawValue::from(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&RawValue::from("#fff")).unwrap(),
            "\"#fff\""
        );
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: Vec<RawValue> = serde_json::from_str(r#"[8, "8px", 0.25]"#).unwrap();
        assert_eq!(values[0], RawValue::from(8));
        assert_eq!(values[1], RawValue::from("8px"));
        assert_eq!(values[2].as_f64(), Some(0.25));
    }

    #[test]
    fn numeric_key_accepts_plain_numbers_and_units() {
        assert_eq!(RawValue::from(16).numeric_key(), Some((16.0, "")));
        assert_eq!(RawValue::from("40em").numeric_key(), Some((40.0, "em")));
        assert_eq!(RawValue::from("1.5rem").numeric_key(), Some((1.5, "rem")));
        assert_eq!(RawValue::from("50%").numeric_key(), Some((50.0, "%")));
        assert_eq!(RawValue::from("12").numeric_key(), Some((12.0, "")));
    }

    #[test]
    fn numeric_key_keeps_exponents_in_the_number() {
        assert_eq!(RawValue::from("1e3").numeric_key(), Some((1000.0, "")));
        assert_eq!(RawValue::from("2.5e-1rem").numeric_key(), Some((0.25, "rem")));
        assert_eq!(RawValue::from("1e").numeric_key(), Some((1.0, "e")));
    }

    #[test]
    fn text_accessors() {
        assert_eq!(RawValue::from("40em").as_str(), Some("40em"));
        assert_eq!(RawValue::from(40).as_str(), None);
        assert_eq!(RawValue::from("40em").as_f64(), None);
    }

    #[test]
    fn numeric_key_rejects_other_strings() {
        assert_eq!(RawValue::from("auto").numeric_key(), None);
        assert_eq!(RawValue::from("1px solid").numeric_key(), None);
        assert_eq!(RawValue::from("").numeric_key(), None);
        assert_eq!(RawValue::from("calc(1px)").numeric_key(), None);
    }
}
