// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two options that a slider switch chooses between. Identity of an option is its
//! [`OptionValue`], the `name` is only a display label.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::SwitchError;

/// The identity of an option. A string `"1"` and the number `1` are different values.
///
/// Serialized without a tag: JSON numbers (`1`, `0.5`) become [`OptionValue::Num`]
/// and strings become [`OptionValue::Str`]. Numbers compare by numeric value, so `1.0`
/// and `1` are the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Num(Number),
    Str(String),
}

impl OptionValue {
    /// An empty string is treated as "no value" by the controlled (external) value
    /// check. Every number, including `0`, is a real value.
    #[must_use]
    pub fn is_empty(&self) -> bool { matches!(self, OptionValue::Str(it) if it.is_empty()) }

    /// `None` for `NaN` and infinities, which have no JSON form.
    #[must_use]
    pub fn from_f64(it: f64) -> Option<Self> {
        Number::from_f64(it).map(|number| OptionValue::Num(normalize(number)))
    }
}

/// Integral floats collapse to integers so equality follows numeric value.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn normalize(number: Number) -> Number {
    match number.as_f64() {
        Some(float)
            if !number.is_i64()
                && !number.is_u64()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float < i64::MAX as f64 =>
        {
            Number::from(float as i64)
        }
        _ => number,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptionValue {
    Num(Number),
    Str(String),
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let it = match RawOptionValue::deserialize(deserializer)? {
            RawOptionValue::Num(number) => OptionValue::Num(normalize(number)),
            RawOptionValue::Str(text) => OptionValue::Str(text),
        };
        Ok(it)
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            OptionValue::Num(it) => write!(f, "{it}"),
            OptionValue::Str(it) => write!(f, "{it}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(it: i64) -> Self { OptionValue::Num(Number::from(it)) }
}

impl From<i32> for OptionValue {
    fn from(it: i32) -> Self { OptionValue::Num(Number::from(it)) }
}

impl From<&str> for OptionValue {
    fn from(it: &str) -> Self { OptionValue::Str(it.to_string()) }
}

impl From<String> for OptionValue {
    fn from(it: String) -> Self { OptionValue::Str(it) }
}

/// One of the two choices of a slider switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchOption {
    /// Display label.
    pub name: String,
    /// Identity.
    pub value: OptionValue,
    /// Initial selection hint, only read when the switch is created.
    #[serde(default)]
    pub selected: bool,
}

impl SwitchOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            selected: false,
        }
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Which of the two options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionIndex {
    First,
    Second,
}

impl OptionIndex {
    #[must_use]
    pub fn as_usize(self) -> usize {
        match self {
            OptionIndex::First => 0,
            OptionIndex::Second => 1,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            OptionIndex::First => OptionIndex::Second,
            OptionIndex::Second => OptionIndex::First,
        }
    }
}

impl TryFrom<usize> for OptionIndex {
    type Error = SwitchError;

    fn try_from(index: usize) -> std::result::Result<Self, Self::Error> {
        match index {
            0 => Ok(OptionIndex::First),
            1 => Ok(OptionIndex::Second),
            _ => Err(SwitchError::OptionIndexOutOfRange { index }),
        }
    }
}

/// Exactly two options. The type makes "fewer than two options" unrepresentable; use
/// [`SwitchOptions::try_from`] at the edge where a list of unknown length comes in
/// (eg: JSON props).
///
/// ```
/// use r3bl_slider_switch::{OptionIndex, SwitchOption, SwitchOptions};
///
/// let options = SwitchOptions::new(SwitchOption::new("On", 1), SwitchOption::new("Off", 0));
/// assert_eq!(options.get(OptionIndex::Second).name, "Off");
///
/// let too_few = SwitchOptions::try_from(vec![SwitchOption::new("On", 1)]);
/// assert!(too_few.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SwitchOption>", into = "Vec<SwitchOption>")]
pub struct SwitchOptions {
    items: [SwitchOption; 2],
}

impl SwitchOptions {
    #[must_use]
    pub fn new(first: SwitchOption, second: SwitchOption) -> Self {
        Self {
            items: [first, second],
        }
    }

    #[must_use]
    pub fn get(&self, index: OptionIndex) -> &SwitchOption { &self.items[index.as_usize()] }

    #[must_use]
    pub fn first(&self) -> &SwitchOption { self.get(OptionIndex::First) }

    #[must_use]
    pub fn second(&self) -> &SwitchOption { self.get(OptionIndex::Second) }

    /// Finds the option whose value equals `value`. When both options share the same
    /// value, the first one wins.
    #[must_use]
    pub fn position_of(&self, value: &OptionValue) -> Option<OptionIndex> {
        if &self.first().value == value {
            Some(OptionIndex::First)
        } else if &self.second().value == value {
            Some(OptionIndex::Second)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwitchOption> { self.items.iter() }
}

impl TryFrom<Vec<SwitchOption>> for SwitchOptions {
    type Error = SwitchError;

    fn try_from(options: Vec<SwitchOption>) -> std::result::Result<Self, Self::Error> {
        let count = options.len();
        let items: [SwitchOption; 2] = options
            .try_into()
            .map_err(|_| SwitchError::InvalidOptionCount { count })?;
        Ok(Self { items })
    }
}

impl From<SwitchOptions> for Vec<SwitchOption> {
    fn from(options: SwitchOptions) -> Self { options.items.into() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn on_off() -> SwitchOptions {
        SwitchOptions::new(SwitchOption::new("On", 1), SwitchOption::new("Off", 0))
    }

    #[test_case(0 => Ok(OptionIndex::First))]
    #[test_case(1 => Ok(OptionIndex::Second))]
    #[test_case(2 => Err(SwitchError::OptionIndexOutOfRange { index: 2 }))]
    fn test_option_index_try_from(index: usize) -> std::result::Result<OptionIndex, SwitchError> {
        OptionIndex::try_from(index)
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(3)]
    fn test_switch_options_rejects_wrong_count(count: usize) {
        let options: Vec<SwitchOption> =
            (0..count).map(|it| SwitchOption::new("x", i64::try_from(it).unwrap())).collect();
        assert_eq2!(
            SwitchOptions::try_from(options),
            Err(SwitchError::InvalidOptionCount { count })
        );
    }

    #[test]
    fn test_position_of_matches_by_value_not_name() {
        let options = on_off();
        assert_eq2!(options.position_of(&1.into()), Some(OptionIndex::First));
        assert_eq2!(options.position_of(&0.into()), Some(OptionIndex::Second));
        assert_eq2!(options.position_of(&"On".into()), None);
        assert_eq2!(options.position_of(&"1".into()), None);
    }

    #[test]
    fn test_option_value_is_empty() {
        assert!(OptionValue::from("").is_empty());
        assert!(!OptionValue::from(0).is_empty());
        assert!(!OptionValue::from("off").is_empty());
    }

    #[test]
    fn test_switch_options_from_json() {
        let json = r#"[{"name":"On","value":1},{"name":"Off","value":"off","selected":true}]"#;
        let options: SwitchOptions = serde_json::from_str(json).unwrap();
        assert_eq2!(options.first().value, OptionValue::from(1));
        assert_eq2!(options.second().value, OptionValue::Str("off".to_string()));
        assert!(!options.first().selected);
        assert!(options.second().selected);
    }

    #[test]
    fn test_switch_options_from_json_with_one_option_fails() {
        let json = r#"[{"name":"On","value":1}]"#;
        let result: std::result::Result<SwitchOptions, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_number_value() {
        let json = r#"[{"name":"Half","value":0.5},{"name":"Full","value":1.0}]"#;
        let options: SwitchOptions = serde_json::from_str(json).unwrap();
        let half = OptionValue::from_f64(0.5).unwrap();
        assert_eq2!(options.first().value, half);
        assert_eq2!(options.first().value.to_string(), "0.5");
        assert_eq2!(options.second().value, OptionValue::from(1));
        assert_eq2!(options.position_of(&half), Some(OptionIndex::First));
        assert_eq2!(options.position_of(&1.into()), Some(OptionIndex::Second));
        assert_eq2!(serde_json::to_string(&half).unwrap(), "0.5");
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq2!(OptionValue::from_f64(f64::NAN), None);
        assert_eq2!(OptionValue::from_f64(f64::INFINITY), None);
        assert_eq2!(OptionValue::from_f64(2.0), Some(OptionValue::from(2)));
    }
}
