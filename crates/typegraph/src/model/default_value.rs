// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default values of properties and parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal default value.
///
/// The producer chooses between `Integer` and `Float`; the codec never
/// reclassifies a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl DefaultValue {
    /// Classify an untyped numeric default: integral values become `Integer`.
    ///
    /// Values outside the `i64` range stay `Float`.
    pub fn from_number(value: f64) -> Self {
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < I64_BOUND {
            Self::Integer(value as i64)
        } else {
            Self::Float(value)
        }
    }

    /// True for values the wire format does not persist (empty strings).
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_classification() {
        assert_eq!(DefaultValue::from_number(3.0), DefaultValue::Integer(3));
        assert_eq!(DefaultValue::from_number(-42.0), DefaultValue::Integer(-42));
        assert_eq!(DefaultValue::from_number(2.5), DefaultValue::Float(2.5));
        assert_eq!(DefaultValue::from_number(1e21), DefaultValue::Float(1e21));
        assert!(matches!(
            DefaultValue::from_number(f64::NAN),
            DefaultValue::Float(v) if v.is_nan()
        ));
    }

    #[test]
    fn test_blank_only_for_empty_string() {
        assert!(DefaultValue::String(String::new()).is_blank());
        assert!(!DefaultValue::String("x".into()).is_blank());
        assert!(!DefaultValue::Boolean(false).is_blank());
        assert!(!DefaultValue::Integer(0).is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(DefaultValue::Boolean(true).to_string(), "true");
        assert_eq!(DefaultValue::Integer(8080).to_string(), "8080");
        assert_eq!(DefaultValue::String("info".into()).to_string(), "\"info\"");
    }
}
