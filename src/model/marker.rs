//! Current-marker and step identifier types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire form of the "everything is finished" marker.
pub const FINISH_SENTINEL: &str = "FINISH";

/// A step identifier declared on a descriptor, or the scalar carried by a
/// current marker.
///
/// Equality is strict: an integer never equals a text value, so a text marker
/// cannot match a numeric step and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepValue {
    Int(i64),
    Text(String),
}

impl StepValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StepValue::Int(n) => Some(*n),
            StepValue::Text(_) => None,
        }
    }
}

impl From<i64> for StepValue {
    fn from(n: i64) -> Self {
        StepValue::Int(n)
    }
}

impl From<&str> for StepValue {
    fn from(s: &str) -> Self {
        StepValue::Text(s.to_string())
    }
}

impl From<String> for StepValue {
    fn from(s: String) -> Self {
        StepValue::Text(s)
    }
}

impl fmt::Display for StepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepValue::Int(n) => write!(f, "{n}"),
            StepValue::Text(s) => f.write_str(s),
        }
    }
}

/// The externally controlled value identifying the active step.
///
/// An integer marker addresses steps by display position when descriptors
/// declare no `value`, and doubles as an identifier when they do. The
/// [`CurrentMarker::Finish`] sentinel marks every step finished and
/// serializes as the literal string `"FINISH"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentMarker {
    Step(StepValue),
    Finish,
}

impl CurrentMarker {
    /// Marker addressing a step by display position.
    pub fn index(position: usize) -> Self {
        CurrentMarker::Step(StepValue::Int(position as i64))
    }

    /// Marker addressing a step by declared identifier.
    pub fn value(value: impl Into<StepValue>) -> Self {
        CurrentMarker::Step(value.into())
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, CurrentMarker::Finish)
    }
}

impl From<StepValue> for CurrentMarker {
    fn from(value: StepValue) -> Self {
        CurrentMarker::Step(value)
    }
}

impl fmt::Display for CurrentMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentMarker::Step(value) => value.fmt(f),
            CurrentMarker::Finish => f.write_str(FINISH_SENTINEL),
        }
    }
}

impl Serialize for CurrentMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentMarker::Step(value) => value.serialize(serializer),
            CurrentMarker::Finish => serializer.serialize_str(FINISH_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for CurrentMarker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The sentinel is case-sensitive: only the exact literal is Finish.
        Ok(match StepValue::deserialize(deserializer)? {
            StepValue::Text(s) if s == FINISH_SENTINEL => CurrentMarker::Finish,
            value => CurrentMarker::Step(value),
        })
    }
}
