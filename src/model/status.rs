//! Status, direction and presentation enums shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display status of a single step.
///
/// `Default` doubles as the "no explicit override" sentinel on a
/// [`super::StepDescriptor`]: any other variant set there bypasses
/// classification entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Not yet reached
    #[default]
    Default,
    /// Currently active
    Process,
    /// Completed
    Finish,
    /// Failed; only ever produced by an explicit override
    Error,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Default => "default",
            StepStatus::Process => "process",
            StepStatus::Finish => "finish",
            StepStatus::Error => "error",
        }
    }

    /// Whether this value, set on a descriptor, overrides classification.
    pub fn is_override(self) -> bool {
        self != StepStatus::Default
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which steps are displayed and evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceDirection {
    /// Declaration order
    #[default]
    Positive,
    /// Reversed declaration order
    Reverse,
}

impl SequenceDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SequenceDirection::Positive => "positive",
            SequenceDirection::Reverse => "reverse",
        }
    }

    /// Whether a step at `display_pos` lies on the "already finished" side of
    /// `anchor`. Positive sequences finish steps before the anchor, reverse
    /// sequences finish steps after it.
    pub(crate) fn is_completed(self, display_pos: i64, anchor: i64) -> bool {
        match self {
            SequenceDirection::Positive => display_pos < anchor,
            SequenceDirection::Reverse => display_pos > anchor,
        }
    }

    /// Map a position in display order back to the declaration-order index.
    ///
    /// `len` is the total number of steps; callers only invoke this for
    /// positions of existing steps.
    pub fn source_position(self, display_pos: usize, len: usize) -> usize {
        match self {
            SequenceDirection::Positive => display_pos,
            SequenceDirection::Reverse => len - display_pos - 1,
        }
    }
}

impl fmt::Display for SequenceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual theme requested for the whole sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepsTheme {
    #[default]
    Default,
    Dot,
}

impl StepsTheme {
    /// Theme every sequence falls back to once any step declares an icon.
    pub const FALLBACK: StepsTheme = StepsTheme::Default;

    pub fn as_str(self) -> &'static str {
        match self {
            StepsTheme::Default => "default",
            StepsTheme::Dot => "dot",
        }
    }
}

/// Flow direction of the rendered sequence. Pass-through presentation
/// metadata; no classification logic attaches to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepsLayout {
    #[default]
    Horizontal,
    Vertical,
}

/// Separator style drawn between steps. Pass-through presentation metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepSeparator {
    #[default]
    Line,
    Dashed,
    Arrow,
}
