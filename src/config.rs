//! Container configuration for a steps sequence

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{SequenceDirection, StepDescriptor, StepSeparator, StepsLayout, StepsTheme};

/// Configuration of the whole steps container.
///
/// `options` and `sequence` drive status resolution; the remaining fields are
/// presentation metadata the renderer consumes as-is. When `options` is empty
/// the resolver falls back to discovered child descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepsConfig {
    pub theme: StepsTheme,
    pub layout: StepsLayout,
    pub sequence: SequenceDirection,
    pub separator: StepSeparator,
    pub options: Vec<StepDescriptor>,
}

/// Errors raised while loading a steps configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid steps configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StepsConfig {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_options(options: Vec<StepDescriptor>) -> Self {
        StepsConfig {
            options,
            ..StepsConfig::default()
        }
    }

    pub fn with_sequence(mut self, sequence: SequenceDirection) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_theme(mut self, theme: StepsTheme) -> Self {
        self.theme = theme;
        self
    }
}
