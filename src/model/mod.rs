//! Core data model for step sequences

mod descriptor;
mod marker;
mod status;

pub use descriptor::{DiscoveredStep, StepDescriptor};
pub use marker::{CurrentMarker, StepValue, FINISH_SENTINEL};
pub use status::{SequenceDirection, StepSeparator, StepStatus, StepsLayout, StepsTheme};
