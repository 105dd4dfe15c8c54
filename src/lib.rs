//! Stepline - status and ordering resolution for step progress indicators
//!
//! Given a list of step descriptors and a "current" marker, derive each
//! step's display status (`default`, `process`, `finish`) and its
//! sequence-adjusted index. Rendering, layout and theming visuals stay with
//! the embedding component; this crate owns the pure derivation:
//!
//! ```
//! use stepline::{CurrentMarker, StepDescriptor, StepResolver, StepStatus, StepsConfig};
//!
//! let config = StepsConfig::with_options(vec![
//!     StepDescriptor::titled("Plan"),
//!     StepDescriptor::titled("Build"),
//!     StepDescriptor::titled("Ship"),
//! ]);
//! let resolver = StepResolver::new(config);
//! let steps = resolver.resolve(&CurrentMarker::index(1));
//! assert_eq!(steps[0].status, StepStatus::Finish);
//! assert_eq!(steps[1].status, StepStatus::Process);
//! assert_eq!(steps[2].status, StepStatus::Default);
//! ```

pub mod config;
pub mod diagnostics;
pub mod model;
pub mod resolve;
pub mod state;

pub use config::{ConfigError, StepsConfig};
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use model::{
    CurrentMarker, DiscoveredStep, SequenceDirection, StepDescriptor, StepSeparator, StepStatus,
    StepValue, StepsLayout, StepsTheme, FINISH_SENTINEL,
};
pub use resolve::{
    classify, resolve_options, Classification, ResolvedStep, StepResolver, ValueIndex,
};
pub use state::StepsState;
