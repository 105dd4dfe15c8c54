//! Step status resolution pipeline
//!
//! [`StepResolver`] owns a configuration snapshot and answers, for a given
//! current marker, what the renderer should draw: each step's display status
//! and sequence-adjusted index, plus the effective theme for the whole set.

mod classify;
mod index_map;
mod options;

pub use classify::{classify, Classification};
pub use index_map::ValueIndex;
pub use options::resolve_options;

use std::rc::Rc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::StepsConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::model::{CurrentMarker, DiscoveredStep, StepDescriptor, StepStatus, StepsTheme};
use crate::state::StepsState;

/// One step in display order, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStep {
    /// Sequence-adjusted index: the step's position in declaration order,
    /// stable under reversal
    pub step_index: usize,
    pub status: StepStatus,
    pub descriptor: StepDescriptor,
}

// Serialized flat for renderers: the resolved status replaces the
// descriptor's override sentinel, the display fields ride alongside.
impl Serialize for ResolvedStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("step_index", &self.step_index)?;
        map.serialize_entry("status", &self.status)?;
        if let Some(value) = &self.descriptor.value {
            map.serialize_entry("value", value)?;
        }
        if let Some(icon) = &self.descriptor.icon {
            map.serialize_entry("icon", icon)?;
        }
        if let Some(title) = &self.descriptor.title {
            map.serialize_entry("title", title)?;
        }
        if let Some(content) = &self.descriptor.content {
            map.serialize_entry("content", content)?;
        }
        if let Some(extra) = &self.descriptor.extra {
            map.serialize_entry("extra", extra)?;
        }
        map.end()
    }
}

/// Resolves step statuses against a configuration snapshot.
///
/// The display-order option list and the value index always derive from the
/// same snapshot: every configuration change recomputes both before the next
/// pass can observe either, so a pass never sees them disagree.
pub struct StepResolver {
    config: StepsConfig,
    discovered: Vec<DiscoveredStep>,
    options: Vec<StepDescriptor>,
    values: ValueIndex,
    sink: Rc<dyn DiagnosticSink>,
}

impl StepResolver {
    pub fn new(config: StepsConfig) -> Self {
        Self::with_sink(config, Rc::new(TracingSink))
    }

    /// Resolver reporting diagnostics through a caller-supplied sink.
    pub fn with_sink(config: StepsConfig, sink: Rc<dyn DiagnosticSink>) -> Self {
        let mut resolver = StepResolver {
            config,
            discovered: Vec::new(),
            options: Vec::new(),
            values: ValueIndex::default(),
            sink,
        };
        resolver.rebuild();
        resolver
    }

    /// Supply descriptors discovered from child nodes. Used only when the
    /// explicit configuration list is empty.
    pub fn with_discovered(mut self, discovered: Vec<DiscoveredStep>) -> Self {
        self.set_discovered(discovered);
        self
    }

    /// Swap in a new configuration snapshot.
    pub fn set_config(&mut self, config: StepsConfig) {
        self.config = config;
        self.rebuild();
    }

    pub fn set_discovered(&mut self, discovered: Vec<DiscoveredStep>) {
        self.discovered = discovered;
        self.rebuild();
    }

    pub fn config(&self) -> &StepsConfig {
        &self.config
    }

    /// Descriptors in display order for the current snapshot.
    pub fn options(&self) -> &[StepDescriptor] {
        &self.options
    }

    /// Effective theme for the whole sequence: any step declaring an icon
    /// demotes the requested theme to the fallback, no matter which step.
    pub fn theme(&self) -> StepsTheme {
        if self.options.iter().any(|step| step.icon.is_some()) {
            StepsTheme::FALLBACK
        } else {
            self.config.theme
        }
    }

    /// Classify every step against `current`.
    ///
    /// An identifier marker that matches no declared value warns once per
    /// pass and leaves the affected steps at `default`; the rest of the pass
    /// is unaffected.
    pub fn resolve(&self, current: &CurrentMarker) -> Vec<ResolvedStep> {
        let len = self.options.len();
        let mut warned = false;
        let mut resolved = Vec::with_capacity(len);
        for (display_pos, step) in self.options.iter().enumerate() {
            let outcome = classify(step, display_pos, current, self.config.sequence, &self.values);
            if outcome.marker_unmatched && !warned {
                warned = true;
                self.sink
                    .warn("current marker does not match any declared step value");
            }
            resolved.push(ResolvedStep {
                step_index: self.config.sequence.source_position(display_pos, len),
                status: outcome.status,
                descriptor: step.clone(),
            });
        }
        resolved
    }

    /// Convenience over [`StepResolver::resolve`] reading the marker from a
    /// shared state handle.
    pub fn resolve_with_state(&self, state: &StepsState) -> Vec<ResolvedStep> {
        self.resolve(&state.current())
    }

    fn rebuild(&mut self) {
        self.options = resolve_options(
            &self.config.options,
            &self.discovered,
            self.config.sequence,
        );
        // Original (pre-reverse) positions; empty when options come from
        // discovered children.
        self.values.rebuild(&self.config.options);
    }
}
