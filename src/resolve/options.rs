//! Ordered option list construction

use crate::model::{DiscoveredStep, SequenceDirection, StepDescriptor};

/// Produce the sequence of descriptors in display order.
///
/// A non-empty explicit list always wins; reversal works on a copy and never
/// touches the caller's list. Otherwise descriptors come from discovered
/// children, appended in document order for positive sequences and prepended
/// for reverse ones. Empty sources yield an empty sequence.
pub fn resolve_options(
    explicit: &[StepDescriptor],
    discovered: &[DiscoveredStep],
    direction: SequenceDirection,
) -> Vec<StepDescriptor> {
    if !explicit.is_empty() {
        let mut options = explicit.to_vec();
        if direction == SequenceDirection::Reverse {
            options.reverse();
        }
        return options;
    }

    let mut options = Vec::with_capacity(discovered.len());
    for child in discovered {
        let descriptor = child.clone().into_descriptor();
        match direction {
            SequenceDirection::Positive => options.push(descriptor),
            SequenceDirection::Reverse => options.insert(0, descriptor),
        }
    }
    options
}
