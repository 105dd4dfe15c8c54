//! Identifier-to-position lookup for identifier-based current markers

use indexmap::IndexMap;

use crate::model::{StepDescriptor, StepValue};

/// Maps a declared step `value` to its position in the original
/// (pre-reverse) configuration list.
///
/// Only explicit configuration lists feed the index; child-derived sequences
/// leave it empty, and identifier matching then degrades to index matching.
/// Rebuilding drops stale entries rather than merging over them, so
/// identifiers removed from a later configuration stop resolving.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueIndex {
    positions: IndexMap<StepValue, usize>,
}

impl ValueIndex {
    pub fn from_options(options: &[StepDescriptor]) -> Self {
        let mut index = ValueIndex::default();
        index.rebuild(options);
        index
    }

    /// Recompute the index for a new configuration snapshot.
    ///
    /// Duplicate declared values: the later position wins.
    pub fn rebuild(&mut self, options: &[StepDescriptor]) {
        self.positions.clear();
        for (position, step) in options.iter().enumerate() {
            if let Some(value) = &step.value {
                self.positions.insert(value.clone(), position);
            }
        }
    }

    pub fn position(&self, value: &StepValue) -> Option<usize> {
        self.positions.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
