//! Shared step state passed explicitly to step elements
//!
//! The container creates one [`StepsState`] and hands a clone to each step
//! element. Steps read the current marker through it and mutate it through
//! `set_current`; the resolver only ever reads.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::model::CurrentMarker;

type ChangeListener = Rc<dyn Fn(&CurrentMarker)>;

/// Cheaply cloneable handle over the active-step marker.
///
/// Clones share the same underlying marker. Single-threaded by design: the
/// resolver runs synchronously inside one render pass.
#[derive(Clone)]
pub struct StepsState {
    current: Rc<RefCell<CurrentMarker>>,
    on_change: Option<ChangeListener>,
}

impl StepsState {
    pub fn new(initial: CurrentMarker) -> Self {
        StepsState {
            current: Rc::new(RefCell::new(initial)),
            on_change: None,
        }
    }

    /// State handle that notifies `listener` after every mutation, mirroring
    /// the two-way binding contract of the embedding component.
    pub fn with_on_change(
        initial: CurrentMarker,
        listener: impl Fn(&CurrentMarker) + 'static,
    ) -> Self {
        StepsState {
            current: Rc::new(RefCell::new(initial)),
            on_change: Some(Rc::new(listener)),
        }
    }

    pub fn current(&self) -> CurrentMarker {
        self.current.borrow().clone()
    }

    pub fn set_current(&self, next: CurrentMarker) {
        *self.current.borrow_mut() = next.clone();
        // Borrow released before the listener runs, so listeners may re-enter.
        if let Some(listener) = &self.on_change {
            listener(&next);
        }
    }

    /// Mark the whole sequence finished.
    pub fn mark_finished(&self) {
        self.set_current(CurrentMarker::Finish);
    }
}

impl fmt::Debug for StepsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepsState")
            .field("current", &self.current.borrow())
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
