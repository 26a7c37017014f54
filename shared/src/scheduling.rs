//! Embedded scheduling widget.
//!
//! The widget script is injected at most once per page lifetime. Requests
//! made while it is still loading are parked, and the most recent one is
//! opened when the script reports ready.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};

use crate::ScriptError;

/// Called once the injected script has finished loading (or failed to)
pub type ScriptLoaded = Box<dyn FnOnce(Result<(), ScriptError>)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingPrefill {
    pub name: String,
    pub email: String,
    /// Free-text answer attached to the booking
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingRequest {
    pub url: String,
    /// DOM id of the element the inline widget renders into
    pub container_id: String,
    pub prefill: SchedulingPrefill,
}

/// Browser capability behind the widget: script injection and the inline init call
pub trait SchedulingWidgetLoader {
    fn inject_script(&self, on_loaded: ScriptLoaded);
    fn open_inline(&self, request: &SchedulingRequest) -> Result<(), ScriptError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptState {
    NotLoaded,
    Loading { pending: SchedulingRequest },
    Ready,
}

struct Inner<L> {
    loader: L,
    script: RefCell<ScriptState>,
}

/// Launches the scheduling widget, loading its script on first use.
///
/// Clones share the same script state.
pub struct SchedulingWidget<L> {
    inner: Rc<Inner<L>>,
}

impl<L> Clone for SchedulingWidget<L> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<L> PartialEq for SchedulingWidget<L> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<L: SchedulingWidgetLoader + 'static> SchedulingWidget<L> {
    pub fn new(loader: L) -> Self {
        Self {
            inner: Rc::new(Inner {
                loader,
                script: RefCell::new(ScriptState::NotLoaded),
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.inner.script.borrow() == ScriptState::Ready
    }

    pub fn open(&self, request: SchedulingRequest) {
        let current = self.inner.script.borrow().clone();
        match current {
            ScriptState::Ready => self.open_now(&request),
            ScriptState::Loading { .. } => {
                debug!("Scheduling script still loading; replacing pending request");
                *self.inner.script.borrow_mut() = ScriptState::Loading { pending: request };
            }
            ScriptState::NotLoaded => {
                info!("Loading scheduling widget script");
                *self.inner.script.borrow_mut() = ScriptState::Loading { pending: request };

                let widget = self.clone();
                self.inner
                    .loader
                    .inject_script(Box::new(move |outcome| widget.script_loaded(outcome)));
            }
        }
    }

    fn script_loaded(&self, outcome: Result<(), ScriptError>) {
        let previous = self.inner.script.replace(match outcome {
            Ok(()) => ScriptState::Ready,
            Err(_) => ScriptState::NotLoaded,
        });

        match (outcome, previous) {
            (Ok(()), ScriptState::Loading { pending }) => self.open_now(&pending),
            (Ok(()), _) => {}
            (Err(err), _) => error!("Scheduling widget unavailable: {}", err),
        }
    }

    fn open_now(&self, request: &SchedulingRequest) {
        if let Err(err) = self.inner.loader.open_inline(request) {
            error!("Failed to open scheduling widget: {}", err);
        }
    }
}
