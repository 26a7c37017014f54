//! Best-effort analytics relay.
//!
//! The relay loads the tag script on first initialization and forwards page
//! views and named events to an [`AnalyticsSink`]. Until the script is ready
//! every tracking call is logged and dropped; tracking never fails the caller.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use serde_json::{json, Value};

use crate::scheduling::ScriptLoaded;

/// Page being viewed, as reported to the tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub path: String,
    pub title: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagCommand {
    /// Marks the tag start time
    Js,
    /// Configures the property with automatic page views disabled
    Config { tracking_id: String },
    Event { name: String, params: Value },
}

/// Browser capability behind the relay
pub trait AnalyticsSink {
    fn load_script(&self, tracking_id: &str, on_loaded: ScriptLoaded);
    fn send(&self, command: &TagCommand);
    fn current_page(&self) -> PageInfo;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RelayState {
    Idle,
    Loading { tracking_id: String },
    Ready,
}

struct Inner<S> {
    sink: S,
    state: RefCell<RelayState>,
}

/// Clones share the same state, so one relay can be handed to every page.
pub struct AnalyticsRelay<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for AnalyticsRelay<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S> PartialEq for AnalyticsRelay<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: AnalyticsSink + 'static> AnalyticsRelay<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                sink,
                state: RefCell::new(RelayState::Idle),
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.inner.state.borrow() == RelayState::Ready
    }

    /// Loads the tag for `tracking_id`. Calls after the first valid one are ignored.
    pub fn initialize(&self, tracking_id: &str) {
        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            warn!("No analytics id provided; analytics disabled");
            return;
        }
        if *self.inner.state.borrow() != RelayState::Idle {
            warn!("Analytics already initialized");
            return;
        }

        *self.inner.state.borrow_mut() = RelayState::Loading {
            tracking_id: tracking_id.to_string(),
        };

        let relay = self.clone();
        self.inner
            .sink
            .load_script(tracking_id, Box::new(move |outcome| relay.script_loaded(outcome)));
    }

    fn script_loaded(&self, outcome: Result<(), crate::ScriptError>) {
        let tracking_id = match &*self.inner.state.borrow() {
            RelayState::Loading { tracking_id } => tracking_id.clone(),
            _ => return,
        };

        if let Err(err) = outcome {
            error!("Error initializing analytics: {}", err);
            *self.inner.state.borrow_mut() = RelayState::Idle;
            return;
        }

        self.inner.sink.send(&TagCommand::Js);
        self.inner.sink.send(&TagCommand::Config {
            tracking_id: tracking_id.clone(),
        });
        *self.inner.state.borrow_mut() = RelayState::Ready;
        info!("Analytics initialized: {}", tracking_id);

        self.track_page_view(None);
    }

    /// Sends a page view for `path`, or for the sink's current page when `None`
    pub fn track_page_view(&self, path: Option<&str>) {
        if !self.is_ready() {
            warn!("Analytics not initialized; page view dropped");
            return;
        }

        let page = self.inner.sink.current_page();
        let path = path.map(str::to_string).unwrap_or(page.path);
        self.send_event(
            "page_view",
            json!({
                "page_path": path,
                "page_title": page.title,
                "page_location": page.location,
            }),
        );
    }

    /// Called after each completed client-side navigation
    pub fn navigated(&self, path: &str) {
        if self.is_ready() {
            self.track_page_view(Some(path));
        } else {
            debug!("Navigation to {} before analytics is ready", path);
        }
    }

    pub fn track_event(&self, name: &str, params: Value) {
        if !self.is_ready() {
            warn!("Analytics not initialized; event {} dropped", name);
            return;
        }
        self.send_event(name, params);
    }

    fn send_event(&self, name: &str, params: Value) {
        debug!("Analytics event {}: {}", name, params);
        self.inner.sink.send(&TagCommand::Event {
            name: name.to_string(),
            params,
        });
    }

    pub fn track_menu_option_click(&self, label: &str, route: &str) {
        self.track_event(
            "menu_option_click",
            json!({
                "option_label": label,
                "option_route": route,
                "event_category": "navigation",
                "event_label": label,
            }),
        );
    }

    pub fn track_portal_hover(&self) {
        self.track_event(
            "portal_hover",
            json!({ "event_category": "interaction", "event_label": "central_portal" }),
        );
    }

    pub fn track_contact_modal_open(&self) {
        self.track_event(
            "contact_modal_open",
            json!({ "event_category": "engagement", "event_label": "contacto_modal" }),
        );
    }

    pub fn track_contact_form_submit(&self, inquiry_type: Option<&str>) {
        self.track_event(
            "contact_form_submit",
            json!({
                "event_category": "conversion",
                "event_label": "formulario_contacto",
                "tipo_consulta": inquiry_type.unwrap_or("no_especificado"),
            }),
        );
    }

    /// Submission from the full contact page, reported under its own name
    pub fn track_contact_page_submit(&self) {
        self.track_event(
            "formulario_contacto_envio",
            json!({ "event_category": "formulario", "event_label": "Formulario enviado" }),
        );
    }

    pub fn track_program_click(&self, program_name: &str) {
        self.track_event(
            "program_click",
            json!({
                "event_category": "engagement",
                "event_label": program_name,
                "program_name": program_name,
            }),
        );
    }
}

/// Builds the usual `{event_category, event_label}` parameter object
pub fn event_params(category: &str, label: &str) -> Value {
    json!({ "event_category": category, "event_label": label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptError;

    #[derive(Default)]
    struct RecordingSink {
        loads: RefCell<Vec<String>>,
        callbacks: RefCell<Vec<ScriptLoaded>>,
        sent: RefCell<Vec<TagCommand>>,
    }

    impl RecordingSink {
        fn finish_loading(&self, outcome: Result<(), ScriptError>) {
            let callback = self.callbacks.borrow_mut().pop().expect("script was requested");
            callback(outcome);
        }

        fn event_names(&self) -> Vec<String> {
            self.sent
                .borrow()
                .iter()
                .filter_map(|command| match command {
                    TagCommand::Event { name, .. } => Some(name.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl AnalyticsSink for Rc<RecordingSink> {
        fn load_script(&self, tracking_id: &str, on_loaded: ScriptLoaded) {
            self.loads.borrow_mut().push(tracking_id.to_string());
            self.callbacks.borrow_mut().push(on_loaded);
        }

        fn send(&self, command: &TagCommand) {
            self.sent.borrow_mut().push(command.clone());
        }

        fn current_page(&self) -> PageInfo {
            PageInfo {
                path: "/programas".to_string(),
                title: "Liceo Lumen".to_string(),
                location: "https://liceolumen.com/programas".to_string(),
            }
        }
    }

    fn ready_relay() -> (Rc<RecordingSink>, AnalyticsRelay<Rc<RecordingSink>>) {
        let sink = Rc::new(RecordingSink::default());
        let relay = AnalyticsRelay::new(Rc::clone(&sink));
        relay.initialize("G-TEST");
        sink.finish_loading(Ok(()));
        (sink, relay)
    }

    #[test]
    fn test_initialize_configures_and_sends_initial_page_view() {
        let (sink, relay) = ready_relay();

        assert!(relay.is_ready());
        assert_eq!(sink.loads.borrow().as_slice(), &["G-TEST".to_string()]);

        let sent = sink.sent.borrow();
        assert_eq!(sent[0], TagCommand::Js);
        assert_eq!(sent[1], TagCommand::Config { tracking_id: "G-TEST".to_string() });
        assert_eq!(
            sent[2],
            TagCommand::Event {
                name: "page_view".to_string(),
                params: json!({
                    "page_path": "/programas",
                    "page_title": "Liceo Lumen",
                    "page_location": "https://liceolumen.com/programas",
                }),
            }
        );
    }

    #[test]
    fn test_second_initialize_is_a_no_op() {
        let (sink, relay) = ready_relay();

        relay.initialize("G-OTHER");
        assert_eq!(sink.loads.borrow().len(), 1);
        assert_eq!(sink.sent.borrow().len(), 3);
    }

    #[test]
    fn test_initialize_while_loading_is_a_no_op() {
        let sink = Rc::new(RecordingSink::default());
        let relay = AnalyticsRelay::new(Rc::clone(&sink));

        relay.initialize("G-TEST");
        relay.initialize("G-TEST");
        assert_eq!(sink.loads.borrow().len(), 1);
    }

    #[test]
    fn test_blank_id_does_not_load() {
        let sink = Rc::new(RecordingSink::default());
        let relay = AnalyticsRelay::new(Rc::clone(&sink));

        relay.initialize("  ");
        assert!(sink.loads.borrow().is_empty());

        relay.initialize("G-TEST");
        assert_eq!(sink.loads.borrow().len(), 1);
    }

    #[test]
    fn test_tracking_before_ready_is_dropped() {
        let sink = Rc::new(RecordingSink::default());
        let relay = AnalyticsRelay::new(Rc::clone(&sink));

        relay.track_event("cta_click", event_params("conversion", "Contacto"));
        relay.track_page_view(Some("/admision"));
        relay.initialize("G-TEST");
        relay.navigated("/galeria");

        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn test_failed_load_returns_to_idle() {
        let sink = Rc::new(RecordingSink::default());
        let relay = AnalyticsRelay::new(Rc::clone(&sink));

        relay.initialize("G-TEST");
        sink.finish_loading(Err(ScriptError::LoadFailed { src: "gtag.js".to_string() }));
        assert!(!relay.is_ready());
        assert!(sink.sent.borrow().is_empty());

        relay.initialize("G-TEST");
        assert_eq!(sink.loads.borrow().len(), 2);
    }

    #[test]
    fn test_navigation_sends_page_view_for_path() {
        let (sink, relay) = ready_relay();

        relay.navigated("/admision");

        let sent = sink.sent.borrow();
        match sent.last() {
            Some(TagCommand::Event { name, params }) => {
                assert_eq!(name, "page_view");
                assert_eq!(params["page_path"], "/admision");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_convenience_events() {
        let (sink, relay) = ready_relay();

        relay.track_menu_option_click("Programas", "/programas");
        relay.track_contact_form_submit(None);
        relay.track_contact_page_submit();
        relay.track_program_click("Lumen Kids");

        assert_eq!(
            sink.event_names(),
            vec![
                "page_view",
                "menu_option_click",
                "contact_form_submit",
                "formulario_contacto_envio",
                "program_click"
            ]
        );

        let sent = sink.sent.borrow();
        let TagCommand::Event { params, .. } = &sent[4] else {
            panic!("expected an event");
        };
        assert_eq!(params["tipo_consulta"], "no_especificado");

        let TagCommand::Event { params, .. } = &sent[5] else {
            panic!("expected an event");
        };
        assert_eq!(params["event_category"], "formulario");
        assert_eq!(params["event_label"], "Formulario enviado");

        let TagCommand::Event { params, .. } = &sent[6] else {
            panic!("expected an event");
        };
        assert_eq!(params["program_name"], "Lumen Kids");
    }
}
