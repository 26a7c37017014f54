use gloo::timers::future::TimeoutFuture;
use shared::analytics::{event_params, AnalyticsRelay, AnalyticsSink};
use shared::contact_flow::{ContactFlow, FieldEdit, FlowState, SubmitRejected};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_site::use_site;
use crate::services::Logger;

/// Inline widget container on the contact page
pub const PAGE_CONTAINER_ID: &str = "calendly-container-page";
/// Inline widget container inside the contact pop-up
pub const MODAL_CONTAINER_ID: &str = "calendly-container";

/// Lets the scheduling container render before the widget is mounted into it
const WIDGET_DELAY_MS: u32 = 300;

const COMPONENT: &str = "contact-form";

/// The contact page and the pop-up report submissions under different events
fn track_submission<S: AnalyticsSink + 'static>(
    analytics: &AnalyticsRelay<S>,
    container_id: &str,
    inquiry_type: Option<&str>,
) {
    if container_id == PAGE_CONTAINER_ID {
        analytics.track_contact_page_submit();
    } else {
        analytics.track_contact_form_submit(inquiry_type);
    }
}

#[derive(Clone, PartialEq)]
pub struct UseContactFormHandle {
    /// Snapshot of the flow for rendering
    pub flow: ContactFlow,
    pub on_edit: Callback<FieldEdit>,
    pub on_submit: Callback<()>,
    /// Back from the scheduling view, keeping the input
    pub on_back: Callback<()>,
    /// "Schedule later": clears everything
    pub on_reset: Callback<()>,
    pub on_show_form: Callback<()>,
}

/// Drives a `ContactFlow`: loads catalogs, submits, and opens the scheduling
/// widget into `container_id` once the lead is accepted.
#[hook]
pub fn use_contact_form(container_id: &'static str) -> UseContactFormHandle {
    let site = use_site();
    let flow = use_mut_ref(ContactFlow::new);
    let rerender = use_force_update();

    {
        let flow = flow.clone();
        let rerender = rerender.clone();
        let api = site.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let catalogs = api.catalogs().await;
                flow.borrow_mut().set_catalogs(catalogs);
                rerender.force_update();
            });
            || ()
        });
    }

    {
        let flow = flow.clone();
        use_effect_with(site.public_config.clone(), move |public_config| {
            flow.borrow_mut()
                .set_fallback_scheduling_url(public_config.calendly_url.clone());
            || ()
        });
    }

    let on_edit = {
        let flow = flow.clone();
        let rerender = rerender.clone();
        Callback::from(move |edit: FieldEdit| {
            flow.borrow_mut().edit(edit);
            rerender.force_update();
        })
    };

    let on_submit = {
        let flow = flow.clone();
        let rerender = rerender.clone();
        let site = site.clone();
        Callback::from(move |_: ()| {
            let started = flow.borrow_mut().begin_submit();
            rerender.force_update();

            let data = match started {
                Ok(data) => data,
                Err(SubmitRejected::Invalid(errors)) => {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Form has {} validation errors", errors.len()),
                    );
                    return;
                }
                Err(SubmitRejected::InFlight) => return,
            };

            let inquiry_type = flow
                .borrow()
                .catalogs()
                .inquiry_types
                .iter()
                .find(|entry| entry.id == data.inquiry_type_id)
                .map(|entry| entry.name.clone());
            track_submission(&site.analytics, container_id, inquiry_type.as_deref());

            let flow = flow.clone();
            let rerender = rerender.clone();
            let site = site.clone();
            spawn_local(async move {
                let outcome = site.api.submit_contact(&data).await;
                let transport_failed = outcome.is_err();

                flow.borrow_mut().complete_submit(outcome);
                rerender.force_update();

                let state = flow.borrow().state().clone();
                match state {
                    FlowState::Scheduling { .. } | FlowState::Confirmation { .. } => {
                        site.analytics.track_event(
                            "formulario_contacto_exito",
                            event_params("conversion", "Contacto creado"),
                        );
                    }
                    FlowState::FormWithErrors(_) if transport_failed => {
                        site.analytics.track_event(
                            "formulario_contacto_error_tecnico",
                            event_params("formulario", "Error de red"),
                        );
                    }
                    FlowState::FormWithErrors(_) => {
                        site.analytics.track_event(
                            "formulario_contacto_error",
                            event_params("formulario", "Error en validación"),
                        );
                    }
                    _ => {}
                }

                let request = flow.borrow().scheduling_request(container_id);
                if let Some(request) = request {
                    TimeoutFuture::new(WIDGET_DELAY_MS).await;
                    site.analytics.track_event(
                        "calendly_abrir",
                        event_params("engagement", "Widget Calendly abierto"),
                    );
                    site.scheduler.open(request);
                }
            });
        })
    };

    let on_back = {
        let flow = flow.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            flow.borrow_mut().back_to_form();
            rerender.force_update();
        })
    };

    let on_reset = {
        let flow = flow.clone();
        let rerender = rerender.clone();
        let analytics = site.analytics.clone();
        Callback::from(move |_: ()| {
            analytics.track_event(
                "calendly_agendar_mas_tarde",
                event_params("engagement", "Usuario decidió agendar después"),
            );
            flow.borrow_mut().reset();
            rerender.force_update();
        })
    };

    let on_show_form = {
        let flow = flow.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            flow.borrow_mut().show_form();
            rerender.force_update();
        })
    };

    let snapshot = flow.borrow().clone();

    UseContactFormHandle {
        flow: snapshot,
        on_edit,
        on_submit,
        on_back,
        on_reset,
        on_show_form,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use shared::analytics::{PageInfo, TagCommand};
    use shared::scheduling::ScriptLoaded;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Default)]
    struct EventLog(RefCell<Vec<String>>);

    struct SharedLog(Rc<EventLog>);

    impl AnalyticsSink for SharedLog {
        fn load_script(&self, _tracking_id: &str, on_loaded: ScriptLoaded) {
            on_loaded(Ok(()));
        }

        fn send(&self, command: &TagCommand) {
            if let TagCommand::Event { name, .. } = command {
                self.0 .0.borrow_mut().push(name.clone());
            }
        }

        fn current_page(&self) -> PageInfo {
            PageInfo {
                path: "/contacto".to_string(),
                title: "Contacto".to_string(),
                location: "https://liceolumen.com/contacto".to_string(),
            }
        }
    }

    #[wasm_bindgen_test]
    fn test_submission_event_depends_on_container() {
        let log = Rc::new(EventLog::default());
        let analytics = AnalyticsRelay::new(SharedLog(Rc::clone(&log)));
        analytics.initialize("G-TEST");

        track_submission(&analytics, PAGE_CONTAINER_ID, Some("Admisiones"));
        track_submission(&analytics, MODAL_CONTAINER_ID, Some("Admisiones"));

        assert_eq!(
            *log.0.borrow(),
            vec!["page_view", "formulario_contacto_envio", "contact_form_submit"]
        );
    }
}
