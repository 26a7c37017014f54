use std::collections::HashSet;

use gloo::timers::callback::Timeout;
use serde_json::json;
use shared::analytics::event_params;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FloatingParticles, PageHeader};
use crate::content::{AdmissionStep, ADMISSION_INFO_PDF, ADMISSION_STEPS};
use crate::hooks::{use_site, use_theme};
use crate::router::Route;
use crate::services::{dom, Logger};

const CONFETTI_MS: u32 = 1000;
const CONFETTI_PIECES: usize = 30;

#[derive(Properties, PartialEq)]
struct StepCardProps {
    step: &'static AdmissionStep,
    expanded: bool,
    on_toggle: Callback<&'static AdmissionStep>,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let step = props.step;
    let onclick = props.on_toggle.reform(move |_: MouseEvent| step);

    html! {
        <article class={classes!("paso-card", props.expanded.then_some("expandido"), step.optional.then_some("opcional"))}>
            <button class="paso-header" {onclick} aria-expanded={props.expanded.to_string()}>
                <span class="paso-numero">{ step.id.to_string() }</span>
                <span class="paso-icono">{ step.icon }</span>
                <div class="paso-titulos">
                    <h3>{ step.title }</h3>
                    <p>{ step.subtitle }</p>
                </div>
                <span class="paso-toggle">{ if props.expanded { "−" } else { "+" } }</span>
            </button>
            if props.expanded {
                <div class="paso-detalle">
                    <p>{ step.description }</p>
                    <ul>
                        { for step.details.iter().map(|detail| html! { <li>{ *detail }</li> }) }
                    </ul>
                </div>
            }
        </article>
    }
}

#[function_component(Admission)]
pub fn admission() -> Html {
    let site = use_site();
    let theme = use_theme();
    let navigator = use_navigator();
    let expanded = use_state(HashSet::<u32>::new);
    let confetti = use_state(|| false);
    let confetti_timer = use_mut_ref(|| Option::<Timeout>::None);

    let on_toggle = {
        let expanded = expanded.clone();
        let confetti = confetti.clone();
        let analytics = site.analytics.clone();
        Callback::from(move |step: &'static AdmissionStep| {
            let mut next = (*expanded).clone();
            if !next.remove(&step.id) {
                next.insert(step.id);

                let mut params = event_params("admision", &format!("Paso {}: {}", step.id, step.title));
                params["paso_numero"] = json!(step.id);
                params["paso_titulo"] = json!(step.title);
                analytics.track_event("admision_paso_expandido", params);

                confetti.set(true);
                let confetti = confetti.clone();
                // Replacing the timer cancels the previous one
                *confetti_timer.borrow_mut() = Some(Timeout::new(CONFETTI_MS, move || confetti.set(false)));
            }
            expanded.set(next);
        })
    };

    let go_to_contact = {
        let analytics = site.analytics.clone();
        Callback::from(move |(event, label): (&'static str, &'static str)| {
            let mut params = event_params("conversion", label);
            params["cta_location"] = json!("admision_page");
            analytics.track_event(event, params);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
        })
    };
    let on_contact = go_to_contact.reform(|_: MouseEvent| ("admision_contacto_click", "Botón Contactar"));
    let on_schedule = go_to_contact.reform(|_: MouseEvent| ("admision_agendar_visita", "Botón Agendar Visita"));

    let on_download = {
        let analytics = site.analytics.clone();
        let url = site.config.asset(ADMISSION_INFO_PDF);
        Callback::from(move |_: MouseEvent| {
            let mut params = event_params("engagement", "Descargar PDF Información");
            params["file_name"] = json!("informacion-admision.pdf");
            analytics.track_event("admision_descargar_info", params);
            if let Err(e) = dom::open_external(&url) {
                Logger::warn_with_component("admission", &format!("Could not open info sheet: {}", e));
            }
        })
    };

    html! {
        <div class="page admision-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={"Proceso de Admisión"} breadcrumbs={vec![AttrValue::from(Route::Admission.title())]} />

            if *confetti {
                <div class="confetti" aria-hidden="true">
                    { for (0..CONFETTI_PIECES).map(|i| {
                        let style = format!(
                            "left: {:.1}%; animation-delay: {:.2}s;",
                            dom::random() * 100.0,
                            dom::random() * 0.3
                        );
                        html! { <span class="confetti-piece" key={i.to_string()} {style}>{ theme.decoration(i) }</span> }
                    }) }
                </div>
            }

            <section class="pasos">
                { for ADMISSION_STEPS.iter().map(|step| html! {
                    <StepCard {step} expanded={expanded.contains(&step.id)} on_toggle={on_toggle.clone()} />
                }) }
            </section>

            <section class="admision-cta">
                <h2>{ "¿Tienes preguntas?" }</h2>
                <div class="cta-botones">
                    <button class="btn btn-primary" onclick={on_schedule}>{ "📅 Agendar visita" }</button>
                    <button class="btn btn-secondary" onclick={on_contact}>{ "💬 Contactar" }</button>
                    <button class="btn btn-link" onclick={on_download}>{ "📄 Descargar información" }</button>
                </div>
            </section>
        </div>
    }
}
