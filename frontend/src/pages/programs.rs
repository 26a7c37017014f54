use serde_json::json;
use shared::analytics::event_params;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FloatingParticles, PageHeader};
use crate::content::{self, Program, PROGRAMS};
use crate::hooks::{use_site, use_theme};
use crate::router::Route;
use crate::services::dom;

#[derive(Properties, PartialEq)]
struct ProgramModalProps {
    program: &'static Program,
    on_close: Callback<()>,
    on_schedule: Callback<()>,
}

#[function_component(ProgramModal)]
fn program_modal(props: &ProgramModalProps) -> Html {
    let program = props.program;
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_schedule = props.on_schedule.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-programa" onclick={stop}
                style={format!("background: {}; color: {};", program.background, program.text_color)}>
                <button class="modal-cerrar" onclick={on_close} aria-label="Cerrar">{ "×" }</button>
                <span class="programa-icono">{ program.icon }</span>
                <h2>{ program.name }</h2>
                <h3>{ program.subtitle }</h3>
                <p>{ program.description }</p>
                <p class="programa-edades">{ format!("👧 {}", program.ages) }</p>
                <div class="programa-horarios">
                    <h4>{ "Horarios" }</h4>
                    { for program.schedules.iter().map(|schedule| html! { <p>{ *schedule }</p> }) }
                </div>
                <ul class="programa-caracteristicas">
                    { for program.features.iter().map(|feature| html! { <li>{ format!("✓ {}", feature) }</li> }) }
                </ul>
                <button class="btn btn-primary" onclick={on_schedule}>{ "Agendar visita" }</button>
            </div>
        </div>
    }
}

#[function_component(Programs)]
pub fn programs() -> Html {
    let site = use_site();
    let theme = use_theme();
    let navigator = use_navigator();
    let selected = use_state(|| Option::<u32>::None);

    // Release the scroll lock if the page goes away with the modal open
    use_effect_with((), |_| move || dom::set_scroll_locked(false));

    let on_open = {
        let selected = selected.clone();
        let analytics = site.analytics.clone();
        Callback::from(move |program: &'static Program| {
            let mut params = event_params("programas", program.name);
            params["programa_id"] = json!(program.id);
            analytics.track_event("programa_modal_abierto", params);
            analytics.track_program_click(program.name);
            dom::set_scroll_locked(true);
            selected.set(Some(program.id));
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            dom::set_scroll_locked(false);
            selected.set(None);
        })
    };

    let go_to_contact = {
        let analytics = site.analytics.clone();
        let selected = selected.clone();
        Callback::from(move |(event, label): (&'static str, &'static str)| {
            let mut params = event_params("conversion", label);
            params["cta_location"] = json!("programas_page");
            analytics.track_event(event, params);
            dom::set_scroll_locked(false);
            selected.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
        })
    };

    let on_contact = go_to_contact.reform(|_: MouseEvent| {
        ("programas_contacto_click", "Botón Contactar desde Programas")
    });
    let on_schedule = go_to_contact.reform(|_: ()| {
        ("programas_agendar_visita", "Botón Agendar Visita desde Programas")
    });

    html! {
        <div class="page programas-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={"Nuestros Programas"} breadcrumbs={vec![AttrValue::from(Route::Programs.title())]} />

            <section class="programas-grid">
                { for PROGRAMS.iter().map(|program| {
                    let onclick = on_open.reform(move |_: MouseEvent| program);
                    html! {
                        <article class="programa-card" {onclick}
                            style={format!("background: {}; color: {};", program.background, program.text_color)}>
                            <span class="programa-icono">{ program.icon }</span>
                            <h3>{ program.name }</h3>
                            <p class="programa-subtitulo">{ program.subtitle }</p>
                            <p class="programa-edades">{ program.ages }</p>
                            <span class="programa-ver-mas">{ "Ver más →" }</span>
                        </article>
                    }
                }) }
            </section>

            <section class="programas-cta">
                <h2>{ "¿Listo para ser parte de la familia Lumen?" }</h2>
                <button class="btn btn-primary" onclick={on_contact}>{ "Contáctanos" }</button>
            </section>

            if let Some(program) = (*selected).and_then(content::program) {
                <ProgramModal {program} on_close={on_close} on_schedule={on_schedule} />
            }
        </div>
    }
}
