use shared::contact_flow::{FieldEdit, FlowState};
use shared::CatalogEntry;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::UseContactFormHandle;

#[derive(Properties, PartialEq)]
pub struct ContactFormViewProps {
    pub form: UseContactFormHandle,
    /// DOM id the scheduling widget renders into
    pub container_id: AttrValue,
}

fn select_id(e: &Event) -> u32 {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value().parse().unwrap_or(0)
}

fn catalog_options(entries: &[CatalogEntry], selected: u32) -> Html {
    entries
        .iter()
        .map(|entry| {
            html! {
                <option value={entry.id.to_string()} selected={entry.id == selected}>
                    { entry.name.clone() }
                </option>
            }
        })
        .collect()
}

/// Text input that reports each keystroke as a `FieldEdit`
fn text_edit(on_edit: &Callback<FieldEdit>, make: fn(String) -> FieldEdit) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit(make(input.value()));
    })
}

/// Contact form with its scheduling and confirmation views
#[function_component(ContactFormView)]
pub fn contact_form_view(props: &ContactFormViewProps) -> Html {
    let handle = &props.form;
    let flow = &handle.flow;
    let form = flow.form();
    let catalogs = flow.catalogs();

    match flow.state() {
        FlowState::Scheduling { .. } => {
            let on_back = handle.on_back.reform(|_: MouseEvent| ());
            let on_later = handle.on_reset.reform(|_: MouseEvent| ());
            return html! {
                <div class="calendly-section">
                    <h3>{ "¡Gracias! Agenda tu visita" }</h3>
                    <p>{ "Elige el día y la hora que mejor te funcionen." }</p>
                    <div id={props.container_id.clone()} class="calendly-container"></div>
                    <div class="calendly-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_back}>
                            { "← Volver al formulario" }
                        </button>
                        <button type="button" class="btn btn-link" onclick={on_later}>
                            { "Agendar más tarde" }
                        </button>
                    </div>
                </div>
            };
        }
        FlowState::Confirmation { message } => {
            let on_again = handle.on_reset.reform(|_: MouseEvent| ());
            return html! {
                <div class="mensaje-exito">
                    <h3>{ "✅ ¡Mensaje enviado!" }</h3>
                    <p>{ message.clone() }</p>
                    <button type="button" class="btn btn-primary" onclick={on_again}>
                        { "Enviar otro mensaje" }
                    </button>
                </div>
            };
        }
        _ => {}
    }

    let on_submit = {
        let on_submit = handle.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_name = text_edit(&handle.on_edit, FieldEdit::ParentName);
    let on_email = text_edit(&handle.on_edit, FieldEdit::Email);
    let on_phone = text_edit(&handle.on_edit, FieldEdit::Phone);
    let on_detail = text_edit(&handle.on_edit, FieldEdit::ReferralDetail);
    let on_honeypot = text_edit(&handle.on_edit, FieldEdit::Honeypot);

    let on_age = {
        let on_edit = handle.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::ChildAge(input.value().trim().parse().ok()));
        })
    };

    let on_message = {
        let on_edit = handle.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(FieldEdit::Message(input.value()));
        })
    };

    let on_inquiry = handle
        .on_edit
        .reform(|e: Event| FieldEdit::InquiryType(select_id(&e)));
    let on_referral = handle
        .on_edit
        .reform(|e: Event| FieldEdit::ReferralSource(select_id(&e)));
    let on_program = handle
        .on_edit
        .reform(|e: Event| FieldEdit::ProgramInterest(Some(select_id(&e))));

    let loading = flow.is_loading();

    html! {
        <form class="contacto-form" onsubmit={on_submit} novalidate=true>
            if !flow.errors().is_empty() {
                <div class="form-errores">
                    <ul>
                        { for flow.errors().iter().map(|error| html! { <li>{ error.clone() }</li> }) }
                    </ul>
                </div>
            }

            <div class="form-group">
                <label for="nombre_padre">{ "Nombre del padre/madre *" }</label>
                <input id="nombre_padre" type="text" value={form.parent_name.clone()}
                    oninput={on_name} disabled={loading} />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="email">{ "Email *" }</label>
                    <input id="email" type="email" value={form.email.clone()}
                        oninput={on_email} disabled={loading} />
                </div>
                <div class="form-group">
                    <label for="telefono">{ "Teléfono *" }</label>
                    <input id="telefono" type="tel" value={form.phone.clone()}
                        oninput={on_phone} disabled={loading} />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="edad_nino">{ "Edad del niño" }</label>
                    <input id="edad_nino" type="number" min="0" max="18"
                        value={form.child_age.map(|age| age.to_string()).unwrap_or_default()}
                        oninput={on_age} disabled={loading} />
                </div>
                <div class="form-group">
                    <label for="programa">{ "Programa de interés" }</label>
                    <select id="programa" onchange={on_program} disabled={loading}>
                        <option value="0" selected={form.program_interest_id.is_none()}>
                            { "Selecciona un programa" }
                        </option>
                        { catalog_options(&catalogs.program_interests, form.program_interest_id.unwrap_or(0)) }
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="tipo_consulta">{ "Tipo de consulta *" }</label>
                <select id="tipo_consulta" onchange={on_inquiry} disabled={loading}>
                    <option value="0" selected={form.inquiry_type_id == 0}>{ "Selecciona una opción" }</option>
                    { catalog_options(&catalogs.inquiry_types, form.inquiry_type_id) }
                </select>
            </div>

            <div class="form-group">
                <label for="como_conocio">{ "¿Cómo nos conociste? *" }</label>
                <select id="como_conocio" onchange={on_referral} disabled={loading}>
                    <option value="0" selected={form.referral_source_id == 0}>{ "Selecciona una opción" }</option>
                    { catalog_options(&catalogs.referral_sources, form.referral_source_id) }
                </select>
            </div>

            if let Some(placeholder) = flow.referral_detail_placeholder() {
                <div class="form-group">
                    <input id="como_conocio_detalle" type="text" {placeholder}
                        value={form.referral_detail.clone().unwrap_or_default()}
                        oninput={on_detail} disabled={loading} />
                </div>
            }

            <div class="form-group">
                <label for="mensaje">{ "Mensaje *" }</label>
                <textarea id="mensaje" rows="4" value={form.message.clone()}
                    oninput={on_message} disabled={loading} />
            </div>

            <input type="text" name="website" class="honeypot" tabindex="-1" autocomplete="off"
                aria-hidden="true" value={form.honeypot.clone()} oninput={on_honeypot} />

            <button type="submit" class="btn btn-primary btn-enviar" disabled={loading}>
                { if loading { "Enviando..." } else { "Enviar mensaje" } }
            </button>
        </form>
    }
}
