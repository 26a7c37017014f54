use yew::prelude::*;

use super::contact_form::ContactFormView;
use crate::hooks::use_contact_form;
use crate::hooks::use_contact_form::MODAL_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    /// Changes on each manual open; the modal then goes back to its form
    #[prop_or_default]
    pub open_count: u32,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let form = use_contact_form(MODAL_CONTAINER_ID);

    {
        let on_show_form = form.on_show_form.clone();
        use_effect_with(props.open_count, move |open_count| {
            if *open_count > 0 {
                on_show_form.emit(());
            }
            || ()
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-contacto-backdrop" onclick={on_backdrop_click}>
            <div class="modal-contacto" onclick={on_modal_click}>
                <button class="modal-cerrar" onclick={on_close_click} aria-label="Cerrar">{ "×" }</button>
                <div class="modal-header">
                    <h2>{ "¿Quieres conocer Liceo Lumen?" }</h2>
                    <p>{ "Déjanos tus datos y agenda una visita personalizada." }</p>
                </div>
                <ContactFormView form={form} container_id={MODAL_CONTAINER_ID} />
            </div>
        </div>
    }
}
