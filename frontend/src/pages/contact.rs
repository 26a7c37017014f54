use yew::prelude::*;

use crate::components::{ContactChannels, ContactFormView, FloatingParticles, PageHeader};
use crate::hooks::use_contact_form::PAGE_CONTAINER_ID;
use crate::hooks::{use_contact_form, use_contact_info, use_theme};
use crate::router::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let contact_info = use_contact_info();
    let form = use_contact_form(PAGE_CONTAINER_ID);

    html! {
        <div class="page contacto-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={"Contáctanos"} breadcrumbs={vec![AttrValue::from(Route::Contact.title())]} />

            <div class="contacto-layout">
                <section class="contacto-info">
                    <h2>{ "Hablemos" }</h2>
                    <p>{ "Estamos felices de resolver tus dudas y mostrarte nuestro jardín." }</p>
                    <ContactChannels info={contact_info} />
                </section>

                <section class="contacto-formulario">
                    <h2>{ "Escríbenos" }</h2>
                    <ContactFormView {form} container_id={PAGE_CONTAINER_ID} />
                </section>
            </div>
        </div>
    }
}
