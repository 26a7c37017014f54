use shared::analytics::event_params;
use shared::ContactInfo;
use yew::prelude::*;

use crate::hooks::use_analytics;
use crate::services::{dom, Logger};

const COMPONENT: &str = "contact-channels";

#[derive(Properties, PartialEq)]
pub struct ContactChannelsProps {
    pub info: ContactInfo,
    #[prop_or(true)]
    pub show_social: bool,
}

fn open(url: &str) {
    if let Err(e) = dom::open_external(url) {
        Logger::warn_with_component(COMPONENT, &format!("Could not open link: {}", e));
    }
}

fn navigate(href: &str) {
    if let Err(e) = dom::set_location(href) {
        Logger::warn_with_component(COMPONENT, &e.to_string());
    }
}

/// WhatsApp, email, phone, map and social links, each click tracked
#[function_component(ContactChannels)]
pub fn contact_channels(props: &ContactChannelsProps) -> Html {
    let analytics = use_analytics();
    let info = &props.info;

    let on_whatsapp = {
        let analytics = analytics.clone();
        let url = info.whatsapp.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event(
                "contacto_whatsapp_click",
                event_params("interaction", "Click en botón WhatsApp"),
            );
            open(&url);
        })
    };

    let on_phone = {
        let analytics = analytics.clone();
        let phone = info.phone.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event(
                "contacto_telefono_click",
                event_params("interaction", "Click en teléfono"),
            );
            navigate(&format!("tel:{}", phone));
        })
    };

    let on_maps = {
        let analytics = analytics.clone();
        let url = info.location.maps_url.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event(
                "contacto_maps_click",
                event_params("interaction", "Click en Google Maps"),
            );
            open(&url);
        })
    };

    let on_instagram = {
        let analytics = analytics.clone();
        let url = info.social.instagram.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event(
                "redes_sociales_instagram",
                event_params("social_media", "Click en Instagram"),
            );
            open(&url);
        })
    };

    let on_facebook = {
        let analytics = analytics.clone();
        let url = info.social.facebook.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track_event(
                "redes_sociales_facebook",
                event_params("social_media", "Click en Facebook"),
            );
            open(&url);
        })
    };

    let emails = info.emails.iter().map(|email| {
        let analytics = analytics.clone();
        let address = email.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut params = event_params("interaction", &format!("Click en email: {}", address));
            params["email"] = address.clone().into();
            analytics.track_event("contacto_email_click", params);
            navigate(&format!("mailto:{}", address));
        });
        html! {
            <button type="button" class="canal canal-email" {onclick}>
                <span class="canal-icono">{ "✉️" }</span>
                <span class="canal-texto">{ email.clone() }</span>
            </button>
        }
    });

    html! {
        <div class="canales-contacto">
            <button type="button" class="canal canal-whatsapp" onclick={on_whatsapp}>
                <span class="canal-icono">{ "💬" }</span>
                <span class="canal-texto">{ "WhatsApp" }</span>
            </button>
            { for emails }
            <button type="button" class="canal canal-telefono" onclick={on_phone}>
                <span class="canal-icono">{ "📞" }</span>
                <span class="canal-texto">{ info.phone.clone() }</span>
            </button>
            <button type="button" class="canal canal-mapa" onclick={on_maps}>
                <span class="canal-icono">{ "📍" }</span>
                <span class="canal-texto">{ info.location.address.clone() }</span>
            </button>
            <div class="horarios">
                <h4>{ "Horarios" }</h4>
                <p>{ info.hours.weekdays.clone() }</p>
                <p>{ info.hours.extended.clone() }</p>
                <p>{ info.hours.saturdays.clone() }</p>
            </div>
            if props.show_social {
                <div class="redes-sociales">
                    <button type="button" class="red red-instagram" onclick={on_instagram}>{ "Instagram" }</button>
                    <button type="button" class="red red-facebook" onclick={on_facebook}>{ "Facebook" }</button>
                </div>
            }
        </div>
    }
}
