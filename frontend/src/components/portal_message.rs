use chrono::Utc;
use shared::portal_message::{MessageCooldown, MessageKind};
use shared::PortalMessage;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_site, use_theme};
use crate::services::storage::BrowserStore;
use crate::services::Logger;

/// Promotional message on the menu portal, shown at most every 30 minutes per IP
#[function_component(PortalMessageBanner)]
pub fn portal_message_banner() -> Html {
    let site = use_site();
    let theme = use_theme();
    let message = use_state(|| Option::<PortalMessage>::None);

    {
        let message = message.clone();
        let api = site.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let response = api.portal_message().await;
                let cooldown = MessageCooldown::new(BrowserStore::Local);
                if cooldown.check_and_record(&response.client_ip, Utc::now()) {
                    message.set(Some(response));
                } else {
                    Logger::debug_with_component(
                        "portal-message",
                        "Message hidden: shown less than 30 minutes ago",
                    );
                }
            });
            || ()
        });
    }

    let on_close = {
        let message = message.clone();
        Callback::from(move |_: MouseEvent| message.set(None))
    };

    let Some(current) = (*message).clone() else {
        return html! {};
    };
    let kind = MessageKind::from_wire(&current.kind);

    html! {
        <div class="portal-message" style={theme.css_variables()}>
            <button class="portal-message-close" onclick={on_close} aria-label="Cerrar">{ "×" }</button>
            <div class="portal-message-header">
                <span class="portal-message-icon">{ kind.icon() }</span>
                <span class="portal-message-type">{ kind.label() }</span>
            </div>
            <p class="portal-message-text">{ current.message }</p>
        </div>
    }
}
