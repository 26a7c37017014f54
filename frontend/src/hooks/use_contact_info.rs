use shared::ContactInfo;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_site::use_site;

/// Contact channels, blank until (or unless) the API answers
#[hook]
pub fn use_contact_info() -> ContactInfo {
    let site = use_site();
    let contact_info = use_state(ContactInfo::default);

    {
        let contact_info = contact_info.clone();
        let api = site.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                contact_info.set(api.contact_info().await);
            });
            || ()
        });
    }

    (*contact_info).clone()
}
