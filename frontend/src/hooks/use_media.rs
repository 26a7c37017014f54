use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

use crate::services::dom;

/// Tracks whether the viewport is at or below the mobile breakpoint
#[hook]
pub fn use_is_mobile() -> bool {
    let is_mobile = use_state(dom::is_mobile);

    {
        let is_mobile = is_mobile.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "resize", move |_| {
                is_mobile.set(dom::is_mobile());
            });
            move || drop(listener)
        });
    }

    *is_mobile
}
