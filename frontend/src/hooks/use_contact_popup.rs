use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use shared::popup::ContactPopup;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::use_site::use_site;
use crate::services::dom;
use crate::services::storage::BrowserStore;
use crate::services::Logger;

#[derive(Clone, PartialEq)]
pub struct UseContactPopupHandle {
    pub visible: bool,
    /// Bumped on every manual open so the pop-up can go back to its form
    pub manual_opens: u32,
    pub open: Callback<()>,
    pub close: Callback<()>,
}

/// Contact pop-up visibility: opens by itself after a delay unless it was
/// dismissed earlier in the session, and closes on Escape.
#[hook]
pub fn use_contact_popup() -> UseContactPopupHandle {
    let analytics = use_site().analytics;
    let popup = use_mut_ref(|| ContactPopup::new(BrowserStore::Session));
    let manual_opens = use_state(|| 0u32);
    let rerender = use_force_update();

    {
        let popup = popup.clone();
        let rerender = rerender.clone();
        let analytics = analytics.clone();
        use_effect_with((), move |_| {
            let delay = popup.borrow().auto_open_delay();
            let timer = delay.map(|delay| {
                Timeout::new(delay.as_millis() as u32, move || {
                    if popup.borrow_mut().auto_open() {
                        Logger::debug_with_component("contact-popup", "Auto-opening contact pop-up");
                        dom::set_scroll_locked(true);
                        analytics.track_contact_modal_open();
                        rerender.force_update();
                    }
                })
            });
            move || {
                // Dropping the timeout cancels it
                drop(timer);
                dom::set_scroll_locked(false);
            }
        });
    }

    let close = {
        let popup = popup.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            popup.borrow_mut().close();
            dom::set_scroll_locked(false);
            rerender.force_update();
        })
    };

    let open = {
        let popup = popup.clone();
        let rerender = rerender.clone();
        let manual_opens = manual_opens.clone();
        Callback::from(move |_: ()| {
            popup.borrow_mut().open_manual();
            dom::set_scroll_locked(true);
            analytics.track_contact_modal_open();
            manual_opens.set(*manual_opens + 1);
            rerender.force_update();
        })
    };

    let visible = popup.borrow().is_visible();

    {
        let close = close.clone();
        use_effect_with(visible, move |visible| {
            let listener = visible.then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|event| event.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    UseContactPopupHandle {
        visible,
        manual_opens: *manual_opens,
        open,
        close,
    }
}
