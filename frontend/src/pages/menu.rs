use std::f64::consts::PI;

use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ContactModal, FloatingParticles, PortalMessageBanner};
use crate::hooks::{use_contact_popup, use_is_mobile, use_site, use_theme};
use crate::router::Route;
use crate::services::dom;

pub const ORBIT_RADIUS_PX: f64 = 320.0;
const ORBIT_START_DEG: f64 = -90.0;

const NAVIGATE_DELAY_MS: u32 = 400;
const BURST_MS: u32 = 800;
const PORTAL_HOVER_WINDOW_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuOption {
    pub label: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

pub static MENU_OPTIONS: [MenuOption; 6] = [
    MenuOption { label: "Nosotros", route: Route::About, icon: "/assets/images/nosotros.png" },
    MenuOption { label: "Programas", route: Route::Programs, icon: "/assets/images/programas.png" },
    MenuOption { label: "Admisión", route: Route::Admission, icon: "/assets/images/admision.png" },
    MenuOption { label: "Galería", route: Route::Gallery, icon: "/assets/images/galeria.png" },
    MenuOption { label: "Contacto", route: Route::Contact, icon: "/assets/images/contacto.png" },
    MenuOption { label: "Familia Lumen", route: Route::Family, icon: "/assets/images/familia-lumen.png" },
];

/// Position of an option on the orbit, in degrees and pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSlot {
    pub angle: f64,
    pub radius: f64,
}

impl OrbitSlot {
    /// Offset from the orbit centre
    pub fn offset(&self) -> (f64, f64) {
        let radians = self.angle * PI / 180.0;
        (radians.cos() * self.radius, radians.sin() * self.radius)
    }
}

/// Evenly spaced slots starting at twelve o'clock; all zero on mobile,
/// where the options are laid out as a list.
pub fn orbit_layout(count: usize, is_mobile: bool) -> Vec<OrbitSlot> {
    if is_mobile || count == 0 {
        return vec![OrbitSlot { angle: 0.0, radius: 0.0 }; count];
    }
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| OrbitSlot {
            angle: ORBIT_START_DEG + step * i as f64,
            radius: ORBIT_RADIUS_PX,
        })
        .collect()
}

/// Whether a portal hover at `now_ms` should be reported
pub fn should_track_hover(last_tracked_ms: Option<f64>, now_ms: f64) -> bool {
    match last_tracked_ms {
        Some(last) => now_ms - last >= PORTAL_HOVER_WINDOW_MS,
        None => true,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Star {
    top: f64,
    left: f64,
    size: f64,
    duration: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct BurstParticle {
    x: f64,
    y: f64,
    angle: f64,
    icon: &'static str,
}

#[function_component(Menu)]
pub fn menu() -> Html {
    let site = use_site();
    let theme = use_theme();
    let is_mobile = use_is_mobile();
    let navigator = use_navigator();
    let popup = use_contact_popup();

    let highlighted = use_state(|| Option::<usize>::None);
    let burst = use_state(Vec::<BurstParticle>::new);
    let last_hover = use_mut_ref(|| Option::<f64>::None);
    // Pending navigation and burst timers, cancelled on unmount
    let timers = use_mut_ref(Vec::<Timeout>::new);

    let stars = use_memo(is_mobile, |is_mobile| {
        let count = if *is_mobile { 40 } else { 80 };
        (0..count)
            .map(|_| Star {
                top: dom::random() * 100.0,
                left: dom::random() * 100.0,
                size: dom::random() * 2.0 + 1.0,
                duration: dom::random() * 3.0 + 2.0,
            })
            .collect::<Vec<_>>()
    });
    let slots = use_memo(is_mobile, |is_mobile| orbit_layout(MENU_OPTIONS.len(), *is_mobile));

    let on_select = {
        let analytics = site.analytics.clone();
        let burst = burst.clone();
        let timers = timers.clone();
        let slots = slots.clone();
        Callback::from(move |index: usize| {
            let Some(option) = MENU_OPTIONS.get(index) else {
                return;
            };
            analytics.track_menu_option_click(option.label, &option.route.to_path());

            let (x, y) = slots.get(index).map(OrbitSlot::offset).unwrap_or((0.0, 0.0));
            let count = if is_mobile { 8 } else { 15 };
            burst.set(
                (0..count)
                    .map(|i| BurstParticle {
                        x,
                        y,
                        angle: 360.0 / count as f64 * i as f64,
                        icon: theme.decoration((dom::random() * theme.decorations.len() as f64) as usize),
                    })
                    .collect(),
            );

            let mut timers = timers.borrow_mut();
            let clear_burst = burst.clone();
            timers.push(Timeout::new(BURST_MS, move || clear_burst.set(Vec::new())));
            if let Some(navigator) = navigator.clone() {
                let route = option.route;
                timers.push(Timeout::new(NAVIGATE_DELAY_MS, move || navigator.push(&route)));
            }
        })
    };

    let on_portal_hover = {
        let analytics = site.analytics.clone();
        Callback::from(move |_: MouseEvent| {
            let now = js_sys::Date::now();
            let mut last = last_hover.borrow_mut();
            if should_track_hover(*last, now) {
                analytics.track_portal_hover();
                *last = Some(now);
            }
        })
    };

    let on_open_contact = popup.open.reform(|_: MouseEvent| ());

    let options = MENU_OPTIONS.iter().enumerate().map(|(index, option)| {
        let slot = slots.get(index).copied().unwrap_or(OrbitSlot { angle: 0.0, radius: 0.0 });
        let (x, y) = slot.offset();
        let style = if is_mobile {
            String::new()
        } else {
            format!("transform: translate({:.1}px, {:.1}px);", x, y)
        };
        let onclick = on_select.reform(move |_: MouseEvent| index);
        let onmouseenter = {
            let highlighted = highlighted.clone();
            Callback::from(move |_: MouseEvent| highlighted.set(Some(index)))
        };
        let onmouseleave = {
            let highlighted = highlighted.clone();
            Callback::from(move |_: MouseEvent| highlighted.set(None))
        };
        let class = classes!(
            "menu-option",
            (*highlighted == Some(index)).then_some("highlighted")
        );

        html! {
            <button {class} {style} {onclick} {onmouseenter} {onmouseleave}>
                <img src={option.icon} alt={option.label} class="menu-option-icon" />
                <span class="menu-option-label">{ option.label }</span>
            </button>
        }
    });

    html! {
        <div class={classes!("menu-page", theme.name.as_str(), is_mobile.then_some("mobile"))}
            style={theme.css_variables()}>
            <div class="stars" aria-hidden="true">
                { for stars.iter().map(|star| {
                    let style = format!(
                        "top: {:.2}%; left: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.2}s;",
                        star.top, star.left, star.size, star.size, star.duration
                    );
                    html! { <span class="star" {style}></span> }
                }) }
            </div>
            <FloatingParticles theme={theme} count={if is_mobile { 12 } else { 25 }} />

            <div class={classes!("menu-orbit", is_mobile.then_some("menu-list"))}>
                <div class="portal-central" onmouseenter={on_portal_hover}>
                    <h1 class="portal-title">{ theme.title }</h1>
                    <p class="portal-subtitle">{ theme.subtitle }</p>
                    <PortalMessageBanner />
                </div>
                { for options }
            </div>

            <div class="explosion" aria-hidden="true">
                { for burst.iter().map(|particle| {
                    let style = format!(
                        "left: calc(50% + {:.1}px); top: calc(50% + {:.1}px); --angle: {:.1}deg;",
                        particle.x, particle.y, particle.angle
                    );
                    html! { <span class="explosion-particle" {style}>{ particle.icon }</span> }
                }) }
            </div>

            <button class="btn-contacto-flotante" onclick={on_open_contact}>
                { "💬 Agenda tu visita" }
            </button>
            <ContactModal is_open={popup.visible} open_count={popup.manual_opens}
                on_close={popup.close.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_orbit_starts_at_top_and_spaces_evenly() {
        let slots = orbit_layout(6, false);
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].angle, -90.0);
        assert_eq!(slots[1].angle, -30.0);
        assert_eq!(slots[5].angle, 210.0);
        assert!(slots.iter().all(|slot| slot.radius == ORBIT_RADIUS_PX));

        let (x, y) = slots[0].offset();
        assert!(x.abs() < 1e-9);
        assert!((y + ORBIT_RADIUS_PX).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_mobile_layout_has_no_orbit() {
        let slots = orbit_layout(6, true);
        assert!(slots.iter().all(|slot| slot.radius == 0.0 && slot.angle == 0.0));
    }

    #[wasm_bindgen_test]
    fn test_portal_hover_is_throttled() {
        assert!(should_track_hover(None, 1_000.0));
        assert!(!should_track_hover(Some(1_000.0), 5_999.0));
        assert!(should_track_hover(Some(1_000.0), 6_000.0));
    }

    #[wasm_bindgen_test]
    fn test_menu_options_cover_every_page() {
        let routes: Vec<Route> = MENU_OPTIONS.iter().map(|option| option.route).collect();
        assert!(!routes.contains(&Route::Menu));
        assert_eq!(routes.len(), 6);
    }
}
