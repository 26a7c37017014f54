use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use gloo::utils::{document, window};
use shared::gallery::{near_page_end, GalleryFeed};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::{FloatingParticles, PageHeader};
use crate::hooks::{use_site, use_theme};
use crate::router::Route;
use crate::services::{dom, Logger};

/// Pause between reserving a batch and showing it
const BATCH_DELAY_MS: u32 = 300;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let site = use_site();
    let theme = use_theme();
    let feed = use_mut_ref(GalleryFeed::default);
    let rerender = use_force_update();

    let load_more = {
        let feed = feed.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            if !feed.borrow_mut().begin_load(dom::is_mobile()) {
                return;
            }
            rerender.force_update();
            let feed = feed.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                TimeoutFuture::new(BATCH_DELAY_MS).await;
                feed.borrow_mut().finish_load();
                rerender.force_update();
            });
        })
    };

    {
        let feed = feed.clone();
        let api = site.api.clone();
        let load_more = load_more.clone();
        use_effect_with((), move |_| {
            let first_batch = load_more.clone();
            spawn_local(async move {
                let images = api.gallery_images().await;
                Logger::debug_with_component("gallery", &format!("Loaded {} gallery images", images.len()));
                *feed.borrow_mut() = GalleryFeed::new(images);
                first_batch.emit(());
            });

            let listener = EventListener::new(&window(), "scroll", move |_| {
                let (viewport, scroll_y, page) = dom::scroll_metrics();
                if near_page_end(viewport, scroll_y, page) {
                    load_more.emit(());
                }
            });
            move || {
                drop(listener);
                dom::set_scroll_locked(false);
            }
        });
    }

    let open = {
        let feed = feed.clone();
        let rerender = rerender.clone();
        Callback::from(move |id: u32| {
            feed.borrow_mut().open(id);
            dom::set_scroll_locked(true);
            rerender.force_update();
        })
    };

    let navigate = {
        let feed = feed.clone();
        let rerender = rerender.clone();
        Callback::from(move |step: LightboxStep| {
            {
                let mut feed = feed.borrow_mut();
                match step {
                    LightboxStep::Previous => feed.previous(),
                    LightboxStep::Next => feed.next(),
                    LightboxStep::Close => {
                        feed.close();
                        dom::set_scroll_locked(false);
                    }
                }
            }
            rerender.force_update();
        })
    };

    let lightbox_open = feed.borrow().selected().is_some();

    {
        let navigate = navigate.clone();
        use_effect_with(lightbox_open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match event.key().as_str() {
                        "Escape" => navigate.emit(LightboxStep::Close),
                        "ArrowLeft" => navigate.emit(LightboxStep::Previous),
                        "ArrowRight" => navigate.emit(LightboxStep::Next),
                        _ => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    let current = feed.borrow().clone();
    let on_close = navigate.reform(|_: MouseEvent| LightboxStep::Close);
    let on_previous = navigate.reform(|e: MouseEvent| {
        e.stop_propagation();
        LightboxStep::Previous
    });
    let on_next = navigate.reform(|e: MouseEvent| {
        e.stop_propagation();
        LightboxStep::Next
    });

    html! {
        <div class="page galeria-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={"Galería"} breadcrumbs={vec![AttrValue::from(Route::Gallery.title())]} />

            <section class="galeria-grid">
                { for current.displayed().iter().map(|image| {
                    let id = image.id;
                    let onclick = open.reform(move |_: MouseEvent| id);
                    html! {
                        <figure class="galeria-item" key={image.id.to_string()} {onclick}>
                            <img src={image.url.clone()} alt={image.alt.clone()} loading="lazy" />
                        </figure>
                    }
                }) }
            </section>

            if current.is_loading() {
                <div class="galeria-cargando">{ "Cargando más fotos..." }</div>
            } else if !current.has_more() && current.total() > 0 {
                <div class="galeria-fin">{ format!("Has visto las {} fotos ✨", current.total()) }</div>
            }

            if let Some(image) = current.selected() {
                <div class="lightbox" onclick={on_close.clone()}>
                    <button class="lightbox-cerrar" onclick={on_close} aria-label="Cerrar">{ "×" }</button>
                    <button class="lightbox-prev" onclick={on_previous} aria-label="Anterior">{ "‹" }</button>
                    <img class="lightbox-imagen" src={image.url.clone()} alt={image.alt.clone()}
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())} />
                    <button class="lightbox-next" onclick={on_next} aria-label="Siguiente">{ "›" }</button>
                    <p class="lightbox-caption">{ image.alt.clone() }</p>
                </div>
            }
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LightboxStep {
    Previous,
    Next,
    Close,
}
