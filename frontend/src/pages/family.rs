use chrono::{Datelike, Local};
use shared::documents::{default_calendar, document_count, school_calendars, DocumentLibrary};
use shared::{Document, DocumentCategory};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ContactChannels, FloatingParticles, PageHeader};
use crate::hooks::{use_contact_info, use_site, use_theme};
use crate::router::Route;
use crate::services::{dom, Logger};

const COMPONENT: &str = "family";

fn open_or_warn(url: &str) {
    if let Err(e) = dom::open_external(url) {
        Logger::warn_with_component(COMPONENT, &format!("Could not open {}: {}", url, e));
    }
}

#[derive(Properties, PartialEq)]
struct CategoryProps {
    category: DocumentCategory,
    on_open: Callback<Document>,
}

#[function_component(CategorySection)]
fn category_section(props: &CategoryProps) -> Html {
    let category = &props.category;

    html! {
        <section class="categoria">
            <div class="categoria-header">
                <span class="categoria-icono">{ category.icon.clone() }</span>
                <div>
                    <h3>{ category.title.clone() }</h3>
                    <p>{ category.description.clone() }</p>
                </div>
            </div>
            <div class="documentos-grid">
                { for category.documents.iter().map(|document| {
                    let onclick = {
                        let document = document.clone();
                        props.on_open.reform(move |_: MouseEvent| document.clone())
                    };
                    html! {
                        <button class="documento-card" key={document.id.to_string()} {onclick}>
                            <span class="documento-icono">{ document.icon.clone() }</span>
                            <span class="documento-titulo">{ document.title.clone() }</span>
                            <span class="documento-descripcion">{ document.description.clone() }</span>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(Family)]
pub fn family() -> Html {
    let site = use_site();
    let theme = use_theme();
    let contact_info = use_contact_info();

    let library = use_state(DocumentLibrary::default);
    let query = use_state(String::new);

    let current_month0 = use_memo((), |_| Local::now().month0());
    let calendars = use_memo(*current_month0, |month0| school_calendars(*month0));
    let selected_month = use_state({
        let calendars = calendars.clone();
        let month0 = *current_month0;
        move || default_calendar(&calendars, month0).map(|calendar| calendar.index)
    });

    {
        let library = library.clone();
        let api = site.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let manifest = api.document_categories().await;
                library.set(DocumentLibrary::new(manifest));
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_clear = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(String::new()))
    };

    let on_open_document = {
        let config = site.config.clone();
        Callback::from(move |document: Document| {
            open_or_warn(&config.asset(&document.asset_path()));
        })
    };

    let on_portal = {
        let url = site.config.parents_portal_url.clone();
        Callback::from(move |_: MouseEvent| open_or_warn(&url))
    };

    let results = library.search(&query);
    let total = document_count(&results);
    let selected = (*selected_month).and_then(|index| calendars.iter().find(|c| c.index == index));

    html! {
        <div class="page familia-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={"Familia Lumen"} breadcrumbs={vec![AttrValue::from(Route::Family.title())]} />

            <section class="portal-padres">
                <h2>{ "Portal de padres" }</h2>
                <p>{ "Consulta el progreso, las novedades y los pagos de tu hijo(a)." }</p>
                <button class="btn btn-primary" onclick={on_portal}>{ "Ingresar al portal 🔐" }</button>
            </section>

            <section class="documentos">
                <h2>{ "Documentos" }</h2>
                <div class="buscador">
                    <input type="search" placeholder="Buscar documentos..." value={(*query).clone()}
                        oninput={on_search} />
                    if !query.trim().is_empty() {
                        <button class="buscador-limpiar" onclick={on_clear} aria-label="Limpiar">{ "×" }</button>
                    }
                </div>
                <p class="documentos-total">{ format!("{} documentos disponibles", total) }</p>
                if results.is_empty() && !query.trim().is_empty() {
                    <p class="documentos-vacio">{ "No encontramos documentos con ese término." }</p>
                }
                { for results.into_iter().map(|category| html! {
                    <CategorySection key={category.id.clone()} category={category.clone()} on_open={on_open_document.clone()} />
                }) }
            </section>

            <section class="calendarios">
                <h2>{ "Calendario escolar" }</h2>
                <div class="calendarios-meses">
                    { for calendars.iter().map(|calendar| {
                        let index = calendar.index;
                        let onclick = {
                            let selected_month = selected_month.clone();
                            let available = calendar.available;
                            Callback::from(move |_: MouseEvent| {
                                if available {
                                    selected_month.set(Some(index));
                                }
                            })
                        };
                        let class = classes!(
                            "mes",
                            (*selected_month == Some(index)).then_some("seleccionado"),
                            (!calendar.available).then_some("no-disponible")
                        );
                        html! {
                            <button {class} {onclick} disabled={!calendar.available}>{ calendar.name }</button>
                        }
                    }) }
                </div>
                if let Some(calendar) = selected {
                    <img class="calendario-imagen" src={site.config.asset(&calendar.image)}
                        alt={format!("Calendario de {}", calendar.name)} />
                }
            </section>

            <section class="familia-contacto">
                <h2>{ "¿Necesitas ayuda?" }</h2>
                <ContactChannels info={contact_info} show_social={false} />
            </section>
        </div>
    }
}
