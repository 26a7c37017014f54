use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_theme;
use crate::router::Route;
use crate::services::dom;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub breadcrumbs: Vec<AttrValue>,
    #[prop_or(Route::Menu)]
    pub back_to: Route,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let theme = use_theme();
    let particles = use_memo((), move |_| {
        (0..5)
            .map(|_| {
                let index = (dom::random() * theme.decorations.len() as f64) as usize;
                theme.decoration(index)
            })
            .collect::<Vec<_>>()
    });

    html! {
        <header class="header-web" style={theme.css_variables()}>
            <div class="header-particles">
                { for particles.iter().enumerate().map(|(i, particle)| html! {
                    <span class={classes!("header-particle", format!("p{}", i + 1))}>{ *particle }</span>
                }) }
            </div>
            <div class="header-content">
                <Link<Route> to={props.back_to} classes="btn-volver">
                    { "← Volver" }
                </Link<Route>>
                <h1 class="header-title">{ props.title.to_string() }</h1>
                <nav class="breadcrumbs">
                    <Link<Route> to={Route::Menu}>{ Route::Menu.title() }</Link<Route>>
                    { for props.breadcrumbs.iter().map(|crumb| html! {
                        <>
                            <span class="separator">{ "/" }</span>
                            <span class="crumb">{ crumb.to_string() }</span>
                        </>
                    }) }
                </nav>
            </div>
        </header>
    }
}
