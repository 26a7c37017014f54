use yew::prelude::*;

use crate::components::{FloatingParticles, PageHeader};
use crate::content::{FEATURES, TEAM, VALUES};
use crate::hooks::use_theme;
use crate::router::Route;

#[function_component(About)]
pub fn about() -> Html {
    let theme = use_theme();

    html! {
        <div class="page nosotros-page" style={theme.css_variables()}>
            <FloatingParticles theme={theme} count={15} />
            <PageHeader title={Route::About.title()} breadcrumbs={vec![AttrValue::from(Route::About.title())]} />

            <section class="nosotros-intro">
                <h2>{ "Bienvenidos a Liceo Lumen" }</h2>
                <p>
                    { "Un jardín infantil donde cada niño brilla con luz propia. Acompañamos a las familias \
                       en los primeros años con amor, respeto y una educación que despierta la curiosidad." }
                </p>
            </section>

            <section class="valores">
                <h2>{ "Nuestros valores" }</h2>
                <div class="valores-grid">
                    { for VALUES.iter().map(|value| html! {
                        <div class="valor-card" style={format!("--valor-color: {};", value.color)}>
                            <span class="valor-icon">{ value.icon }</span>
                            <h3>{ value.title }</h3>
                            <p>{ value.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="caracteristicas">
                <h2>{ "¿Por qué Lumen?" }</h2>
                <div class="caracteristicas-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="caracteristica-card">
                            <span class="caracteristica-icon">{ feature.icon }</span>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="equipo">
                <h2>{ "Nuestro equipo" }</h2>
                <div class="equipo-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="equipo-card">
                            <span class="equipo-emoji">{ member.emoji }</span>
                            <h3>{ member.name }</h3>
                            <p>{ member.description }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
