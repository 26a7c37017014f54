use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{About, Admission, Contact, Family, Gallery, Menu, Programs};

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[not_found]
    #[at("/")]
    Menu,
    #[at("/nosotros")]
    About,
    #[at("/programas")]
    Programs,
    #[at("/admision")]
    Admission,
    #[at("/galeria")]
    Gallery,
    #[at("/familia-lumen")]
    Family,
    #[at("/contacto")]
    Contact,
}

impl Route {
    /// Breadcrumb label of the page
    pub fn title(&self) -> &'static str {
        match self {
            Route::Menu => "Inicio",
            Route::About => "Nosotros",
            Route::Programs => "Programas",
            Route::Admission => "Admisión",
            Route::Gallery => "Galería",
            Route::Family => "Familia Lumen",
            Route::Contact => "Contacto",
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Menu => html! { <Menu /> },
        Route::About => html! { <About /> },
        Route::Programs => html! { <Programs /> },
        Route::Admission => html! { <Admission /> },
        Route::Gallery => html! { <Gallery /> },
        Route::Family => html! { <Family /> },
        Route::Contact => html! { <Contact /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_route_paths() {
        assert_eq!(Route::Family.to_path(), "/familia-lumen");
        assert_eq!(Route::Admission.to_path(), "/admision");
        assert_eq!(Route::recognize("/contacto"), Some(Route::Contact));
    }

    #[wasm_bindgen_test]
    fn test_unknown_path_renders_menu() {
        assert_eq!(Route::recognize("/no-existe"), Some(Route::Menu));
    }
}
