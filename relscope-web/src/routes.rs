use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::containers::layout::Layout;
use crate::pages::{
    DashboardPage, ErrorPage, LoginPage, ProjectDetailPage, ProjectsPage, RegisterPage,
    SettingsPage,
};
use crate::session::SessionState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Sidebar label, for the routes that appear in the navigation.
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Dashboard"),
            Self::Projects => Some("Projects"),
            Self::Settings => Some("Settings"),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: MainRoute,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_selector(|state: &SessionState| state.clone());

    // Hold every route neutral until the cold-start probe resolves, so no
    // protected content flashes for a credential that turns out invalid.
    if session.loading {
        return html! { <Loading /> };
    }
    let is_authenticated = session.is_authenticated();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Register => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        MainRoute::Home => guarded(
            is_authenticated,
            MainRoute::Home,
            html! { <DashboardPage /> },
        ),
        MainRoute::Projects => guarded(
            is_authenticated,
            MainRoute::Projects,
            html! { <ProjectsPage /> },
        ),
        MainRoute::ProjectDetail { id } => {
            let route = MainRoute::ProjectDetail { id: id.clone() };
            guarded(is_authenticated, route, html! { <ProjectDetailPage {id} /> })
        }
        MainRoute::Settings => guarded(
            is_authenticated,
            MainRoute::Settings,
            html! { <SettingsPage /> },
        ),
        MainRoute::NotFound => guarded(
            is_authenticated,
            MainRoute::NotFound,
            html! { <ErrorPage /> },
        ),
    }
}

/// Render a protected page inside the shell, or bounce to the login
/// surface, discarding whatever navigation was in flight.
fn guarded(is_authenticated: bool, route: MainRoute, page: Html) -> Html {
    if !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    html! { <Layout current_route={route}>{page}</Layout> }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <RouteView {route} /> }
}
