use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::routes::MainRoute;
use crate::session::{self, SessionState};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

fn nav_icon(route: &MainRoute) -> IconId {
    match route {
        MainRoute::Projects => IconId::HeroiconsOutlineFolder,
        MainRoute::Settings => IconId::HeroiconsOutlineCog6Tooth,
        _ => IconId::HeroiconsOutlineHome,
    }
}

/// Authenticated shell: sidebar navigation around the routed page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let navigator = use_navigator();
    let (session, dispatch) = use_store::<SessionState>();
    let user = session.user.clone();

    let on_logout = {
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            session::logout(&dispatch);
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Login);
            }
        })
    };

    let nav_items = MainRoute::iter()
        .filter_map(|route| route.nav_label().map(|label| (route, label)))
        .map(|(route, label)| {
            let active = props.current_route.as_ref() == Some(&route);
            html! {
                <li>
                    <Link<MainRoute>
                        to={route.clone()}
                        classes={classes!(active.then_some("active"))}
                    >
                        <Icon icon_id={nav_icon(&route)} class="w-5 h-5" />
                        { label }
                    </Link<MainRoute>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="min-h-screen flex bg-base-100">
            <aside class="w-64 bg-base-200 p-4 flex flex-col">
                <div class="text-xl font-bold mb-6 px-2">{"ReleaseScope"}</div>
                <ul class="menu menu-vertical gap-1 flex-grow px-0">
                    { nav_items }
                </ul>
                <div class="border-t border-base-300 pt-4">
                    <p class="text-sm text-base-content/70">{"Signed in as"}</p>
                    if let Some(user) = user {
                        <p class="font-medium">{ user.full_name() }</p>
                    }
                    <button class="btn btn-secondary btn-sm w-full mt-4" onclick={on_logout}>
                        {"Sign out"}
                    </button>
                </div>
            </aside>
            <main class="flex-grow p-6">
                { props.children.clone() }
            </main>
        </div>
    }
}
