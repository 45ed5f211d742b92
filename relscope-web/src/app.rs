use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ReleaseScopeClient;
use crate::routes::MainRoute;
use crate::session::{self, SessionState};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Root application component.
///
/// On mount this wires the gateway's unauthorized hook into the session
/// store and kicks off the cold-start identity probe; the route guard holds
/// every view on a placeholder until that probe resolves.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();

    {
        let dispatch = dispatch;
        use_effect_with((), move |()| {
            let client = ReleaseScopeClient::shared();
            {
                // Any 401, from any endpoint, drops the session to
                // anonymous; the guard then lands on the login surface.
                let dispatch = dispatch.clone();
                client.set_unauthorized_hook(Some(Callback::from(move |()| {
                    log("Credential invalidated, dropping session");
                    dispatch.set(SessionState::anonymous());
                })));
            }
            spawn_local(async move {
                session::probe(&dispatch).await;
            });
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
