use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::routes::MainRoute;
use crate::session::{self, SessionState};
use crate::validation::{
    validate_confirm_password, validate_email, validate_name, validate_password,
};

fn first_invalid(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if validate_name(first_name).is_err() || validate_name(last_name).is_err() {
        return Some("First and last name are required");
    }
    if let Err(err) = validate_email(email) {
        return Some(err.message());
    }
    if let Err(err) = validate_password(password) {
        return Some(err.message());
    }
    if let Err(err) = validate_confirm_password(confirm, password) {
        return Some(err.message());
    }
    None
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_session, dispatch) = use_store::<SessionState>();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(message) = first_invalid(
                first_name.trim(),
                last_name.trim(),
                &email,
                &password,
                &confirm,
            ) {
                error_handle.set(Some(message.to_string()));
                return;
            }
            loading_handle.set(true);
            error_handle.set(None);
            let request = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            };
            let dispatch = dispatch.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match session::register(&dispatch, request).await {
                    Ok(()) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="first-name">
                                <span class="label-text">{"First name"}</span>
                            </label>
                            <input
                                id="first-name"
                                class="input input-bordered"
                                type="text"
                                required=true
                                value={(*first_name).clone()}
                                oninput={bind_input(&first_name)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="last-name">
                                <span class="label-text">{"Last name"}</span>
                            </label>
                            <input
                                id="last-name"
                                class="input input-bordered"
                                type="text"
                                required=true
                                value={(*last_name).clone()}
                                oninput={bind_input(&last_name)}
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm-password">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm-password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*confirm).clone()}
                            oninput={bind_input(&confirm)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
