use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::session::SessionState;

const SAVE_DELAY_MS: u32 = 1_000;
const BANNER_DISMISS_MS: u32 = 3_000;

/// Settings page component
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());

    let first_name = use_state(|| {
        (*user)
            .as_ref()
            .map(|user| user.first_name.clone())
            .unwrap_or_default()
    });
    let last_name = use_state(|| {
        (*user)
            .as_ref()
            .map(|user| user.last_name.clone())
            .unwrap_or_default()
    });
    let email = (*user)
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();
    let saving = use_state(|| false);
    let message = use_state(|| None::<String>);

    let onsubmit = {
        let saving = saving.clone();
        let message = message.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            saving.set(true);
            let saving = saving.clone();
            let message = message.clone();
            // TODO(settings): wire profile updates through the gateway once
            // the backend grows an account-update endpoint.
            Timeout::new(SAVE_DELAY_MS, move || {
                saving.set(false);
                message.set(Some("Settings saved!".to_string()));
                let message = message.clone();
                Timeout::new(BANNER_DISMISS_MS, move || message.set(None)).forget();
            })
            .forget();
        })
    };

    let on_first_name_change = {
        let first_name = first_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                first_name.set(input.value());
            }
        })
    };

    let on_last_name_change = {
        let last_name = last_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                last_name.set(input.value());
            }
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">{"Settings"}</h1>
                    <p class="text-base-content/70">{"Manage your account and preferences"}</p>
                </div>
                <ThemeSwitcher />
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title mb-4">{"Profile"}</h2>

                    if let Some(text) = &*message {
                        <div class="alert alert-success">
                            <span>{text.clone()}</span>
                        </div>
                    }

                    <form onsubmit={onsubmit}>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="first-name">
                                    <span class="label-text">{"First Name"}</span>
                                </label>
                                <input
                                    id="first-name"
                                    class="input input-bordered"
                                    type="text"
                                    value={(*first_name).clone()}
                                    oninput={on_first_name_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="last-name">
                                    <span class="label-text">{"Last Name"}</span>
                                </label>
                                <input
                                    id="last-name"
                                    class="input input-bordered"
                                    type="text"
                                    value={(*last_name).clone()}
                                    oninput={on_last_name_change}
                                />
                            </div>
                        </div>
                        <div class="form-control mt-4">
                            <label class="label" for="email">
                                <span class="label-text">{"Email"}</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered bg-base-100"
                                type="email"
                                disabled=true
                                value={email}
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary mt-6"
                            disabled={*saving}
                        >
                            {if *saving { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                </div>
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title mb-4">{"Appearance"}</h2>
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="font-medium">{"Dark Mode"}</p>
                            <p class="text-sm text-base-content/70">
                                {"Toggle between light and dark theme"}
                            </p>
                        </div>
                        <ThemeSwitcher />
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title mb-4">{"Notifications"}</h2>
                    <div class="space-y-3">
                        <label class="flex items-center gap-3 cursor-pointer">
                            <input type="checkbox" class="checkbox" checked=true />
                            <span>{"Email notifications for new releases"}</span>
                        </label>
                        <label class="flex items-center gap-3 cursor-pointer">
                            <input type="checkbox" class="checkbox" />
                            <span>{"Email notifications for pre-releases"}</span>
                        </label>
                        <label class="flex items-center gap-3 cursor-pointer">
                            <input type="checkbox" class="checkbox" checked=true />
                            <span>{"Weekly digest email"}</span>
                        </label>
                    </div>
                </div>
            </div>
        </div>
    }
}
