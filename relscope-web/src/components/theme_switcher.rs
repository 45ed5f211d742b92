use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const THEME_KEY: &str = "relscope.theme";

fn apply_theme(theme: &str) {
    if let Some(window) = window() {
        if let Some(document) = window.document() {
            if let Some(html_element) = document.document_element() {
                html_element
                    .set_attribute("data-theme", theme)
                    .unwrap_or_default();
            }
        }
    }
}

/// Light/dark theme toggle, persisted across reloads.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let current_theme = use_state(|| "light".to_string());

    // Saved preference wins; otherwise fall back to the system scheme.
    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let stored: Option<String> = LocalStorage::get(THEME_KEY).ok();
            let theme = stored.unwrap_or_else(|| {
                let system_prefers_dark = window()
                    .and_then(|window| {
                        window
                            .match_media("(prefers-color-scheme: dark)")
                            .ok()
                            .flatten()
                    })
                    .is_some_and(|media_query| media_query.matches());
                if system_prefers_dark { "dark" } else { "light" }.to_string()
            });
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: MouseEvent| {
            let new_theme = if *current_theme == "dark" {
                "light"
            } else {
                "dark"
            };
            apply_theme(new_theme);
            if let Err(err) = LocalStorage::set(THEME_KEY, new_theme) {
                log::warn!("failed to persist theme: {err}");
            }
            current_theme.set(new_theme.to_string());
        })
    };

    let icon = if *current_theme == "dark" {
        IconId::HeroiconsOutlineSun
    } else {
        IconId::HeroiconsOutlineMoon
    };

    html! {
        <button class="btn btn-ghost btn-circle" onclick={toggle_theme} title="Toggle theme">
            <Icon icon_id={icon} class="w-5 h-5" />
        </button>
    }
}
