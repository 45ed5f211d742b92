use std::str::FromStr;

use shared::models::{Project, ProjectCreate, ReleaseSource};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::ReleaseScopeClient;
use crate::routes::MainRoute;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Projects page component
#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_state(Vec::<Project>::new);
    let loading = use_state(|| true);
    let show_modal = use_state(|| false);
    let refresh = use_state(|| 0u32);

    let name = use_state(String::new);
    let source = use_state(|| ReleaseSource::Github);
    let repo_url = use_state(String::new);
    let description = use_state(String::new);
    let submitting = use_state(|| false);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                let client = ReleaseScopeClient::shared();
                match client.list_projects().await {
                    Ok(list) => projects.set(list),
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to fetch projects: {err}");
                        }
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(true))
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(false))
    };

    let onsubmit = {
        let name_handle = name.clone();
        let source_handle = source.clone();
        let repo_url_handle = repo_url.clone();
        let description_handle = description.clone();
        let submitting_handle = submitting.clone();
        let show_modal = show_modal.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = ProjectCreate {
                name: name_handle.trim().to_string(),
                source: *source_handle,
                repo_url: optional(&repo_url_handle),
                description: optional(&description_handle),
            };
            submitting_handle.set(true);
            let name_ref = name_handle.clone();
            let repo_url_ref = repo_url_handle.clone();
            let description_ref = description_handle.clone();
            let submitting_ref = submitting_handle.clone();
            let show_modal = show_modal.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let client = ReleaseScopeClient::shared();
                match client.create_project(&payload).await {
                    Ok(_) => {
                        show_modal.set(false);
                        name_ref.set(String::new());
                        repo_url_ref.set(String::new());
                        description_ref.set(String::new());
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to create project: {err}");
                        }
                    }
                }
                submitting_ref.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_source_change = {
        let source = source.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = ReleaseSource::from_str(&select.value()) {
                    source.set(parsed);
                }
            }
        })
    };

    let on_repo_url_change = {
        let repo_url = repo_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                repo_url.set(input.value());
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    let is_submitting = *submitting;

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">{"Projects"}</h1>
                    <p class="text-base-content/70">
                        {"Monitor releases from your favorite projects"}
                    </p>
                </div>
                <button class="btn btn-primary" onclick={open_modal.clone()}>
                    {"+ Add Project"}
                </button>
            </div>

            if *loading {
                <div class="flex justify-center p-12">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            } else if projects.is_empty() {
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <h3 class="text-lg font-medium">{"No projects yet"}</h3>
                        <p class="text-base-content/70">
                            {"Add your first project to start monitoring releases"}
                        </p>
                        <button class="btn btn-primary mt-4" onclick={open_modal}>
                            {"Add Project"}
                        </button>
                    </div>
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for projects.iter().map(|project| {
                        let route = MainRoute::ProjectDetail { id: project.id.to_string() };
                        html! {
                            <Link<MainRoute> to={route} classes="card bg-base-200 shadow hover:shadow-lg transition-shadow">
                                <div class="card-body">
                                    <h2 class="card-title">{ &project.name }</h2>
                                    <span class="badge badge-ghost">{ project.source.label() }</span>
                                    if let Some(description) = &project.description {
                                        <p class="text-sm text-base-content/70">{ description.clone() }</p>
                                    }
                                </div>
                            </Link<MainRoute>>
                        }
                    }) }
                </div>
            }

            if *show_modal {
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h2 class="text-lg font-bold mb-4">{"Add Project"}</h2>
                        <form onsubmit={onsubmit}>
                            <div class="form-control">
                                <label class="label" for="project-name">
                                    <span class="label-text">{"Project Name"}</span>
                                </label>
                                <input
                                    id="project-name"
                                    class="input input-bordered"
                                    type="text"
                                    required=true
                                    placeholder="e.g., React, Node.js"
                                    value={(*name).clone()}
                                    oninput={on_name_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="project-source">
                                    <span class="label-text">{"Source"}</span>
                                </label>
                                <select
                                    id="project-source"
                                    class="select select-bordered"
                                    onchange={on_source_change}
                                >
                                    { for ReleaseSource::all().iter().map(|candidate| html! {
                                        <option
                                            value={candidate.as_str()}
                                            selected={*candidate == *source}
                                        >
                                            { candidate.label() }
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="project-repo-url">
                                    <span class="label-text">{"Repository URL"}</span>
                                </label>
                                <input
                                    id="project-repo-url"
                                    class="input input-bordered"
                                    type="url"
                                    placeholder="e.g., https://github.com/facebook/react"
                                    value={(*repo_url).clone()}
                                    oninput={on_repo_url_change}
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="project-description">
                                    <span class="label-text">{"Description (optional)"}</span>
                                </label>
                                <textarea
                                    id="project-description"
                                    class="textarea textarea-bordered"
                                    rows="3"
                                    placeholder="Brief description of the project"
                                    value={(*description).clone()}
                                    oninput={on_description_change}
                                />
                            </div>
                            <div class="flex gap-4 mt-6">
                                <button
                                    type="submit"
                                    class="btn btn-primary flex-1"
                                    disabled={is_submitting}
                                >
                                    {if is_submitting { "Adding..." } else { "Add Project" }}
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-secondary flex-1"
                                    onclick={close_modal}
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
