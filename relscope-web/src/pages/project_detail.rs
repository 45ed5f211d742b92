use shared::models::{ProjectDetail, Release};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::ReleaseScopeClient;
use crate::routes::MainRoute;
use crate::subscriptions;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailPageProps {
    /// Route-captured project id, parsed before any fetch.
    pub id: String,
}

/// Project detail page component
#[function_component(ProjectDetailPage)]
pub fn project_detail_page(props: &ProjectDetailPageProps) -> Html {
    let project = use_state(|| None::<ProjectDetail>);
    let releases = use_state(Vec::<Release>::new);
    let loading = use_state(|| true);
    let subscribed = use_state(|| false);
    let toggling = use_state(|| false);

    // A non-numeric path segment never reaches the backend.
    let parsed_id: Option<i64> = props.id.parse().ok();

    {
        let project = project.clone();
        let releases = releases.clone();
        let loading = loading.clone();
        let subscribed = subscribed.clone();
        use_effect_with(parsed_id, move |&maybe_id| {
            let Some(id) = maybe_id else {
                loading.set(false);
                return;
            };
            spawn_local(async move {
                let client = ReleaseScopeClient::shared();
                // Detail and release history are independent fetches; the
                // detail payload seeds the subscription toggle.
                match client.get_project(id).await {
                    Ok(detail) => {
                        subscribed.set(detail.is_subscribed);
                        project.set(Some(detail));
                    }
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to fetch project: {err}");
                        }
                    }
                }
                match client.project_releases(id).await {
                    Ok(list) => releases.set(list),
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to fetch releases: {err}");
                        }
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_toggle = {
        let subscribed_handle = subscribed.clone();
        let toggling_handle = toggling.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(project_id) = parsed_id else {
                return;
            };
            let current = *subscribed_handle;
            toggling_handle.set(true);
            let subscribed_ref = subscribed_handle.clone();
            let toggling_ref = toggling_handle.clone();
            spawn_local(async move {
                let client = ReleaseScopeClient::shared();
                // Local state flips only after the backend call succeeds;
                // on failure the button visibly keeps its old state.
                match subscriptions::toggle(&client, project_id, current).await {
                    Ok(next) => subscribed_ref.set(next),
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to toggle subscription: {err}");
                        }
                    }
                }
                toggling_ref.set(false);
            });
        })
    };

    if *loading {
        return html! {
            <div class="flex justify-center p-12">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        };
    }

    let Some(detail) = &*project else {
        return html! {
            <div class="card bg-base-200">
                <div class="card-body items-center text-center">
                    <h3 class="text-lg font-medium">{"Project not found"}</h3>
                </div>
            </div>
        };
    };

    let is_subscribed = *subscribed;
    let toggle_classes = if is_subscribed {
        "btn btn-secondary"
    } else {
        "btn btn-primary"
    };

    html! {
        <div class="space-y-6">
            <Link<MainRoute> to={MainRoute::Projects} classes="link text-base-content/70">
                {"← Back to Projects"}
            </Link<MainRoute>>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <div class="flex items-start justify-between">
                        <div>
                            <h1 class="text-2xl font-bold">{ &detail.project.name }</h1>
                            <span class="badge badge-ghost mt-2">
                                { detail.project.source.label() }
                            </span>
                            if let Some(description) = &detail.project.description {
                                <p class="mt-4 text-base-content/70">{ description.clone() }</p>
                            }
                        </div>
                        <button
                            class={toggle_classes}
                            onclick={on_toggle}
                            disabled={*toggling}
                        >
                            {if is_subscribed { "✓ Subscribed" } else { "Subscribe" }}
                        </button>
                    </div>
                </div>
            </div>

            <h2 class="text-xl font-semibold">{"Releases"}</h2>

            if releases.is_empty() {
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <p class="text-base-content/70">{"No releases found"}</p>
                    </div>
                </div>
            } else {
                <div class="space-y-4">
                    { for releases.iter().map(render_release) }
                </div>
            }
        </div>
    }
}

fn render_release(release: &Release) -> Html {
    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div>
                        <div class="flex items-center gap-2">
                            <h3 class="text-lg font-semibold">{ &release.version }</h3>
                            if release.prerelease {
                                <span class="badge badge-warning badge-sm">{"Pre-release"}</span>
                            }
                        </div>
                        if let Some(date) = &release.release_date {
                            <p class="text-sm text-base-content/70 mt-1">
                                { format!("Released {}", date.relative()) }
                            </p>
                        }
                    </div>
                    if let Some(tag) = &release.tag_name {
                        <span class="text-sm text-base-content/70">
                            { format!("Tag: {tag}") }
                        </span>
                    }
                </div>
                if let Some(snippet) = release.changelog_snippet() {
                    <pre class="mt-4 p-4 bg-base-100 rounded whitespace-pre-wrap text-sm">
                        { snippet }
                    </pre>
                }
            </div>
        </div>
    }
}
