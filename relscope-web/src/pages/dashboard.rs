use shared::models::ReleaseFeedItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::api::ReleaseScopeClient;
use crate::components::release_card::ReleaseCard;
use crate::routes::MainRoute;

const FEED_LIMIT: u32 = 10;
const FEED_DAYS: u32 = 7;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let releases = use_state(Vec::<ReleaseFeedItem>::new);
    let subscription_count = use_state(|| 0usize);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let releases = releases.clone();
        let subscription_count = subscription_count.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ReleaseScopeClient::shared();
                // The feed and the subscription list are independent
                // fetches; only the list's count is used on this page.
                match client.release_feed(FEED_LIMIT, FEED_DAYS).await {
                    Ok(feed) => releases.set(feed),
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to fetch release feed: {err}");
                            error.set(Some("Failed to load the dashboard".to_string()));
                        }
                    }
                }
                match client.list_subscriptions().await {
                    Ok(subscriptions) => subscription_count.set(subscriptions.len()),
                    Err(err) => {
                        if !err.is_unauthorized() {
                            log::error!("failed to fetch subscriptions: {err}");
                        }
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="flex justify-center p-12">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{"Dashboard"}</h1>
                <p class="text-base-content/70">{"Your release monitoring overview"}</p>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineFolder} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Monitored Projects"}</div>
                    // TODO(dashboard): fetch the project total for this card.
                    <div class="stat-value text-primary">{ "0" }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Icon icon_id={IconId::HeroiconsOutlineTag} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Releases This Week"}</div>
                    <div class="stat-value text-secondary">{ releases.len() }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Subscriptions"}</div>
                    <div class="stat-value text-success">{ *subscription_count }</div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">{"Recent Releases"}</h2>
                        <Link<MainRoute> to={MainRoute::Projects} classes="btn btn-secondary btn-sm">
                            {"View All"}
                        </Link<MainRoute>>
                    </div>

                    if releases.is_empty() {
                        <div class="text-center py-10">
                            <h3 class="text-lg font-medium">{"No releases yet"}</h3>
                            <p class="text-base-content/70">
                                {"Subscribe to some projects to see their releases here"}
                            </p>
                            <Link<MainRoute> to={MainRoute::Projects} classes="btn btn-primary mt-4">
                                {"Browse Projects"}
                            </Link<MainRoute>>
                        </div>
                    } else {
                        <div>
                            { for releases.iter().map(|item| html! {
                                <ReleaseCard item={item.clone()} />
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
