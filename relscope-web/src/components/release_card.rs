use shared::models::ReleaseFeedItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReleaseCardProps {
    pub item: ReleaseFeedItem,
}

/// One entry in the recent-release feed.
#[function_component(ReleaseCard)]
pub fn release_card(props: &ReleaseCardProps) -> Html {
    let item = &props.item;
    let initial: String = item
        .project_name
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default();

    html! {
        <div class="flex items-start gap-4 py-3 border-b border-base-300 last:border-none">
            <div class="avatar placeholder">
                <div class="bg-primary text-primary-content rounded-lg w-10">
                    <span class="text-lg">{ initial }</span>
                </div>
            </div>
            <div class="flex-grow">
                <div class="flex items-center gap-2">
                    <span class="font-medium">{ &item.project_name }</span>
                    if item.prerelease {
                        <span class="badge badge-warning badge-sm">{"Pre-release"}</span>
                    }
                    <span class="badge badge-ghost badge-sm">
                        { item.project_source.label() }
                    </span>
                </div>
                <div class="text-sm text-base-content/70">
                    { format!("Version {}", item.version) }
                </div>
                if let Some(date) = &item.release_date {
                    <div class="text-xs text-base-content/50 mt-1">
                        { date.relative() }
                    </div>
                }
            </div>
        </div>
    }
}
