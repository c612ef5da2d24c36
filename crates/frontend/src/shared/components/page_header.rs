use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::Icon;
use leptos::prelude::*;

/// PageHeader component - title block at the top of a detail page
///
/// Optional leading icon, subtitle and a status badge on the right.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional)] icon: Option<Icon>,

    /// Badge text, rendered with a status dot
    #[prop(optional, into)]
    badge: Option<String>,

    /// Badge variant, see [`Badge`]
    #[prop(optional, into)]
    badge_variant: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon.map(|i| view! { <div class="page-header__icon">{i.view(24)}</div> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            {badge.map(|text| view! {
                <div class="page-header__actions">
                    <Badge variant=badge_variant dot=true>{text}</Badge>
                </div>
            })}
        </div>
    }
}
