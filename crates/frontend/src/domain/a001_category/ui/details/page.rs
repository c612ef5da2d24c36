//! Category view page
//!
//! Thin wrapper that:
//! - Creates ViewModel and reloads it whenever the `:id` param changes
//! - Switches between loader, error state and the record
//! - Renders the record read-only through the shared cards

use super::model::{self, VIEW_TIPS};
use super::view_model::CategoryDetailsVm;
use crate::routes::paths;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{
    ErrorState, ExpandableCard, ImageCarousel, Loader, PageHeader, QuickTip, TruncatedText,
};
use crate::shared::date_utils::{format_date_time, DateFormat};
use crate::shared::icons::Icon;
use crate::system::auth::context::use_session;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

#[component]
pub fn CategoryView() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let vm = CategoryDetailsVm::new();

    let category_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    Effect::new(move |_| {
        let id = category_id.get();
        vm.load(id, session.token());
    });

    view! {
        <div class="page category-view">
            {move || {
                if vm.loading.get() {
                    view! { <Loader text="Loading category..." /> }.into_any()
                } else if let Some(err) = vm.error.get() {
                    view! {
                        <ErrorState
                            error=err
                            title="Failed to load category"
                            on_retry=Callback::new(move |_| vm.refetch(session.token()))
                        />
                    }
                    .into_any()
                } else if let Some(category) = vm.category.get() {
                    view! { <CategoryDetails id=category_id.get_untracked() category=category /> }
                        .into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CategoryDetails(id: String, category: Category) -> impl IntoView {
    let navigate = use_navigate();
    let to_list = {
        let navigate = navigate.clone();
        Callback::new(move |_| navigate(paths::CATEGORIES, NavigateOptions::default()))
    };
    let to_edit = {
        let target = paths::category_edit(&id);
        Callback::new(move |_| navigate(&target, NavigateOptions::default()))
    };

    let parent_name = category.parent_display_name();
    let parent_id = category.parent_id().map(str::to_string);
    let subtitle = model::subtitle(&category.name);
    let description = category
        .has_description()
        .then(|| category.description.clone())
        .flatten();
    let Category {
        name,
        images,
        is_active,
        created_at,
        updated_at,
        ..
    } = category;

    view! {
        <PageHeader
            title="View Category"
            subtitle=subtitle
            icon=Icon::Eye
            badge=model::short_id(&id)
            badge_variant="success"
        />

        <div class="detail-card">
            <div class="detail-card__columns">
                <section class="detail-card__column">
                    <h2 class="detail-card__section-title">
                        {Icon::Image.view(20)}
                        <span>"Category Images"</span>
                    </h2>
                    <ImageCarousel images=images />
                </section>

                <section class="detail-card__column">
                    <h2 class="detail-card__section-title">
                        {Icon::Folder.view(20)}
                        <span>"Basic Information"</span>
                    </h2>

                    <div class="detail-card__stack">
                        <ExpandableCard title="Category Name" default_expanded=true icon=Icon::Folder>
                            <TruncatedText text=name.clone() max_length=100 class="detail-card__value" />
                        </ExpandableCard>

                        <ExpandableCard title="Parent Category" default_expanded=true icon=Icon::FolderUp>
                            <TruncatedText text=parent_name.clone() max_length=100 class="detail-card__value" />
                            {parent_id.clone().map(|pid| view! {
                                <div class="detail-card__meta">
                                    "Parent ID: "
                                    <A href=paths::category_view(&pid) attr:class="detail-card__link">{pid.clone()}</A>
                                </div>
                            })}
                        </ExpandableCard>

                        <ExpandableCard title="Status" default_expanded=true icon=Icon::AlertCircle>
                            <StatusBadge active=is_active />
                            <div class="detail-card__meta">{model::status_note(is_active)}</div>
                        </ExpandableCard>

                        <ExpandableCard title="Description" default_expanded=true icon=Icon::Edit>
                            <DescriptionBody description=description.clone() />
                        </ExpandableCard>

                        <ExpandableCard title="Timestamps" default_expanded=true icon=Icon::Calendar>
                            <div class="detail-card__grid">
                                <Timestamp label="Created At" value=created_at.clone() />
                                <Timestamp label="Updated At" value=updated_at.clone() />
                            </div>
                        </ExpandableCard>
                    </div>
                </section>
            </div>

            <div class="detail-card__actions">
                <Button variant="secondary" class="detail-card__action" on_click=to_list>
                    "Back to Categories"
                </Button>
                <Button variant="primary" class="detail-card__action" icon=Icon::Edit on_click=to_edit>
                    "Edit Category"
                </Button>
            </div>

            <p class="detail-card__notice">
                {Icon::AlertCircle.view(16)}
                "View mode - No changes can be made here"
            </p>
        </div>

        <QuickTip title="Category View Tips" tips=VIEW_TIPS.to_vec() class="category-view__tips" />
    }
}

/// `description` is `None` unless the category has non-empty text.
#[component]
fn DescriptionBody(description: Option<String>) -> impl IntoView {
    match description {
        Some(text) => view! {
            <TruncatedText
                text=text
                max_length=500
                lines=6
                expand_label="Read full description"
                collapse_label="Show less"
            />
        }
        .into_any(),
        None => view! { <p class="detail-card__empty">"No description provided"</p> }.into_any(),
    }
}

/// Absolute time plus the relative form underneath, in the session zone.
#[component]
fn Timestamp(label: &'static str, value: Option<String>) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="timestamp">
            <div class="timestamp__label">
                {Icon::Clock.view(12)}
                <span>{label}</span>
            </div>
            {match value {
                Some(ts) => {
                    let ts = StoredValue::new(ts);
                    view! {
                        <div class="timestamp__value">
                            {move || ts.with_value(|t| format_date_time(Some(t.as_str()), DateFormat::DateTime, session.tz()))}
                        </div>
                        <div class="timestamp__relative">
                            {move || ts.with_value(|t| format!("({})", format_date_time(Some(t.as_str()), DateFormat::Ago, session.tz())))}
                        </div>
                    }
                    .into_any()
                }
                None => view! { <span class="timestamp__empty">"N/A"</span> }.into_any(),
            }}
        </div>
    }
}
