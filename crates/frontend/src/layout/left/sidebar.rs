//! Sidebar component with collapsible menu groups
//!
//! Local state: the expanded group and pointer hover. The pinned-open flag
//! lives in [`AppGlobalContext`] because the top bar and overlay toggle it.

use super::nav::{
    auto_expanded_group, badge_label, is_narrow_viewport, is_wide, nav_items, NavClick, NavItem,
};
use crate::layout::global_context::use_global_context;
use crate::shared::icons::Icon;
use leptos::ev;
use leptos::html::Aside;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

/// Current `innerWidth`; treated as desktop when unavailable.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX)
}

fn render_badge(label: Option<String>) -> impl IntoView {
    label.map(|text| view! { <span class="app-sidebar__badge">{text}</span> })
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let items = StoredValue::new(nav_items());
    let expanded_group = RwSignal::new(None::<&'static str>);
    let hovering = RwSignal::new(false);
    let wide = Memo::new(move |_| is_wide(ctx.sidebar_open.get(), hovering.get()));

    // Open the group that owns the current route, close everything otherwise
    Effect::new(move |_| {
        let path = pathname.get();
        let group = items.with_value(|items| auto_expanded_group(&path, items));
        expanded_group.set(group);
    });

    let go = move |to: &str| {
        log::debug!("sidebar: navigate to {}", to);
        navigate(to, NavigateOptions::default());
        if is_narrow_viewport(viewport_width()) {
            ctx.set_sidebar_open(false);
        }
    };

    let aside_ref = NodeRef::<Aside>::new();

    // Desktop width relies on hover only
    let resize_listener = window_event_listener(ev::resize, move |_| {
        if !is_narrow_viewport(viewport_width()) {
            ctx.set_sidebar_open(false);
        }
    });

    // Pointer-down outside the panel closes the overlay on narrow viewports
    let pointer_listener = window_event_listener(ev::mousedown, move |ev: ev::MouseEvent| {
        if !is_narrow_viewport(viewport_width()) {
            return;
        }
        let Some(aside) = aside_ref.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !aside.contains(target.as_ref()) {
            ctx.set_sidebar_open(false);
        }
    });

    on_cleanup(move || {
        resize_listener.remove();
        pointer_listener.remove();
        log::debug!("sidebar: window listeners removed");
    });

    view! {
        <aside
            node_ref=aside_ref
            class="app-sidebar"
            class:app-sidebar--wide=move || wide.get()
            class:app-sidebar--open=move || ctx.sidebar_open.get()
            on:mouseenter=move |_| hovering.set(true)
            on:mouseleave=move |_| hovering.set(false)
        >
            <div class="app-sidebar__header">
                <div class="app-sidebar__brand">
                    <div class="app-sidebar__logo">
                        <img src="/brand-images/logo.jpg" alt="SH.SALE" />
                    </div>
                    <h1
                        class="app-sidebar__title"
                        class:app-sidebar__title--visible=move || wide.get()
                    >
                        "SH.SALE"
                    </h1>
                </div>
                <Show when=move || ctx.sidebar_open.get()>
                    <button
                        class="app-sidebar__close"
                        aria-label="Toggle sidebar"
                        on:click=move |_| ctx.toggle_sidebar()
                    >
                        {Icon::X.view(20)}
                    </button>
                </Show>
            </div>

            <nav class="app-sidebar__content">
                {items.get_value().into_iter().enumerate().map(|(index, item)| {
                    let title = item.title();
                    let item_icon = item.icon();
                    let is_group = item.is_group();
                    let link_badge = match &item {
                        NavItem::Link { badge, .. } => badge_label(*badge),
                        NavItem::Group { .. } => None,
                    };
                    let children = StoredValue::new(item.visible_items());
                    let item = StoredValue::new(item);

                    let is_active = move || {
                        let path = pathname.get();
                        item.with_value(|i| i.is_active(&path))
                    };
                    let is_open = move || expanded_group.get() == Some(title);

                    let on_click = {
                        let go = go.clone();
                        move |_| {
                            let action = item.with_value(|i| {
                                i.click(wide.get_untracked(), expanded_group.get_untracked())
                            });
                            match action {
                                NavClick::SetExpanded(next) => expanded_group.set(next),
                                NavClick::Navigate(to) => go(to),
                                NavClick::Ignore => {}
                            }
                        }
                    };

                    let go_child = go.clone();

                    view! {
                        <div class="app-sidebar__entry" style:animation-delay=format!("{}ms", index * 50)>
                            // Parent item
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=is_active
                                on:click=on_click
                            >
                                <div class="app-sidebar__item-content">
                                    {item_icon.view(20)}
                                    <span class="app-sidebar__label">{title}</span>
                                </div>
                                <div class="app-sidebar__item-trail">
                                    {render_badge(link_badge)}
                                    <Show when=move || is_group && wide.get()>
                                        <span
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=is_open
                                        >
                                            {Icon::ChevronDown.view(16)}
                                        </span>
                                    </Show>
                                </div>
                            </div>

                            // Children
                            <Show when=move || is_group && wide.get() && is_open()>
                                <div class="app-sidebar__children">
                                    {children.get_value().into_iter().enumerate().map(|(child_index, child)| {
                                        let go = go_child.clone();
                                        let to = child.to;
                                        let label = child.label;
                                        let badge = badge_label(child.badge);
                                        let is_current = move || child.is_current(&pathname.get());
                                        view! {
                                            <div
                                                class="app-sidebar__item app-sidebar__item--child"
                                                class:app-sidebar__item--active=is_current
                                                style:animation-delay=format!("{}ms", child_index * 50)
                                                on:click=move |_| go(to)
                                            >
                                                <span class="app-sidebar__label">{label}</span>
                                                {render_badge(badge)}
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
