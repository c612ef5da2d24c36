use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Dimmed backdrop behind the pinned sidebar on narrow viewports.
/// Clicking it unpins.
#[component]
pub fn Overlay() -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div
            data-zone="overlay"
            class="sidebar-overlay"
            class:sidebar-overlay--visible=is_open
            on:click=move |_| ctx.set_sidebar_open(false)
        />
    }
}
