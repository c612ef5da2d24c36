//! TopHeader component - application top bar.
//!
//! Contains:
//! - Menu button that pins the sidebar open
//! - Logout when a token is stored

use crate::layout::global_context::use_global_context;
use crate::shared::icons::Icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn top-header__menu"
                aria-label="Open sidebar"
                on:click=toggle_sidebar
            >
                {Icon::Menu.view(20)}
            </button>

            <div class="top-header__actions">
                <Show when=move || session.is_logged_in()>
                    <button class="top-header__icon-btn" on:click=move |_| session.logout()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
