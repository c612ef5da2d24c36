pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::{Overlay, Sidebar};
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +---------+--------------------------------+
/// |         |           TopHeader            |
/// | Sidebar +--------------------------------+
/// |         |            Content             |
/// +---------+--------------------------------+
/// ```
///
/// On narrow viewports the pinned sidebar floats over the content with
/// [`Overlay`] behind it.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Overlay />
            <Sidebar />
            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
