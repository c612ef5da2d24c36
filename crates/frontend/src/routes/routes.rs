use super::paths;
use crate::domain::a001_category::ui::details::CategoryView;
use crate::layout::Shell;
use crate::shared::components::PageHeader;
use crate::shared::icons::Icon;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::{ParamSegment, StaticSegment};

/// Screen that is served by another part of the admin.
#[component]
fn SectionPlaceholder(title: &'static str, icon: Icon) -> impl IntoView {
    view! {
        <div class="page section-placeholder">
            <PageHeader title=title icon=icon />
            <p class="section-placeholder__text">"This section is not available yet."</p>
        </div>
    }
}

#[component]
fn CategoryEditPlaceholder() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="page section-placeholder">
            <PageHeader title="Edit Category" icon=Icon::Edit subtitle=Signal::derive(move || Some(id())) />
            <p class="section-placeholder__text">"This section is not available yet."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <SectionPlaceholder title="Page not found" icon=Icon::AlertCircle /> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <SectionPlaceholder title="Dashboard" icon=Icon::LineChart /> }
                    />
                    <Route
                        path=StaticSegment("pos")
                        view=|| view! { <SectionPlaceholder title="POS" icon=Icon::Tv /> }
                    />
                    <Route
                        path=StaticSegment("orders")
                        view=|| view! { <SectionPlaceholder title="Orders" icon=Icon::ShoppingCart /> }
                    />
                    <Route
                        path=StaticSegment("customers")
                        view=|| view! { <SectionPlaceholder title="Customers" icon=Icon::Users /> }
                    />
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <SectionPlaceholder title="All Products" icon=Icon::Package /> }
                    />
                    <Route
                        path=(StaticSegment("products"), StaticSegment("new"))
                        view=|| view! { <SectionPlaceholder title="Add Product" icon=Icon::Package /> }
                    />
                    <Route
                        path=StaticSegment("categories")
                        view=|| view! { <SectionPlaceholder title="All Categories" icon=Icon::Folder /> }
                    />
                    <Route
                        path=(StaticSegment("category"), StaticSegment("new"))
                        view=|| view! { <SectionPlaceholder title="Add Category" icon=Icon::Folder /> }
                    />
                    <Route
                        path=(StaticSegment("category"), StaticSegment("edit"), ParamSegment("id"))
                        view=CategoryEditPlaceholder
                    />
                    <Route
                        path=(StaticSegment("category"), StaticSegment("view"), ParamSegment("id"))
                        view=CategoryView
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
