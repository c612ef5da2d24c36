//! Inline SVG glyphs (lucide outlines, 24×24 grid).
//!
//! The set is closed: screens pick a variant, the glyph is rendered at the
//! requested pixel size with `currentColor` stroke.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    LineChart,
    Tv,
    ShoppingCart,
    Users,
    Package,
    Folder,
    FolderUp,
    Image,
    AlertCircle,
    Eye,
    Edit,
    Calendar,
    Clock,
    ChevronDown,
    ChevronUp,
    ChevronLeft,
    ChevronRight,
    X,
    Menu,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::LineChart => "line-chart",
            Icon::Tv => "tv",
            Icon::ShoppingCart => "shopping-cart",
            Icon::Users => "users",
            Icon::Package => "package",
            Icon::Folder => "folder",
            Icon::FolderUp => "folder-up",
            Icon::Image => "image",
            Icon::AlertCircle => "alert-circle",
            Icon::Eye => "eye",
            Icon::Edit => "edit",
            Icon::Calendar => "calendar",
            Icon::Clock => "clock",
            Icon::ChevronDown => "chevron-down",
            Icon::ChevronUp => "chevron-up",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::X => "x",
            Icon::Menu => "menu",
        }
    }

    fn glyph(self) -> AnyView {
        match self {
            Icon::LineChart => view! {
                <path d="M3 3v18h18"/>
                <path d="m19 9-5 5-4-4-3 3"/>
            }
            .into_any(),
            Icon::Tv => view! {
                <path d="M7 21h10"/>
                <rect width="20" height="14" x="2" y="3" rx="2"/>
            }
            .into_any(),
            Icon::ShoppingCart => view! {
                <circle cx="8" cy="21" r="1"/>
                <circle cx="19" cy="21" r="1"/>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
            }
            .into_any(),
            Icon::Users => view! {
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            }
            .into_any(),
            Icon::Package => view! {
                <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
                <path d="M3.27 6.96 12 12l8.73-5.04"/>
                <path d="M12 22V12"/>
            }
            .into_any(),
            Icon::Folder => view! {
                <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>
            }
            .into_any(),
            Icon::FolderUp => view! {
                <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>
                <path d="M12 10v6"/>
                <path d="m9 13 3-3 3 3"/>
            }
            .into_any(),
            Icon::Image => view! {
                <rect width="18" height="18" x="3" y="3" rx="2" ry="2"/>
                <circle cx="9" cy="9" r="2"/>
                <path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/>
            }
            .into_any(),
            Icon::AlertCircle => view! {
                <circle cx="12" cy="12" r="10"/>
                <line x1="12" x2="12" y1="8" y2="12"/>
                <line x1="12" x2="12.01" y1="16" y2="16"/>
            }
            .into_any(),
            Icon::Eye => view! {
                <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/>
                <circle cx="12" cy="12" r="3"/>
            }
            .into_any(),
            Icon::Edit => view! {
                <path d="M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
                <path d="M18.375 2.625a2.121 2.121 0 1 1 3 3L12 15l-4 1 1-4Z"/>
            }
            .into_any(),
            Icon::Calendar => view! {
                <rect width="18" height="18" x="3" y="4" rx="2" ry="2"/>
                <line x1="16" x2="16" y1="2" y2="6"/>
                <line x1="8" x2="8" y1="2" y2="6"/>
                <line x1="3" x2="21" y1="10" y2="10"/>
            }
            .into_any(),
            Icon::Clock => view! {
                <circle cx="12" cy="12" r="10"/>
                <polyline points="12 6 12 12 16 14"/>
            }
            .into_any(),
            Icon::ChevronDown => view! { <path d="m6 9 6 6 6-6"/> }.into_any(),
            Icon::ChevronUp => view! { <path d="m18 15-6-6-6 6"/> }.into_any(),
            Icon::ChevronLeft => view! { <path d="m15 18-6-6 6-6"/> }.into_any(),
            Icon::ChevronRight => view! { <path d="m9 18 6-6-6-6"/> }.into_any(),
            Icon::X => view! {
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            }
            .into_any(),
            Icon::Menu => view! {
                <line x1="4" x2="20" y1="12" y2="12"/>
                <line x1="4" x2="20" y1="6" y2="6"/>
                <line x1="4" x2="20" y1="18" y2="18"/>
            }
            .into_any(),
        }
    }

    /// Glyph at `size`×`size` px.
    pub fn view(self, size: u32) -> AnyView {
        view! {
            <svg
                class=format!("icon icon--{}", self.name())
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                {self.glyph()}
            </svg>
        }
        .into_any()
    }
}
