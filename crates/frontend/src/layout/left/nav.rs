//! Sidebar menu model and route reconciliation.
//!
//! Pure functions of (current path, static menu); the `Sidebar` component
//! only feeds them signals.

use crate::routes::paths;
use crate::shared::config::SIDEBAR_BREAKPOINT_PX;
use crate::shared::icons::Icon;

/// Badges above this render as "99+".
pub const BADGE_CAP: u32 = 99;

/// Child entry of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub label: &'static str,
    pub to: &'static str,
    /// Hidden entries only match routes (deep links); they are never rendered.
    pub visible: bool,
    pub badge: Option<u32>,
}

impl DropdownItem {
    pub const fn new(label: &'static str, to: &'static str) -> Self {
        Self {
            label,
            to,
            visible: true,
            badge: None,
        }
    }

    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub const fn with_badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    /// Highlight only on the exact route.
    pub fn is_current(&self, path: &str) -> bool {
        path == self.to
    }
}

/// Top-level sidebar entry. `title` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link {
        title: &'static str,
        icon: Icon,
        to: &'static str,
        badge: Option<u32>,
    },
    Group {
        title: &'static str,
        icon: Icon,
        items: Vec<DropdownItem>,
    },
}

/// What a click on a top-level entry should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// New expanded group (only one open at a time).
    SetExpanded(Option<&'static str>),
    Navigate(&'static str),
    Ignore,
}

/// `path` is `target` or lies below it.
pub fn route_matches(path: &str, target: &str) -> bool {
    path.strip_prefix(target)
        .map(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(false)
}

impl NavItem {
    pub fn title(&self) -> &'static str {
        match self {
            NavItem::Link { title, .. } | NavItem::Group { title, .. } => *title,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            NavItem::Link { icon, .. } | NavItem::Group { icon, .. } => *icon,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavItem::Group { .. })
    }

    /// A link matches its own target; a group matches when any child does,
    /// hidden children included.
    pub fn is_active(&self, path: &str) -> bool {
        match self {
            NavItem::Link { to, .. } => route_matches(path, to),
            NavItem::Group { items, .. } => items.iter().any(|i| route_matches(path, i.to)),
        }
    }

    pub fn visible_items(&self) -> Vec<DropdownItem> {
        match self {
            NavItem::Link { .. } => Vec::new(),
            NavItem::Group { items, .. } => items.iter().filter(|i| i.visible).cloned().collect(),
        }
    }

    /// Wide panel: groups toggle. Narrow panel: groups jump to their first
    /// child since no dropdown is visible.
    pub fn click(&self, wide: bool, expanded: Option<&str>) -> NavClick {
        match self {
            NavItem::Link { to, .. } => NavClick::Navigate(*to),
            NavItem::Group { title, .. } if wide => {
                if expanded == Some(*title) {
                    NavClick::SetExpanded(None)
                } else {
                    NavClick::SetExpanded(Some(*title))
                }
            }
            NavItem::Group { items, .. } => items
                .first()
                .map(|first| NavClick::Navigate(first.to))
                .unwrap_or(NavClick::Ignore),
        }
    }
}

/// First group (in declaration order) owning the current route.
pub fn auto_expanded_group(path: &str, items: &[NavItem]) -> Option<&'static str> {
    items
        .iter()
        .find(|item| item.is_group() && item.is_active(path))
        .map(NavItem::title)
}

/// Badge text; nothing for zero or missing counts.
pub fn badge_label(count: Option<u32>) -> Option<String> {
    match count {
        None | Some(0) => None,
        Some(n) if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        Some(n) => Some(n.to_string()),
    }
}

/// Panel renders wide when pinned open or hovered.
pub fn is_wide(pinned_open: bool, hovering: bool) -> bool {
    pinned_open || hovering
}

/// Below the breakpoint the sidebar is an overlay.
pub fn is_narrow_viewport(width: f64) -> bool {
    width < SIDEBAR_BREAKPOINT_PX
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::Link {
            title: "Dashboard",
            icon: Icon::LineChart,
            to: paths::DASHBOARD,
            badge: None,
        },
        NavItem::Link {
            title: "POS",
            icon: Icon::Tv,
            to: paths::POS,
            badge: None,
        },
        NavItem::Link {
            title: "Orders",
            icon: Icon::ShoppingCart,
            to: paths::ORDERS,
            badge: None,
        },
        NavItem::Link {
            title: "Customers",
            icon: Icon::Users,
            to: paths::CUSTOMERS,
            badge: None,
        },
        NavItem::Group {
            title: "Products",
            icon: Icon::Package,
            items: vec![
                DropdownItem::new("All Products", paths::PRODUCTS),
                DropdownItem::new("Add Product", paths::PRODUCT_NEW),
            ],
        },
        NavItem::Group {
            title: "Categories",
            icon: Icon::Folder,
            items: vec![
                DropdownItem::new("All categories", paths::CATEGORIES),
                DropdownItem::new("Add category", paths::CATEGORY_NEW),
                DropdownItem::new("Category edit (hidden)", paths::CATEGORY_EDIT).hidden(),
                DropdownItem::new("Category view (hidden)", paths::CATEGORY_VIEW).hidden(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(items: &'a [NavItem], title: &str) -> &'a NavItem {
        items.iter().find(|i| i.title() == title).unwrap()
    }

    #[test]
    fn test_route_matches() {
        assert!(route_matches("/orders", "/orders"));
        assert!(route_matches("/orders/17", "/orders"));
        assert!(!route_matches("/ordersx", "/orders"));
        assert!(!route_matches("/order", "/orders"));
    }

    #[test]
    fn test_hidden_child_expands_group_on_deep_link() {
        let items = nav_items();
        assert_eq!(auto_expanded_group("/category/edit/42", &items), Some("Categories"));
        assert_eq!(auto_expanded_group("/category/view/abc123", &items), Some("Categories"));
        assert_eq!(auto_expanded_group("/products/new", &items), Some("Products"));
    }

    #[test]
    fn test_no_group_for_links() {
        let items = nav_items();
        assert_eq!(auto_expanded_group("/dashboard", &items), None);
        assert_eq!(auto_expanded_group("/category/newer", &items), None);
        assert_eq!(auto_expanded_group("/", &items), None);
    }

    #[test]
    fn test_auto_expand_is_deterministic() {
        let items = nav_items();
        for path in ["/categories", "/orders/5", "/products", "/nowhere"] {
            assert_eq!(
                auto_expanded_group(path, &items),
                auto_expanded_group(path, &items)
            );
        }
    }

    #[test]
    fn test_first_matching_group_wins() {
        let items = vec![
            NavItem::Group {
                title: "A",
                icon: Icon::Folder,
                items: vec![DropdownItem::new("x", "/shared")],
            },
            NavItem::Group {
                title: "B",
                icon: Icon::Folder,
                items: vec![DropdownItem::new("y", "/shared/deeper")],
            },
        ];
        assert_eq!(auto_expanded_group("/shared/deeper/1", &items), Some("A"));
    }

    #[test]
    fn test_active_state() {
        let items = nav_items();
        assert!(entry(&items, "Orders").is_active("/orders/9"));
        assert!(!entry(&items, "Orders").is_active("/customers"));
        assert!(entry(&items, "Categories").is_active("/category/view/1"));
        assert!(!entry(&items, "Products").is_active("/categories"));
    }

    #[test]
    fn test_visible_items_exclude_hidden() {
        let items = nav_items();
        let labels: Vec<_> = entry(&items, "Categories")
            .visible_items()
            .iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, vec!["All categories", "Add category"]);
        assert!(entry(&items, "Dashboard").visible_items().is_empty());
    }

    #[test]
    fn test_click_wide_toggles_single_group() {
        let items = nav_items();
        let categories = entry(&items, "Categories");
        assert_eq!(categories.click(true, None), NavClick::SetExpanded(Some("Categories")));
        assert_eq!(categories.click(true, Some("Categories")), NavClick::SetExpanded(None));
        assert_eq!(categories.click(true, Some("Products")), NavClick::SetExpanded(Some("Categories")));
    }

    #[test]
    fn test_click_narrow_group_goes_to_first_child() {
        let items = nav_items();
        assert_eq!(entry(&items, "Categories").click(false, None), NavClick::Navigate("/categories"));
        assert_eq!(entry(&items, "Products").click(false, Some("Products")), NavClick::Navigate("/products"));
    }

    #[test]
    fn test_click_link_navigates_regardless_of_width() {
        let items = nav_items();
        assert_eq!(entry(&items, "POS").click(true, None), NavClick::Navigate("/pos"));
        assert_eq!(entry(&items, "POS").click(false, Some("Products")), NavClick::Navigate("/pos"));
    }

    #[test]
    fn test_empty_group_narrow_click_is_ignored() {
        let empty = NavItem::Group { title: "E", icon: Icon::Folder, items: vec![] };
        assert_eq!(empty.click(false, None), NavClick::Ignore);
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(None), None);
        assert_eq!(badge_label(Some(0)), None);
        assert_eq!(badge_label(Some(7)).as_deref(), Some("7"));
        assert_eq!(badge_label(Some(99)).as_deref(), Some("99"));
        assert_eq!(badge_label(Some(100)).as_deref(), Some("99+"));
    }

    #[test]
    fn test_width_rules() {
        assert!(is_wide(true, false));
        assert!(is_wide(false, true));
        assert!(!is_wide(false, false));
        assert!(is_narrow_viewport(1023.0));
        assert!(!is_narrow_viewport(1024.0));
    }

    #[test]
    fn test_dropdown_item_exact_highlight() {
        let item = DropdownItem::new("All Products", "/products").with_badge(3);
        assert!(item.is_current("/products"));
        assert!(!item.is_current("/products/new"));
        assert_eq!(item.badge, Some(3));
    }
}
