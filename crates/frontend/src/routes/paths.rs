//! Route paths shared by the router and the sidebar.

pub const DASHBOARD: &str = "/dashboard";
pub const POS: &str = "/pos";
pub const ORDERS: &str = "/orders";
pub const CUSTOMERS: &str = "/customers";
pub const PRODUCTS: &str = "/products";
pub const PRODUCT_NEW: &str = "/products/new";
pub const CATEGORIES: &str = "/categories";
pub const CATEGORY_NEW: &str = "/category/new";
pub const CATEGORY_EDIT: &str = "/category/edit";
pub const CATEGORY_VIEW: &str = "/category/view";

pub fn category_view(id: &str) -> String {
    format!("{}/{}", CATEGORY_VIEW, id)
}

pub fn category_edit(id: &str) -> String {
    format!("{}/{}", CATEGORY_EDIT, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_links() {
        assert_eq!(category_view("42"), "/category/view/42");
        assert_eq!(category_edit("abc123"), "/category/edit/abc123");
    }
}
