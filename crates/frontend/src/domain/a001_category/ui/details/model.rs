use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a001_category::Category;
use contracts::shared::api_response::ApiResponse;

pub const VIEW_TIPS: [&str; 6] = [
    "This page is read-only. Use the 'Edit Category' button to make changes.",
    "Click on each section header to expand or collapse category details.",
    "Inactive categories are hidden from users but remain available for admins.",
    "Parent category information helps understand where this category appears in the hierarchy.",
    "Uploaded images are shown in a carousel — swipe or click arrows to view all.",
    "Creation and update timestamps help track category changes over time.",
];

/// Загрузить категорию по ID
pub async fn fetch_by_id(id: &str, token: Option<&str>) -> Result<Category, ApiError> {
    let path = format!("/category/{}", urlencoding::encode(id));
    let response: ApiResponse<Category> = get_json(&path, token).await?;
    Ok(response.data)
}

/// Header badge: `ID: ` plus the first eight characters.
pub fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("ID: {}...", head)
}

pub fn subtitle(name: &str) -> String {
    format!("View the details of \"{}\"", name)
}

pub fn status_note(is_active: bool) -> &'static str {
    if is_active {
        "This category is currently visible to users"
    } else {
        "This category is hidden from users"
    }
}
