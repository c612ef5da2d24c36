//! Build-time configuration.
//!
//! Origins come from `APP_API_URL` / `APP_BASE_URL` at compile time
//! (`trunk build` passes the environment through), with the production
//! backend as the embedded default.

const DEFAULT_API_URL: &str = "https://sh-store-backend.vercel.app/api";
const DEFAULT_BASE_URL: &str = "https://sh-store-backend.vercel.app/";

/// Viewport width (px) separating the overlay sidebar from the persistent one.
pub const SIDEBAR_BREAKPOINT_PX: f64 = 1024.0;

/// Default slideshow interval.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// API origin, e.g. `https://host/api`.
pub fn api_url_base() -> &'static str {
    option_env!("APP_API_URL")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

/// Asset origin used for relative image references.
pub fn asset_url_base() -> &'static str {
    option_env!("APP_BASE_URL")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from a path like `/category/42`.
pub fn api_url(path: &str) -> String {
    join(api_url_base(), path)
}

/// Resolve an image reference against the asset origin.
///
/// Absolute URLs and inline `data:` images are returned unchanged.
pub fn asset_url(reference: &str) -> String {
    if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
        || reference.starts_with("//")
    {
        return reference.to_string();
    }
    join(asset_url_base(), reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_slash() {
        assert_eq!(join("https://a/api/", "/category/1"), "https://a/api/category/1");
        assert_eq!(join("https://a/api", "category/1"), "https://a/api/category/1");
    }

    #[test]
    fn test_api_url_uses_base() {
        let url = api_url("/category/abc");
        assert!(url.starts_with(api_url_base().trim_end_matches('/')));
        assert!(url.ends_with("/category/abc"));
    }

    #[test]
    fn test_asset_url_keeps_absolute() {
        assert_eq!(asset_url("https://cdn/x.png"), "https://cdn/x.png");
        assert_eq!(asset_url("data:image/png;base64,AAA"), "data:image/png;base64,AAA");
        assert!(asset_url("uploads/x.png").ends_with("/uploads/x.png"));
    }
}
