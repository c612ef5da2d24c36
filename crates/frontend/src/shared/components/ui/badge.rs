use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "success", "warning", "error", "primary", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Leading status dot
    #[prop(optional)]
    dot: bool,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {dot.then(|| view! { <span class="badge__dot"></span> })}
            {children()}
        </span>
    }
}

/// Active/inactive status: coloured dot plus label
#[component]
pub fn StatusBadge(
    #[prop(into)] active: Signal<bool>,
    #[prop(default = "Active")] active_label: &'static str,
    #[prop(default = "Inactive")] inactive_label: &'static str,
) -> impl IntoView {
    let status_class = move || {
        if active.get() {
            "status-badge status-badge--active"
        } else {
            "status-badge status-badge--inactive"
        }
    };

    view! {
        <span class=status_class>
            <span class="status-badge__dot"></span>
            <span class="status-badge__label">
                {move || if active.get() { active_label } else { inactive_label }}
            </span>
        </span>
    }
}
