use leptos::prelude::*;
use thaw::*;

/// Centered spinner with a caption, shown while a page is fetching.
#[component]
pub fn Loader(#[prop(default = "Loading...".to_string(), into)] text: String) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
            <Spinner />
            <span class="page-loader__text">{text}</span>
        </Flex>
    }
}
