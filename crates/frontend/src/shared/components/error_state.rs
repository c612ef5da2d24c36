use crate::shared::icons::Icon;
use leptos::prelude::*;
use thaw::*;

/// Full-page failure panel. Retrying is delegated to `on_retry`.
#[component]
pub fn ErrorState(
    #[prop(into)] error: String,
    #[prop(default = "Something went wrong".to_string(), into)] title: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <div class="error-state__icon">{Icon::AlertCircle.view(48)}</div>
            <h2 class="error-state__title">{title}</h2>
            <MessageBar intent=MessageBarIntent::Error>
                {error}
            </MessageBar>
            {on_retry.map(|retry| view! {
                <div class="error-state__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| retry.run(())>
                        "Try again"
                    </Button>
                </div>
            })}
        </div>
    }
}
