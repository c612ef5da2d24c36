use leptos::prelude::*;

/// Boxed list of usage hints shown under a form or detail page.
#[component]
pub fn QuickTip(
    #[prop(into)] title: String,
    tips: Vec<&'static str>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("quick-tip {}", class)>
            <h3 class="quick-tip__title">"💡 "{title}</h3>
            <ul class="quick-tip__list">
                {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
            </ul>
        </div>
    }
}
