//! ExpandableCard - labelled disclosure panel.
//!
//! ```rust
//! <ExpandableCard title="Status" default_expanded=true icon=Icon::AlertCircle>
//!     <p>"Active"</p>
//! </ExpandableCard>
//! ```
//!
//! With `lazy_load` the children are not built until the first expansion
//! and stay mounted (hidden) after later collapses.

use crate::shared::icons::Icon;
use leptos::prelude::*;

/// Padding/background preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Compact,
    Ghost,
}

impl CardVariant {
    pub fn modifier(self) -> &'static str {
        match self {
            CardVariant::Default => "expandable-card--default",
            CardVariant::Compact => "expandable-card--compact",
            CardVariant::Ghost => "expandable-card--ghost",
        }
    }
}

/// Expanded/collapsed state plus the one-way "content built" latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
    materialized: bool,
    lazy: bool,
    disabled: bool,
}

impl Disclosure {
    pub fn new(expanded: bool, lazy: bool, disabled: bool) -> Self {
        Self {
            expanded,
            materialized: expanded,
            lazy,
            disabled,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Flip the state. `None` when disabled (no callback must fire).
    pub fn toggle(&mut self) -> Option<bool> {
        if self.disabled {
            return None;
        }
        self.expanded = !self.expanded;
        if self.expanded {
            self.materialized = true;
        }
        Some(self.expanded)
    }

    /// Whether children exist in the tree (visible or not).
    pub fn content_mounted(&self) -> bool {
        !self.lazy || self.materialized
    }
}

/// DOM id of the content region, derived from the title.
pub fn content_id(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("expandable-content-{}", slug)
}

#[component]
pub fn ExpandableCard(
    #[prop(into)] title: String,
    #[prop(optional)] default_expanded: bool,
    #[prop(optional)] icon: Option<Icon>,
    #[prop(optional)] variant: CardVariant,
    /// Suppresses toggling and dims the card
    #[prop(optional)]
    disabled: bool,
    /// Build children on first expansion only
    #[prop(optional)]
    lazy_load: bool,
    #[prop(default = true)] show_border: bool,
    /// Called with the new state after every successful toggle
    #[prop(optional)]
    on_toggle: Option<Callback<bool>>,
    #[prop(optional, into)] class: String,
    #[prop(default = 200)] animation_ms: u32,
    children: ChildrenFn,
) -> impl IntoView {
    let state = RwSignal::new(Disclosure::new(default_expanded, lazy_load, disabled));
    let expanded = move || state.with(|s| s.is_expanded());
    let region_id = content_id(&title);

    let toggle = move |_| {
        let mut changed = None;
        state.update(|s| changed = s.toggle());
        if let (Some(now_expanded), Some(cb)) = (changed, on_toggle) {
            cb.run(now_expanded);
        }
    };

    let mut card_class = format!("expandable-card {}", variant.modifier());
    if show_border {
        card_class.push_str(" expandable-card--bordered");
    }
    if disabled {
        card_class.push_str(" expandable-card--disabled");
    }
    if !class.is_empty() {
        card_class.push(' ');
        card_class.push_str(&class);
    }

    view! {
        <div class=card_class>
            <button
                type="button"
                class="expandable-card__header"
                disabled=disabled
                aria-expanded=move || expanded().to_string()
                aria-controls=region_id.clone()
                on:click=toggle
            >
                <div class="expandable-card__title">
                    {icon.map(|i| i.view(16))}
                    <h3>{title}</h3>
                </div>
                <div class="expandable-card__chevron">
                    {move || if expanded() { Icon::ChevronUp.view(16) } else { Icon::ChevronDown.view(16) }}
                </div>
            </button>

            <div
                id=region_id
                class=move || {
                    if expanded() {
                        "expandable-card__content expandable-card__content--expanded"
                    } else {
                        "expandable-card__content"
                    }
                }
                style:transition-duration=format!("{}ms", animation_ms)
            >
                <Show when=move || state.with(|s| s.content_mounted())>
                    <div class="expandable-card__body">{children()}</div>
                </Show>
            </div>
        </div>
    }
}
