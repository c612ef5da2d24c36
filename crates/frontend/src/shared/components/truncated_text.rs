use crate::shared::icons::Icon;
use leptos::prelude::*;

pub const DEFAULT_MAX_LENGTH: usize = 100;
/// With a line limit, anything longer than this is truncated regardless of line count.
pub const SAFETY_LENGTH: usize = 500;
const ELLIPSIS: &str = "...";

/// Whether `text` needs a collapsed form, and what that form is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatePlan {
    full: String,
    collapsed: Option<String>,
}

impl TruncatePlan {
    pub fn new(text: &str, max_length: Option<usize>, lines: Option<usize>) -> Self {
        let char_count = text.chars().count();
        let by_length = max_length.is_some_and(|max| char_count > max);
        let by_lines = lines.is_some_and(|limit| {
            text.split('\n').count() > limit || char_count > SAFETY_LENGTH
        });

        let collapsed = if !(by_length || by_lines) {
            None
        } else if let Some(max) = max_length {
            Some(format!("{}{}", text.chars().take(max).collect::<String>(), ELLIPSIS))
        } else {
            let limit = lines.unwrap_or_default();
            let head = text.split('\n').take(limit).collect::<Vec<_>>().join("\n");
            Some(format!("{}{}", head, ELLIPSIS))
        };

        Self {
            full: text.to_string(),
            collapsed,
        }
    }

    pub fn is_truncatable(&self) -> bool {
        self.collapsed.is_some()
    }

    pub fn display(&self, expanded: bool) -> &str {
        match (&self.collapsed, expanded) {
            (Some(short), false) => short,
            _ => &self.full,
        }
    }
}

/// Text bounded by characters and/or lines, with an optional expand toggle.
/// Renders nothing for missing or empty text.
#[component]
pub fn TruncatedText(
    #[prop(optional, into)] text: Option<String>,
    #[prop(into, default = Some(DEFAULT_MAX_LENGTH))] max_length: Option<usize>,
    #[prop(optional)] lines: Option<usize>,
    #[prop(default = true)] show_toggle: bool,
    #[prop(default = "Show More".to_string(), into)] expand_label: String,
    #[prop(default = "Show Less".to_string(), into)] collapse_label: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return None;
    };

    let plan = StoredValue::new(TruncatePlan::new(&text, max_length, lines));
    let expanded = RwSignal::new(false);
    let show_button = show_toggle && plan.with_value(|p| p.is_truncatable());

    let clamp = move || match lines {
        Some(n) if !expanded.get() => format!(
            "display: -webkit-box; -webkit-line-clamp: {}; -webkit-box-orient: vertical; overflow: hidden;",
            n
        ),
        _ => String::new(),
    };

    Some(view! {
        <div class=format!("truncated-text {}", class)>
            <div class="truncated-text__body" style=clamp title=text>
                {move || plan.with_value(|p| p.display(expanded.get()).to_string())}
            </div>
            {show_button.then(|| {
                let expand_label = expand_label.clone();
                let collapse_label = collapse_label.clone();
                let label = move || {
                    if expanded.get() { collapse_label.clone() } else { expand_label.clone() }
                };
                view! {
                    <button
                        type="button"
                        class="truncated-text__toggle"
                        aria-label=label.clone()
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { Icon::ChevronUp.view(16) } else { Icon::ChevronDown.view(16) }}
                        {label}
                    </button>
                }
            })}
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_truncated() {
        let plan = TruncatePlan::new("hello", Some(10), None);
        assert!(!plan.is_truncatable());
        assert_eq!(plan.display(false), "hello");
    }

    #[test]
    fn test_exact_length_is_not_truncated() {
        let plan = TruncatePlan::new("abcde", Some(5), None);
        assert!(!plan.is_truncatable());
    }

    #[test]
    fn test_long_text_truncates_to_max_plus_ellipsis() {
        let plan = TruncatePlan::new("abcdefghij", Some(4), None);
        assert!(plan.is_truncatable());
        assert_eq!(plan.display(false), "abcd...");
        assert_eq!(plan.display(true), "abcdefghij");
        assert_eq!(plan.display(false), "abcd...");
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let plan = TruncatePlan::new("привет мир", Some(6), None);
        assert_eq!(plan.display(false), "привет...");
    }

    #[test]
    fn test_line_limit_without_length_limit() {
        let plan = TruncatePlan::new("one\ntwo\nthree", None, Some(2));
        assert!(plan.is_truncatable());
        assert_eq!(plan.display(false), "one\ntwo...");
    }

    #[test]
    fn test_safety_length_applies_with_line_limit() {
        let long = "x".repeat(SAFETY_LENGTH + 1);
        let plan = TruncatePlan::new(&long, None, Some(6));
        assert!(plan.is_truncatable());

        let plan = TruncatePlan::new(&long, None, None);
        assert!(!plan.is_truncatable());
    }

    #[test]
    fn test_length_limit_wins_when_both_are_set() {
        let text = "a\nb\nc\nd\ne\nf\ng\nh";
        let plan = TruncatePlan::new(text, Some(500), Some(6));
        assert!(plan.is_truncatable());
        assert_eq!(plan.display(false), format!("{}...", text));
    }
}
