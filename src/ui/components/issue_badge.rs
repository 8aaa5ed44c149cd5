use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn IssueBadge(label: String) -> Element {
    rsx! {
        span { class: "{theme::BADGE_OUTLINE}", "{label}" }
    }
}

/// Quoted review line with a coloured left rule.
#[component]
pub fn HighlightQuote(text: String, positive: bool) -> Element {
    let rule = if positive {
        "border-trust-excellent"
    } else {
        "border-trust-poor"
    };

    rsx! {
        div {
            class: "border-l-2 {rule} pl-3 text-sm italic {theme::TEXT_MUTED}",
            "“{text}”"
        }
    }
}
