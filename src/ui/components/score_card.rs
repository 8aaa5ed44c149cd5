use dioxus::prelude::*;

use crate::ui::{components::progress_bar::ProgressBar, theme};

/// One of the 0-10 sub-scores, shown as `x/10` with a bar at `x * 10`%.
#[component]
pub fn ScoreCard(icon: &'static str, title: &'static str, score: f64) -> Element {
    rsx! {
        div {
            class: "{theme::CARD}",
            div { class: "mb-3 flex items-center gap-2",
                span { class: "text-lg {theme::TEXT_PRIMARY}", "{icon}" }
                h3 { class: "font-semibold text-slate-100", "{title}" }
            }
            div { class: "space-y-2",
                div { class: "flex justify-between text-sm text-slate-300",
                    span { "Score" }
                    span { class: "font-medium", "{score}/10" }
                }
                ProgressBar { value: score * 10.0 }
            }
        }
    }
}

/// Headline figure in the seller overview card.
#[component]
pub fn StatLine(icon: &'static str, value: String, caption: &'static str) -> Element {
    rsx! {
        div {
            div { class: "flex items-center gap-2",
                span { "{icon}" }
                span { class: "font-medium text-slate-100", "{value}" }
            }
            p { class: "text-xs {theme::TEXT_MUTED}", "{caption}" }
        }
    }
}
