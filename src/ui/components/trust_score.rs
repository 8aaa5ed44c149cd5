use dioxus::prelude::*;

use crate::domain::{TrustTier, TrustTrend};
use crate::ui::theme;

#[component]
pub fn TrustScore(score: i32, trend: TrustTrend, subtitle: Option<String>) -> Element {
    let tier = TrustTier::classify(score);
    let ring = theme::tier_ring(tier);
    let score_class = theme::tier_text(tier);
    let trend_class = theme::trend_text(trend);

    rsx! {
        div {
            class: "{theme::CARD} text-center",
            div { class: "mb-4 flex items-center justify-center gap-2",
                span { class: "text-xl {theme::TEXT_PRIMARY}", "🛡️" }
                h3 { class: "{theme::CARD_HEADING}", "Trust Score" }
                span {
                    class: "text-sm font-bold {trend_class}",
                    title: trend.label(),
                    "{trend.glyph()}"
                }
            }
            div { class: "{ring}",
                div { class: "flex h-full w-full items-center justify-center rounded-full bg-slate-900",
                    div { class: "text-center",
                        div { class: "text-3xl font-bold {score_class}", "{score}" }
                        div { class: "text-xs uppercase tracking-wide {theme::TEXT_MUTED}", "{tier.label()}" }
                    }
                }
            }
            if let Some(subtitle) = subtitle {
                p { class: "text-sm {theme::TEXT_MUTED}", "{subtitle}" }
            }
        }
    }
}
