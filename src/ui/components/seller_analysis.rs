use dioxus::prelude::*;

use crate::config::AnalyzerConfig;
use crate::domain::{listing_caption, SellerMetrics};
use crate::ui::components::{
    issue_badge::{HighlightQuote, IssueBadge},
    progress_bar::ProgressBar,
    score_card::{ScoreCard, StatLine},
    trust_score::TrustScore,
};
use crate::ui::theme;
use crate::util::format::format_thousands;

/// Results layout for one seller. Lists render in the order given and
/// percentages are shown as-is.
#[component]
pub fn SellerAnalysis(seller: SellerMetrics, product_url: String) -> Element {
    let subtitle = try_use_context::<AnalyzerConfig>()
        .unwrap_or_default()
        .trust_subtitle;
    let listing = listing_caption(&product_url);
    let sentiment = seller.sentiment_summary.clone();

    rsx! {
        div { class: "mx-auto w-full max-w-6xl space-y-6",
            div { class: "mb-8 text-center",
                h1 { class: "mb-2 {theme::PAGE_TITLE}", "Seller Analysis Results" }
                p { class: "{theme::TEXT_MUTED}", "AI-powered analysis for better buying decisions" }
                if !listing.is_empty() {
                    p { class: "mt-1 text-xs text-slate-500", title: "{product_url}", "{listing}" }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
                div { class: "lg:col-span-1",
                    TrustScore {
                        score: seller.trust_score,
                        trend: seller.trust_trend,
                        subtitle: subtitle,
                    }
                }
                div { class: "lg:col-span-2",
                    div { class: "{theme::CARD} h-full",
                        div { class: "mb-4 flex items-center gap-2",
                            span { class: "text-lg {theme::TEXT_PRIMARY}", "👤" }
                            h3 { class: "{theme::CARD_HEADING}", "Seller Overview" }
                        }
                        div { class: "space-y-4",
                            div {
                                h4 { class: "font-medium text-slate-100", "{seller.name}" }
                                div { class: "mt-1 flex flex-wrap items-center gap-2 {theme::TEXT_MUTED}",
                                    span { "📍" }
                                    span { "{seller.location}" }
                                    span { class: "ml-2", "🕒" }
                                    span { "Member since {seller.member_since}" }
                                }
                            }
                            div { class: "grid grid-cols-2 gap-4",
                                StatLine {
                                    icon: "⭐",
                                    value: format_thousands(seller.feedback_score),
                                    caption: "Feedback Score",
                                }
                                StatLine {
                                    icon: "👍",
                                    value: format!("{}%", seller.positive_percentage),
                                    caption: "Positive Feedback",
                                }
                            }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-3",
                ScoreCard { icon: "📦", title: "Shipping", score: seller.shipping_score }
                ScoreCard { icon: "💬", title: "Communication", score: seller.communication_score }
                ScoreCard { icon: "⭐", title: "Item Description", score: seller.item_description_score }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                div { class: "{theme::CARD}",
                    h3 { class: "mb-4 {theme::CARD_HEADING}", "Sentiment Analysis" }
                    div { class: "space-y-4",
                        SentimentRow { label: "Positive", tone: "text-trust-excellent", percent: sentiment.positive }
                        SentimentRow { label: "Neutral", tone: theme::TEXT_MUTED, percent: sentiment.neutral }
                        SentimentRow { label: "Negative", tone: "text-trust-poor", percent: sentiment.negative }
                    }
                }
                div { class: "{theme::CARD}",
                    div { class: "mb-4 flex items-center gap-2",
                        span { class: "text-lg {theme::TEXT_WARNING}", "⚠️" }
                        h3 { class: "{theme::CARD_HEADING}", "Common Issues" }
                    }
                    div { class: "space-y-2",
                        for (idx, issue) in seller.common_issues.iter().enumerate() {
                            IssueBadge { key: "{idx}", label: issue.clone() }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                div { class: "{theme::CARD}",
                    h3 { class: "mb-4 text-lg font-semibold text-trust-excellent", "Recent Positive Reviews" }
                    div { class: "space-y-3",
                        for (idx, highlight) in seller.recent_highlights.positive.iter().enumerate() {
                            HighlightQuote { key: "{idx}", text: highlight.clone(), positive: true }
                        }
                    }
                }
                div { class: "{theme::CARD}",
                    h3 { class: "mb-4 text-lg font-semibold text-trust-poor", "Areas for Concern" }
                    div { class: "space-y-3",
                        for (idx, highlight) in seller.recent_highlights.negative.iter().enumerate() {
                            HighlightQuote { key: "{idx}", text: highlight.clone(), positive: false }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SentimentRow(label: &'static str, tone: &'static str, percent: u32) -> Element {
    rsx! {
        div {
            div { class: "mb-1 flex justify-between text-sm",
                span { class: "{tone}", "{label}" }
                span { class: "text-slate-300", "{percent}%" }
            }
            ProgressBar { value: percent as f64 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::mock_analyzer::load_mock_seller;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[allow(non_snake_case)]
    fn DemoSeller() -> Element {
        let seller = load_mock_seller().unwrap();
        rsx! {
            SellerAnalysis { seller, product_url: "https://www.ebay.com/itm/12345".to_string() }
        }
    }

    #[allow(non_snake_case)]
    fn SkewedSentiment() -> Element {
        let mut seller = load_mock_seller().unwrap();
        seller.sentiment_summary.positive = 90;
        seller.sentiment_summary.neutral = 40;
        seller.sentiment_summary.negative = 5;
        seller.common_issues = vec!["Zeta".into(), "Alpha".into()];
        rsx! {
            SellerAnalysis { seller, product_url: "garbage".to_string() }
        }
    }

    #[test]
    fn renders_every_section_of_the_record() {
        let html = render(DemoSeller);

        assert!(html.contains("Seller Analysis Results"));
        assert!(html.contains("ebay.com · item 12345"));
        assert!(html.contains("TechDeals_Pro"));
        assert!(html.contains("California, United States"));
        assert!(html.contains("Member since 2018"));
        assert!(html.contains("45,892"));
        assert!(html.contains("98.7%"));
        assert!(html.contains("Based on 500+ data points"));
        assert!(html.contains("8.5/10"));
        assert!(html.contains("7.8/10"));
        assert!(html.contains("9.2/10"));
        assert!(html.contains("78%"));
        assert!(html.contains("15%"));
        assert!(html.contains("7%"));
        assert!(html.contains("Communication delays"));
        assert!(html.contains("Fast shipping, exactly as described. Great seller!"));
        assert!(html.contains("Seller slow to respond to messages"));
    }

    #[test]
    fn keeps_order_and_raw_percentages() {
        let html = render(SkewedSentiment);

        // 90 + 40 + 5 is shown without rescaling.
        assert!(html.contains("90%"));
        assert!(html.contains("40%"));
        assert!(html.contains("5%"));

        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);

        // Unparseable links are echoed back verbatim.
        assert!(html.contains("garbage"));
    }
}
