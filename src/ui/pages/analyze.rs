//! Landing page: hero, listing form, and the results swap-in.

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::AnalyzerConfig;
use crate::domain::{AnalysisReport, AnalysisSession, SubmitOutcome};
use crate::infra::mock_analyzer::MockAnalyzer;
use crate::ui::{
    components::{
        seller_analysis::SellerAnalysis,
        toast::{push_toast, ToastKind, ToastMessage},
        url_input::UrlInput,
    },
    theme,
};
use crate::util::{assets, format::format_completed_at};

#[component]
pub fn AnalyzePage() -> Element {
    let mut session = use_context::<Signal<AnalysisSession>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AnalyzerConfig>();
    let analyzer = use_hook(|| MockAnalyzer::new(&config));

    // Handle of the pending completion so leaving the results can cancel it.
    let pending_task = use_signal(|| None::<Task>);

    // The completion task dies with this page; the session outlives it.
    use_drop(move || {
        let pending = session.try_peek().ok().and_then(|s| s.pending_ticket());
        if let Some(ticket) = pending {
            if let Ok(mut s) = session.try_write() {
                s.abandon(ticket);
            }
        }
    });

    let on_analyze =
        move |url: String| start_analysis(session, toasts, pending_task, &analyzer, url);
    let on_back = move |_: ()| leave_results(session, pending_task);

    let report = session.read().report().cloned();
    let is_loading = session.read().is_loading();
    let pending_url = session.read().url().map(str::to_string);

    if let Some(report) = report {
        return rsx! {
            ResultsView { report, on_back }
        };
    }

    rsx! {
        div {
            Hero {}
            section { class: "py-16",
                UrlInput { on_analyze, is_loading }
                if let Some(url) = pending_url {
                    p { class: "mt-4 text-center text-sm {theme::TEXT_MUTED}", "Checking {url}" }
                }
            }
            HowItWorks {}
        }
    }
}

/// Submits `url` and, when a new analysis starts, spawns its completion.
fn start_analysis(
    mut session: Signal<AnalysisSession>,
    toasts: Signal<Vec<ToastMessage>>,
    mut pending_task: Signal<Option<Task>>,
    analyzer: &MockAnalyzer,
    url: String,
) {
    let ticket = match session.with_mut(|s| s.submit(url.clone())) {
        Ok(SubmitOutcome::Started(ticket)) => ticket,
        Ok(SubmitOutcome::AlreadyLoading) => {
            tracing::debug!("analysis already running; submit ignored");
            return;
        }
        Err(err) => {
            tracing::warn!(%err, "session rejected listing url");
            return;
        }
    };

    let analyzer = analyzer.clone();
    let task = spawn(async move {
        match analyzer.analyze(&url).await {
            Ok(seller) => {
                let name = seller.name.clone();
                if session.with_mut(|s| s.complete(ticket, seller)) {
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Analysis ready for {name}."),
                    );
                }
            }
            Err(err) => {
                tracing::error!(%ticket, %err, "mock analysis failed");
                if session.with_mut(|s| s.abandon(ticket)) {
                    push_toast(toasts, ToastKind::Error, format!("Analysis failed: {err}"));
                }
            }
        }
        pending_task.set(None);
    });
    pending_task.set(Some(task));
}

fn leave_results(mut session: Signal<AnalysisSession>, mut pending_task: Signal<Option<Task>>) {
    if let Some(task) = pending_task.write().take() {
        task.cancel();
    }
    session.with_mut(|s| s.back());
}

#[component]
fn ResultsView(report: AnalysisReport, on_back: EventHandler<()>) -> Element {
    let completed = format_completed_at(report.completed_at);

    rsx! {
        div { class: "py-8",
            div { class: "mb-6 flex items-center justify-between",
                button {
                    class: "{theme::BTN_GHOST}",
                    onclick: move |_| on_back.call(()),
                    span { "←" }
                    "Analyze Another Seller"
                }
                if !completed.is_empty() {
                    span { class: "text-xs text-slate-500", "Analyzed at {completed}" }
                }
            }
            SellerAnalysis { seller: report.seller.clone(), product_url: report.url.clone() }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "relative overflow-hidden rounded-2xl bg-gradient-to-br from-indigo-500/5 to-emerald-500/5",
            div { class: "grid grid-cols-1 items-center gap-12 px-4 py-16 lg:grid-cols-2 lg:py-24",
                div { class: "space-y-8",
                    div { class: "space-y-4",
                        h1 { class: "text-4xl font-bold leading-tight text-slate-100 lg:text-6xl",
                            "Smart eBay"
                            span { class: "block {theme::TEXT_PRIMARY}", "Seller Analysis" }
                        }
                        p { class: "max-w-lg text-xl {theme::TEXT_MUTED}",
                            "Get AI-powered insights on any eBay seller. Paste a product link and discover trust scores, sentiment analysis, and buyer feedback patterns."
                        }
                    }
                    div { class: "flex flex-wrap gap-4 text-sm",
                        FeaturePill { label: "Trust Score Analysis", tone: "bg-emerald-500/10 text-trust-excellent" }
                        FeaturePill { label: "Sentiment Analysis", tone: "bg-indigo-500/10 text-indigo-300" }
                        FeaturePill { label: "Risk Detection", tone: "bg-amber-500/10 text-amber-300" }
                    }
                }
                div { class: "relative",
                    img {
                        class: "rounded-xl border border-slate-800 shadow-2xl",
                        src: assets::hero_data_uri(),
                        alt: "eBay Seller Analysis Dashboard",
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturePill(label: &'static str, tone: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center gap-2 rounded-full px-3 py-1 {tone}",
            div { class: "h-2 w-2 rounded-full bg-current" }
            "{label}"
        }
    }
}

#[component]
fn HowItWorks() -> Element {
    rsx! {
        section { class: "rounded-2xl bg-slate-900/30 py-16",
            h2 { class: "mb-12 text-center text-3xl font-bold text-slate-100", "How It Works" }
            div { class: "grid grid-cols-1 gap-8 px-4 md:grid-cols-3",
                Step {
                    number: 1,
                    title: "Paste URL",
                    body: "Simply paste any eBay product link into our analyzer",
                }
                Step {
                    number: 2,
                    title: "AI Analysis",
                    body: "Our AI analyzes seller data, reviews, and feedback patterns",
                }
                Step {
                    number: 3,
                    title: "Get Insights",
                    body: "Receive comprehensive trust scores and buying recommendations",
                }
            }
        }
    }
}

#[component]
fn Step(number: u8, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "space-y-4 text-center",
            div { class: "mx-auto flex h-16 w-16 items-center justify-center rounded-xl bg-indigo-500/10",
                span { class: "text-2xl font-bold {theme::TEXT_PRIMARY}", "{number}" }
            }
            h3 { class: "text-xl font-semibold text-slate-100", "{title}" }
            p { class: "{theme::TEXT_MUTED}", "{body}" }
        }
    }
}
