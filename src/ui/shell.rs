use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AnalysisSession;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let session = use_context::<Signal<AnalysisSession>>();
    let nav = use_navigator();
    let is_loading = session.read().is_loading();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header { class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-6xl items-center justify-between",
                    button {
                        class: "flex items-center gap-2 text-left",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        span { class: "text-2xl", "🛡️" }
                        h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                    }
                    if is_loading {
                        span { class: "flex items-center gap-2 text-xs text-indigo-300 animate-pulse",
                            div { class: "spinner" }
                            "Analyzing…"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-900/60 px-6 py-6 text-center text-xs text-slate-600",
                "{APP_NAME} {version_label()} · Demo data only; no seller information leaves this app."
            }
        }
    }
}
