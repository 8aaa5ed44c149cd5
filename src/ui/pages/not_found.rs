use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        div { class: "{theme::CARD} mx-auto max-w-xl py-12 text-center",
            h2 { class: "mb-2 text-xl font-semibold text-slate-100", "Nothing here" }
            p { class: "mb-6 text-sm {theme::TEXT_MUTED}", "No page at {path}." }
            Link { class: "{theme::BTN_GHOST}", to: Route::Home {}, "← Back to the analyzer" }
        }
    }
}
