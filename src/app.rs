use dioxus::prelude::*;

use crate::{
    config::AnalyzerConfig,
    domain::AnalysisSession,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AnalyzePage, NotFoundPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // Read once; env overrides only apply at start-up.
    let config = use_hook(AnalyzerConfig::from_env);
    use_context_provider(|| config.clone());

    let session = use_signal(AnalysisSession::default);
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { AnalyzePage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
