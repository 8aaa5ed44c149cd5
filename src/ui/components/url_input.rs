use dioxus::prelude::*;

use crate::domain::{validate_listing_url, UrlValidationError};
use crate::ui::theme;

/// Listing link form. Validation errors stay local to the form; only a
/// well-formed link reaches `on_analyze`.
#[component]
pub fn UrlInput(on_analyze: EventHandler<String>, is_loading: bool) -> Element {
    let mut url = use_signal(String::new);
    let mut error = use_signal(|| None::<UrlValidationError>);

    let submit_disabled = is_loading || url.read().trim().is_empty();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_listing(url(), error, on_analyze);
    };

    rsx! {
        div {
            class: "mx-auto w-full max-w-2xl rounded-xl border border-slate-800 bg-slate-900/60 p-8 shadow-lg",
            div { class: "mb-6 text-center",
                h2 { class: "mb-2 text-2xl font-bold text-slate-100", "Analyze eBay Seller" }
                p { class: "{theme::TEXT_MUTED}",
                    "Paste any eBay product link to get instant seller analysis and trust insights"
                }
            }

            form { class: "space-y-4", onsubmit: on_submit,
                div { class: "relative",
                    input {
                        class: "{theme::INPUT}",
                        r#type: "url",
                        placeholder: "https://www.ebay.com/itm/...",
                        value: "{url}",
                        disabled: is_loading,
                        oninput: move |evt| url.set(evt.value()),
                    }
                    span {
                        class: "pointer-events-none absolute right-3 top-1/2 -translate-y-1/2 {theme::TEXT_MUTED}",
                        "🔍"
                    }
                }

                if let Some(err) = error() {
                    ValidationMessage { error: err }
                }

                button {
                    class: "{theme::BTN_PRIMARY}",
                    r#type: "submit",
                    disabled: submit_disabled,
                    if is_loading {
                        div { class: "flex items-center justify-center gap-2",
                            div { class: "spinner" }
                            "Analyzing Seller..."
                        }
                    } else {
                        "Analyze Seller"
                    }
                }
            }
        }
    }
}

/// Hands a well-formed link to `on_analyze`; anything else only updates the
/// inline error.
fn submit_listing(
    value: String,
    mut error: Signal<Option<UrlValidationError>>,
    on_analyze: EventHandler<String>,
) {
    match validate_listing_url(&value) {
        Ok(()) => {
            error.set(None);
            on_analyze.call(value);
        }
        Err(err) => {
            tracing::debug!(%err, "rejected listing url");
            error.set(Some(err));
        }
    }
}

#[component]
fn ValidationMessage(error: UrlValidationError) -> Element {
    rsx! {
        div { class: "flex items-center gap-2 text-sm {theme::TEXT_ERROR}",
            span { "⚠" }
            "{error}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Runs one submission through the form handler and renders what the
    /// form would show afterwards.
    fn submitted(value: &'static str) -> Element {
        let error = use_signal(|| None::<UrlValidationError>);
        let mut accepted = use_signal(Vec::<String>::new);
        use_hook(|| {
            let on_analyze = EventHandler::new(move |url: String| accepted.write().push(url));
            submit_listing(value.to_string(), error, on_analyze);
        });

        rsx! {
            if let Some(err) = error() {
                ValidationMessage { error: err }
            }
            p { "accepted: {accepted.read().len()}" }
        }
    }

    #[allow(non_snake_case)]
    fn ForeignLink() -> Element {
        submitted("https://www.amazon.com/dp/B000")
    }

    #[allow(non_snake_case)]
    fn BlankLink() -> Element {
        submitted("   ")
    }

    #[allow(non_snake_case)]
    fn ListingLink() -> Element {
        submitted("https://www.ebay.co.uk/itm/12345")
    }

    #[allow(non_snake_case)]
    fn Busy() -> Element {
        rsx! {
            UrlInput { on_analyze: move |_: String| {}, is_loading: true }
        }
    }

    #[test]
    fn foreign_link_shows_inline_error_without_analyzing() {
        let html = render(ForeignLink);
        assert!(html.contains("Please enter a valid eBay product URL"));
        assert!(html.contains("accepted: 0"));
    }

    #[test]
    fn blank_link_asks_for_a_url() {
        let html = render(BlankLink);
        assert!(html.contains("Please enter an eBay product URL"));
        assert!(!html.contains("valid eBay"));
        assert!(html.contains("accepted: 0"));
    }

    #[test]
    fn listing_link_reaches_the_callback() {
        let html = render(ListingLink);
        assert!(!html.contains("Please enter"));
        assert!(html.contains("accepted: 1"));
    }

    #[test]
    fn busy_form_is_disabled() {
        let html = render(Busy);
        assert!(html.contains("Analyzing Seller..."));
        assert!(html.contains("disabled"));
        assert!(!html.contains("Please enter"));
    }
}
