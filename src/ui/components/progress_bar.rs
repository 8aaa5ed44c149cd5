use dioxus::prelude::*;

use crate::util::format::bar_width;

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: f64) -> Element {
    let width = bar_width(value);

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{width}",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}
