use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Horizontal bar for a percentage score. Values above 100 are clamped.
#[component]
pub fn ScoreBar(score: u32) -> Element {
    let value = f64::from(score.min(100));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { class: "score-bar", value: Some(value),
            prim::ProgressIndicator { class: "score-bar-indicator" }
        }
    }
}
