use dioxus::prelude::*;

/// Badge colour, drawn from the saffron / green / navy palette.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    Saffron,
    Green,
    #[default]
    Primary,
    /// Neutral grey, for tags that carry no ranking.
    Muted,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Saffron => "saffron",
            BadgeTone::Green => "green",
            BadgeTone::Primary => "primary",
            BadgeTone::Muted => "muted",
        }
    }
}

/// Pill-shaped label for achievements, sports, scores and benchmarks.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(default)] icon: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-tone": tone.class(),
            if let Some(icon) = icon {
                span { class: "badge-icon", {icon} }
            }
            {children}
        }
    }
}
