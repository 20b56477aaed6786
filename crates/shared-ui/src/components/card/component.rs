use dioxus::prelude::*;

/// Bordered surface grouping related content.
///
/// `hoverable` lifts the card with a shadow on pointer hover.
#[component]
pub fn Card(
    #[props(default = false)] hoverable: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![Attribute::new("class", "card", None, false)];
    if hoverable {
        base.push(Attribute::new("data-hoverable", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Title row of a card, with optional leading icon and muted description.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title",
                if let Some(icon) = icon {
                    span { class: "card-title-icon", {icon} }
                }
                "{title}"
            }
            if let Some(description) = description {
                p { class: "card-description", "{description}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_title_and_optional_description() {
        fn app() -> Element {
            rsx! {
                Card { hoverable: true,
                    CardHeader { title: "Recent Performance", description: "Latest assessments" }
                    CardContent { "body" }
                }
                Card {
                    CardHeader { title: "Achievements" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-hoverable="true""#));
        assert!(html.contains("Recent Performance"));
        assert!(html.contains("Latest assessments"));
        assert_eq!(html.matches("card-description").count(), 1);
    }
}
