use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal overlay with a centred panel.
///
/// The caller owns the open state; any dismissal (escape key, overlay
/// click) is reported through `on_dismiss` and the caller decides whether
/// to honour it.
#[component]
pub fn Dialog(open: bool, on_dismiss: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "dialog-overlay",
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_dismiss.call(());
                }
            },
            prim::DialogContent { class: "dialog-content", {children} }
        }
    }
}

#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        prim::DialogTitle { class: "dialog-title", {children} }
    }
}

#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        prim::DialogDescription { class: "dialog-description", {children} }
    }
}
