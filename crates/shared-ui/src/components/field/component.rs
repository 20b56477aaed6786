use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Caption, control and inline error for one form field.
///
/// `id` must match the id given to the control passed as children.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            prim::Label { class: "form-field-label", html_for: id, "{label}" }
            {children}
            if let Some(error) = error {
                p { class: "form-field-error", role: "alert", "{error}" }
            }
        }
    }
}
