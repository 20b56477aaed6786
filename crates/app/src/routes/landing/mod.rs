mod header;
mod hero;

pub use header::SiteHeader;
pub use hero::Hero;

use dioxus::prelude::*;

use super::login_modal::LoginModal;

/// Public page shown while nobody is signed in.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            SiteHeader {}
            main { Hero {} }
            LoginModal {}
        }
    }
}
