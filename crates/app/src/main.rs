use dioxus::prelude::*;

mod config;
mod format_helpers;
mod notify;
mod routes;
mod session;
use routes::Route;
use session::{LoginState, SessionState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = client_platform(), "athlete connect starting"));

    let config = config::app_config();
    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.login.clone());

    use_context_provider(SessionState::new);
    use_context_provider(LoginState::new);

    rsx! {
        document::Title { "Athlete Connect" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
