pub mod dashboard;
pub mod landing;
pub mod login_modal;
pub mod not_found;

use crate::session::{use_login, use_view};
use dioxus::prelude::*;
use shared_types::{AdminSummary, AthleteSummary, CoachSummary, Role, ViewKind};

use dashboard::{AdminDashboard, AthleteDashboard, CoachDashboard, DashboardShell};
use landing::Landing;
use not_found::NotFound;

/// Application routes.
///
/// Signed-in and signed-out users share `/`; which screen it shows is
/// decided by the session, not the URL.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login/:role")]
    LoginLink { role: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Renders exactly one screen for the current session.
#[component]
fn Home() -> Element {
    match use_view() {
        ViewKind::Landing => rsx! { Landing {} },
        ViewKind::AthleteDashboard => rsx! {
            DashboardShell {
                AthleteDashboard { summary: AthleteSummary::sample() }
            }
        },
        ViewKind::CoachDashboard => rsx! {
            DashboardShell {
                CoachDashboard { summary: CoachSummary::sample() }
            }
        },
        ViewKind::AdminDashboard => rsx! {
            DashboardShell {
                AdminDashboard { summary: AdminSummary::sample() }
            }
        },
    }
}

/// Landing page with the login dialog already open for `role`. Unknown
/// role keys fall back to the plain landing page.
#[component]
fn LoginLink(role: String) -> Element {
    let mut login = use_login();
    let parsed = Role::parse(&role);
    use_hook(move || match parsed {
        Some(role) => login.open(role),
        None => tracing::debug!(%role, "unknown role in login link"),
    });

    rsx! { Home {} }
}
