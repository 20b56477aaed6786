pub mod admin;
pub mod athlete;
pub mod coach;

pub use admin::AdminDashboard;
pub use athlete::AthleteDashboard;
pub use coach::CoachDashboard;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMapPin};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeTone, Button, ButtonVariant, Card, CardContent};

use crate::session::{use_login, use_session};

/// Accent colour of a stat card icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Accent {
    Saffron,
    Green,
    #[default]
    Primary,
}

impl Accent {
    fn class(&self) -> &'static str {
        match self {
            Accent::Saffron => "accent-saffron",
            Accent::Green => "accent-green",
            Accent::Primary => "accent-primary",
        }
    }
}

/// Banner with the dashboard title, greeting and logout button, wrapping
/// the role-specific content.
#[component]
pub fn DashboardShell(children: Element) -> Element {
    let mut session = use_session();
    let mut login = use_login();

    let Some(identity) = session.current_identity.read().clone() else {
        return rsx! {};
    };
    let role = identity.role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-banner",
                div { class: "container dashboard-banner-row",
                    div {
                        h1 { class: "dashboard-title", "{role.dashboard_title()}" }
                        p { class: "dashboard-greeting", "Welcome back, {identity.name()}" }
                        if let Some(location) = identity.location() {
                            p { class: "dashboard-location",
                                Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                                "{location}"
                            }
                        }
                        if !identity.sports().is_empty() {
                            div { class: "dashboard-sports",
                                for sport in identity.sports().iter() {
                                    Badge { key: "{sport}", tone: BadgeTone::Saffron, "{sport}" }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Inverse,
                        onclick: move |_| login.sign_out(&mut session),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            div { class: "container dashboard-content",
                {children}
            }
        }
    }
}

/// A headline figure with a label and an accent-coloured icon.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] accent: Accent,
    icon: Element,
) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-row",
                    div {
                        p { class: "stat-label", "{label}" }
                        p { class: "stat-value", "{value}" }
                    }
                    div { class: "stat-icon {accent.class()}", {icon} }
                }
            }
        }
    }
}
