use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdMedal, LdStar, LdTarget, LdTrophy, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent};

use crate::format_helpers::format_at_least;
use crate::session::use_login;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "AI-Powered Assessment",
        description: "Advanced technology analyzes your performance and provides instant feedback",
    },
    Feature {
        title: "Performance Tracking",
        description: "Track progress with detailed analytics and benchmark comparisons",
    },
    Feature {
        title: "Talent Recognition",
        description: "Get discovered by SAI coaches and unlock your athletic potential",
    },
    Feature {
        title: "Expert Guidance",
        description: "Connect with certified coaches for personalized training recommendations",
    },
];

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdTarget> { icon: LdTarget, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 } },
        2 => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
    }
}

fn stat_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
        1 => rsx! { Icon::<LdStar> { icon: LdStar, width: 32, height: 32 } },
        2 => rsx! { Icon::<LdMedal> { icon: LdMedal, width: 32, height: 32 } },
        _ => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 32, height: 32 } },
    }
}

/// Headline, call to action, national figures and the feature grid.
#[component]
pub fn Hero() -> Element {
    let mut login = use_login();

    let stats = [
        (format_at_least(50_000), "Athletes Registered"),
        (format_at_least(500), "Coaches Active"),
        ("28".to_string(), "States Covered"),
        (format_at_least(15), "Sports Categories"),
    ];

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container hero-content",
                div { class: "flag-accent",
                    span { class: "flag-saffron" }
                    span { class: "flag-white" }
                    span { class: "flag-green" }
                }

                h1 { class: "hero-title",
                    "Discover India's"
                    span { class: "hero-title-accent", "Athletic Champions" }
                }
                p { class: "hero-copy",
                    "Official AI-powered talent assessment portal by Sports Authority of India. "
                    "Register, track your performance, and unlock your sporting potential."
                }

                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Saffron,
                        size: ButtonSize::Large,
                        onclick: move |_| login.open(Role::Athlete),
                        Icon::<LdTrophy> { icon: LdTrophy, width: 20, height: 20 }
                        "Get Started as Athlete"
                    }
                    a {
                        href: "#features",
                        class: "button",
                        "data-style": "inverse",
                        "data-size": "lg",
                        "Learn More"
                    }
                }

                div { class: "hero-stats",
                    for (index, (number, label)) in stats.iter().enumerate() {
                        div { key: "{label}", class: "hero-stat",
                            span { class: "hero-stat-icon", {stat_icon(index)} }
                            div { class: "hero-stat-number", "{number}" }
                            div { class: "hero-stat-label", "{label}" }
                        }
                    }
                }
            }
        }

        section { id: "features", class: "features",
            div { class: "container",
                div { class: "features-intro",
                    h2 { "Empowering Athletes Across India" }
                    p {
                        "Our comprehensive platform combines cutting-edge AI technology with expert coaching "
                        "to identify and nurture sporting talent nationwide."
                    }
                }
                div { class: "features-grid",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        Card { key: "{feature.title}", hoverable: true,
                            CardContent {
                                div { class: "feature-icon", {feature_icon(index)} }
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-description", "{feature.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
