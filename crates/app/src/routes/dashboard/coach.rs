use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::CoachSummary;
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader};

use super::{Accent, StatCard};

#[component]
pub fn CoachDashboard(summary: CoachSummary) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard {
                label: "Athletes",
                value: summary.athlete_count.to_string(),
                accent: Accent::Primary,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
            }
            StatCard {
                label: "Pending Reviews",
                value: summary.pending_reviews.to_string(),
                accent: Accent::Saffron,
                icon: rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 28, height: 28 } },
            }
            StatCard {
                label: "Avg Improvement",
                value: format!("+{}%", summary.average_improvement),
                accent: Accent::Green,
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 28, height: 28 } },
            }
        }

        Card {
            CardHeader { title: "Top Performing Athletes", description: "Ranked by latest assessment score" }
            CardContent {
                ol { class: "ranked-list",
                    for (position, athlete) in summary.top_athletes.iter().enumerate() {
                        li { key: "{athlete.name}", class: "ranked-row",
                            span { class: "ranked-position", "{position + 1}" }
                            div { class: "ranked-body",
                                p { class: "ranked-name", "{athlete.name}" }
                                p { class: "ranked-detail", "{athlete.sport}" }
                            }
                            Badge { tone: BadgeTone::Primary, "{athlete.score}%" }
                        }
                    }
                }
            }
        }
    }
}
