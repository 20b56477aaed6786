use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdMapPin, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::AdminSummary;
use shared_ui::{Card, CardContent, CardHeader};

use super::{Accent, StatCard};
use crate::format_helpers::format_count;

/// National totals and the strongest states, for administrators.
#[component]
pub fn AdminDashboard(summary: AdminSummary) -> Element {
    rsx! {
        div { class: "stat-grid stat-grid-wide",
            StatCard {
                label: "Total Athletes",
                value: format_count(summary.total_athletes),
                accent: Accent::Primary,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
            }
            StatCard {
                label: "Active Coaches",
                value: format_count(summary.total_coaches),
                accent: Accent::Green,
                icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 28, height: 28 } },
            }
            StatCard {
                label: "States Covered",
                value: summary.states_covered.to_string(),
                accent: Accent::Saffron,
                icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 28, height: 28 } },
            }
            StatCard {
                label: "Tests This Month",
                value: format_count(summary.tests_this_month),
                accent: Accent::Primary,
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 28, height: 28 } },
            }
        }

        Card {
            CardHeader { title: "Top Performing States", description: "Average assessment score by state" }
            CardContent {
                for stats in summary.top_states.iter() {
                    div { key: "{stats.state}", class: "state-row",
                        div {
                            p { class: "state-name", "{stats.state}" }
                            p { class: "state-detail", "{format_count(stats.athletes)} athletes" }
                        }
                        div { class: "state-score",
                            span { class: "state-score-value", "{stats.average_score}%" }
                            span { class: "state-score-label", "Average Score" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_national_totals() {
        fn harness() -> Element {
            rsx! { AdminDashboard { summary: AdminSummary::sample() } }
        }
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("50,000"));
        assert!(html.contains("15,000"));
        assert!(html.contains("8,500 athletes"));
        assert!(html.contains("Maharashtra"));
    }
}
