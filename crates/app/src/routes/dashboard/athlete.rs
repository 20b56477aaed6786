use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdCalendar, LdMedal, LdStar, LdTarget, LdTrophy};
use dioxus_free_icons::Icon;
use shared_types::{AthleteSummary, Benchmark};
use shared_ui::{Badge, BadgeTone, Card, CardContent, CardHeader, ScoreBar};

use super::{Accent, StatCard};
use crate::format_helpers::format_date_human;

fn benchmark_tone(benchmark: Benchmark) -> BadgeTone {
    match benchmark {
        Benchmark::Excellent => BadgeTone::Green,
        Benchmark::AboveAverage => BadgeTone::Primary,
        Benchmark::Average => BadgeTone::Muted,
    }
}

/// Test totals, achievements and recent results for a signed-in athlete.
#[component]
pub fn AthleteDashboard(summary: AthleteSummary) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard {
                label: "Total Tests",
                value: summary.total_tests.to_string(),
                accent: Accent::Primary,
                icon: rsx! { Icon::<LdTarget> { icon: LdTarget, width: 28, height: 28 } },
            }
            StatCard {
                label: "Average Score",
                value: format!("{}%", summary.average_score),
                accent: Accent::Green,
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 28, height: 28 } },
            }
            StatCard {
                label: "State Rank",
                value: format!("#{}", summary.state_rank),
                accent: Accent::Saffron,
                icon: rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 28, height: 28 } },
            }
        }

        Card {
            CardHeader {
                title: "Achievements",
                icon: rsx! { Icon::<LdMedal> { icon: LdMedal, width: 18, height: 18 } },
            }
            CardContent {
                div { class: "achievement-list",
                    for badge in summary.badges.iter() {
                        Badge {
                            key: "{badge}",
                            tone: BadgeTone::Saffron,
                            icon: rsx! { Icon::<LdStar> { icon: LdStar, width: 12, height: 12 } },
                            "{badge}"
                        }
                    }
                }
            }
        }

        Card {
            CardHeader { title: "Recent Performance", description: "Your latest fitness assessments" }
            CardContent {
                div { class: "result-list",
                    for test in summary.recent_tests.iter() {
                        div { key: "{test.name}", class: "result-row",
                            div { class: "result-head",
                                div {
                                    p { class: "result-name", "{test.name}" }
                                    p { class: "result-date",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                        "{format_date_human(&test.date)}"
                                    }
                                }
                                div { class: "result-score",
                                    span { class: "result-score-value", "{test.score}%" }
                                    Badge { tone: benchmark_tone(test.benchmark), "{test.benchmark.label()}" }
                                }
                            }
                            ScoreBar { score: test.score }
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
    use pretty_assertions::assert_eq;

    fn render() -> String {
        fn harness() -> Element {
            rsx! { AthleteDashboard { summary: AthleteSummary::sample() } }
        }
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_headline_stats() {
        let html = render();
        assert!(html.contains("Total Tests"));
        assert!(html.contains("87%"));
        assert!(html.contains("#15"));
    }

    #[test]
    fn lists_achievements_and_recent_tests() {
        let html = render();
        assert!(html.contains("Speed Demon"));
        assert!(html.contains("100m Sprint"));
        assert!(html.contains("Above Average"));
    }

    #[test]
    fn benchmark_badges_are_ranked() {
        assert_eq!(benchmark_tone(Benchmark::Excellent), BadgeTone::Green);
        assert_eq!(benchmark_tone(Benchmark::Average), BadgeTone::Muted);
    }
}
