//! Sample figures shown on the role dashboards.
//!
//! Nothing here is fetched; each `sample()` returns the same fixed numbers.

use serde::{Deserialize, Serialize};

/// How a test score compares with the benchmark for the athlete's group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Benchmark {
    Excellent,
    AboveAverage,
    Average,
}

impl Benchmark {
    pub fn label(&self) -> &'static str {
        match self {
            Benchmark::Excellent => "Excellent",
            Benchmark::AboveAverage => "Above Average",
            Benchmark::Average => "Average",
        }
    }
}

/// A single completed fitness test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    /// Percentage score, 0-100.
    pub score: u32,
    pub benchmark: Benchmark,
    /// ISO-8601 date the test was taken.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteSummary {
    pub total_tests: u32,
    pub average_score: u32,
    pub state_rank: u32,
    pub badges: Vec<String>,
    pub recent_tests: Vec<TestResult>,
}

impl AthleteSummary {
    pub fn sample() -> Self {
        Self {
            total_tests: 12,
            average_score: 87,
            state_rank: 15,
            badges: vec![
                "Speed Demon".into(),
                "Consistent Performer".into(),
                "Rising Star".into(),
            ],
            recent_tests: vec![
                TestResult {
                    name: "100m Sprint".into(),
                    score: 92,
                    benchmark: Benchmark::AboveAverage,
                    date: "2024-01-20".into(),
                },
                TestResult {
                    name: "Long Jump".into(),
                    score: 78,
                    benchmark: Benchmark::Average,
                    date: "2024-01-15".into(),
                },
                TestResult {
                    name: "Sit-ups".into(),
                    score: 95,
                    benchmark: Benchmark::Excellent,
                    date: "2024-01-10".into(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAthlete {
    pub name: String,
    pub sport: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachSummary {
    pub athlete_count: u32,
    pub pending_reviews: u32,
    /// Average improvement across the squad, in percentage points.
    pub average_improvement: u32,
    pub top_athletes: Vec<RankedAthlete>,
}

impl CoachSummary {
    pub fn sample() -> Self {
        Self {
            athlete_count: 25,
            pending_reviews: 8,
            average_improvement: 15,
            top_athletes: vec![
                RankedAthlete {
                    name: "Rahul Kumar".into(),
                    sport: "Sprint".into(),
                    score: 94,
                },
                RankedAthlete {
                    name: "Priya Singh".into(),
                    sport: "Long Jump".into(),
                    score: 91,
                },
                RankedAthlete {
                    name: "Arjun Patel".into(),
                    sport: "High Jump".into(),
                    score: 89,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateStats {
    pub state: String,
    pub athletes: u64,
    pub average_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub total_athletes: u64,
    pub total_coaches: u64,
    pub states_covered: u32,
    pub tests_this_month: u64,
    pub top_states: Vec<StateStats>,
}

impl AdminSummary {
    pub fn sample() -> Self {
        Self {
            total_athletes: 50_000,
            total_coaches: 500,
            states_covered: 28,
            tests_this_month: 15_000,
            top_states: vec![
                StateStats {
                    state: "Maharashtra".into(),
                    athletes: 8_500,
                    average_score: 85,
                },
                StateStats {
                    state: "Karnataka".into(),
                    athletes: 6_200,
                    average_score: 83,
                },
                StateStats {
                    state: "Tamil Nadu".into(),
                    athletes: 5_800,
                    average_score: 82,
                },
            ],
        }
    }
}
