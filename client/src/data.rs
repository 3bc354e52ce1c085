use hanami_shared::{ProjectEntry, Trend};

/// Locally bundled project rankings. Ordered by rank; the page treats this
/// as read-only reference data and never refetches it.
pub fn projects() -> Vec<ProjectEntry> {
    let rows: &[(&str, &str, &str, f64, Trend, f64, u32, &[&str])] = &[
        (
            "paddy-core",
            "Field sensor ingestion and irrigation scheduling",
            "\u{1F33E}",
            4820.0,
            Trend::Up,
            210.0,
            64,
            &["Rust", "Go"],
        ),
        (
            "terrace",
            "Declarative dashboards for growers' co-ops",
            "\u{1F3DE}",
            4310.0,
            Trend::Same,
            0.0,
            51,
            &["TypeScript"],
        ),
        (
            "grain-ledger",
            "Harvest provenance tracking and settlement",
            "\u{1F4D2}",
            3995.0,
            Trend::Up,
            120.0,
            47,
            &["Rust", "Solidity"],
        ),
        (
            "mill-queue",
            "Batch pipeline orchestration for processing plants",
            "\u{2699}",
            3140.0,
            Trend::Down,
            85.0,
            38,
            &["Go"],
        ),
        (
            "seedbank",
            "Cultivar registry with open phenotype data",
            "\u{1F331}",
            2760.0,
            Trend::Up,
            64.0,
            29,
            &["Python"],
        ),
        (
            "silo-stats",
            "Storage telemetry collection and forecasting",
            "\u{1F4CA}",
            2485.0,
            Trend::Same,
            0.0,
            22,
            &["Python", "TypeScript"],
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(i, (name, tagline, avatar, score, trend, trend_value, contributors, ecosystems))| {
                ProjectEntry {
                    rank: i as u32 + 1,
                    name: name.to_string(),
                    tagline: tagline.to_string(),
                    avatar: avatar.to_string(),
                    score: *score,
                    trend: *trend,
                    trend_value: *trend_value,
                    contributors: *contributors,
                    ecosystems: ecosystems.iter().map(|s| s.to_string()).collect(),
                }
            },
        )
        .collect()
}
