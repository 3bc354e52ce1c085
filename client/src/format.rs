use hanami_shared::Trend;

/// Compact score for podium cards and table cells (e.g. 12300 -> "12.3k").
pub fn format_score_compact(score: f64) -> String {
    if score >= 1000.0 {
        format!("{:.1}k", score / 1000.0)
    } else {
        format!("{}", score.round() as i64)
    }
}

pub fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "\u{25B2}",
        Trend::Down => "\u{25BC}",
        Trend::Same => "\u{2014}",
    }
}

pub fn trend_color(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "#7dc982",
        Trend::Down => "#d96a5f",
        Trend::Same => "#5a5860",
    }
}

/// Trend cell text: glyph plus the delta when there is movement.
pub fn format_trend(trend: Trend, trend_value: f64) -> String {
    match trend {
        Trend::Same => trend_glyph(trend).to_string(),
        _ => format!("{} {}", trend_glyph(trend), trend_value.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_score_compact, format_trend, trend_glyph};
    use hanami_shared::Trend;

    #[test]
    fn scores_below_one_thousand_stay_plain() {
        assert_eq!(format_score_compact(0.0), "0");
        assert_eq!(format_score_compact(999.0), "999");
        assert_eq!(format_score_compact(640.5), "641");
    }

    #[test]
    fn scores_at_or_above_one_thousand_are_compacted() {
        assert_eq!(format_score_compact(1000.0), "1.0k");
        assert_eq!(format_score_compact(12_340.0), "12.3k");
    }

    #[test]
    fn flat_trend_renders_glyph_only() {
        assert_eq!(format_trend(Trend::Same, 0.0), trend_glyph(Trend::Same));
        assert_eq!(format_trend(Trend::Up, 3.0), "\u{25B2} 3");
        assert_eq!(format_trend(Trend::Down, 2.0), "\u{25BC} 2");
    }
}
