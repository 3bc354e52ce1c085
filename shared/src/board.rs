use crate::leader::LeaderEntry;

/// The podium always renders exactly this many slots.
pub const PODIUM_SIZE: usize = 3;

/// Sentinel dropdown option that disables ecosystem filtering.
pub const ALL_ECOSYSTEMS: &str = "All Ecosystems";

/// User-facing message when a fetch failure carries no message of its own.
pub const FETCH_ERROR_FALLBACK: &str = "Failed to load leaderboard";

/// Top-three selection for podium rendering. Takes the first `min(3, N)`
/// entries in existing rank order and pads with `placeholder(rank)` rows,
/// ranks continuing the sequence, until exactly three.
pub fn podium<T: Clone>(entries: &[T], placeholder: impl Fn(u32) -> T) -> Vec<T> {
    let mut top: Vec<T> = entries.iter().take(PODIUM_SIZE).cloned().collect();
    let mut next_rank = top.len() as u32;
    while top.len() < PODIUM_SIZE {
        next_rank += 1;
        top.push(placeholder(next_rank));
    }
    top.truncate(PODIUM_SIZE);
    top
}

/// Dropdown contents: the sentinel followed by every distinct ecosystem in
/// the entry list, insertion order preserved.
pub fn ecosystem_options(entries: &[LeaderEntry]) -> Vec<String> {
    let mut options = vec![ALL_ECOSYSTEMS.to_string()];
    for entry in entries {
        for eco in &entry.ecosystems {
            if !options.contains(eco) {
                options.push(eco.clone());
            }
        }
    }
    options
}

pub fn matches_ecosystem(ecosystems: &[String], selected: &str) -> bool {
    selected == ALL_ECOSYSTEMS || ecosystems.iter().any(|eco| eco == selected)
}

/// Convert a fetch failure into the message shown to the user.
pub fn display_error(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        FETCH_ERROR_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A response is stale when another fetch was dispatched after it; stale
/// responses must be discarded, never applied.
pub fn stale_response(dispatched_nonce: u64, current_nonce: u64) -> bool {
    dispatched_nonce != current_nonce
}

#[cfg(test)]
mod tests {
    use super::{
        ALL_ECOSYSTEMS, FETCH_ERROR_FALLBACK, display_error, ecosystem_options, matches_ecosystem,
        podium, stale_response,
    };
    use crate::leader::{LeaderEntry, RawLeaderEntry, Trend};

    fn entry(rank: u32, username: &str, ecosystems: &[&str]) -> LeaderEntry {
        LeaderEntry::from_raw(RawLeaderEntry {
            rank,
            username: username.to_string(),
            avatar: None,
            score: 100.0 / rank as f64,
            trend: Trend::Same,
            trend_value: 0.0,
            contributions: 10,
            ecosystems: Some(ecosystems.iter().map(|s| s.to_string()).collect()),
        })
    }

    #[test]
    fn podium_pads_empty_list_with_placeholder_ranks() {
        let top = podium(&[], LeaderEntry::placeholder);
        assert_eq!(top.len(), 3);
        assert_eq!(
            top.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(top.iter().all(LeaderEntry::is_placeholder));
    }

    #[test]
    fn podium_pads_partial_list_continuing_rank_sequence() {
        let entries = vec![entry(1, "mika", &[])];
        let top = podium(&entries, LeaderEntry::placeholder);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].username, "mika");
        assert_eq!(top[1].rank, 2);
        assert_eq!(top[2].rank, 3);
        assert!(top[1].is_placeholder() && top[2].is_placeholder());

        let entries = vec![entry(1, "mika", &[]), entry(2, "lin", &[])];
        let top = podium(&entries, LeaderEntry::placeholder);
        assert_eq!(top.len(), 3);
        assert_eq!(top[2].rank, 3);
        assert!(top[2].is_placeholder());
    }

    #[test]
    fn podium_takes_first_three_without_placeholders() {
        let entries: Vec<LeaderEntry> = (1..=5).map(|r| entry(r, &format!("u{r}"), &[])).collect();
        let top = podium(&entries, LeaderEntry::placeholder);
        assert_eq!(top.len(), 3);
        assert_eq!(
            top.iter().map(|e| e.username.as_str()).collect::<Vec<_>>(),
            vec!["u1", "u2", "u3"]
        );
        assert!(top.iter().all(|e| !e.is_placeholder()));
    }

    #[test]
    fn ecosystem_options_start_with_sentinel_and_preserve_order() {
        let entries = vec![
            entry(1, "mika", &["Rust", "Go"]),
            entry(2, "lin", &["Go", "TypeScript"]),
        ];
        assert_eq!(
            ecosystem_options(&entries),
            vec![ALL_ECOSYSTEMS, "Rust", "Go", "TypeScript"]
        );
    }

    #[test]
    fn sentinel_matches_everything() {
        let ecosystems = vec!["Rust".to_string()];
        assert!(matches_ecosystem(&ecosystems, ALL_ECOSYSTEMS));
        assert!(matches_ecosystem(&[], ALL_ECOSYSTEMS));
        assert!(matches_ecosystem(&ecosystems, "Rust"));
        assert!(!matches_ecosystem(&ecosystems, "Go"));
        assert!(!matches_ecosystem(&[], "Go"));
    }

    #[test]
    fn display_error_prefers_message_over_fallback() {
        assert_eq!(display_error("timeout"), "timeout");
        assert_eq!(display_error(""), FETCH_ERROR_FALLBACK);
        assert_eq!(display_error("   "), FETCH_ERROR_FALLBACK);
    }

    #[test]
    fn stale_responses_are_detected() {
        assert!(!stale_response(4, 4));
        assert!(stale_response(4, 5));
        assert!(stale_response(u64::MAX, u64::MAX.wrapping_add(1)));
    }
}
