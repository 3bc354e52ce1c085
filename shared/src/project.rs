use serde::{Deserialize, Serialize};

use crate::leader::{PLACEHOLDER_AVATAR, Trend};

/// One project in the locally bundled dataset. Read-only; the page never
/// mutates or refetches these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub rank: u32,
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    pub score: f64,
    pub trend: Trend,
    pub trend_value: f64,
    pub contributors: u32,
    pub ecosystems: Vec<String>,
}

impl ProjectEntry {
    /// Synthetic row for podium padding, mirroring the contributor
    /// placeholder shape.
    pub fn placeholder(rank: u32) -> Self {
        Self {
            rank,
            name: "-".to_string(),
            tagline: "-".to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            score: 0.0,
            trend: Trend::Same,
            trend_value: 0.0,
            contributors: 0,
            ecosystems: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectEntry;
    use crate::board::podium;

    #[test]
    fn placeholder_rank_is_carried_through() {
        let entry = ProjectEntry::placeholder(2);
        assert_eq!(entry.rank, 2);
        assert!(entry.is_placeholder());
    }

    #[test]
    fn project_podium_pads_like_contributors() {
        let top = podium(&[], ProjectEntry::placeholder);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(ProjectEntry::is_placeholder));
    }
}
