use serde::{Deserialize, Deserializer, Serialize};

/// Score movement since the previous ranking period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Same,
}

// The backend only emits "same" today; an unrecognized value on this
// cosmetic field must not fail the whole payload.
impl<'de> Deserialize<'de> for Trend {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Same,
        })
    }
}

/// One ranked contributor as served by the ranking endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLeaderEntry {
    pub rank: u32,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default, rename = "trendValue")]
    pub trend_value: f64,
    pub contributions: u32,
    #[serde(default)]
    pub ecosystems: Option<Vec<String>>,
}

/// One ranked contributor in display form. Every field is populated;
/// the list is replaced wholesale on each successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderEntry {
    pub rank: u32,
    pub username: String,
    pub avatar: String,
    pub score: f64,
    pub trend: Trend,
    pub trend_value: f64,
    pub contributions: u32,
    pub ecosystems: Vec<String>,
}

pub const PLACEHOLDER_AVATAR: &str = "\u{1F464}";

impl LeaderEntry {
    /// Normalize a wire record: synthesize an avatar when the backend sent
    /// none (absent or empty string), dedup ecosystems keeping first
    /// occurrence.
    pub fn from_raw(raw: RawLeaderEntry) -> Self {
        let avatar = match raw.avatar {
            Some(url) if !url.is_empty() => url,
            _ => fallback_avatar_url(&raw.username),
        };

        let mut ecosystems: Vec<String> = Vec::new();
        for eco in raw.ecosystems.unwrap_or_default() {
            if !ecosystems.contains(&eco) {
                ecosystems.push(eco);
            }
        }

        Self {
            rank: raw.rank,
            username: raw.username,
            avatar,
            score: raw.score,
            trend: raw.trend,
            trend_value: raw.trend_value,
            contributions: raw.contributions,
            ecosystems,
        }
    }

    /// Synthetic row used to pad the podium when fewer than three
    /// contributors exist.
    pub fn placeholder(rank: u32) -> Self {
        Self {
            rank,
            username: "-".to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            score: 0.0,
            trend: Trend::Same,
            trend_value: 0.0,
            contributions: 0,
            ecosystems: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.username == "-"
    }
}

/// Generated-avatar service URL for contributors without an avatar of their
/// own. Keyed by the encoded username with fixed color parameters so the
/// same contributor always gets the same image.
pub fn fallback_avatar_url(username: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=c9983a&color=fff&size=128",
        encode_uri_component(username)
    )
}

/// Percent-encoding with the browser `encodeURIComponent` character set:
/// alphanumerics and `-_.!~*'()` pass through, every other UTF-8 byte is
/// escaped.
pub fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{LeaderEntry, RawLeaderEntry, Trend, encode_uri_component, fallback_avatar_url};

    fn raw(username: &str, avatar: Option<&str>) -> RawLeaderEntry {
        RawLeaderEntry {
            rank: 1,
            username: username.to_string(),
            avatar: avatar.map(str::to_string),
            score: 42.0,
            trend: Trend::Up,
            trend_value: 3.0,
            contributions: 42,
            ecosystems: Some(vec!["Rust".to_string()]),
        }
    }

    #[test]
    fn from_raw_keeps_provided_avatar() {
        let entry = LeaderEntry::from_raw(raw("mika", Some("https://example.com/a.png")));
        assert_eq!(entry.avatar, "https://example.com/a.png");
    }

    #[test]
    fn from_raw_synthesizes_avatar_when_absent_or_empty() {
        let expected = "https://ui-avatars.com/api/?name=mika&background=c9983a&color=fff&size=128";
        assert_eq!(LeaderEntry::from_raw(raw("mika", None)).avatar, expected);
        assert_eq!(LeaderEntry::from_raw(raw("mika", Some(""))).avatar, expected);
    }

    #[test]
    fn from_raw_defaults_missing_ecosystems_to_empty() {
        let mut record = raw("mika", None);
        record.ecosystems = None;
        assert!(LeaderEntry::from_raw(record).ecosystems.is_empty());
    }

    #[test]
    fn from_raw_dedups_ecosystems_preserving_first_occurrence() {
        let mut record = raw("mika", None);
        record.ecosystems = Some(vec![
            "Rust".to_string(),
            "Go".to_string(),
            "Rust".to_string(),
            "TypeScript".to_string(),
        ]);
        assert_eq!(
            LeaderEntry::from_raw(record).ecosystems,
            vec!["Rust", "Go", "TypeScript"]
        );
    }

    #[test]
    fn transform_preserves_count_and_fields() {
        let payload = r#"[
            {"rank":1,"username":"mika","avatar":"https://example.com/a.png","score":980,"trend":"up","trendValue":2,"contributions":311,"ecosystems":["Rust","Go"]},
            {"rank":2,"username":"ada b","avatar":"","score":640.5,"trend":"same","trendValue":0,"contributions":198},
            {"rank":3,"username":"lin","score":320,"trend":"down","trendValue":1,"contributions":77,"ecosystems":[]}
        ]"#;
        let raw: Vec<RawLeaderEntry> = serde_json::from_str(payload).unwrap();
        let entries: Vec<LeaderEntry> = raw.into_iter().map(LeaderEntry::from_raw).collect();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].trend, Trend::Up);
        assert_eq!(entries[0].trend_value, 2.0);
        assert_eq!(entries[1].avatar, fallback_avatar_url("ada b"));
        assert_eq!(entries[2].trend, Trend::Down);
        assert!(entries[2].ecosystems.is_empty());
    }

    #[test]
    fn unknown_wire_fields_and_trends_are_tolerated() {
        let payload = r#"{"rank":7,"username":"kai","avatar":null,"user_id":"u-7","score":10,"trend":"surging","trendValue":0,"contributions":4,"ecosystems":null}"#;
        let record: RawLeaderEntry = serde_json::from_str(payload).unwrap();
        assert_eq!(record.trend, Trend::Same);
        assert!(record.avatar.is_none());
        assert!(record.ecosystems.is_none());
    }

    #[test]
    fn placeholder_has_fixed_shape() {
        let entry = LeaderEntry::placeholder(3);
        assert_eq!(entry.rank, 3);
        assert_eq!(entry.username, "-");
        assert_eq!(entry.avatar, super::PLACEHOLDER_AVATAR);
        assert_eq!(entry.score, 0.0);
        assert_eq!(entry.trend, Trend::Same);
        assert_eq!(entry.contributions, 0);
        assert!(entry.ecosystems.is_empty());
        assert!(entry.is_placeholder());
    }

    #[test]
    fn uri_component_encoding_matches_browser_behavior() {
        assert_eq!(encode_uri_component("ada b"), "ada%20b");
        assert_eq!(encode_uri_component("safe-name_1.2!~*'()"), "safe-name_1.2!~*'()");
        assert_eq!(encode_uri_component("a/b&c=d"), "a%2Fb%26c%3Dd");
        assert_eq!(encode_uri_component("caf\u{e9}"), "caf%C3%A9");
    }
}
