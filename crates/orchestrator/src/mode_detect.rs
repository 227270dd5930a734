//! Mode detection precedence: explicit caller-supplied mode > keyword
//! heuristic on the query > default `discovery`.

use research_config::ModeKeywords;
use research_core::Mode;

pub fn resolve_mode(explicit: Option<Mode>, query: &str, keywords: &ModeKeywords) -> Mode {
    explicit.or_else(|| keywords.detect(query)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_mode_wins_over_keyword_match() {
        let keywords = ModeKeywords::default();
        let resolved = resolve_mode(Some(Mode::Monitor), "請嚴格查證此事", &keywords);
        assert_eq!(resolved, Mode::Monitor);
    }

    #[test]
    fn falls_back_to_discovery_with_no_signal() {
        let keywords = ModeKeywords::default();
        let resolved = resolve_mode(None, "今天天氣如何", &keywords);
        assert_eq!(resolved, Mode::Discovery);
    }
}
