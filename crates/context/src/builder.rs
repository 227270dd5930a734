//! Deterministically renders admitted sources and a time header into a
//! single text block within a hard character budget.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use research_config::ContextConfig;
use research_core::{Error, FormattedContext, Mode, SourceMap};
use tracing::warn;

const WEEKDAYS_ZH: [&str; 7] = ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"];

/// Result of a context build: the rendered block plus the indices that had
/// to be dropped to hold the character budget, if any.
#[derive(Debug, Clone)]
pub struct ContextBuildResult {
    pub context: FormattedContext,
    pub dropped_indices: Vec<i64>,
}

fn time_header(now: DateTime<Utc>, tz: Tz) -> String {
    let local = tz.from_utc_datetime(&now.naive_utc());
    let weekday = WEEKDAYS_ZH[local.weekday().num_days_from_monday() as usize];
    format!("目前時間：{} {}（{}）", local.format("%Y-%m-%d"), local.format("%H:%M"), weekday)
}

fn mode_preamble(mode: Mode) -> &'static str {
    match mode {
        Mode::Strict => "模式：strict（僅採用第一、二級來源）",
        Mode::Discovery => "模式：discovery（允許較低可信度來源，並標註警示）",
        Mode::Monitor => "模式：monitor（比對第一級與第五級來源）",
    }
}

/// Truncate `text` to at most `max_chars` characters, preferring to break at
/// the last sentence boundary (`.` or the Chinese `。`) before the cut.
fn truncate_at_sentence_boundary(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }
    let window = &chars[..max_chars];
    if let Some(last_boundary) = window.iter().rposition(|&c| c == '.' || c == '。') {
        chars[..=last_boundary].iter().collect::<String>()
    } else {
        let mut truncated: String = window.iter().collect();
        truncated.push('…');
        truncated
    }
}

/// `[{i}] {publisher} — {title}\n` plus the trailing `\n\n` separator after
/// the snippet — the per-item text every render emits besides the snippet
/// itself.
fn item_overhead(index: i64, publisher: &str, title: &str) -> usize {
    format!("[{index}] {publisher} — {title}\n").chars().count() + 2
}

struct Candidate<'a> {
    index: i64,
    tier: u8,
    publisher: &'a str,
    title: &'a str,
    body: &'a str,
}

/// Render admitted sources (already assigned indices in `source_map`) plus a
/// time header into a `FormattedContext`. Pure function of its inputs: same
/// arguments always yield byte-identical output.
///
/// If the projected length still exceeds `max_total_chars` even with every
/// snippet floored at `min_snippet_length`, the lowest-ranked (highest tier,
/// most recently admitted) sources are dropped one at a time until the
/// budget holds.
pub fn build_context(
    source_map: &SourceMap,
    indices: &[i64],
    config: &ContextConfig,
    timezone: Tz,
    mode: Mode,
    now: DateTime<Utc>,
) -> ContextBuildResult {
    let header = time_header(now, timezone);
    let preamble = mode_preamble(mode);
    let prelude = format!("{header}\n{preamble}\n\n");
    let prelude_len = prelude.chars().count();

    let mut candidates: Vec<Candidate> = indices
        .iter()
        .filter_map(|&i| {
            source_map.get(i).map(|t| Candidate {
                index: i,
                tier: t.tier.value(),
                publisher: t.source.publisher.as_str(),
                title: t.source.title.as_str(),
                body: t.tier_prefixed_body.as_str(),
            })
        })
        .collect();

    let mut dropped_indices = Vec::new();

    let snippet_budget = loop {
        let overhead: usize = candidates.iter().map(|c| item_overhead(c.index, c.publisher, c.title)).sum();
        let floor_total = candidates.len() * config.min_snippet_length;
        let projected = prelude_len + overhead + floor_total;

        if candidates.is_empty() || projected <= config.max_total_chars {
            break config.max_total_chars.saturating_sub(prelude_len + overhead);
        }

        warn!(
            projected,
            budget = config.max_total_chars,
            error = %Error::ContextOverflow { projected, budget: config.max_total_chars },
            "context overflow at floor snippet length, dropping lowest-ranked source"
        );

        let drop_pos = candidates
            .iter()
            .enumerate()
            .max_by_key(|(_, c)| (c.tier, c.index))
            .map(|(pos, _)| pos)
            .expect("candidates is non-empty in this branch");
        dropped_indices.push(candidates.remove(drop_pos).index);
    };

    let capped_lens: Vec<usize> = candidates.iter().map(|c| c.body.chars().count().min(config.max_snippet_length)).collect();
    let projected_snippets_total: usize = capped_lens.iter().sum();

    let scale = if projected_snippets_total > snippet_budget && projected_snippets_total > 0 {
        snippet_budget as f64 / projected_snippets_total as f64
    } else {
        1.0
    };

    let mut text = prelude;
    let mut rendered_indices = Vec::with_capacity(candidates.len());
    for (candidate, capped) in candidates.iter().zip(capped_lens.iter()) {
        let scaled_len = ((*capped as f64) * scale).floor() as usize;
        let snippet_len = scaled_len.max(config.min_snippet_length).min(*capped);
        let snippet = truncate_at_sentence_boundary(candidate.body, snippet_len);
        text.push_str(&format!("[{}] {} — {}\n{}\n\n", candidate.index, candidate.publisher, candidate.title, snippet));
        rendered_indices.push(candidate.index);
    }

    dropped_indices.sort_unstable();
    ContextBuildResult { context: FormattedContext::new(text, rendered_indices), dropped_indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_core::{CandidateSource, OriginType, SourceCategory, Tier, TieredSource};

    fn sample_map() -> (SourceMap, Vec<i64>) {
        let mut map = SourceMap::new();
        let sources = vec![
            TieredSource::new(
                CandidateSource::new("1", "Title A", "第一句。第二句。", "Reuters", OriginType::PublicNews),
                Tier::new(1),
                SourceCategory::News,
            ),
            TieredSource::new(
                CandidateSource::new("2", "Title B", "Body two.", "AP", OriginType::PublicNews),
                Tier::new(2),
                SourceCategory::News,
            ),
        ];
        let indices = map.extend(sources);
        (map, indices)
    }

    #[test]
    fn is_deterministic_across_runs() {
        let (map, indices) = sample_map();
        let config = ContextConfig::default();
        let now = Utc.with_ymd_and_hms(2026, 7, 27, 3, 0, 0).unwrap();
        let a = build_context(&map, &indices, &config, chrono_tz::Asia::Taipei, Mode::Discovery, now);
        let b = build_context(&map, &indices, &config, chrono_tz::Asia::Taipei, Mode::Discovery, now);
        assert_eq!(a.context.text, b.context.text);
        assert!(a.dropped_indices.is_empty());
    }

    #[test]
    fn stays_within_budget_when_scaled() {
        let mut map = SourceMap::new();
        let long_body = "高可信度內容。".repeat(20);
        let sources = vec![
            TieredSource::new(
                CandidateSource::new("1", "Title A", &long_body, "Reuters", OriginType::PublicNews),
                Tier::new(1),
                SourceCategory::News,
            ),
            TieredSource::new(
                CandidateSource::new("2", "Title B", &long_body, "AP", OriginType::PublicNews),
                Tier::new(2),
                SourceCategory::News,
            ),
        ];
        let indices = map.extend(sources);

        let mut config = ContextConfig::default();
        config.max_total_chars = 160;
        config.min_snippet_length = 20;
        let now = Utc.with_ymd_and_hms(2026, 7, 27, 3, 0, 0).unwrap();
        let result = build_context(&map, &indices, &config, chrono_tz::Asia::Taipei, Mode::Discovery, now);
        assert!(result.dropped_indices.is_empty());
        assert!(result.context.char_len <= config.max_total_chars);
    }

    #[test]
    fn drops_every_source_when_even_the_prelude_leaves_no_room() {
        let (map, indices) = sample_map();
        let mut config = ContextConfig::default();
        config.max_total_chars = 60;
        config.min_snippet_length = 5;
        let now = Utc.with_ymd_and_hms(2026, 7, 27, 3, 0, 0).unwrap();
        let result = build_context(&map, &indices, &config, chrono_tz::Asia::Taipei, Mode::Discovery, now);
        assert!(result.context.char_len <= config.max_total_chars);
        assert_eq!(result.dropped_indices, vec![1, 2]);
    }

    #[test]
    fn truncates_at_sentence_boundary() {
        let text = "第一句。第二句還沒完";
        let truncated = truncate_at_sentence_boundary(text, 4);
        assert_eq!(truncated, "第一句。");
    }

    #[test]
    fn drops_lowest_ranked_sources_when_budget_cannot_hold_even_at_floor() {
        let mut map = SourceMap::new();
        let sources = vec![
            TieredSource::new(
                CandidateSource::new("1", "Title A", "高可信度內容。".repeat(20).as_str(), "Reuters", OriginType::PublicNews),
                Tier::new(1),
                SourceCategory::News,
            ),
            TieredSource::new(
                CandidateSource::new("2", "Title B", "低可信度內容。".repeat(20).as_str(), "Blog", OriginType::PublicNews),
                Tier::new(5),
                SourceCategory::Social,
            ),
        ];
        let indices = map.extend(sources);

        let mut config = ContextConfig::default();
        config.max_total_chars = 120;
        config.min_snippet_length = 30;

        let result = build_context(&map, &indices, &config, chrono_tz::Asia::Taipei, Mode::Discovery, Utc.with_ymd_and_hms(2026, 7, 27, 3, 0, 0).unwrap());

        assert_eq!(result.dropped_indices, vec![2]);
        assert_eq!(result.context.indices, vec![1]);
        assert!(result.context.char_len <= config.max_total_chars);
    }
}
