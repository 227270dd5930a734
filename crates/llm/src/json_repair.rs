//! Tolerant JSON extraction from raw LLM text: markdown fences, leading
//! commentary, and truncated output are all common. Tried in order:
//! direct parse, extract the largest balanced `{…}`, known-safe fixups,
//! then salvage the longest valid prefix.

use serde_json::Value;

/// Attempt to recover a JSON value from arbitrary LLM output text.
pub fn repair(raw: &str) -> Option<Value> {
    if let Ok(v) = serde_json::from_str(raw) {
        return Some(v);
    }

    let candidate = extract_largest_braced_block(raw)
        .or_else(|| coerce_unbalanced_from_first_brace(raw))?;

    if let Ok(v) = serde_json::from_str(&candidate) {
        return Some(v);
    }

    let fixed = apply_fixups(&candidate);
    if let Ok(v) = serde_json::from_str(&fixed) {
        return Some(v);
    }

    salvage_longest_valid_prefix(&fixed)
}

/// Fallback when no balanced `{…}` block exists at all (truncated mid-object,
/// unterminated string): take everything from the first `{` to end of input,
/// close any still-open string, then append enough `}` to balance braces.
fn coerce_unbalanced_from_first_brace(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let tail = close_unterminated_string(&raw[start..]);

    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut escaped = false;
    for c in tail.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }

    if depth <= 0 {
        return Some(tail);
    }
    let mut closed = tail;
    for _ in 0..depth {
        closed.push('}');
    }
    Some(closed)
}

/// Find the largest substring that starts at a `{` and ends at its matching
/// `}`, tolerant of markdown fences and stray text around it.
fn extract_largest_braced_block(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut best: Option<(usize, usize)> = None;
    let mut stack: Vec<usize> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        let c = b as char;
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => stack.push(i),
            '}' => {
                if let Some(start) = stack.pop() {
                    if stack.is_empty() {
                        let span = (start, i);
                        let better = match best {
                            None => true,
                            Some((s, e)) => span.1 - span.0 > e - s,
                        };
                        if better {
                            best = Some(span);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    best.map(|(s, e)| raw[s..=e].to_string())
}

/// Trailing commas before `}`/`]` and unterminated trailing string literals,
/// the two fixups observed reliably fixing truncated LLM JSON.
fn apply_fixups(candidate: &str) -> String {
    let no_trailing_commas = strip_trailing_commas(candidate);
    close_unterminated_string(&no_trailing_commas)
}

fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let chars: Vec<char> = input.chars().collect();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }
        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if matches!(chars.get(j), Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn close_unterminated_string(input: &str) -> String {
    let mut in_string = false;
    let mut escaped = false;
    for c in input.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        }
    }
    if in_string {
        format!("{input}\"")
    } else {
        input.to_string()
    }
}

/// Binary-search-free linear scan: try parsing progressively shorter
/// prefixes ending at a closing brace, return the longest one that parses.
fn salvage_longest_valid_prefix(input: &str) -> Option<Value> {
    let close_positions: Vec<usize> = input
        .char_indices()
        .filter(|(_, c)| *c == '}')
        .map(|(i, _)| i)
        .collect();

    for &end in close_positions.iter().rev() {
        let prefix = &input[..=end];
        if let Ok(v) = serde_json::from_str(prefix) {
            return Some(v);
        }
        let fixed = apply_fixups(prefix);
        if let Ok(v) = serde_json::from_str(&fixed) {
            return Some(v);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_parse_succeeds() {
        assert_eq!(repair(r#"{"a": 1}"#), Some(json!({"a": 1})));
    }

    #[test]
    fn extracts_from_markdown_fence() {
        let raw = "Here is the result:\n```json\n{\"a\": 1, \"b\": 2}\n```\nThanks.";
        assert_eq!(repair(raw), Some(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn strips_trailing_comma() {
        let raw = r#"{"a": 1, "b": 2,}"#;
        assert_eq!(repair(raw), Some(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn closes_unterminated_string() {
        let raw = r#"{"a": "unterminated"#;
        let result = repair(raw);
        assert!(result.is_some());
    }

    #[test]
    fn picks_largest_balanced_block_among_several() {
        let raw = r#"ignore {"x": 1} but use {"a": 1, "b": {"c": 2}}"#;
        assert_eq!(repair(raw), Some(json!({"a": 1, "b": {"c": 2}})));
    }

    #[test]
    fn returns_none_for_unrecoverable_garbage() {
        assert_eq!(repair("not json at all, no braces"), None);
    }
}
