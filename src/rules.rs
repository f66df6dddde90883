use crate::keywords::{LEAN_RULE_KEYWORDS, contains_any_exact};

/// The whole post body as trimmed, non-empty lines.
///
/// Nothing is filtered out: a reader of the record needs the full context of
/// the announcement, not a summary.
pub fn extract_rules(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Sentences (split on 。 and line breaks) longer than three characters that
/// mention a participation-rule keyword. Matching is case-sensitive so
/// "NG" or "ID" do not fire inside ordinary English words.
pub fn extract_rule_sentences(text: &str) -> Vec<String> {
    text.split(['。', '\n', '\r'])
        .map(str::trim)
        .filter(|s| s.chars().count() > 3 && contains_any_exact(s, LEAN_RULE_KEYWORDS))
        .map(String::from)
        .collect()
}
