//! Event title selection.
//!
//! A post rarely states its title in a fixed place, so several rules are
//! tried in order and the first one that produces a name wins:
//!
//!   【第2回 AIイラスト選手権】開催！     → title line
//!   お題「桜」 #春のAI絵祭              → first hashtag
//!   『ねこの日』やります                 → bracketed text
//!   みんなで描こう\nねこチャレンジ        → keyword line
//!
//! Every rule is a value of [`NameRule`] and can be applied on its own.
//! Keyword checks here are case-sensitive.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::{
    BRACKET_IGNORE_KEYWORDS, STRONG_KEYWORDS, TITLE_KEYWORDS, WEAK_KEYWORDS, contains_any_exact,
};
use crate::profile::Profile;

/// Used when no rule finds anything.
pub const UNKNOWN_TITLE: &str = "イベント（タイトル不明）";

/// Lines at or above this many characters are not titles; the first-line
/// fallback is cut to this length.
pub const MAX_TITLE_CHARS: usize = 50;

// Any of 【『「 … any of 】』」, shortest span on one line.
static RE_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[【『「](?P<inner>.+?)[】』」]").unwrap());

static RE_LENTICULAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【(?P<inner>.+?)】").unwrap());

static RE_CORNER_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"「(?P<inner>.+?)」").unwrap());

/// One step of the title cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// First line, if short and it mentions a strong keyword, 開催 or イベント.
    TitleLine,
    /// First extracted hashtag.
    FirstHashtag,
    /// First bracketed span, unless it reads as rule text or is too short/long.
    Bracket,
    /// First short line with any strong or weak keyword.
    KeywordLine,
    /// First non-empty line, truncated.
    FirstLine,
    /// Trimmed contents of the first 【…】.
    Lenticular,
    /// Trimmed contents of the first 「…」.
    CornerQuote,
    /// Text before the first line break, trimmed and truncated.
    FirstRawLine,
}

pub const NAME_CASCADE: &[NameRule] = &[
    NameRule::TitleLine,
    NameRule::FirstHashtag,
    NameRule::Bracket,
    NameRule::KeywordLine,
    NameRule::FirstLine,
];

pub const LEAN_NAME_CASCADE: &[NameRule] = &[
    NameRule::Lenticular,
    NameRule::CornerQuote,
    NameRule::FirstRawLine,
];

pub fn cascade(profile: Profile) -> &'static [NameRule] {
    match profile {
        Profile::Full => NAME_CASCADE,
        Profile::Lean => LEAN_NAME_CASCADE,
    }
}

impl NameRule {
    /// Apply this rule alone. `None` means the rule does not apply.
    pub fn apply(&self, text: &str, hashtags: &[String]) -> Option<String> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let name = match self {
            Self::TitleLine => {
                let first = lines.next()?;
                let is_title = contains_any_exact(first, STRONG_KEYWORDS)
                    || contains_any_exact(first, TITLE_KEYWORDS);
                (is_title && char_len(first) < MAX_TITLE_CHARS).then(|| first.to_string())?
            }
            Self::FirstHashtag => hashtags.first()?.clone(),
            Self::Bracket => {
                let caps = RE_BRACKET.captures(text)?;
                let inner = &caps["inner"];
                let len = char_len(inner);
                let usable =
                    !contains_any_exact(inner, BRACKET_IGNORE_KEYWORDS) && len > 2 && len < 40;
                usable.then(|| inner.to_string())?
            }
            Self::KeywordLine => lines
                .find(|l| {
                    (contains_any_exact(l, STRONG_KEYWORDS)
                        || contains_any_exact(l, WEAK_KEYWORDS))
                        && char_len(l) < MAX_TITLE_CHARS
                })?
                .to_string(),
            Self::FirstLine => truncate(lines.next()?),
            Self::Lenticular => RE_LENTICULAR.captures(text)?["inner"].trim().to_string(),
            Self::CornerQuote => RE_CORNER_QUOTE.captures(text)?["inner"].trim().to_string(),
            Self::FirstRawLine => {
                let first = text.split(['\n', '\r']).next().unwrap_or("").trim();
                truncate(first)
            }
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Run `rules` in order; the first rule that yields a name wins.
pub fn select_name(rules: &[NameRule], text: &str, hashtags: &[String]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(text, hashtags))
}

/// Pick a title with the full cascade. Never empty.
pub fn extract_event_name(text: &str, hashtags: &[String]) -> String {
    extract_event_name_with(Profile::Full, text, hashtags, UNKNOWN_TITLE)
}

pub fn extract_event_name_with(
    profile: Profile,
    text: &str,
    hashtags: &[String],
    fallback: &str,
) -> String {
    select_name(cascade(profile), text, hashtags).unwrap_or_else(|| fallback.to_string())
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate(line: &str) -> String {
    if char_len(line) > MAX_TITLE_CHARS {
        let head: String = line.chars().take(MAX_TITLE_CHARS).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashtag::extract_hashtags;

    fn name(text: &str) -> String {
        extract_event_name(text, &extract_hashtags(text))
    }

    // ── Individual rules ─────────────────────────────────────────────

    #[test]
    fn test_title_line() {
        let text = "第2回 AIイラスト選手権 開催！\n#AI選手権 #春";
        assert_eq!(
            NameRule::TitleLine.apply(text, &[]),
            Some("第2回 AIイラスト選手権 開催！".into())
        );
    }

    #[test]
    fn test_title_line_too_long() {
        let long = format!("{}イベント", "あ".repeat(46));
        assert_eq!(char_len(&long), 50);
        assert_eq!(NameRule::TitleLine.apply(&long, &[]), None);
    }

    #[test]
    fn test_bracket_rule() {
        assert_eq!(
            NameRule::Bracket.apply("今週は『ねこの日』です", &[]),
            Some("ねこの日".into())
        );
        // Mixed bracket styles still pair up.
        assert_eq!(
            NameRule::Bracket.apply("【春の絵」", &[]),
            Some("春の絵".into())
        );
        // Too short.
        assert_eq!(NameRule::Bracket.apply("「桜」", &[]), None);
        // Rule language.
        assert_eq!(NameRule::Bracket.apply("【タグは2/15まで】", &[]), None);
    }

    #[test]
    fn test_title_line_is_case_sensitive() {
        assert_eq!(NameRule::TitleLine.apply("Big CONTEST now\nbody", &[]), None);
        assert_eq!(
            NameRule::TitleLine.apply("Big contest now\nbody", &[]),
            Some("Big contest now".into())
        );
    }

    #[test]
    fn test_english_bracket_title_kept() {
        // "ng" inside English words is not the "NG" rule marker.
        assert_eq!(
            NameRule::Bracket.apply("「Spring Drawing Fes」", &[]),
            Some("Spring Drawing Fes".into())
        );
        assert_eq!(
            name("お知らせです\n「Spring Drawing Fes」\nイベントタグ：なし\nAIイラスト"),
            "Spring Drawing Fes"
        );
        assert_eq!(NameRule::Bracket.apply("「加筆NGです」", &[]), None);
    }

    #[test]
    fn test_keyword_line() {
        let text = "みんなで描こう\nねこチャレンジ\n参加方法";
        assert_eq!(
            NameRule::KeywordLine.apply(text, &[]),
            Some("ねこチャレンジ".into())
        );
    }

    #[test]
    fn test_first_line_truncated() {
        let text = format!("{}\n二行目", "い".repeat(60));
        let got = NameRule::FirstLine.apply(&text, &[]).unwrap();
        assert_eq!(got, format!("{}...", "い".repeat(50)));
    }

    // ── Cascade ──────────────────────────────────────────────────────

    #[test]
    fn test_title_line_beats_hashtag() {
        assert_eq!(name("春の展示やります\n#春展"), "春の展示やります");
    }

    #[test]
    fn test_hashtag_beats_bracket() {
        assert_eq!(name("お題「桜の木の下で」\n#春のAI絵祭"), "#春のAI絵祭");
    }

    #[test]
    fn test_ignored_bracket_falls_through() {
        // The first bracket is rule text; with no hashtag the keyword line wins.
        let text = "お知らせ\n【タグは2/15まで】\nねこチャレンジやります";
        assert_eq!(name(text), "ねこチャレンジやります");
    }

    #[test]
    fn test_first_line_fallback() {
        assert_eq!(name("\n\n  みんなで描こう  \n桜"), "みんなで描こう");
    }

    #[test]
    fn test_unknown_title_when_blank() {
        assert_eq!(name(""), UNKNOWN_TITLE);
        assert_eq!(name(" \n\r\n"), UNKNOWN_TITLE);
    }

    #[test]
    fn test_custom_fallback() {
        assert_eq!(
            extract_event_name_with(Profile::Full, "", &[], "手動収集イベント"),
            "手動収集イベント"
        );
    }

    // ── Lean cascade ─────────────────────────────────────────────────

    #[test]
    fn test_lean_prefers_lenticular_then_quote() {
        let text = "「夏の絵」と【 夏祭り 】";
        assert_eq!(
            extract_event_name_with(Profile::Lean, text, &[], UNKNOWN_TITLE),
            "夏祭り"
        );
        assert_eq!(
            extract_event_name_with(Profile::Lean, "お題は「夏」", &[], UNKNOWN_TITLE),
            "夏"
        );
    }

    #[test]
    fn test_lean_takes_raw_first_line() {
        assert_eq!(
            extract_event_name_with(Profile::Lean, "\n二行目", &[], UNKNOWN_TITLE),
            UNKNOWN_TITLE
        );
        assert_eq!(
            extract_event_name_with(Profile::Lean, " 一行目 \n二行目", &[], UNKNOWN_TITLE),
            "一行目"
        );
    }
}
