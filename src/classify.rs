//! Event-or-not decision from raw post text.
//!
//! Four keyword tiers are evaluated in a fixed order and the first one that
//! decides wins: exclusions, strong event types, weak vocabulary backed by
//! announcement structure, and finally event-style hashtags.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::keywords::{
    EXCLUDE_KEYWORDS, LEAN_EVENT_KEYWORDS, LEAN_EXCLUDE_KEYWORDS, STRONG_KEYWORDS,
    STRUCTURE_KEYWORDS, WEAK_KEYWORDS, find_keyword,
};
use crate::profile::Profile;

// #〇〇イベント, #〇〇企画, #〇〇杯 ... The body may not contain '#' so
// consecutive tags never merge into one match.
static RE_EVENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?P<body>[^\s#]+)(?:イベント|企画|コンテスト|杯|祭|フェス)").unwrap()
});

/// Which tier decided the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// An exclusion term was found; overrides every other signal.
    Excluded(&'static str),
    Strong(&'static str),
    WeakWithStructure {
        weak: &'static str,
        structure: &'static str,
    },
    /// An event-style hashtag such as `#夏祭` was found.
    EventHashtag,
    NoSignal,
}

impl Verdict {
    pub fn is_event(&self) -> bool {
        matches!(
            self,
            Self::Strong(_) | Self::WeakWithStructure { .. } | Self::EventHashtag
        )
    }

    /// Short tier name, for logs and the CLI.
    pub fn tier(&self) -> &'static str {
        match self {
            Self::Excluded(_) => "excluded",
            Self::Strong(_) => "strong",
            Self::WeakWithStructure { .. } => "weak+structure",
            Self::EventHashtag => "event-hashtag",
            Self::NoSignal => "none",
        }
    }
}

/// Classify with the full rule set.
pub fn classify(text: &str) -> Verdict {
    if let Some(k) = find_keyword(text, EXCLUDE_KEYWORDS) {
        return Verdict::Excluded(k);
    }

    if let Some(k) = find_keyword(text, STRONG_KEYWORDS) {
        return Verdict::Strong(k);
    }

    let weak = find_keyword(text, WEAK_KEYWORDS);
    let structure = find_keyword(text, STRUCTURE_KEYWORDS);
    if let (Some(weak), Some(structure)) = (weak, structure) {
        return Verdict::WeakWithStructure { weak, structure };
    }

    if has_event_hashtag(text) {
        return Verdict::EventHashtag;
    }

    Verdict::NoSignal
}

/// Classify with the lean rule set: exclusions, then any event keyword.
pub fn classify_lean(text: &str) -> Verdict {
    if let Some(k) = find_keyword(text, LEAN_EXCLUDE_KEYWORDS) {
        return Verdict::Excluded(k);
    }
    match find_keyword(text, LEAN_EVENT_KEYWORDS) {
        Some(k) => Verdict::Strong(k),
        None => Verdict::NoSignal,
    }
}

pub fn classify_with(profile: Profile, text: &str) -> Verdict {
    let verdict = match profile {
        Profile::Full => classify(text),
        Profile::Lean => classify_lean(text),
    };
    debug!(profile = %profile, tier = verdict.tier(), ?verdict, "classified post");
    verdict
}

/// Whether `text` announces an event, using the full rule set.
pub fn is_event(text: &str) -> bool {
    classify(text).is_event()
}

/// True if the text carries a tag like `#春イベント` or `#ゆる杯`.
/// Tags starting with "AI" are skipped: `#AIイラスト祭` style tags are too generic.
fn has_event_hashtag(text: &str) -> bool {
    RE_EVENT_TAG.captures_iter(text).any(|caps| {
        let body = &caps["body"];
        !body.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("ai"))
    })
}
