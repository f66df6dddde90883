use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// Tag characters as the platform accepts them: ASCII word chars, hiragana,
// katakana, 々〆〇, common kanji and fullwidth digits. Punctuation such as
// 」 or 。 ends the tag.
static RE_HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[#＃](?P<tag>[a-zA-Z0-9_\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{3005}-\x{3007}\x{4E00}-\x{9FCF}\x{FF10}-\x{FF19}]+)",
    )
    .unwrap()
});

// Anything up to whitespace or the next marker.
static RE_HASHTAG_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#＃](?P<tag>[^\s#＃]+)").unwrap());

/// Extract hashtags in first-seen order, marker normalized to `#`,
/// exact duplicates removed.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    collect_tags(&RE_HASHTAG, text)
}

/// Loose variant: any run of non-space characters after the marker.
pub fn extract_hashtags_loose(text: &str) -> Vec<String> {
    collect_tags(&RE_HASHTAG_LOOSE, text)
}

fn collect_tags(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    re.captures_iter(text)
        .map(|caps| format!("#{}", &caps["tag"]))
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
