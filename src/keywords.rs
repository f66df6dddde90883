/// Terms that disqualify a post outright: news, digests, greetings,
/// commission work reports. Checked before anything else.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    // News / curation
    "ニュース", "記事", "まとめ", "速報", "ブログ", "動画紹介",
    // Routine posting and advertising
    "定期", "宣伝",
    // Commission work
    "commission", "skeb", "納品", "作業報告",
    // Greetings
    "ご無沙汰", "おはよう", "こんにちは", "こんばんは", "おやすみ",
];

/// Unambiguous event types. One hit is enough.
pub const STRONG_KEYWORDS: &[&str] = &[
    "コンテスト", "contest", "企画", "展示", "募集",
    "選手権", "杯", "マッチ", "バトル", "アンソロジー",
];

/// Ambiguous event vocabulary: AI-art jargon and generic activity words.
/// Only counts together with a [`STRUCTURE_KEYWORDS`] hit.
pub const WEAK_KEYWORDS: &[&str] = &[
    // AI art
    "AIアート", "AIイラスト", "AI art", "AI illustration", "AI生成", "生成AI", "プロンプト",
    // Activities
    "イベント", "フェス", "チャレンジ", "お題", "コラボ",
];

/// Announcement structure: period, rules and how-to-apply headers.
pub const STRUCTURE_KEYWORDS: &[&str] = &[
    "開催期間", "参加方法", "テーマ：", "テーマ:", "テーマ ",
    "ルール", "注意事項", "応募方法", "参加条件",
    "イベントタグ", "指定タグ", "期間：", "期間:",
    "〆切", "締切", "締め切り", "deadline",
];

/// Extra words that mark a first line as a title ("held", "event").
pub const TITLE_KEYWORDS: &[&str] = &["開催", "イベント"];

/// Bracketed text containing any of these reads as rule language, not a title.
pub const BRACKET_IGNORE_KEYWORDS: &[&str] = &[
    "タグ", "推奨", "まで", "必須", "NG", "禁止", "ルール", "注意事項", "お守り",
];

// ── Lean profile tables ──────────────────────────────────────────────

/// Exclusions used by the lean profile (keeps surveys and questions out too).
pub const LEAN_EXCLUDE_KEYWORDS: &[&str] = &[
    "ニュース", "記事", "まとめ", "速報", "ブログ", "動画紹介",
    "質問", "アンケート", "定期", "宣伝", "commission", "skeb",
];

/// The lean profile's single event vocabulary: any hit classifies.
pub const LEAN_EVENT_KEYWORDS: &[&str] = &[
    // Core
    "AIアート", "AIイラスト", "AI art", "AI illustration", "AI生成", "生成AI", "プロンプト",
    // Event types
    "コンテスト", "contest", "企画", "展示", "募集",
    "イベント", "フェス", "チャレンジ", "お題", "コラボ",
    "選手権", "杯", "マッチ", "バトル",
    // Structure
    "開催期間", "参加方法", "テーマ：", "テーマ:",
    "ルール", "注意事項", "応募方法", "参加条件",
    "イベントタグ", "指定タグ",
];

/// A sentence is kept as a rule by the lean profile if it mentions one of these.
pub const LEAN_RULE_KEYWORDS: &[&str] = &[
    "枚", "加筆", "モデル", "NG", "禁止", "ルール", "条件", "参加", "応募",
    "サイズ", "タグ", "引用", "ID", "リポスト", "RP",
];

/// First keyword of `keywords` found in `text`, compared case-insensitively.
pub fn find_keyword(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .copied()
        .find(|k| lower.contains(&k.to_lowercase()))
}

/// Whether `text` contains any of `keywords`, case-insensitively.
pub fn contains_any(text: &str, keywords: &[&'static str]) -> bool {
    find_keyword(text, keywords).is_some()
}

/// Whether `text` contains any of `keywords` exactly as written.
///
/// Used where short uppercase terms ("NG", "ID") must not fire inside
/// ordinary English words.
pub fn contains_any_exact(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
