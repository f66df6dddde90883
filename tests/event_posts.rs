use art_event_extract::keywords::{EXCLUDE_KEYWORDS, STRONG_KEYWORDS};
use art_event_extract::{
    EventParser, Profile, build, collect, extract_deadline, extract_event_name, extract_hashtags,
};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

const URL: &str = "https://x.com/artist/status/1750000000000000000";

#[test]
fn exclude_term_always_wins() {
    let base = "第1回 AIアートコンテスト\n開催期間：2/1～2/14\n#ねこ祭";
    for term in EXCLUDE_KEYWORDS {
        let text = format!("{base}\n{term}");
        assert_eq!(build(&text, URL, &[], at(2024, 1, 20)), None, "term {term}");
    }
}

#[test]
fn strong_term_alone_is_enough() {
    for term in STRONG_KEYWORDS {
        let text = format!("今週の{term}です");
        let record = build(&text, URL, &[], at(2024, 1, 20));
        assert!(record.is_some(), "term {term}");
        assert!(!record.unwrap().event_name.is_empty());
    }
}

#[test]
fn weak_term_needs_structure() {
    let weak = "今月のお題は「雪」です";
    assert_eq!(build(weak, URL, &[], at(2024, 1, 20)), None);

    let with_structure = format!("{weak}\n締切：1/31");
    let record = build(&with_structure, URL, &[], at(2024, 1, 20)).unwrap();
    assert_eq!(record.deadline.unwrap().to_string(), "2024-01-31T23:59:59");
    // No title keyword, no hashtag, and 「雪」 is too short to be a title.
    assert_eq!(record.event_name, "今月のお題は「雪」です");
}

#[test]
fn year_inference() {
    assert_eq!(
        extract_deadline("締切：1/15", at(2024, 9, 1)).unwrap().to_string(),
        "2025-01-15T23:59:59"
    );
    assert_eq!(
        extract_deadline("締切：12/15", at(2024, 3, 1)).unwrap().to_string(),
        "2024-12-15T23:59:59"
    );
}

#[test]
fn invalid_dates_never_produce_deadline() {
    assert_eq!(extract_deadline("締切：13/5", at(2024, 1, 1)), None);
    assert_eq!(extract_deadline("2024年1月40日", at(2024, 1, 1)), None);
    assert_eq!(extract_deadline("〆 0/10 (99/99)", at(2024, 1, 1)), None);
}

#[test]
fn hashtags_are_stable() {
    let text = "#春展 ＃春展 #Spring #spring #春展";
    let once = extract_hashtags(text);
    assert_eq!(once, vec!["#春展", "#Spring", "#spring"]);
    assert_eq!(extract_hashtags(text), once);
}

#[test]
fn rule_bracket_is_not_a_title() {
    let text = "【タグは2/15まで】\n冬の絵を描こう\n#冬のAI絵";
    let name = extract_event_name(text, &extract_hashtags(text));
    assert_eq!(name, "#冬のAI絵");

    let record = build(&format!("{text}\n募集中"), URL, &[], at(2024, 1, 20)).unwrap();
    assert_ne!(record.event_name, "タグは2/15まで");
    assert_eq!(record.deadline.unwrap().to_string(), "2024-02-15T23:59:59");
}

#[test]
fn event_name_never_empty() {
    for text in ["企画", "  企画  ", "#夏祭", "展示\n\n\n", "。。。企画"] {
        let record = build(text, URL, &[], at(2024, 6, 1)).unwrap();
        assert!(!record.event_name.is_empty(), "text {text:?}");
    }
}

#[test]
fn record_passes_inputs_through() {
    let text = "  春の企画  \n\n参加方法：リプ欄へ";
    let images = vec!["https://pbs.twimg.com/media/1.jpg".to_string()];
    let record = build(text, URL, &images, at(2024, 3, 1)).unwrap();
    assert_eq!(record.raw_text, text);
    assert_eq!(record.origin_ref, URL);
    assert_eq!(record.images, images);
    assert_eq!(record.rules, vec!["春の企画", "参加方法：リプ欄へ"]);
}

#[test]
fn manual_collection_ignores_classification() {
    let record = collect("おはようございます", URL, &[], at(2024, 3, 1));
    assert_eq!(record.event_name, "おはようございます");
}

#[test]
fn lean_profile_differs_where_expected() {
    let text = "AIイラスト 夏の企画です。1人3枚まで。加筆NG。\n締切：8/31";
    let now = at(2024, 7, 1);

    let full = build(text, URL, &[], now).unwrap();
    let lean = EventParser::new(Profile::Lean)
        .build(text, URL, &[], now)
        .unwrap();

    assert_eq!(full.deadline.unwrap().to_string(), "2024-08-31T23:59:59");
    assert_eq!(lean.deadline.unwrap().to_string(), "2024-08-31T00:00:00");
    assert_eq!(full.rules.len(), 2);
    assert_eq!(lean.rules, vec!["1人3枚まで", "加筆NG"]);
}

#[test]
fn record_serializes_to_camel_case_json() {
    let record = build("春の展示\n〆 3/31", URL, &[], at(2024, 3, 1)).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["originRef"], URL);
    assert_eq!(json["eventName"], "春の展示");
    assert_eq!(json["deadline"], "2024-03-31T23:59:59");
    assert!(json["images"].as_array().unwrap().is_empty());
}
