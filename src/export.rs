use art_event_types::EventRecord;
use chrono::NaiveDateTime;

/// Column headers of the tracking sheet, in order.
pub const SHEET_HEADER: [&str; 8] = [
    "取得日時", "ポストURL", "イベント名", "期限", "指定タグ", "ルール要約", "進捗", "メモ",
];

/// Progress cell for a freshly captured event.
pub const PROGRESS_OPEN: &str = "未";

/// One sheet row for a newly captured record: not done, empty memo.
pub fn to_sheet_row(record: &EventRecord, captured_at: NaiveDateTime) -> Vec<String> {
    vec![
        captured_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        record.origin_ref.clone(),
        record.event_name.clone(),
        record.deadline.map(|d| d.to_string()).unwrap_or_default(),
        record.hashtags.join(", "),
        record.rules.join(" / "),
        PROGRESS_OPEN.to_string(),
        String::new(),
    ]
}

/// Tab-separated line; tabs and line breaks inside cells become spaces.
pub fn to_tsv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| c.as_ref().replace(['\t', '\n', '\r'], " "))
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_event_types::Deadline;
    use chrono::NaiveDate;

    fn record() -> EventRecord {
        EventRecord {
            origin_ref: "https://x.com/a/status/1".into(),
            event_name: "春の展示".into(),
            deadline: Deadline::end_of_day(2024, 3, 31),
            hashtags: vec!["#春展".into(), "#AIart".into()],
            rules: vec!["春の展示".into(), "1人3枚まで".into()],
            images: vec![],
            raw_text: "春の展示\n1人3枚まで".into(),
        }
    }

    #[test]
    fn test_row_matches_header() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let row = to_sheet_row(&record(), at);
        assert_eq!(row.len(), SHEET_HEADER.len());
        assert_eq!(
            row,
            vec![
                "2024-03-01T10:30:00",
                "https://x.com/a/status/1",
                "春の展示",
                "2024-03-31T23:59:59",
                "#春展, #AIart",
                "春の展示 / 1人3枚まで",
                "未",
                "",
            ]
        );
    }

    #[test]
    fn test_missing_deadline_is_empty_cell() {
        let mut r = record();
        r.deadline = None;
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(to_sheet_row(&r, at)[3], "");
    }

    #[test]
    fn test_tsv_escapes_cells() {
        assert_eq!(to_tsv_line(&["a\tb", "c\nd", "e"]), "a b\tc d\te");
        assert_eq!(to_tsv_line(&SHEET_HEADER).split('\t').count(), 8);
    }
}
