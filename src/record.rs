//! Assembly of [`EventRecord`]s from post text.
//!
//! [`EventParser`] bundles the extractors under one [`Profile`]. The free
//! functions [`build`] and [`collect`] use the full profile.

use art_event_types::{Deadline, EventRecord};
use chrono::NaiveDateTime;
use tracing::debug;

use crate::classify::{Verdict, classify_with};
use crate::deadline::extract_deadline_with;
use crate::hashtag::{extract_hashtags, extract_hashtags_loose};
use crate::name::{UNKNOWN_TITLE, extract_event_name_with};
use crate::profile::Profile;
use crate::rules::{extract_rule_sentences, extract_rules};

/// Title of a manually collected post whose text yields no name.
pub const MANUAL_TITLE: &str = "手動収集イベント";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventParser {
    pub profile: Profile,
}

impl EventParser {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn classify(&self, text: &str) -> Verdict {
        classify_with(self.profile, text)
    }

    pub fn is_event(&self, text: &str) -> bool {
        self.classify(text).is_event()
    }

    pub fn extract_hashtags(&self, text: &str) -> Vec<String> {
        match self.profile {
            Profile::Full => extract_hashtags(text),
            Profile::Lean => extract_hashtags_loose(text),
        }
    }

    pub fn extract_deadline(&self, text: &str, now: NaiveDateTime) -> Option<Deadline> {
        extract_deadline_with(self.profile, text, now)
    }

    pub fn extract_event_name(&self, text: &str, hashtags: &[String]) -> String {
        extract_event_name_with(self.profile, text, hashtags, UNKNOWN_TITLE)
    }

    pub fn extract_rules(&self, text: &str) -> Vec<String> {
        match self.profile {
            Profile::Full => extract_rules(text),
            Profile::Lean => extract_rule_sentences(text),
        }
    }

    /// Record for `text` if it announces an event, `None` otherwise.
    pub fn build(
        &self,
        text: &str,
        origin_ref: &str,
        images: &[String],
        now: NaiveDateTime,
    ) -> Option<EventRecord> {
        if !self.is_event(text) {
            return None;
        }
        Some(self.assemble(text, origin_ref, images, now, UNKNOWN_TITLE))
    }

    /// Record for a post the user picked by hand: no classification gate.
    pub fn collect(
        &self,
        text: &str,
        origin_ref: &str,
        images: &[String],
        now: NaiveDateTime,
    ) -> EventRecord {
        self.assemble(text, origin_ref, images, now, MANUAL_TITLE)
    }

    fn assemble(
        &self,
        text: &str,
        origin_ref: &str,
        images: &[String],
        now: NaiveDateTime,
        fallback_title: &str,
    ) -> EventRecord {
        let hashtags = self.extract_hashtags(text);
        let deadline = self.extract_deadline(text, now);
        let event_name = extract_event_name_with(self.profile, text, &hashtags, fallback_title);
        let rules = self.extract_rules(text);

        debug!(
            origin = origin_ref,
            name = %event_name,
            deadline = ?deadline.map(|d| d.to_string()),
            hashtags = hashtags.len(),
            "event record assembled"
        );

        EventRecord {
            origin_ref: origin_ref.to_string(),
            event_name,
            deadline,
            hashtags,
            rules,
            images: images.to_vec(),
            raw_text: text.to_string(),
        }
    }
}

/// Build a record with the full profile. `None` when the text is not an event.
pub fn build(
    text: &str,
    origin_ref: &str,
    images: &[String],
    now: NaiveDateTime,
) -> Option<EventRecord> {
    EventParser::default().build(text, origin_ref, images, now)
}

/// Extract a record without the classification gate, full profile.
pub fn collect(text: &str, origin_ref: &str, images: &[String], now: NaiveDateTime) -> EventRecord {
    EventParser::default().collect(text, origin_ref, images, now)
}
