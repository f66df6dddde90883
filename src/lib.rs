//! Detect art event announcements (contests, exhibitions, open calls) in
//! social media posts and extract their title, deadline, hashtags and rules.
//!
//! Everything here is pure: the caller supplies the post text and the
//! current time, and gets back an [`EventRecord`] or `None`.

pub mod classify;
pub mod deadline;
pub mod error;
pub mod export;
pub mod hashtag;
pub mod keywords;
pub mod name;
pub mod profile;
pub mod record;
pub mod rules;
pub mod scanner;

pub use art_event_types::{Deadline, EventRecord, PostInput};
pub use classify::{Verdict, classify, is_event};
pub use deadline::extract_deadline;
pub use error::{Error, Result};
pub use hashtag::extract_hashtags;
pub use name::extract_event_name;
pub use profile::Profile;
pub use record::{EventParser, build, collect};
pub use rules::extract_rules;
