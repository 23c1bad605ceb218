//! Document types: what callers submit, what the store keeps, and the
//! aggregate derived from it.
//!
//! Timestamps are plain integers. Their unit and epoch belong to the caller;
//! the store only compares them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Observation ─────────────────────────────────────────────────────────────

/// A single fetch of a document, as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
  pub url:              String,
  /// Publication date as claimed by this fetch.
  pub pub_date:         i64,
  pub fetch_time:       i64,
  pub text:             String,
  /// Earliest sighting of `url` known to the submitter. When absent the
  /// observation is treated as its own first sighting.
  #[serde(default)]
  pub first_fetch_time: Option<i64>,
}

impl Observation {
  /// An observation with no known prior history.
  pub fn new(
    url: impl Into<String>,
    pub_date: i64,
    fetch_time: i64,
    text: impl Into<String>,
  ) -> Self {
    Self {
      url: url.into(),
      pub_date,
      fetch_time,
      text: text.into(),
      first_fetch_time: None,
    }
  }

  pub fn with_first_fetch_time(mut self, first_fetch_time: i64) -> Self {
    self.first_fetch_time = Some(first_fetch_time);
    self
  }

  /// Resolve the `first_fetch_time` default and produce the row to store.
  pub fn into_version(self) -> Version {
    Version {
      first_fetch_time: self.first_fetch_time.unwrap_or(self.fetch_time),
      url:              self.url,
      pub_date:         self.pub_date,
      fetch_time:       self.fetch_time,
      text:             self.text,
    }
  }
}

// ─── Version ─────────────────────────────────────────────────────────────────

/// One stored version of a document. `(url, fetch_time)` is unique; storing
/// another version with the same pair replaces this one entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
  pub url:              String,
  pub pub_date:         i64,
  pub fetch_time:       i64,
  pub text:             String,
  pub first_fetch_time: i64,
}

// ─── AggregatedDocument ──────────────────────────────────────────────────────

/// The computed view of a URL across all of its versions — never stored,
/// always derived.
///
/// `pub_date` and `first_fetch_time` come from the oldest version (smallest
/// `fetch_time`); `fetch_time` and `text` come from the latest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDocument {
  pub url:              String,
  pub pub_date:         i64,
  pub fetch_time:       i64,
  pub text:             String,
  pub first_fetch_time: i64,
}

impl From<Version> for AggregatedDocument {
  fn from(v: Version) -> Self {
    Self {
      url:              v.url,
      pub_date:         v.pub_date,
      fetch_time:       v.fetch_time,
      text:             v.text,
      first_fetch_time: v.first_fetch_time,
    }
  }
}

impl fmt::Display for AggregatedDocument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "AggregatedDocument(url={}, pub_date={}, fetch_time={}, text={:?}, first_fetch_time={})",
      self.url, self.pub_date, self.fetch_time, self.text, self.first_fetch_time,
    )
  }
}
