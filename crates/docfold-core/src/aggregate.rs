//! Collapsing a URL's versions into one [`AggregatedDocument`].

use crate::{
  Error, Result,
  document::{AggregatedDocument, Version},
  store::VersionStore,
};

/// Reduce `versions` of `url` to their aggregate in a single pass.
///
/// Tracks the oldest and latest version by `fetch_time`. On equal timestamps
/// the first-seen version stays oldest and the last-seen becomes latest, which
/// matches taking the first and last element of an ascending sequence.
/// Returns `None` for an empty sequence.
pub fn fold_versions<I>(url: &str, versions: I) -> Option<AggregatedDocument>
where
  I: IntoIterator<Item = Version>,
{
  let mut iter = versions.into_iter();
  let first = iter.next()?;

  let (oldest, latest) =
    iter.fold((first.clone(), first), |(oldest, latest), v| {
      if v.fetch_time < oldest.fetch_time {
        (v, latest)
      } else if v.fetch_time >= latest.fetch_time {
        (oldest, v)
      } else {
        (oldest, latest)
      }
    });

  Some(AggregatedDocument {
    url:              url.to_owned(),
    pub_date:         oldest.pub_date,
    first_fetch_time: oldest.first_fetch_time,
    fetch_time:       latest.fetch_time,
    text:             latest.text,
  })
}

/// Read every version of `url` from `store` and reduce it.
///
/// Fails with [`Error::NotFound`] if nothing is stored for `url`.
pub async fn aggregate<S>(store: &S, url: &str) -> Result<AggregatedDocument>
where
  S: VersionStore,
{
  let versions = store
    .list_versions_by_url(url)
    .await
    .map_err(Error::store)?;

  tracing::debug!(url, versions = versions.len(), "aggregating");

  fold_versions(url, versions).ok_or_else(|| Error::NotFound(url.to_owned()))
}

#[cfg(test)]
mod tests {
  use super::*;

  const URL: &str = "http://example.com/doc1";

  fn version(pub_date: i64, fetch_time: i64, text: &str, first: i64) -> Version {
    Version {
      url: URL.into(),
      pub_date,
      fetch_time,
      text: text.into(),
      first_fetch_time: first,
    }
  }

  #[test]
  fn empty_sequence_has_no_aggregate() {
    assert!(fold_versions(URL, Vec::new()).is_none());
  }

  #[test]
  fn single_version_is_returned_verbatim() {
    let v = version(10, 20, "only", 7);
    let agg = fold_versions(URL, vec![v.clone()]).unwrap();
    assert_eq!(agg, AggregatedDocument::from(v));
  }

  #[test]
  fn endpoints_come_from_oldest_and_latest() {
    let agg = fold_versions(
      URL,
      vec![
        version(10, 20, "v1", 20),
        version(11, 25, "v3", 25),
        version(12, 30, "v2", 30),
      ],
    )
    .unwrap();

    assert_eq!(agg.pub_date, 10);
    assert_eq!(agg.first_fetch_time, 20);
    assert_eq!(agg.fetch_time, 30);
    assert_eq!(agg.text, "v2");
  }

  #[test]
  fn unordered_input_gives_same_result() {
    let ordered = fold_versions(
      URL,
      vec![version(1, 5, "a", 5), version(2, 9, "b", 9), version(3, 12, "c", 12)],
    );
    let shuffled = fold_versions(
      URL,
      vec![version(2, 9, "b", 9), version(3, 12, "c", 12), version(1, 5, "a", 5)],
    );
    assert_eq!(ordered, shuffled);
  }

  #[test]
  fn equal_timestamps_keep_first_oldest_and_last_latest() {
    let agg = fold_versions(
      URL,
      vec![version(1, 20, "first", 3), version(2, 20, "second", 4)],
    )
    .unwrap();
    assert_eq!(agg.pub_date, 1);
    assert_eq!(agg.first_fetch_time, 3);
    assert_eq!(agg.text, "second");
  }

  #[test]
  fn url_is_taken_from_the_argument() {
    let agg = fold_versions("other", vec![version(1, 2, "x", 2)]).unwrap();
    assert_eq!(agg.url, "other");
  }
}
