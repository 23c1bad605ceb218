//! Mapping between [`Version`] and rows of the `documents` table.
//!
//! Every column maps one-to-one onto a field: timestamps are stored as
//! SQLite `INTEGER`, url and text as `TEXT`.

use docfold_core::document::Version;

/// Column list shared by every `SELECT` against `documents`, in the order
/// [`version_from_row`] reads them.
pub const VERSION_COLUMNS: &str = "url, pub_date, fetch_time, text, first_fetch_time";

pub fn version_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Version> {
  Ok(Version {
    url:              row.get(0)?,
    pub_date:         row.get(1)?,
    fetch_time:       row.get(2)?,
    text:             row.get(3)?,
    first_fetch_time: row.get(4)?,
  })
}
