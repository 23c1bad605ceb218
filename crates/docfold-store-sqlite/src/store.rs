//! [`SqliteStore`] — the SQLite implementation of [`VersionStore`].

use std::path::Path;

use docfold_core::{document::Version, store::VersionStore};

use crate::{
  Result,
  encode::{VERSION_COLUMNS, version_from_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A docfold version store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Missing parent directories are created. The path `:memory:` opens a
  /// private in-memory database.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }

    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened version store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── VersionStore impl ───────────────────────────────────────────────────────

impl VersionStore for SqliteStore {
  type Error = crate::Error;

  async fn upsert(&self, version: Version) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO documents (
             url, pub_date, fetch_time, text, first_fetch_time
           ) VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            version.url,
            version.pub_date,
            version.fetch_time,
            version.text,
            version.first_fetch_time,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_versions_by_url(&self, url: &str) -> Result<Vec<Version>> {
    let url = url.to_owned();

    let versions = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {VERSION_COLUMNS} FROM documents
           WHERE url = ?1
           ORDER BY fetch_time ASC"
        ))?;

        let rows = stmt
          .query_map(rusqlite::params![url], version_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    Ok(versions)
  }
}
