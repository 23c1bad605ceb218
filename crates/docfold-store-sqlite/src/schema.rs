//! SQL schema for the docfold SQLite store.
//!
//! Executed once at connection startup. The schema version is stamped into
//! `PRAGMA user_version`; future migrations will be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per observed version. Re-submitting an existing
-- (url, fetch_time) replaces the whole row.
CREATE TABLE IF NOT EXISTS documents (
    url              TEXT    NOT NULL CHECK (url <> ''),
    pub_date         INTEGER NOT NULL,
    fetch_time       INTEGER NOT NULL,
    text             TEXT    NOT NULL,
    first_fetch_time INTEGER NOT NULL,
    PRIMARY KEY (url, fetch_time)
);

PRAGMA user_version = 1;
";
