//! SQL schema for the mend SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per member. Writes use INSERT OR REPLACE, so a re-set discards the
-- old row and is_private falls back to its default.
CREATE TABLE IF NOT EXISTS sobriety_records (
    member_id   TEXT PRIMARY KEY,            -- decimal snowflake
    start_date  TEXT NOT NULL,               -- MM-DD-YY; kept verbatim even if unparseable
    substance   TEXT NOT NULL,
    is_private  INTEGER NOT NULL DEFAULT 0
);

PRAGMA user_version = 1;
";
