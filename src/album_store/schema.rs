//! SQLite schema for the recordings database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

/// Albums table - one row per album, price stored as REAL rounded to cents
const ALBUM_TABLE: Table = Table {
    name: "album",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("artist", &SqlType::Text, non_null = true),
        sqlite_column!("price", &SqlType::Real, non_null = true),
    ],
    indices: &[("idx_album_title", "title"), ("idx_album_artist", "artist")],
};

pub const ALBUM_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[ALBUM_TABLE],
}];
