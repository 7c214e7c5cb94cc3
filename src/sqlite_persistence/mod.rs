mod versioned_schema;

pub use versioned_schema::*;

/// Offset added to the schema version stored in `PRAGMA user_version`, so a
/// fresh SQLite file (user_version = 0) is never mistaken for schema v0.
pub const BASE_DB_VERSION: usize = 99_000;
