//! Recordings Server Library
//!
//! Album record store, search dispatch and the HTTP front end, exposed for
//! the binary and the end-to-end tests.

pub mod album_store;
pub mod config;
pub mod search;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use album_store::{Album, AlbumStore, SqliteAlbumStore};
pub use search::{Criteria, SearchDispatcher, SearchStrategy};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
