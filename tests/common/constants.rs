//! Shared constants for end-to-end tests
//!
//! When the seeded albums change, update only this file and `fixtures.rs`.

// ============================================================================
// Seeded Albums
// ============================================================================

pub const BLUE_TRAIN_TITLE: &str = "Blue Train";
pub const GIANT_STEPS_TITLE: &str = "Giant Steps";
pub const JERU_TITLE: &str = "Jeru";
pub const SARAH_VAUGHAN_TITLE: &str = "Sarah Vaughan";

pub const COLTRANE: &str = "John Coltrane";
pub const MULLIGAN: &str = "Gerry Mulligan";
pub const VAUGHAN: &str = "Sarah Vaughan";

pub const BLUE_TRAIN_PRICE: f64 = 56.99;
pub const GIANT_STEPS_PRICE: f64 = 63.99;
pub const JERU_PRICE: f64 = 17.99;
pub const SARAH_VAUGHAN_PRICE: f64 = 34.98;

/// Number of albums inserted by the fixtures
pub const SEEDED_ALBUM_COUNT: usize = 4;

// ============================================================================
// Server Settings
// ============================================================================

/// Dump limit configured for the test server, lower than the seeded count
pub const TEST_DUMP_LIMIT: usize = 3;

/// Maximum time to wait for server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// HTTP request timeout for test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server readiness
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
