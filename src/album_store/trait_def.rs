//! AlbumStore trait definition.
//!
//! The HTTP layer and the search dispatcher only see this trait, the SQLite
//! implementation is injected at startup.

use super::models::{Album, AlbumUpdate, NewAlbum};
use anyhow::Result;

/// Data-access facade over the `album` table.
///
/// Every `Err` is a storage failure. Lookups that match nothing return an
/// empty vec or `None`, never an error. Prices passed in are normalized to
/// 2 decimals by the implementation.
pub trait AlbumStore: Send + Sync {
    // =========================================================================
    // Lookups
    // =========================================================================

    /// Albums whose artist is exactly `artist`, ordered by id.
    fn find_by_artist(&self, artist: &str) -> Result<Vec<Album>>;

    /// Albums whose title is exactly `title`, ordered by id.
    fn find_by_title(&self, title: &str) -> Result<Vec<Album>>;

    /// Point lookup. Returns Ok(None) if the album does not exist.
    fn find_by_id(&self, id: i64) -> Result<Option<Album>>;

    /// First album (by id) with exactly this price.
    fn find_by_price(&self, price: f64) -> Result<Option<Album>>;

    /// Albums matching both price and artist, ordered by id.
    fn find_by_price_and_artist(&self, price: f64, artist: &str) -> Result<Vec<Album>>;

    /// First album (by id) matching both price and title.
    fn find_by_price_and_title(&self, price: f64, title: &str) -> Result<Option<Album>>;

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Inserts a new album and returns its id.
    fn insert(&self, album: &NewAlbum) -> Result<i64>;

    /// Rewrites every album matching the current (title, artist).
    /// New title and artist are title-cased. Returns the affected row count.
    fn update(&self, update: &AlbumUpdate) -> Result<usize>;

    /// Rewrites the album with the given id, same normalization as `update`.
    fn update_by_id(&self, id: i64, title: &str, artist: &str, price: f64) -> Result<usize>;

    /// Deletes every album matching (title, artist). Returns the affected row count.
    fn delete(&self, title: &str, artist: &str) -> Result<usize>;

    // =========================================================================
    // Listings
    // =========================================================================

    /// Distinct artist names, sorted ascending.
    fn distinct_artists(&self) -> Result<Vec<String>>;

    /// Distinct titles, sorted ascending.
    fn distinct_titles(&self) -> Result<Vec<String>>;

    /// Distinct prices, sorted ascending.
    fn distinct_prices(&self) -> Result<Vec<f64>>;

    /// Up to `limit` albums ordered by title.
    fn dump(&self, limit: usize) -> Result<Vec<Album>>;

    /// Number of albums in the table.
    fn count(&self) -> Result<usize>;
}
