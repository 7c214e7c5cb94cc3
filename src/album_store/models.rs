//! Album models shared by the store, the search dispatcher and the HTTP layer.

use serde::{Deserialize, Serialize};

/// One row of the `album` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Insert payload; the id is assigned by the store.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Edit keyed by the album's current (title, artist) pair.
///
/// Every row sharing that pair is rewritten, the store has no way to tell
/// them apart.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumUpdate {
    pub current_title: String,
    pub current_artist: String,
    pub new_title: String,
    pub new_artist: String,
    pub new_price: f64,
}

/// Integer bounds of the stored prices, used for range inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// Builds the range from prices sorted ascending. Returns None when empty.
    pub fn from_sorted_prices(prices: &[f64]) -> Option<Self> {
        let first = prices.first()?;
        let last = prices.last()?;
        Some(PriceRange {
            min: first.floor() as i64,
            max: last.ceil() as i64,
        })
    }
}
