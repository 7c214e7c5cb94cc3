//! Response bodies, one per screen.

use crate::album_store::{Album, PriceRange};
use crate::search::{Criteria, SearchStrategy};
use serde::{Deserialize, Serialize};

/// Form fields of the search and add screens. Missing fields are blank.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct AlbumForm {
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl AlbumForm {
    pub fn is_blank(&self) -> bool {
        [&self.title, &self.artist, &self.price]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct DeleteForm {
    pub title: String,
    pub artist: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EditForm {
    pub id: String,
    pub current_title: String,
    pub current_artist: String,
    pub title: String,
    pub artist: String,
    pub price: String,
}

impl EditForm {
    /// True when there is no new value to write.
    pub fn is_blank(&self) -> bool {
        [&self.title, &self.artist, &self.price]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

#[derive(Serialize, Debug)]
pub struct SearchPage {
    pub titles: Vec<String>,
    pub artists: Vec<String>,
    pub prices: Vec<f64>,
    pub price_range: Option<PriceRange>,
}

#[derive(Serialize, Debug)]
pub struct SearchResultsPage {
    pub criteria: Criteria,
    pub strategy: SearchStrategy,
    pub albums: Vec<Album>,
    pub message: Option<String>,
}

#[derive(Serialize, Debug, Default)]
pub struct AddPage {
    pub success: bool,
    pub id: Option<i64>,
    pub summary: Option<String>,
}

#[derive(Serialize, Debug, Default)]
pub struct DeletePage {
    pub titles: Vec<String>,
    pub artists: Vec<String>,
    pub existed: Option<bool>,
    pub message: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct EditPage {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub album: Option<Album>,
}

impl EditPage {
    pub fn nothing_to_edit() -> Self {
        EditPage {
            success: false,
            message: "Nothing to edit. Try something else!".to_string(),
            count: 0,
            album: None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct DumpPage {
    pub limit: usize,
    pub albums: Vec<Album>,
}

/// Human readable line describing an album, as shown after add and edit.
pub fn album_summary(title: &str, artist: &str, price: f64) -> String {
    format!("{} by {} ${:.2}", title, artist, price)
}
