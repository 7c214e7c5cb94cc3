use crate::album_store::{parse_price, ValidationResult};
use serde::Serialize;

/// Optional search input of a single request.
///
/// Each present field is an exact-match filter.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Criteria {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Criteria {
    /// Builds criteria from raw form values. Blank strings are absent, a
    /// non-numeric price is a validation error.
    pub fn from_form(title: &str, artist: &str, price: &str) -> ValidationResult<Self> {
        Ok(Criteria {
            title: non_blank(title),
            artist: non_blank(artist),
            price: parse_price(price)?,
        })
    }

    /// The price, only when it can act as a filter.
    pub fn positive_price(&self) -> Option<f64> {
        self.price.filter(|p| *p > 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.artist.is_none() && self.price.is_none()
    }
}
