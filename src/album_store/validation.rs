//! Validation for album input.
//!
//! Checks run before anything reaches the store, so a malformed request never
//! costs a query.

use super::models::{AlbumUpdate, NewAlbum};
use super::normalize::normalize_price;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Price '{raw}' is not a valid number")]
    InvalidPrice { raw: String },

    #[error("Field '{field}' is required but was empty")]
    EmptyField { field: &'static str },

    #[error("Price must be non-negative, got {value}")]
    NegativePrice { value: f64 },

    #[error("Id '{raw}' is not a valid album id")]
    InvalidId { raw: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a price form value.
///
/// Blank input is `None`. Anything else must be a finite number and comes
/// back normalized to 2 decimals.
pub fn parse_price(raw: &str) -> ValidationResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>().map(normalize_price) {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ValidationError::InvalidPrice {
            raw: raw.to_string(),
        }),
    }
}

/// Parses an optional album id form value. Blank input is `None`.
pub fn parse_id(raw: &str) -> ValidationResult<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidId {
            raw: raw.to_string(),
        })
}

/// A price that was left blank where one is needed.
pub fn require_price(price: Option<f64>) -> ValidationResult<f64> {
    price.ok_or(ValidationError::EmptyField { field: "price" })
}

fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

fn require_non_negative(value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::NegativePrice { value });
    }
    Ok(())
}

/// Title and artist are what identify an album for deletion and edits.
pub fn validate_identity(title: &str, artist: &str) -> ValidationResult<()> {
    require("title", title)?;
    require("artist", artist)
}

pub fn validate_new_album(album: &NewAlbum) -> ValidationResult<()> {
    validate_identity(&album.title, &album.artist)?;
    require_non_negative(album.price)
}

pub fn validate_update(update: &AlbumUpdate) -> ValidationResult<()> {
    require("current_title", &update.current_title)?;
    require("current_artist", &update.current_artist)?;
    validate_identity(&update.new_title, &update.new_artist)?;
    require_non_negative(update.new_price)
}
