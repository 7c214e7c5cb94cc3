#[cfg(test)]
mod mock_store;
mod models;
mod normalize;
mod schema;
mod store;
mod trait_def;
mod validation;

#[cfg(test)]
pub(crate) use mock_store::MockAlbumStore;
pub use models::*;
pub use normalize::{normalize_price, title_case};
pub use schema::ALBUM_VERSIONED_SCHEMAS;
pub use store::SqliteAlbumStore;
pub use trait_def::AlbumStore;
pub use validation::{
    parse_id, parse_price, require_price, validate_identity, validate_new_album, validate_update,
    ValidationError, ValidationResult,
};
