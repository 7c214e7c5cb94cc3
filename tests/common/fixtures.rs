//! Test fixture creation for the album database

use super::constants::*;
use anyhow::Result;
use recordings_server::album_store::{AlbumStore, NewAlbum, SqliteAlbumStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary album database seeded with the albums in `constants.rs`.
/// Returns (temp_dir, db_path)
pub fn create_test_db() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("recordings.db");

    let store = SqliteAlbumStore::new(&db_path, 1)?;
    for (title, artist, price) in [
        (BLUE_TRAIN_TITLE, COLTRANE, BLUE_TRAIN_PRICE),
        (GIANT_STEPS_TITLE, COLTRANE, GIANT_STEPS_PRICE),
        (JERU_TITLE, MULLIGAN, JERU_PRICE),
        (SARAH_VAUGHAN_TITLE, VAUGHAN, SARAH_VAUGHAN_PRICE),
    ] {
        store.insert(&NewAlbum {
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        })?;
    }

    Ok((dir, db_path))
}
