//! In-memory `AlbumStore` for unit tests.

use super::models::{Album, AlbumUpdate, NewAlbum};
use super::trait_def::AlbumStore;
use anyhow::{bail, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store that records which lookups were issued.
#[derive(Default)]
pub(crate) struct MockAlbumStore {
    albums: Mutex<Vec<Album>>,
    call_counts: Mutex<HashMap<&'static str, usize>>,
    remaining_failures: AtomicUsize,
}

impl MockAlbumStore {
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: Mutex::new(albums),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::failing_times(usize::MAX)
    }

    /// Fails the next `times` calls, then behaves normally.
    pub fn failing_times(times: usize) -> Self {
        Self {
            remaining_failures: AtomicUsize::new(times),
            ..Default::default()
        }
    }

    pub fn with_albums_failing_times(albums: Vec<Album>, times: usize) -> Self {
        Self {
            albums: Mutex::new(albums),
            remaining_failures: AtomicUsize::new(times),
            ..Default::default()
        }
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn record(&self, method: &'static str) -> Result<()> {
        *self.call_counts.lock().unwrap().entry(method).or_insert(0) += 1;
        let failed = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            bail!("connection refused");
        }
        Ok(())
    }

    fn filter(&self, predicate: impl Fn(&Album) -> bool) -> Vec<Album> {
        self.albums
            .lock()
            .unwrap()
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect()
    }
}

impl AlbumStore for MockAlbumStore {
    fn find_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        self.record("find_by_artist")?;
        Ok(self.filter(|a| a.artist == artist))
    }

    fn find_by_title(&self, title: &str) -> Result<Vec<Album>> {
        self.record("find_by_title")?;
        Ok(self.filter(|a| a.title == title))
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Album>> {
        self.record("find_by_id")?;
        Ok(self.filter(|a| a.id == id).into_iter().next())
    }

    fn find_by_price(&self, price: f64) -> Result<Option<Album>> {
        self.record("find_by_price")?;
        Ok(self.filter(|a| a.price == price).into_iter().next())
    }

    fn find_by_price_and_artist(&self, price: f64, artist: &str) -> Result<Vec<Album>> {
        self.record("find_by_price_and_artist")?;
        Ok(self.filter(|a| a.price == price && a.artist == artist))
    }

    fn find_by_price_and_title(&self, price: f64, title: &str) -> Result<Option<Album>> {
        self.record("find_by_price_and_title")?;
        Ok(self
            .filter(|a| a.price == price && a.title == title)
            .into_iter()
            .next())
    }

    fn insert(&self, album: &NewAlbum) -> Result<i64> {
        self.record("insert")?;
        let mut albums = self.albums.lock().unwrap();
        let id = albums.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        albums.push(Album {
            id,
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: album.price,
        });
        Ok(id)
    }

    fn update(&self, _update: &AlbumUpdate) -> Result<usize> {
        self.record("update")?;
        Ok(0)
    }

    fn update_by_id(&self, _id: i64, _title: &str, _artist: &str, _price: f64) -> Result<usize> {
        self.record("update_by_id")?;
        Ok(0)
    }

    fn delete(&self, title: &str, artist: &str) -> Result<usize> {
        self.record("delete")?;
        let mut albums = self.albums.lock().unwrap();
        let before = albums.len();
        albums.retain(|a| !(a.title == title && a.artist == artist));
        Ok(before - albums.len())
    }

    fn distinct_artists(&self) -> Result<Vec<String>> {
        self.record("distinct_artists")?;
        Ok(vec![])
    }

    fn distinct_titles(&self) -> Result<Vec<String>> {
        self.record("distinct_titles")?;
        Ok(vec![])
    }

    fn distinct_prices(&self) -> Result<Vec<f64>> {
        self.record("distinct_prices")?;
        Ok(vec![])
    }

    fn dump(&self, limit: usize) -> Result<Vec<Album>> {
        self.record("dump")?;
        Ok(self.filter(|_| true).into_iter().take(limit).collect())
    }

    fn count(&self) -> Result<usize> {
        self.record("count")?;
        Ok(self.albums.lock().unwrap().len())
    }
}
