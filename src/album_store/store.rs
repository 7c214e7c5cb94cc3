//! SQLite-backed album store implementation.
//!
//! Writes go through a single connection, reads rotate over a small pool of
//! read-only connections on the same WAL-mode database file.

use super::models::{Album, AlbumUpdate, NewAlbum};
use super::normalize::{normalize_price, title_case};
use super::schema::ALBUM_VERSIONED_SCHEMAS;
use super::trait_def::AlbumStore;
use crate::sqlite_persistence::read_schema_version;
use anyhow::{anyhow, bail, Context, Result};
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const ALBUM_COLUMNS: &str = "id, title, artist, price";

/// SQLite-backed album store.
#[derive(Clone)]
pub struct SqliteAlbumStore {
    read_pool: Vec<Arc<Mutex<Connection>>>,
    write_conn: Arc<Mutex<Connection>>,
    read_index: Arc<AtomicUsize>,
}

fn create_or_validate_schema(conn: &Connection) -> Result<()> {
    let latest_version = ALBUM_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &ALBUM_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!("Creating album db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    match read_schema_version(conn)? {
        Some(version) if version == latest_version => latest_schema
            .validate(conn)
            .context("Album database does not match the expected schema"),
        Some(version) => bail!(
            "Album database is at schema version {}, expected {}",
            version,
            latest_version
        ),
        None => bail!("Database is not empty and was not created by this server"),
    }
}

fn row_to_album(row: &Row) -> rusqlite::Result<Album> {
    Ok(Album {
        id: row.get(0)?,
        title: row.get(1)?,
        artist: row.get(2)?,
        price: row.get(3)?,
    })
}

fn lock(conn: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| anyhow!("Album database connection lock poisoned"))
}

impl SqliteAlbumStore {
    /// Opens (creating if needed) the album database.
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    /// * `read_pool_size` - Number of read-only connections, at least 1
    pub fn new<P: AsRef<Path>>(db_path: P, read_pool_size: usize) -> Result<Self> {
        let db_path_ref = db_path.as_ref();

        let write_conn = Connection::open_with_flags(
            db_path_ref,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open album database {:?}", db_path_ref))?;

        create_or_validate_schema(&write_conn)?;
        write_conn.pragma_update(None, "journal_mode", "WAL")?;

        let read_pool_size = read_pool_size.max(1);
        let mut read_pool = Vec::with_capacity(read_pool_size);
        for _ in 0..read_pool_size {
            let read_conn = Connection::open_with_flags(
                db_path_ref,
                OpenFlags::SQLITE_OPEN_READ_ONLY
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .context("Failed to open read connection to album database")?;
            read_pool.push(Arc::new(Mutex::new(read_conn)));
        }

        let store = SqliteAlbumStore {
            read_pool,
            write_conn: Arc::new(Mutex::new(write_conn)),
            read_index: Arc::new(AtomicUsize::new(0)),
        };
        info!(
            "Opened album database with {} albums ({} read connections)",
            store.count()?,
            read_pool_size
        );
        Ok(store)
    }

    fn get_read_conn(&self) -> Arc<Mutex<Connection>> {
        let index = self.read_index.fetch_add(1, Ordering::SeqCst) % self.read_pool.len();
        self.read_pool[index].clone()
    }

    fn query_albums<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Album>> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let albums = stmt
            .query_map(params, row_to_album)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(albums)
    }

    fn query_first_album<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Option<Album>> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        match conn.query_row(sql, params, row_to_album) {
            Ok(album) => Ok(Some(album)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn query_column<T: rusqlite::types::FromSql>(&self, sql: &str) -> Result<Vec<T>> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        let mut stmt = conn.prepare_cached(sql)?;
        let values = stmt
            .query_map([], |r| r.get(0))?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(values)
    }

    fn execute_write<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<usize> {
        let conn = lock(&self.write_conn)?;
        Ok(conn.execute(sql, params)?)
    }
}

impl AlbumStore for SqliteAlbumStore {
    fn find_by_artist(&self, artist: &str) -> Result<Vec<Album>> {
        self.query_albums(
            &format!("SELECT {ALBUM_COLUMNS} FROM album WHERE artist = ?1 ORDER BY id"),
            params![artist],
        )
        .with_context(|| format!("find_by_artist {:?}", artist))
    }

    fn find_by_title(&self, title: &str) -> Result<Vec<Album>> {
        self.query_albums(
            &format!("SELECT {ALBUM_COLUMNS} FROM album WHERE title = ?1 ORDER BY id"),
            params![title],
        )
        .with_context(|| format!("find_by_title {:?}", title))
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Album>> {
        self.query_first_album(
            &format!("SELECT {ALBUM_COLUMNS} FROM album WHERE id = ?1"),
            params![id],
        )
        .with_context(|| format!("find_by_id {}", id))
    }

    fn find_by_price(&self, price: f64) -> Result<Option<Album>> {
        self.query_first_album(
            &format!(
                "SELECT {ALBUM_COLUMNS} FROM album WHERE ROUND(price, 2) = ?1 ORDER BY id LIMIT 1"
            ),
            params![normalize_price(price)],
        )
        .with_context(|| format!("find_by_price {}", price))
    }

    fn find_by_price_and_artist(&self, price: f64, artist: &str) -> Result<Vec<Album>> {
        self.query_albums(
            &format!(
                "SELECT {ALBUM_COLUMNS} FROM album WHERE ROUND(price, 2) = ?1 AND artist = ?2 ORDER BY id"
            ),
            params![normalize_price(price), artist],
        )
        .with_context(|| format!("find_by_price_and_artist {} {:?}", price, artist))
    }

    fn find_by_price_and_title(&self, price: f64, title: &str) -> Result<Option<Album>> {
        self.query_first_album(
            &format!(
                "SELECT {ALBUM_COLUMNS} FROM album WHERE ROUND(price, 2) = ?1 AND title = ?2 ORDER BY id LIMIT 1"
            ),
            params![normalize_price(price), title],
        )
        .with_context(|| format!("find_by_price_and_title {} {:?}", price, title))
    }

    fn insert(&self, album: &NewAlbum) -> Result<i64> {
        let conn = lock(&self.write_conn)?;
        conn.execute(
            "INSERT INTO album (title, artist, price) VALUES (?1, ?2, ?3)",
            params![album.title, album.artist, normalize_price(album.price)],
        )
        .with_context(|| format!("insert {:?} by {:?}", album.title, album.artist))?;
        let id = conn.last_insert_rowid();
        debug!("Inserted album {} ({:?} by {:?})", id, album.title, album.artist);
        Ok(id)
    }

    fn update(&self, update: &AlbumUpdate) -> Result<usize> {
        let count = self
            .execute_write(
                "UPDATE album SET title = ?1, artist = ?2, price = ?3 WHERE title = ?4 AND artist = ?5",
                params![
                    title_case(&update.new_title),
                    title_case(&update.new_artist),
                    normalize_price(update.new_price),
                    update.current_title,
                    update.current_artist
                ],
            )
            .with_context(|| {
                format!(
                    "update {:?} by {:?}",
                    update.current_title, update.current_artist
                )
            })?;
        debug!(
            "Updated {} album(s) matching {:?} by {:?}",
            count, update.current_title, update.current_artist
        );
        Ok(count)
    }

    fn update_by_id(&self, id: i64, title: &str, artist: &str, price: f64) -> Result<usize> {
        self.execute_write(
            "UPDATE album SET title = ?1, artist = ?2, price = ?3 WHERE id = ?4",
            params![
                title_case(title),
                title_case(artist),
                normalize_price(price),
                id
            ],
        )
        .with_context(|| format!("update_by_id {}", id))
    }

    fn delete(&self, title: &str, artist: &str) -> Result<usize> {
        self.execute_write(
            "DELETE FROM album WHERE title = ?1 AND artist = ?2",
            params![title, artist],
        )
        .with_context(|| format!("delete {:?} by {:?}", title, artist))
    }

    fn distinct_artists(&self) -> Result<Vec<String>> {
        self.query_column("SELECT DISTINCT artist FROM album ORDER BY artist")
            .context("distinct_artists")
    }

    fn distinct_titles(&self) -> Result<Vec<String>> {
        self.query_column("SELECT DISTINCT title FROM album ORDER BY title")
            .context("distinct_titles")
    }

    fn distinct_prices(&self) -> Result<Vec<f64>> {
        self.query_column("SELECT DISTINCT ROUND(price, 2) FROM album ORDER BY 1")
            .context("distinct_prices")
    }

    fn dump(&self, limit: usize) -> Result<Vec<Album>> {
        self.query_albums(
            &format!("SELECT {ALBUM_COLUMNS} FROM album ORDER BY title, id LIMIT ?1"),
            params![i64::try_from(limit).unwrap_or(i64::MAX)],
        )
        .context("dump")
    }

    fn count(&self) -> Result<usize> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM album", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}
