//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per route. When routes or form fields
//! change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Request failed")
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// GET / - distinct titles, artists and prices
    pub async fn search_page(&self) -> Response {
        self.get("/").await
    }

    /// POST / - runs a search, blank values are left out of the criteria
    pub async fn search(&self, title: &str, artist: &str, price: &str) -> Response {
        self.post_form("/", &[("title", title), ("artist", artist), ("price", price)])
            .await
    }

    // ========================================================================
    // Album Management
    // ========================================================================

    /// POST /add
    pub async fn add_album(&self, title: &str, artist: &str, price: &str) -> Response {
        self.post_form(
            "/add",
            &[("title", title), ("artist", artist), ("price", price)],
        )
        .await
    }

    /// POST /delete
    pub async fn delete_album(&self, title: &str, artist: &str) -> Response {
        self.post_form("/delete", &[("title", title), ("artist", artist)])
            .await
    }

    /// POST /edit keyed by the current title and artist
    pub async fn edit_album(
        &self,
        current: (&str, &str),
        title: &str,
        artist: &str,
        price: &str,
    ) -> Response {
        self.post_form(
            "/edit",
            &[
                ("current_title", current.0),
                ("current_artist", current.1),
                ("title", title),
                ("artist", artist),
                ("price", price),
            ],
        )
        .await
    }

    /// POST /edit keyed by id
    pub async fn edit_album_by_id(
        &self,
        id: i64,
        title: &str,
        artist: &str,
        price: &str,
    ) -> Response {
        let id = id.to_string();
        self.post_form(
            "/edit",
            &[
                ("id", id.as_str()),
                ("title", title),
                ("artist", artist),
                ("price", price),
            ],
        )
        .await
    }

    /// GET /album/{id}
    pub async fn get_album(&self, id: i64) -> Response {
        self.get(&format!("/album/{}", id)).await
    }

    /// GET /dump
    pub async fn dump(&self) -> Response {
        self.get("/dump").await
    }
}
