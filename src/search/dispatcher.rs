//! Search dispatch: maps criteria to exactly one store query.
//!
//! Precedence is fixed: a positive price is the primary filter, narrowed by
//! title first and artist second. Without a price, title wins over artist.
//! Criteria with nothing usable never reach the store.

use super::criteria::Criteria;
use crate::album_store::{Album, AlbumStore};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    PriceAndTitle,
    PriceAndArtist,
    PriceOnly,
    Title,
    Artist,
    Empty,
}

impl SearchStrategy {
    pub fn select(criteria: &Criteria) -> Self {
        if criteria.positive_price().is_some() {
            if criteria.title.is_some() {
                SearchStrategy::PriceAndTitle
            } else if criteria.artist.is_some() {
                SearchStrategy::PriceAndArtist
            } else {
                SearchStrategy::PriceOnly
            }
        } else if criteria.title.is_some() {
            SearchStrategy::Title
        } else if criteria.artist.is_some() {
            SearchStrategy::Artist
        } else {
            SearchStrategy::Empty
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::PriceAndTitle => "price_and_title",
            SearchStrategy::PriceAndArtist => "price_and_artist",
            SearchStrategy::PriceOnly => "price_only",
            SearchStrategy::Title => "title",
            SearchStrategy::Artist => "artist",
            SearchStrategy::Empty => "empty",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{strategy} search failed: {source:#}")]
    Storage {
        strategy: SearchStrategy,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub strategy: SearchStrategy,
    pub albums: Vec<Album>,
}

#[derive(Clone)]
pub struct SearchDispatcher {
    store: Arc<dyn AlbumStore>,
}

impl SearchDispatcher {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    /// Runs the strategy selected for `criteria`.
    ///
    /// Strategies that yield at most one album are flattened into a zero or
    /// one element list, a miss is an empty list rather than an error.
    pub fn dispatch(&self, criteria: &Criteria) -> Result<SearchOutcome, SearchError> {
        let strategy = SearchStrategy::select(criteria);
        let albums = self.run(strategy, criteria).map_err(|source| {
            error!(
                strategy = strategy.name(),
                ?criteria,
                "Search failed: {:#}",
                source
            );
            SearchError::Storage { strategy, source }
        })?;

        if albums.is_empty() && strategy != SearchStrategy::Empty {
            warn!(strategy = strategy.name(), ?criteria, "Search matched no albums");
        } else {
            info!(
                strategy = strategy.name(),
                results = albums.len(),
                "Search dispatched"
            );
        }
        Ok(SearchOutcome { strategy, albums })
    }

    fn run(&self, strategy: SearchStrategy, criteria: &Criteria) -> anyhow::Result<Vec<Album>> {
        let title = criteria.title.as_deref().unwrap_or_default();
        let artist = criteria.artist.as_deref().unwrap_or_default();
        let price = criteria.positive_price().unwrap_or_default();

        match strategy {
            SearchStrategy::PriceAndTitle => Ok(self
                .store
                .find_by_price_and_title(price, title)?
                .into_iter()
                .collect()),
            SearchStrategy::PriceAndArtist => self.store.find_by_price_and_artist(price, artist),
            SearchStrategy::PriceOnly => {
                Ok(self.store.find_by_price(price)?.into_iter().collect())
            }
            SearchStrategy::Title => self.store.find_by_title(title),
            SearchStrategy::Artist => self.store.find_by_artist(artist),
            SearchStrategy::Empty => Ok(Vec::new()),
        }
    }
}
