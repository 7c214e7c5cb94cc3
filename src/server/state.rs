use axum::extract::FromRef;

use crate::album_store::AlbumStore;
use crate::search::SearchDispatcher;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedAlbumStore = Arc<dyn AlbumStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub album_store: GuardedAlbumStore,
    pub dispatcher: SearchDispatcher,
}

impl ServerState {
    pub fn new(config: ServerConfig, album_store: GuardedAlbumStore) -> ServerState {
        ServerState {
            config,
            dispatcher: SearchDispatcher::new(album_store.clone()),
            album_store,
        }
    }
}

impl FromRef<ServerState> for GuardedAlbumStore {
    fn from_ref(input: &ServerState) -> Self {
        input.album_store.clone()
    }
}

impl FromRef<ServerState> for SearchDispatcher {
    fn from_ref(input: &ServerState) -> Self {
        input.dispatcher.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
