use anyhow::{Context, Result};
use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Form, Json, Router,
};

use super::pages::*;
use super::{log_requests, state::*, ApiError, ServerConfig};
use crate::album_store::{
    parse_id, parse_price, require_price, title_case, validate_identity, validate_new_album,
    validate_update, Album, AlbumUpdate, NewAlbum, PriceRange,
};
use crate::search::{Criteria, SearchDispatcher, SearchStrategy};

async fn search_page(State(store): State<GuardedAlbumStore>) -> Result<Json<SearchPage>, ApiError> {
    let titles = store
        .distinct_titles()
        .map_err(ApiError::storage("distinct_titles"))?;
    let artists = store
        .distinct_artists()
        .map_err(ApiError::storage("distinct_artists"))?;
    let prices = store
        .distinct_prices()
        .map_err(ApiError::storage("distinct_prices"))?;
    let price_range = PriceRange::from_sorted_prices(&prices);

    Ok(Json(SearchPage {
        titles,
        artists,
        prices,
        price_range,
    }))
}

async fn search(
    State(dispatcher): State<SearchDispatcher>,
    Form(form): Form<AlbumForm>,
) -> Result<Json<SearchResultsPage>, ApiError> {
    let criteria = Criteria::from_form(&form.title, &form.artist, &form.price)?;
    let outcome = dispatcher.dispatch(&criteria)?;

    let message = match (outcome.strategy, outcome.albums.is_empty()) {
        (SearchStrategy::Empty, _) => Some("Enter a title, artist or price to search".to_string()),
        (_, true) => Some("No albums matched your search".to_string()),
        _ => None,
    };

    Ok(Json(SearchResultsPage {
        criteria,
        strategy: outcome.strategy,
        albums: outcome.albums,
        message,
    }))
}

async fn add_page() -> Json<AddPage> {
    Json(AddPage::default())
}

async fn add_album(
    State(store): State<GuardedAlbumStore>,
    Form(form): Form<AlbumForm>,
) -> Result<Json<AddPage>, ApiError> {
    if form.is_blank() {
        return Ok(Json(AddPage::default()));
    }

    let album = NewAlbum {
        title: form.title.trim().to_string(),
        artist: form.artist.trim().to_string(),
        price: require_price(parse_price(&form.price)?)?,
    };
    validate_new_album(&album)?;

    let id = store.insert(&album).map_err(ApiError::storage("insert"))?;
    info!(id, title = %album.title, artist = %album.artist, "Album added");

    Ok(Json(AddPage {
        success: true,
        id: Some(id),
        summary: Some(album_summary(&album.title, &album.artist, album.price)),
    }))
}

fn delete_dropdowns(store: &GuardedAlbumStore) -> Result<DeletePage, ApiError> {
    Ok(DeletePage {
        titles: store
            .distinct_titles()
            .map_err(ApiError::storage("distinct_titles"))?,
        artists: store
            .distinct_artists()
            .map_err(ApiError::storage("distinct_artists"))?,
        ..Default::default()
    })
}

async fn delete_page(State(store): State<GuardedAlbumStore>) -> Result<Json<DeletePage>, ApiError> {
    delete_dropdowns(&store).map(Json)
}

async fn delete_album(
    State(store): State<GuardedAlbumStore>,
    Form(form): Form<DeleteForm>,
) -> Result<Json<DeletePage>, ApiError> {
    if validate_identity(&form.title, &form.artist).is_err() {
        return delete_dropdowns(&store).map(Json);
    }

    let deleted = store
        .delete(&form.title, &form.artist)
        .map_err(ApiError::storage("delete"))?;
    let existed = deleted > 0;
    let message = if existed {
        info!(deleted, title = %form.title, artist = %form.artist, "Album deleted");
        format!("Successful deletion of album! {} by {}", form.title, form.artist)
    } else {
        format!("This album doesn't exist! {} by {}", form.title, form.artist)
    };

    let mut page = delete_dropdowns(&store)?;
    page.existed = Some(existed);
    page.message = Some(message);
    Ok(Json(page))
}

async fn edit_page() -> Json<EditPage> {
    Json(EditPage::nothing_to_edit())
}

async fn edit_album(
    State(store): State<GuardedAlbumStore>,
    Form(form): Form<EditForm>,
) -> Result<Json<EditPage>, ApiError> {
    if form.is_blank() {
        return Ok(Json(EditPage::nothing_to_edit()));
    }

    let price = require_price(parse_price(&form.price)?)?;
    let summary = album_summary(&title_case(&form.title), &title_case(&form.artist), price);

    let (count, album) = match parse_id(&form.id)? {
        Some(id) => {
            validate_new_album(&NewAlbum {
                title: form.title.clone(),
                artist: form.artist.clone(),
                price,
            })?;
            let count = store
                .update_by_id(id, &form.title, &form.artist, price)
                .map_err(ApiError::storage("update_by_id"))?;
            let album = store
                .find_by_id(id)
                .map_err(ApiError::storage("find_by_id"))?;
            (count, album)
        }
        None => {
            let update = AlbumUpdate {
                current_title: form.current_title,
                current_artist: form.current_artist,
                new_title: form.title,
                new_artist: form.artist,
                new_price: price,
            };
            validate_update(&update)?;
            let count = store
                .update(&update)
                .map_err(ApiError::storage("update"))?;
            (count, None)
        }
    };

    if count == 0 {
        return Ok(Json(EditPage {
            success: false,
            message: format!("No album matched, nothing updated to {}", summary),
            count,
            album,
        }));
    }

    info!(count, "Album edited to {}", summary);
    Ok(Json(EditPage {
        success: true,
        message: format!("Success updating {}", summary),
        count,
        album,
    }))
}

async fn dump(
    State(config): State<ServerConfig>,
    State(store): State<GuardedAlbumStore>,
) -> Result<Json<DumpPage>, ApiError> {
    let limit = config.dump_limit;
    let albums = store.dump(limit).map_err(ApiError::storage("dump"))?;
    Ok(Json(DumpPage { limit, albums }))
}

async fn get_album(
    State(store): State<GuardedAlbumStore>,
    Path(id): Path<i64>,
) -> Result<Json<Album>, ApiError> {
    store
        .find_by_id(id)
        .map_err(ApiError::storage("find_by_id"))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

pub fn make_app(config: ServerConfig, album_store: GuardedAlbumStore) -> Router {
    let state = ServerState::new(config.clone(), album_store);

    let mut app: Router = Router::new()
        .route("/", get(search_page).post(search))
        .route("/add", get(add_page).post(add_album))
        .route("/delete", get(delete_page).post(delete_album))
        .route("/edit", get(edit_page).post(edit_album))
        .route("/dump", get(dump))
        .route("/album/{id}", get(get_album))
        .with_state(state.clone());

    if let Some(styles_dir) = config.styles_dir {
        app = app.nest_service("/styles", ServeDir::new(styles_dir));
    }

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, album_store: GuardedAlbumStore) -> Result<()> {
    let port = config.port;
    let app = make_app(config, album_store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
