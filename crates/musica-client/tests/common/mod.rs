// Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDateTime, Utc};
use musica_client::{
    ApiClient, Favorite, FavoritePayload, Song, SongPayload, Toaster, User, UserPayload,
};
use serde_json::{json, Value};

type Reply<T> = Result<T, (StatusCode, Json<Value>)>;

#[derive(Default)]
struct Catalog {
    users: Vec<User>,
    songs: Vec<Song>,
    favorites: Vec<Favorite>,
    next_user: i64,
    next_song: i64,
    next_favorite: i64,
    list_hits: HashMap<&'static str, usize>,
}

type Shared = Arc<Mutex<Catalog>>;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn detail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}

/// In-process stand-in for the catalog API: in-memory tables, email
/// uniqueness, and cascade deletes from users and songs to favorites.
pub struct FakeBackend {
    pub base_url: String,
    catalog: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let catalog = Shared::default();
        let app = router(catalog.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}/api"),
            catalog,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url).unwrap()
    }

    pub fn toaster(&self) -> Toaster {
        Toaster::new(20)
    }

    pub fn seed_user(&self, name: &str, email: &str) -> User {
        insert_user(
            &mut self.catalog.lock().unwrap(),
            UserPayload {
                name: name.into(),
                email: email.into(),
            },
        )
        .unwrap()
    }

    pub fn seed_song(&self, title: &str, artist: &str, year: i32, genre: &str) -> Song {
        insert_song(
            &mut self.catalog.lock().unwrap(),
            SongPayload {
                title: title.into(),
                artist: artist.into(),
                album: title.into(),
                duration: 200,
                year,
                genre: genre.into(),
            },
        )
    }

    pub fn seed_favorite(&self, user_id: i64, song_id: i64) -> Favorite {
        insert_favorite(
            &mut self.catalog.lock().unwrap(),
            FavoritePayload { user_id, song_id },
        )
        .unwrap()
    }

    /// How many times a collection list (`usuarios`, `canciones`,
    /// `favoritos`) was fetched.
    pub fn list_hits(&self, collection: &str) -> usize {
        self.catalog
            .lock()
            .unwrap()
            .list_hits
            .get(collection)
            .copied()
            .unwrap_or(0)
    }

    pub fn favorite_count(&self) -> usize {
        self.catalog.lock().unwrap().favorites.len()
    }
}

fn router(catalog: Shared) -> Router {
    Router::new()
        .route("/api", get(api_info))
        .route("/health", get(health))
        .route("/api/usuarios/", get(list_users).post(create_user))
        .route(
            "/api/usuarios/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/usuarios/{id}/favoritos", get(user_favorites))
        .route("/api/canciones/", get(list_songs).post(create_song))
        .route("/api/canciones/buscar", get(search_songs))
        .route(
            "/api/canciones/{id}",
            axum::routing::put(update_song).delete(delete_song),
        )
        .route("/api/favoritos/", get(list_favorites).post(create_favorite))
        .route("/api/favoritos/{id}", axum::routing::delete(delete_favorite))
        .with_state(catalog)
}

// ── Table operations ─────────────────────────────────────────────────

fn insert_user(catalog: &mut Catalog, payload: UserPayload) -> Reply<User> {
    if catalog.users.iter().any(|u| u.email == payload.email) {
        return Err(detail(StatusCode::BAD_REQUEST, "El correo ya está registrado"));
    }
    catalog.next_user += 1;
    let user = User {
        id: catalog.next_user,
        name: payload.name,
        email: payload.email,
        registered_at: now(),
    };
    catalog.users.push(user.clone());
    Ok(user)
}

fn insert_song(catalog: &mut Catalog, payload: SongPayload) -> Song {
    catalog.next_song += 1;
    let song = Song {
        id: catalog.next_song,
        title: payload.title,
        artist: payload.artist,
        album: payload.album,
        duration: payload.duration,
        year: payload.year,
        genre: payload.genre,
        created_at: now(),
    };
    catalog.songs.push(song.clone());
    song
}

fn insert_favorite(catalog: &mut Catalog, payload: FavoritePayload) -> Reply<Favorite> {
    if !catalog.users.iter().any(|u| u.id == payload.user_id) {
        return Err(detail(StatusCode::NOT_FOUND, "Usuario no encontrado"));
    }
    if !catalog.songs.iter().any(|s| s.id == payload.song_id) {
        return Err(detail(StatusCode::NOT_FOUND, "Canción no encontrada"));
    }
    if catalog
        .favorites
        .iter()
        .any(|f| f.user_id == payload.user_id && f.song_id == payload.song_id)
    {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            "La canción ya está marcada como favorita",
        ));
    }
    catalog.next_favorite += 1;
    let favorite = Favorite {
        id: catalog.next_favorite,
        user_id: payload.user_id,
        song_id: payload.song_id,
        marked_at: now(),
        user: None,
        song: None,
    };
    catalog.favorites.push(favorite.clone());
    Ok(favorite)
}

fn embed(catalog: &Catalog, favorite: &Favorite) -> Favorite {
    Favorite {
        user: catalog.users.iter().find(|u| u.id == favorite.user_id).cloned(),
        song: catalog.songs.iter().find(|s| s.id == favorite.song_id).cloned(),
        ..favorite.clone()
    }
}

fn page<T: Clone>(items: &[T], query: &HashMap<String, String>) -> Vec<T> {
    let skip = query.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(100usize)
        .min(100);
    items.iter().skip(skip).take(limit).cloned().collect()
}

// ── Handlers ─────────────────────────────────────────────────────────

async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Bienvenido a API de Música",
        "version": "1.0.0",
        "description": "Una API RESTful para gestionar usuarios, canciones y favoritos"
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "database": "connected", "environment": "test" }))
}

async fn list_users(
    State(catalog): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<User>> {
    let mut catalog = catalog.lock().unwrap();
    *catalog.list_hits.entry("usuarios").or_default() += 1;
    Json(page(&catalog.users, &query))
}

async fn create_user(
    State(catalog): State<Shared>,
    Json(payload): Json<UserPayload>,
) -> Reply<(StatusCode, Json<User>)> {
    let user = insert_user(&mut catalog.lock().unwrap(), payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(State(catalog): State<Shared>, Path(id): Path<i64>) -> Reply<Json<User>> {
    catalog
        .lock()
        .unwrap()
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Usuario no encontrado"))
}

async fn update_user(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Reply<Json<User>> {
    let mut catalog = catalog.lock().unwrap();
    if catalog
        .users
        .iter()
        .any(|u| u.id != id && u.email == payload.email)
    {
        return Err(detail(StatusCode::BAD_REQUEST, "El correo ya está registrado"));
    }
    let user = catalog
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Usuario no encontrado"))?;
    user.name = payload.name;
    user.email = payload.email;
    Ok(Json(user.clone()))
}

async fn delete_user(State(catalog): State<Shared>, Path(id): Path<i64>) -> Reply<StatusCode> {
    let mut catalog = catalog.lock().unwrap();
    let before = catalog.users.len();
    catalog.users.retain(|u| u.id != id);
    if catalog.users.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Usuario no encontrado"));
    }
    catalog.favorites.retain(|f| !f.references_user(id));
    Ok(StatusCode::NO_CONTENT)
}

async fn user_favorites(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
) -> Reply<Json<Value>> {
    let catalog = catalog.lock().unwrap();
    if !catalog.users.iter().any(|u| u.id == id) {
        return Err(detail(StatusCode::NOT_FOUND, "Usuario no encontrado"));
    }
    let favorites: Vec<Favorite> = catalog
        .favorites
        .iter()
        .filter(|f| f.references_user(id))
        .map(|f| embed(&catalog, f))
        .collect();
    Ok(Json(json!({ "favoritos": favorites })))
}

async fn list_songs(
    State(catalog): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Song>> {
    let mut catalog = catalog.lock().unwrap();
    *catalog.list_hits.entry("canciones").or_default() += 1;
    Json(page(&catalog.songs, &query))
}

async fn create_song(
    State(catalog): State<Shared>,
    Json(payload): Json<SongPayload>,
) -> (StatusCode, Json<Song>) {
    let song = insert_song(&mut catalog.lock().unwrap(), payload);
    (StatusCode::CREATED, Json(song))
}

async fn search_songs(
    State(catalog): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Song>> {
    let contains = |field: &str, key: &str| {
        query
            .get(key)
            .is_none_or(|needle| field.to_lowercase().contains(&needle.to_lowercase()))
    };
    let year = query.get("año").and_then(|v| v.parse::<i32>().ok());

    let catalog = catalog.lock().unwrap();
    Json(
        catalog
            .songs
            .iter()
            .filter(|s| contains(&s.title, "titulo"))
            .filter(|s| contains(&s.artist, "artista"))
            .filter(|s| contains(&s.genre, "genero"))
            .filter(|s| year.is_none_or(|y| s.year == y))
            .cloned()
            .collect(),
    )
}

async fn update_song(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
    Json(payload): Json<SongPayload>,
) -> Reply<Json<Song>> {
    let mut catalog = catalog.lock().unwrap();
    let song = catalog
        .songs
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Canción no encontrada"))?;
    song.title = payload.title;
    song.artist = payload.artist;
    song.album = payload.album;
    song.duration = payload.duration;
    song.year = payload.year;
    song.genre = payload.genre;
    Ok(Json(song.clone()))
}

async fn delete_song(State(catalog): State<Shared>, Path(id): Path<i64>) -> Reply<StatusCode> {
    let mut catalog = catalog.lock().unwrap();
    let before = catalog.songs.len();
    catalog.songs.retain(|s| s.id != id);
    if catalog.songs.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Canción no encontrada"));
    }
    catalog.favorites.retain(|f| !f.references_song(id));
    Ok(StatusCode::NO_CONTENT)
}

async fn list_favorites(
    State(catalog): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Favorite>> {
    let mut catalog = catalog.lock().unwrap();
    *catalog.list_hits.entry("favoritos").or_default() += 1;
    let embedded: Vec<Favorite> = catalog
        .favorites
        .iter()
        .map(|f| embed(&catalog, f))
        .collect();
    Json(page(&embedded, &query))
}

async fn create_favorite(
    State(catalog): State<Shared>,
    Json(payload): Json<FavoritePayload>,
) -> Reply<(StatusCode, Json<Favorite>)> {
    let favorite = insert_favorite(&mut catalog.lock().unwrap(), payload)?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn delete_favorite(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
) -> Reply<StatusCode> {
    let mut catalog = catalog.lock().unwrap();
    let before = catalog.favorites.len();
    catalog.favorites.retain(|f| f.id != id);
    if catalog.favorites.len() == before {
        return Err(detail(StatusCode::NOT_FOUND, "Favorito no encontrado"));
    }
    Ok(StatusCode::NO_CONTENT)
}
