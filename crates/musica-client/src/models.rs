//! Records mirrored from the music API.
//!
//! Field names on the wire are the backend's (Spanish); the Rust names are
//! English. Every record is owned by the server: ids and timestamps are
//! assigned there and only ever read here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "fecha_registro", with = "timestamp")]
    pub registered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "artista")]
    pub artist: String,
    pub album: String,
    /// Length in seconds.
    #[serde(rename = "duracion")]
    pub duration: u32,
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "fecha_creacion", with = "timestamp")]
    pub created_at: NaiveDateTime,
}

/// A user ↔ song link. The list endpoint embeds both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(rename = "id_cancion")]
    pub song_id: i64,
    #[serde(rename = "fecha_marcado", with = "timestamp")]
    pub marked_at: NaiveDateTime,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(rename = "cancion", default, skip_serializing_if = "Option::is_none")]
    pub song: Option<Song>,
}

impl Favorite {
    pub fn references_user(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    pub fn references_song(&self, song_id: i64) -> bool {
        self.song_id == song_id
    }
}

/// Body of `GET /usuarios/{id}/favoritos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserFavorites {
    #[serde(rename = "favoritos", default)]
    pub favorites: Vec<Favorite>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPayload {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "artista")]
    pub artist: String,
    pub album: String,
    #[serde(rename = "duracion")]
    pub duration: u32,
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(rename = "genero")]
    pub genre: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePayload {
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
    #[serde(rename = "id_cancion")]
    pub song_id: i64,
}

/// Body of `GET /api`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Backend timestamps: naive ISO-8601, sometimes with a fraction or an
/// offset. Offsets are dropped after conversion to UTC.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
    }
}
