//! Client-side checks mirroring the backend's field constraints.
//!
//! These only give early feedback; the server remains authoritative and
//! re-validates everything. Lengths are counted in characters, not bytes.

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{SongPayload, UserPayload};

pub const NAME_LEN: (usize, usize) = (2, 100);
pub const TITLE_LEN: (usize, usize) = (1, 200);
pub const ARTIST_LEN: (usize, usize) = (1, 100);
pub const ALBUM_LEN: (usize, usize) = (1, 200);
pub const GENRE_LEN: (usize, usize) = (1, 50);
pub const DURATION_RANGE: (u32, u32) = (1, 3600);
pub const MIN_YEAR: i32 = 1900;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Field name → message, in the order the fields were checked.
///
/// Inserting a field twice replaces its message in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Raw user input of the user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

/// Raw user input of the song form; numbers are still text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub year: String,
    pub genre: String,
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn len_within(value: &str, (min, max): (usize, usize)) -> bool {
    let n = value.chars().count();
    n >= min && n <= max
}

pub fn validate_user(draft: &UserDraft) -> Result<UserPayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    if !len_within(&draft.name, NAME_LEN) {
        errors.insert("nombre", "El nombre debe tener entre 2 y 100 caracteres");
    }

    if draft.email.is_empty() {
        errors.insert("correo", "El correo es requerido");
    } else if !is_valid_email(&draft.email) {
        errors.insert("correo", "El correo no es válido");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(UserPayload {
        name: draft.name.clone(),
        email: draft.email.clone(),
    })
}

pub fn validate_song(draft: &SongDraft, current_year: i32) -> Result<SongPayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    if !len_within(&draft.title, TITLE_LEN) {
        errors.insert("titulo", "El título debe tener entre 1 y 200 caracteres");
    }
    if !len_within(&draft.artist, ARTIST_LEN) {
        errors.insert("artista", "El artista debe tener entre 1 y 100 caracteres");
    }
    if !len_within(&draft.album, ALBUM_LEN) {
        errors.insert("album", "El álbum debe tener entre 1 y 200 caracteres");
    }

    let duration = draft
        .duration
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|d| (DURATION_RANGE.0..=DURATION_RANGE.1).contains(d));
    if duration.is_none() {
        errors.insert("duracion", "La duración debe estar entre 1 y 3600 segundos");
    }

    let year = draft
        .year
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|y| (MIN_YEAR..=current_year).contains(y));
    if year.is_none() {
        errors.insert(
            "año",
            format!("El año debe estar entre {MIN_YEAR} y {current_year}"),
        );
    }

    if !len_within(&draft.genre, GENRE_LEN) {
        errors.insert("genero", "El género debe tener entre 1 y 50 caracteres");
    }

    match (duration, year) {
        (Some(duration), Some(year)) if errors.is_empty() => Ok(SongPayload {
            title: draft.title.clone(),
            artist: draft.artist.clone(),
            album: draft.album.clone(),
            duration,
            year,
            genre: draft.genre.clone(),
        }),
        _ => Err(errors),
    }
}
