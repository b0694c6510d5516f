use tracing::info;

use super::SubmitOutcome;
use crate::models::{Favorite, FavoritePayload, Song, User};
use crate::notify::Toaster;
use crate::resources::{PAGE_LIMIT, PAGE_SKIP};
use crate::transport::ApiClient;

/// Create-only form linking one user to one song.
#[derive(Default)]
pub struct FavoriteForm {
    pub user_id: Option<i64>,
    pub song_id: Option<i64>,
    users: Vec<User>,
    songs: Vec<Song>,
    loading_options: bool,
    submitting: bool,
}

impl FavoriteForm {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &'static str {
        "Marcar Favorito"
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn loading_options(&self) -> bool {
        self.loading_options
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Fill both pickers; users and songs are requested concurrently.
    pub async fn load_options(&mut self, client: &ApiClient, toaster: &Toaster) {
        self.loading_options = true;
        let query = [("skip", PAGE_SKIP), ("limit", PAGE_LIMIT)];

        let result = tokio::try_join!(
            client.get_with_query::<Vec<User>, _>("/usuarios/", &query),
            client.get_with_query::<Vec<Song>, _>("/canciones/", &query),
        );
        match result {
            Ok((users, songs)) => {
                self.users = users;
                self.songs = songs;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorite form options");
                toaster.failure("No se pudieron cargar los datos");
            }
        }

        self.loading_options = false;
    }

    pub async fn submit(&mut self, client: &ApiClient, toaster: &Toaster) -> SubmitOutcome {
        let payload = match (self.user_id, self.song_id) {
            (Some(user_id), Some(song_id)) => FavoritePayload { user_id, song_id },
            _ => {
                toaster.failure("Selecciona un usuario y una canción");
                return SubmitOutcome::Invalid;
            }
        };

        self.submitting = true;
        let result = client.post::<Favorite, _>("/favoritos/", &payload).await;
        self.submitting = false;

        match result {
            Ok(favorite) => {
                info!(id = favorite.id, user_id = payload.user_id, song_id = payload.song_id, "favorite saved");
                toaster.success("Favorito creado", "La canción se marcó como favorita");
                SubmitOutcome::Saved
            }
            Err(e) => {
                toaster.failure(e.user_message("Ocurrió un error al marcar el favorito"));
                SubmitOutcome::Failed
            }
        }
    }
}
