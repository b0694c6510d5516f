use tracing::info;

use super::{FormMode, SubmitOutcome};
use crate::models::Song;
use crate::notify::Toaster;
use crate::transport::ApiClient;
use crate::validation::{current_year, validate_song, FieldErrors, SongDraft};

pub struct SongForm {
    mode: FormMode,
    pub draft: SongDraft,
    errors: FieldErrors,
    submitting: bool,
}

impl SongForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: SongDraft::default(),
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    pub fn edit(song: &Song) -> Self {
        Self {
            mode: FormMode::Edit(song.id),
            draft: SongDraft {
                title: song.title.clone(),
                artist: song.artist.clone(),
                album: song.album.clone(),
                duration: song.duration.to_string(),
                year: song.year.to_string(),
                genre: song.genre.clone(),
            },
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar Canción"
        } else {
            "Nueva Canción"
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(&mut self, client: &ApiClient, toaster: &Toaster) -> SubmitOutcome {
        self.submit_at(client, toaster, current_year()).await
    }

    /// `submit` with an explicit upper bound for the year field.
    pub async fn submit_at(
        &mut self,
        client: &ApiClient,
        toaster: &Toaster,
        current_year: i32,
    ) -> SubmitOutcome {
        let payload = match validate_song(&self.draft, current_year) {
            Ok(payload) => {
                self.errors.clear();
                payload
            }
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        self.submitting = true;
        let result = match self.mode {
            FormMode::Edit(id) => client
                .put::<Song, _>(&format!("/canciones/{id}"), &payload)
                .await
                .map(|song| (song, "Canción actualizada", "La canción se actualizó correctamente")),
            FormMode::Create => client
                .post::<Song, _>("/canciones/", &payload)
                .await
                .map(|song| (song, "Canción creada", "La canción se creó correctamente")),
        };
        self.submitting = false;

        match result {
            Ok((song, title, description)) => {
                info!(id = song.id, title = %song.title, "song saved");
                toaster.success(title, description);
                SubmitOutcome::Saved
            }
            Err(e) => {
                toaster.failure(e.user_message("Ocurrió un error al guardar la canción"));
                SubmitOutcome::Failed
            }
        }
    }
}
