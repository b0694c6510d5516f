use tracing::info;

use super::{FormMode, SubmitOutcome};
use crate::models::User;
use crate::notify::Toaster;
use crate::transport::ApiClient;
use crate::validation::{is_valid_email, validate_user, FieldErrors, UserDraft};

pub struct UserForm {
    mode: FormMode,
    pub draft: UserDraft,
    errors: FieldErrors,
    submitting: bool,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: UserDraft::default(),
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            draft: UserDraft {
                name: user.name.clone(),
                email: user.email.clone(),
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
            "Editar Usuario"
        } else {
            "Nuevo Usuario"
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Live email indicator: `None` while empty.
    pub fn email_status(&self) -> Option<bool> {
        if self.draft.email.is_empty() {
            None
        } else {
            Some(is_valid_email(&self.draft.email))
        }
    }

    pub async fn submit(&mut self, client: &ApiClient, toaster: &Toaster) -> SubmitOutcome {
        let payload = match validate_user(&self.draft) {
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
                .put::<User, _>(&format!("/usuarios/{id}"), &payload)
                .await
                .map(|user| (user, "Usuario actualizado", "El usuario se actualizó correctamente")),
            FormMode::Create => client
                .post::<User, _>("/usuarios/", &payload)
                .await
                .map(|user| (user, "Usuario creado", "El usuario se creó correctamente")),
        };
        self.submitting = false;

        match result {
            Ok((user, title, description)) => {
                info!(id = user.id, "user saved");
                toaster.success(title, description);
                SubmitOutcome::Saved
            }
            Err(e) => {
                toaster.failure(e.user_message("Ocurrió un error al guardar el usuario"));
                SubmitOutcome::Failed
            }
        }
    }
}
