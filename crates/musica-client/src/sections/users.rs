use super::{DeleteGate, ListView};
use crate::forms::{SubmitOutcome, UserForm};
use crate::models::{Favorite, User};
use crate::notify::Toaster;
use crate::resources::UsersStore;
use crate::transport::ApiClient;

/// Transient dialog listing one user's favorites.
#[derive(Debug, Clone)]
pub struct FavoritesDialog {
    pub user: User,
    pub loading: bool,
    pub favorites: Vec<Favorite>,
}

pub struct UsersSection {
    store: UsersStore,
    form: Option<UserForm>,
    deleting: DeleteGate<User>,
    favorites: Option<FavoritesDialog>,
}

impl UsersSection {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            store: UsersStore::new(client, toaster),
            form: None,
            deleting: DeleteGate::default(),
            favorites: None,
        }
    }

    pub fn store(&self) -> &UsersStore {
        &self.store
    }

    pub fn view(&self) -> ListView<'_, User> {
        ListView::of(self.store.state())
    }

    pub async fn mount(&mut self) {
        self.store.fetch().await;
    }

    pub async fn retry(&mut self) {
        self.store.fetch().await;
    }

    /// Close the form and the favorites dialog and disarm a staged delete.
    pub fn leave(&mut self) {
        self.form = None;
        self.favorites = None;
        self.deleting.cancel();
    }

    // ── Form ─────────────────────────────────────────────────────────

    pub fn form(&self) -> Option<&UserForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) -> &mut UserForm {
        self.form.insert(UserForm::create())
    }

    /// Open the edit form prefilled from the cached user.
    pub fn open_edit(&mut self, id: i64) -> Option<&mut UserForm> {
        let user = self.store.find(id)?;
        Some(self.form.insert(UserForm::edit(user)))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form; on success close it and refetch once.
    pub async fn submit_form(&mut self) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(self.store.client(), self.store.toaster()).await;
        if outcome.is_saved() {
            self.form = None;
            self.store.fetch().await;
        }
        Some(outcome)
    }

    // ── Delete ───────────────────────────────────────────────────────

    pub fn pending_delete(&self) -> Option<&User> {
        self.deleting.pending()
    }

    pub fn request_delete(&mut self, id: i64) -> bool {
        match self.store.find(id) {
            Some(user) => {
                self.deleting.stage(user.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.deleting.cancel();
    }

    /// Delete the staged user. Cascades server-side to their favorites.
    pub async fn confirm_delete(&mut self) -> bool {
        match self.deleting.take() {
            Some(user) => self.store.delete(user.id).await,
            None => false,
        }
    }

    // ── Favorites dialog ─────────────────────────────────────────────

    pub fn favorites_dialog(&self) -> Option<&FavoritesDialog> {
        self.favorites.as_ref()
    }

    /// Open the favorites dialog for a cached user. Failures show an empty
    /// list (the store already toasted).
    pub async fn view_favorites(&mut self, id: i64) -> Option<&FavoritesDialog> {
        let user = self.store.find(id)?.clone();
        self.favorites = Some(FavoritesDialog {
            user,
            loading: true,
            favorites: Vec::new(),
        });

        let favorites = self
            .store
            .favorites(id)
            .await
            .map(|f| f.favorites)
            .unwrap_or_default();

        let dialog = self.favorites.as_mut()?;
        dialog.favorites = favorites;
        dialog.loading = false;
        Some(&*dialog)
    }

    pub fn close_favorites(&mut self) {
        self.favorites = None;
    }
}
