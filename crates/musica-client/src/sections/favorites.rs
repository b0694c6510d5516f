use super::{DeleteGate, ListView};
use crate::forms::{FavoriteForm, SubmitOutcome};
use crate::models::Favorite;
use crate::notify::Toaster;
use crate::resources::FavoritesStore;
use crate::transport::ApiClient;

/// Favorites are create-or-delete only; there is no edit form.
pub struct FavoritesSection {
    store: FavoritesStore,
    form: Option<FavoriteForm>,
    deleting: DeleteGate<Favorite>,
}

impl FavoritesSection {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            store: FavoritesStore::new(client, toaster),
            form: None,
            deleting: DeleteGate::default(),
        }
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn view(&self) -> ListView<'_, Favorite> {
        ListView::of(self.store.state())
    }

    pub async fn mount(&mut self) {
        self.store.fetch().await;
    }

    pub async fn retry(&mut self) {
        self.store.fetch().await;
    }

    pub fn leave(&mut self) {
        self.form = None;
        self.deleting.cancel();
    }

    pub fn form(&self) -> Option<&FavoriteForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FavoriteForm> {
        self.form.as_mut()
    }

    /// Open the form and fill its user and song pickers.
    pub async fn open_create(&mut self) -> &mut FavoriteForm {
        let form = self.form.insert(FavoriteForm::create());
        form.load_options(self.store.client(), self.store.toaster())
            .await;
        form
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit_form(&mut self) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(self.store.client(), self.store.toaster()).await;
        if outcome.is_saved() {
            self.form = None;
            self.store.fetch().await;
        }
        Some(outcome)
    }

    pub fn pending_delete(&self) -> Option<&Favorite> {
        self.deleting.pending()
    }

    pub fn request_delete(&mut self, id: i64) -> bool {
        match self.store.find(id) {
            Some(favorite) => {
                self.deleting.stage(favorite.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.deleting.cancel();
    }

    pub async fn confirm_delete(&mut self) -> bool {
        match self.deleting.take() {
            Some(favorite) => self.store.delete(favorite.id).await,
            None => false,
        }
    }
}
