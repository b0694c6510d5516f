use std::time::Duration;

use tracing::debug;

use super::{DeleteGate, ListView};
use crate::debounce::Debouncer;
use crate::forms::{SongForm, SubmitOutcome};
use crate::models::Song;
use crate::notify::Toaster;
use crate::resources::{SearchCriteria, SearchField, SongsStore};
use crate::transport::ApiClient;

pub struct SongsSection {
    store: SongsStore,
    filters: SearchCriteria,
    search: Debouncer<SearchCriteria>,
    form: Option<SongForm>,
    deleting: DeleteGate<Song>,
}

impl SongsSection {
    pub fn new(client: ApiClient, toaster: Toaster, search_debounce: Duration) -> Self {
        Self {
            store: SongsStore::new(client, toaster),
            filters: SearchCriteria::default(),
            search: Debouncer::new(search_debounce),
            form: None,
            deleting: DeleteGate::default(),
        }
    }

    pub fn store(&self) -> &SongsStore {
        &self.store
    }

    pub fn view(&self) -> ListView<'_, Song> {
        ListView::of(self.store.state())
    }

    /// Fresh mount: filters left over from an earlier visit are dropped so
    /// the full list and the filter header agree.
    pub async fn mount(&mut self) {
        self.reset_filters();
        self.store.fetch().await;
    }

    /// Drop everything tied to this visit: filters, a pending search, the
    /// open form and a staged delete.
    pub fn leave(&mut self) {
        self.reset_filters();
        self.form = None;
        self.deleting.cancel();
    }

    /// Reload honoring the current filters.
    pub async fn retry(&mut self) {
        let criteria = self.filters.clone();
        self.apply_search(&criteria).await;
    }

    // ── Filters ──────────────────────────────────────────────────────

    pub fn filters(&self) -> &SearchCriteria {
        &self.filters
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Update one filter and (re)start the debounce timer.
    pub fn set_filter(&mut self, field: SearchField, value: impl Into<String>) {
        self.filters.set(field, value);
        self.search.push(self.filters.clone());
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Resolves with the criteria once typing has settled. Cancel-safe.
    pub async fn next_search(&mut self) -> SearchCriteria {
        self.search.ready().await
    }

    pub async fn apply_search(&mut self, criteria: &SearchCriteria) {
        if criteria.is_empty() {
            self.store.fetch().await;
        } else {
            debug!(?criteria, "searching songs");
            self.store.search(criteria).await;
        }
    }

    pub async fn clear_filters(&mut self) {
        self.reset_filters();
        self.store.fetch().await;
    }

    fn reset_filters(&mut self) {
        self.filters = SearchCriteria::default();
        self.search.cancel();
    }

    // ── Form ─────────────────────────────────────────────────────────

    pub fn form(&self) -> Option<&SongForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut SongForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) -> &mut SongForm {
        self.form.insert(SongForm::create())
    }

    pub fn open_edit(&mut self, id: i64) -> Option<&mut SongForm> {
        let song = self.store.find(id)?;
        Some(self.form.insert(SongForm::edit(song)))
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

    pub fn pending_delete(&self) -> Option<&Song> {
        self.deleting.pending()
    }

    pub fn request_delete(&mut self, id: i64) -> bool {
        match self.store.find(id) {
            Some(song) => {
                self.deleting.stage(song.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.deleting.cancel();
    }

    /// Delete the staged song. Favorites pointing at it go with it.
    pub async fn confirm_delete(&mut self) -> bool {
        match self.deleting.take() {
            Some(song) => self.store.delete(song.id).await,
            None => false,
        }
    }
}
