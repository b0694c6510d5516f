//! Per-collection state stores: the list cache behind each dashboard section.
//!
//! Every store follows the same contract: fetch on mount, mutate through the
//! API, then refetch. The local list is never patched in place, so it only
//! ever shows what the server last returned (including cascade deletes).

mod favorites;
mod songs;
mod users;

pub use favorites::Favorites;
pub use songs::{SearchCriteria, SearchField, Songs};
pub use users::Users;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::notify::Toaster;
use crate::transport::ApiClient;

/// Fixed page window used for every list request.
pub const PAGE_SKIP: u32 = 0;
pub const PAGE_LIMIT: u32 = 100;

pub type UsersStore = ResourceStore<Users>;
pub type SongsStore = ResourceStore<Songs>;
pub type FavoritesStore = ResourceStore<Favorites>;

/// Binds a store to one backend collection.
pub trait Resource {
    type Item: DeserializeOwned + Clone + Send;

    /// Collection path with trailing slash, e.g. `/usuarios/`.
    const COLLECTION: &'static str;
    const LOAD_FAILED: &'static str;
    const DELETED_TITLE: &'static str;
    const DELETED_DESCRIPTION: &'static str;
    const DELETE_FAILED: &'static str;

    fn id(item: &Self::Item) -> i64;

    fn item_path(id: i64) -> String {
        format!("{}{id}", Self::COLLECTION)
    }
}

#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> ResourceState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

pub struct ResourceStore<R: Resource> {
    client: ApiClient,
    toaster: Toaster,
    state: ResourceState<R::Item>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(client: ApiClient, toaster: Toaster) -> Self {
        Self {
            client,
            toaster,
            state: ResourceState::default(),
        }
    }

    pub fn state(&self) -> &ResourceState<R::Item> {
        &self.state
    }

    pub fn items(&self) -> &[R::Item] {
        self.state.items()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Cached item with the given id.
    pub fn find(&self, id: i64) -> Option<&R::Item> {
        self.state.items.iter().find(|item| R::id(item) == id)
    }

    /// Reload the whole collection (`skip=0`, `limit=100`).
    ///
    /// On failure the previous items stay and `error` is set.
    pub async fn fetch(&mut self) {
        let query = [("skip", PAGE_SKIP), ("limit", PAGE_LIMIT)];
        self.load(R::COLLECTION, &query, R::LOAD_FAILED).await;
    }

    /// Delete one item, then refetch. Returns whether the server accepted.
    pub async fn delete(&mut self, id: i64) -> bool {
        match self.client.delete(&R::item_path(id)).await {
            Ok(()) => {
                debug!(collection = R::COLLECTION, id, "deleted");
                self.toaster
                    .success(R::DELETED_TITLE, R::DELETED_DESCRIPTION);
                self.fetch().await;
                true
            }
            Err(e) => {
                self.toaster.failure(e.user_message(R::DELETE_FAILED));
                false
            }
        }
    }

    /// Shared body of `fetch` and filtered loads.
    async fn load<Q>(&mut self, path: &str, query: &Q, fallback: &str)
    where
        Q: serde::Serialize + ?Sized,
    {
        self.state.loading = true;
        self.state.error = None;

        match self
            .client
            .get_with_query::<Vec<R::Item>, Q>(path, query)
            .await
        {
            Ok(items) => {
                debug!(path, count = items.len(), "loaded");
                self.state.items = items;
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "load failed");
                self.state.error = Some(e.user_message(fallback));
            }
        }

        self.state.loading = false;
    }
}
