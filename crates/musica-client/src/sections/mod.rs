//! Section controllers: one per dashboard screen.
//!
//! A section composes a resource store, an optional modal form and a
//! delete confirmation gate. Rendering lives in the binary; sections only
//! decide what is shown and which requests are made.

mod favorites;
mod songs;
mod users;

pub use favorites::FavoritesSection;
pub use songs::SongsSection;
pub use users::{FavoritesDialog, UsersSection};

use crate::resources::ResourceState;

/// What the list area shows.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a, T> {
    Loading,
    /// Load failed; shown as an empty state with a retry action.
    Failed(&'a str),
    Empty,
    Items(&'a [T]),
}

impl<'a, T> ListView<'a, T> {
    pub fn of(state: &'a ResourceState<T>) -> Self {
        if state.loading() {
            ListView::Loading
        } else if let Some(message) = state.error() {
            ListView::Failed(message)
        } else if state.items().is_empty() {
            ListView::Empty
        } else {
            ListView::Items(state.items())
        }
    }
}

/// Two-step delete confirmation: stage a target, then confirm or cancel.
#[derive(Debug, Clone)]
pub struct DeleteGate<T> {
    pending: Option<T>,
}

impl<T> DeleteGate<T> {
    pub fn stage(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

impl<T> Default for DeleteGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Songs,
    Users,
    Favorites,
    Documentation,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Songs,
        Section::Users,
        Section::Favorites,
        Section::Documentation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Songs => "Canciones",
            Section::Users => "Usuarios",
            Section::Favorites => "Favoritos",
            Section::Documentation => "Documentación",
        }
    }
}

/// Top-level navigation state.
#[derive(Debug, Default)]
pub struct Dashboard {
    active: Section,
}

impl Dashboard {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch sections; returns whether the active section changed.
    pub fn select(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }
}
