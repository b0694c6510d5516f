//! musica-client: data layer for the music catalog dashboard.
//!
//! Talks to the catalog REST API (users, songs, favorites), keeps one list
//! cache per collection, validates form input before sending it, and queues
//! toast notifications for every mutation. Each dashboard screen is a
//! section controller built from those pieces.

pub mod config;
pub mod debounce;
pub mod docs;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod notify;
pub mod resources;
pub mod sections;
pub mod transport;
pub mod validation;

pub use config::ClientConfig;
pub use debounce::Debouncer;
pub use error::ClientError;
pub use format::{format_date, format_duration};
pub use forms::{FavoriteForm, FormMode, SongForm, SubmitOutcome, UserForm};
pub use models::{
    ApiInfo, Favorite, FavoritePayload, HealthStatus, Song, SongPayload, User, UserFavorites,
    UserPayload,
};
pub use notify::{Notification, Toaster, Variant};
pub use resources::{
    FavoritesStore, Resource, ResourceState, ResourceStore, SearchCriteria, SearchField,
    SongsStore, UsersStore,
};
pub use sections::{
    Dashboard, DeleteGate, FavoritesDialog, FavoritesSection, ListView, Section, SongsSection,
    UsersSection,
};
pub use transport::ApiClient;
pub use validation::{FieldErrors, SongDraft, UserDraft};
