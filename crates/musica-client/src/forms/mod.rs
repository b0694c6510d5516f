//! Create/edit forms: draft input, local validation, submit, toast.
//!
//! A form never refreshes any list itself; a `Saved` outcome tells the owning
//! section to close the form and refetch.

mod favorite;
mod song;
mod user;

pub use favorite::FavoriteForm;
pub use song::SongForm;
pub use user::UserForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the create/update.
    Saved,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The server rejected or failed; the form stays open.
    Failed,
}

impl SubmitOutcome {
    pub fn is_saved(self) -> bool {
        self == SubmitOutcome::Saved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn editing_id(self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}
