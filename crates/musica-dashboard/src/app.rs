//! Dashboard state: the section controllers plus whatever the next render
//! should print.

use musica_client::{
    ApiClient, ClientConfig, Dashboard, FavoritesSection, SearchCriteria, Section, SongDraft,
    SongsSection, SubmitOutcome, Toaster, UserDraft, UsersSection,
};
use tracing::info;

use crate::render;
use crate::shell::{Assignment, Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    dashboard: Dashboard,
    users: UsersSection,
    songs: SongsSection,
    favorites: FavoritesSection,
    toaster: Toaster,
    notes: Vec<String>,
}

impl App {
    pub fn new(client: ApiClient, config: &ClientConfig) -> Self {
        let toaster = Toaster::new(config.toast_capacity);
        Self {
            dashboard: Dashboard::default(),
            users: UsersSection::new(client.clone(), toaster.clone()),
            songs: SongsSection::new(client.clone(), toaster.clone(), config.search_debounce),
            favorites: FavoritesSection::new(client, toaster.clone()),
            toaster,
            notes: Vec::new(),
        }
    }

    pub fn active(&self) -> Section {
        self.dashboard.active()
    }

    /// Mount the initial section.
    pub async fn start(&mut self) {
        self.mount(self.dashboard.active()).await;
    }

    pub fn note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
    }

    /// Settled song filters; pending forever while nobody is typing.
    pub async fn next_search(&mut self) -> SearchCriteria {
        self.songs.next_search().await
    }

    pub async fn apply_search(&mut self, criteria: &SearchCriteria) {
        self.songs.apply_search(criteria).await;
    }

    async fn mount(&mut self, section: Section) {
        match section {
            Section::Songs => self.songs.mount().await,
            Section::Users => self.users.mount().await,
            Section::Favorites => self.favorites.mount().await,
            Section::Documentation => {}
        }
    }

    fn leave(&mut self, section: Section) {
        match section {
            Section::Songs => self.songs.leave(),
            Section::Users => self.users.leave(),
            Section::Favorites => self.favorites.leave(),
            Section::Documentation => {}
        }
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Switch(section) => {
                let previous = self.active();
                if self.dashboard.select(section) {
                    info!(section = section.label(), "section selected");
                    self.leave(previous);
                    self.mount(section).await;
                }
            }
            Command::Refresh => match self.active() {
                Section::Songs => self.songs.retry().await,
                Section::Users => self.users.retry().await,
                Section::Favorites => self.favorites.retry().await,
                Section::Documentation => {}
            },
            Command::Filter(field, value) => {
                if self.active() == Section::Songs {
                    self.songs.set_filter(field, value);
                } else {
                    self.note("Los filtros solo aplican a canciones");
                }
            }
            Command::ClearFilters => self.songs.clear_filters().await,
            Command::New(fields) => match self.active() {
                Section::Users => self.save_user(None, &fields).await,
                Section::Songs => self.save_song(None, &fields).await,
                Section::Favorites => self.save_favorite(&fields).await,
                Section::Documentation => self.note("Selecciona una sección de datos"),
            },
            Command::Edit(id, fields) => match self.active() {
                Section::Users => self.save_user(Some(id), &fields).await,
                Section::Songs => self.save_song(Some(id), &fields).await,
                Section::Favorites => self.note("Los favoritos no se pueden editar"),
                Section::Documentation => self.note("Selecciona una sección de datos"),
            },
            Command::Delete(id) => self.stage_delete(id),
            Command::Confirm => {
                let staged = match self.active() {
                    Section::Users => self.users.pending_delete().is_some(),
                    Section::Songs => self.songs.pending_delete().is_some(),
                    Section::Favorites => self.favorites.pending_delete().is_some(),
                    Section::Documentation => false,
                };
                if !staged {
                    self.note("No hay nada pendiente de confirmar");
                    return Flow::Continue;
                }
                match self.active() {
                    Section::Users => self.users.confirm_delete().await,
                    Section::Songs => self.songs.confirm_delete().await,
                    Section::Favorites => self.favorites.confirm_delete().await,
                    Section::Documentation => false,
                };
            }
            Command::Cancel => {
                self.users.cancel_delete();
                self.songs.cancel_delete();
                self.favorites.cancel_delete();
            }
            Command::Favorites(user_id) => self.show_favorites(user_id).await,
            Command::Help => self.note(HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn stage_delete(&mut self, id: i64) {
        let prompt = match self.active() {
            Section::Users if self.users.request_delete(id) => {
                render::confirm_delete("¿Eliminar usuario?", Some("este usuario"))
            }
            Section::Songs if self.songs.request_delete(id) => {
                render::confirm_delete("¿Eliminar canción?", Some("esta canción"))
            }
            Section::Favorites if self.favorites.request_delete(id) => {
                render::confirm_delete("¿Eliminar favorito?", None)
            }
            Section::Documentation => "Selecciona una sección de datos".to_string(),
            _ => format!("No existe el registro #{id} en la lista"),
        };
        self.notes.push(prompt);
    }

    async fn save_user(&mut self, id: Option<i64>, fields: &[Assignment]) {
        let form = match id {
            None => self.users.open_create(),
            Some(id) => match self.users.open_edit(id) {
                Some(form) => form,
                None => {
                    self.notes.push(format!("No existe el usuario #{id}"));
                    return;
                }
            },
        };
        if let Err(message) = fill_user(&mut form.draft, fields) {
            self.notes.push(message);
            self.users.close_form();
            return;
        }

        if self.users.submit_form().await == Some(SubmitOutcome::Invalid) {
            if let Some(form) = self.users.form() {
                self.notes
                    .push(format!("Revisa los campos:\n{}", render::field_errors(form.errors())));
            }
        }
        self.users.close_form();
    }

    async fn save_song(&mut self, id: Option<i64>, fields: &[Assignment]) {
        let form = match id {
            None => self.songs.open_create(),
            Some(id) => match self.songs.open_edit(id) {
                Some(form) => form,
                None => {
                    self.notes.push(format!("No existe la canción #{id}"));
                    return;
                }
            },
        };
        if let Err(message) = fill_song(&mut form.draft, fields) {
            self.notes.push(message);
            self.songs.close_form();
            return;
        }

        if self.songs.submit_form().await == Some(SubmitOutcome::Invalid) {
            if let Some(form) = self.songs.form() {
                self.notes
                    .push(format!("Revisa los campos:\n{}", render::field_errors(form.errors())));
            }
        }
        self.songs.close_form();
    }

    async fn save_favorite(&mut self, fields: &[Assignment]) {
        let form = self.favorites.open_create().await;
        for Assignment { field, value } in fields {
            let slot = match field.as_str() {
                "usuario" | "id_usuario" => &mut form.user_id,
                "cancion" | "canción" | "id_cancion" => &mut form.song_id,
                other => {
                    self.notes.push(format!("Campo desconocido: {other}"));
                    self.favorites.close_form();
                    return;
                }
            };
            match value.parse() {
                Ok(id) => *slot = Some(id),
                Err(_) => {
                    self.notes.push(format!("ID no válido: {value}"));
                    self.favorites.close_form();
                    return;
                }
            }
        }
        self.favorites.submit_form().await;
        self.favorites.close_form();
    }

    async fn show_favorites(&mut self, user_id: i64) {
        if self.users.store().items().is_empty() {
            self.users.mount().await;
        }
        let text = match self.users.view_favorites(user_id).await {
            Some(dialog) => render::favorites_dialog(dialog),
            None => format!("No existe el usuario #{user_id}"),
        };
        self.users.close_favorites();
        self.notes.push(text);
    }

    /// Everything that changed since the last call: toasts, notes, then the
    /// active section.
    pub fn render(&mut self) -> String {
        let mut out = render::toasts(&self.toaster.drain());
        for note in self.notes.drain(..) {
            out.push_str(&note);
            if !note.ends_with('\n') {
                out.push('\n');
            }
        }

        let active = self.active();
        out.push_str(&format!("\n── {} ──\n", active.label()));
        match active {
            Section::Songs => {
                let filters = self.songs.filters();
                if !filters.is_empty() {
                    let applied: Vec<String> = filters
                        .to_query()
                        .into_iter()
                        .map(|(k, v)| format!("{k}={v}"))
                        .collect();
                    out.push_str(&format!("Filtros: {}\n", applied.join(" ")));
                }
                out.push_str(&render::list(self.songs.view(), &render::NO_SONGS, render::song_row));
            }
            Section::Users => {
                out.push_str(&render::list(self.users.view(), &render::NO_USERS, render::user_row));
            }
            Section::Favorites => out.push_str(&render::list(
                self.favorites.view(),
                &render::NO_FAVORITES,
                render::favorite_row,
            )),
            Section::Documentation => out.push_str(&render::documentation()),
        }
        out
    }
}

fn fill_user(draft: &mut UserDraft, fields: &[Assignment]) -> Result<(), String> {
    for Assignment { field, value } in fields {
        let slot = match field.as_str() {
            "nombre" => &mut draft.name,
            "correo" => &mut draft.email,
            other => return Err(format!("Campo desconocido: {other} (nombre, correo)")),
        };
        slot.clone_from(value);
    }
    Ok(())
}

fn fill_song(draft: &mut SongDraft, fields: &[Assignment]) -> Result<(), String> {
    for Assignment { field, value } in fields {
        let slot = match field.as_str() {
            "titulo" => &mut draft.title,
            "artista" => &mut draft.artist,
            "album" => &mut draft.album,
            "duracion" => &mut draft.duration,
            "año" | "anio" => &mut draft.year,
            "genero" => &mut draft.genre,
            other => {
                return Err(format!(
                    "Campo desconocido: {other} (titulo, artista, album, duracion, año, genero)"
                ))
            }
        };
        slot.clone_from(value);
    }
    Ok(())
}
