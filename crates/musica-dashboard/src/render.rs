//! Plain-text rendering of dashboard state.

use std::fmt::Write;

use musica_client::docs::{self, DocGroup};
use musica_client::{
    format_date, format_duration, Favorite, FavoritesDialog, FieldErrors, ListView, Notification,
    Song, User,
};

/// Copy shown when a list is empty.
pub struct EmptyCopy {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const NO_USERS: EmptyCopy = EmptyCopy {
    title: "No hay usuarios",
    hint: "Comienza agregando tu primer usuario (new nombre=... correo=...)",
};

pub const NO_SONGS: EmptyCopy = EmptyCopy {
    title: "No hay canciones",
    hint: "Comienza agregando tu primera canción (new titulo=... artista=...)",
};

pub const NO_FAVORITES: EmptyCopy = EmptyCopy {
    title: "No hay favoritos",
    hint: "Comienza marcando canciones como favoritas (new usuario=<id> cancion=<id>)",
};

pub fn toasts(notifications: &[Notification]) -> String {
    let mut out = String::new();
    for n in notifications {
        let tag = if n.is_destructive() { "error" } else { "ok" };
        let _ = writeln!(out, "[{tag}] {}: {}", n.title, n.description);
    }
    out
}

pub fn list<T>(view: ListView<'_, T>, empty: &EmptyCopy, row: impl Fn(&T) -> String) -> String {
    match view {
        ListView::Loading => "Cargando...\n".to_string(),
        ListView::Failed(message) => {
            format!("Error al cargar: {message}\nEscribe `retry` para reintentar.\n")
        }
        ListView::Empty => format!("{}\n{}\n", empty.title, empty.hint),
        ListView::Items(items) => items.iter().map(|item| row(item) + "\n").collect(),
    }
}

pub fn user_row(user: &User) -> String {
    format!(
        "#{:<4} {:<30} {:<32} {}",
        user.id,
        user.name,
        user.email,
        format_date(&user.registered_at)
    )
}

pub fn song_row(song: &Song) -> String {
    format!(
        "#{:<4} {:<30} {:<24} {:<24} {:>6} {} {}",
        song.id,
        song.title,
        song.artist,
        song.album,
        format_duration(i64::from(song.duration)),
        song.year,
        song.genre
    )
}

pub fn favorite_row(favorite: &Favorite) -> String {
    let user = favorite
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| format!("usuario #{}", favorite.user_id));
    let song = favorite
        .song
        .as_ref()
        .map(|s| format!("{} - {}", s.title, s.artist))
        .unwrap_or_else(|| format!("canción #{}", favorite.song_id));
    format!(
        "#{:<4} {:<30} ♥ {:<40} {}",
        favorite.id,
        user,
        song,
        format_date(&favorite.marked_at)
    )
}

pub fn favorites_dialog(dialog: &FavoritesDialog) -> String {
    let mut out = format!("Favoritos de {}\n", dialog.user.name);
    if dialog.loading {
        out.push_str("Cargando...\n");
    } else if dialog.favorites.is_empty() {
        out.push_str("Este usuario no tiene favoritos aún\n");
    } else {
        for favorite in &dialog.favorites {
            out.push_str("  ");
            out.push_str(&favorite_row(favorite));
            out.push('\n');
        }
    }
    out
}

pub fn field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {field}: {message}\n"))
        .collect()
}

pub fn confirm_delete(title: &str, cascades: Option<&str>) -> String {
    let mut out = format!("{title}\nEsta acción no se puede deshacer.");
    if let Some(what) = cascades {
        let _ = write!(
            out,
            " También se eliminarán todos los favoritos asociados a {what}."
        );
    }
    out.push_str("\n¿Continuar? (yes/no)\n");
    out
}

pub fn documentation() -> String {
    let info = &docs::OVERVIEW;
    let mut out = String::new();
    let _ = writeln!(out, "Documentación {}", info.name);
    let _ = writeln!(out, "{}", info.description);
    let _ = writeln!(
        out,
        "Base URL: {}  Versión: {}  Tecnologías: {}",
        info.base_url,
        info.version,
        info.technologies.join(", ")
    );
    let _ = writeln!(out, "Swagger: {}  ReDoc: {}", info.swagger_url, info.redoc_url);

    for tab in DocGroup::ALL {
        let _ = writeln!(out, "\n== {} ==", tab.label());
        for endpoint in docs::group(tab) {
            let _ = writeln!(
                out,
                "{:<6} {:<40} {} ({})",
                endpoint.method.as_str(),
                endpoint.path,
                endpoint.description,
                endpoint.status
            );
            for (name, about) in endpoint.query {
                let _ = writeln!(out, "         ?{name}: {about}");
            }
        }
    }
    out
}
