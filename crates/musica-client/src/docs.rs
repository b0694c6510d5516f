//! Static reference for the music API, shown in the documentation section.
//!
//! Hand-authored; nothing here talks to the server.

use std::fmt;

pub struct ApiOverview {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub base_url: &'static str,
    pub swagger_url: &'static str,
    pub redoc_url: &'static str,
}

pub const OVERVIEW: ApiOverview = ApiOverview {
    name: "API de Música",
    version: "1.0.0",
    description: "Una API RESTful para gestionar usuarios, canciones y favoritos",
    technologies: &["FastAPI", "SQLModel", "Pydantic", "SQLite"],
    base_url: "http://127.0.0.1:8000",
    swagger_url: "http://127.0.0.1:8000/docs",
    redoc_url: "http://127.0.0.1:8000/redoc",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documentation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocGroup {
    Overview,
    Users,
    Songs,
    Favorites,
}

impl DocGroup {
    pub const ALL: [DocGroup; 4] = [
        DocGroup::Overview,
        DocGroup::Users,
        DocGroup::Songs,
        DocGroup::Favorites,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DocGroup::Overview => "General",
            DocGroup::Users => "Usuarios",
            DocGroup::Songs => "Canciones",
            DocGroup::Favorites => "Favoritos",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EndpointDoc {
    pub method: Method,
    /// Path relative to the server origin, e.g. `/api/usuarios/{usuario_id}`.
    pub path: &'static str,
    pub description: &'static str,
    /// `(name, explanation)` pairs.
    pub query: &'static [(&'static str, &'static str)],
    /// Example bodies as pretty JSON.
    pub request: Option<&'static str>,
    pub response: Option<&'static str>,
    pub status: u16,
}

impl EndpointDoc {
    /// Tab this endpoint is listed under, from its first segment after `/api`.
    pub fn group(&self) -> DocGroup {
        let mut segments = self.path.trim_start_matches('/').split('/');
        match (segments.next(), segments.next()) {
            (Some("api"), Some("usuarios")) => DocGroup::Users,
            (Some("api"), Some("canciones")) => DocGroup::Songs,
            (Some("api"), Some("favoritos")) => DocGroup::Favorites,
            _ => DocGroup::Overview,
        }
    }
}

const USER_EXAMPLE: &str = r#"{
  "id": 1,
  "nombre": "Juan Pérez",
  "correo": "juan@email.com",
  "fecha_registro": "2024-11-13T10:30:00"
}"#;

const SONG_EXAMPLE: &str = r#"{
  "id": 1,
  "titulo": "Bohemian Rhapsody",
  "artista": "Queen",
  "album": "A Night at the Opera",
  "duracion": 354,
  "año": 1975,
  "genero": "Rock",
  "fecha_creacion": "2024-11-13T10:30:00"
}"#;

const SONG_REQUEST: &str = r#"{
  "titulo": "Bohemian Rhapsody (1-200 caracteres)",
  "artista": "Queen (1-100 caracteres)",
  "album": "A Night at the Opera (1-200 caracteres)",
  "duracion": "354 (1-3600 segundos)",
  "año": "1975 (desde 1900 hasta el año actual)",
  "genero": "Rock (1-50 caracteres)"
}"#;

const FAVORITE_EXAMPLE: &str = r#"{
  "id": 1,
  "id_usuario": 1,
  "id_cancion": 1,
  "fecha_marcado": "2024-11-13T10:30:00"
}"#;

const PAGINATION: &[(&str, &str)] = &[
    ("skip", "int (default: 0) - registros a saltar"),
    ("limit", "int (default: 100, max: 100) - máximo registros"),
];

pub const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: Method::Get,
        path: "/api",
        description: "Información básica de la API",
        query: &[],
        request: None,
        response: Some(
            r#"{
  "message": "Bienvenido a API de Música",
  "version": "1.0.0",
  "description": "Una API RESTful para gestionar usuarios, canciones y favoritos"
}"#,
        ),
        status: 200,
    },
    EndpointDoc {
        method: Method::Get,
        path: "/health",
        description: "Health check de la API",
        query: &[],
        request: None,
        response: Some(
            r#"{
  "status": "healthy",
  "database": "connected",
  "environment": "development"
}"#,
        ),
        status: 200,
    },
    // ── Usuarios ─────────────────────────────────────────────────────
    EndpointDoc {
        method: Method::Get,
        path: "/api/usuarios/",
        description: "Listar todos los usuarios con paginación",
        query: PAGINATION,
        request: None,
        response: Some(USER_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Post,
        path: "/api/usuarios/",
        description: "Crear un nuevo usuario",
        query: &[],
        request: Some(
            r#"{
  "nombre": "Juan Pérez (2-100 caracteres)",
  "correo": "juan@email.com (único)"
}"#,
        ),
        response: Some(USER_EXAMPLE),
        status: 201,
    },
    EndpointDoc {
        method: Method::Get,
        path: "/api/usuarios/{usuario_id}",
        description: "Obtener un usuario por su ID",
        query: &[],
        request: None,
        response: Some(USER_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Put,
        path: "/api/usuarios/{usuario_id}",
        description: "Actualizar un usuario existente",
        query: &[],
        request: Some(
            r#"{
  "nombre": "Juan Carlos (opcional)",
  "correo": "juancarlos@email.com (opcional)"
}"#,
        ),
        response: Some(USER_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Delete,
        path: "/api/usuarios/{usuario_id}",
        description: "Eliminar un usuario y todos sus favoritos",
        query: &[],
        request: None,
        response: None,
        status: 204,
    },
    EndpointDoc {
        method: Method::Get,
        path: "/api/usuarios/{usuario_id}/favoritos",
        description: "Listar los favoritos de un usuario",
        query: &[],
        request: None,
        response: Some(
            r#"{
  "favoritos": [
    {
      "id": 1,
      "id_usuario": 1,
      "id_cancion": 1,
      "fecha_marcado": "2024-11-13T10:30:00"
    }
  ]
}"#,
        ),
        status: 200,
    },
    // ── Canciones ────────────────────────────────────────────────────
    EndpointDoc {
        method: Method::Get,
        path: "/api/canciones/",
        description: "Listar todas las canciones con paginación",
        query: PAGINATION,
        request: None,
        response: Some(SONG_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Post,
        path: "/api/canciones/",
        description: "Crear una nueva canción",
        query: &[],
        request: Some(SONG_REQUEST),
        response: Some(SONG_EXAMPLE),
        status: 201,
    },
    EndpointDoc {
        method: Method::Get,
        path: "/api/canciones/buscar",
        description: "Buscar canciones por diferentes criterios",
        query: &[
            ("titulo", "string (opcional) - buscar por título"),
            ("artista", "string (opcional) - buscar por artista"),
            ("genero", "string (opcional) - buscar por género"),
            ("año", "int (opcional) - buscar por año exacto"),
        ],
        request: None,
        response: Some(SONG_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Put,
        path: "/api/canciones/{cancion_id}",
        description: "Actualizar una canción existente",
        query: &[],
        request: Some(SONG_REQUEST),
        response: Some(SONG_EXAMPLE),
        status: 200,
    },
    EndpointDoc {
        method: Method::Delete,
        path: "/api/canciones/{cancion_id}",
        description: "Eliminar una canción y los favoritos que la referencian",
        query: &[],
        request: None,
        response: None,
        status: 204,
    },
    // ── Favoritos ────────────────────────────────────────────────────
    EndpointDoc {
        method: Method::Get,
        path: "/api/favoritos/",
        description: "Listar todos los favoritos con paginación",
        query: PAGINATION,
        request: None,
        response: Some(
            r#"{
  "id": 1,
  "id_usuario": 1,
  "id_cancion": 1,
  "fecha_marcado": "2024-11-13T10:30:00",
  "usuario": { "id": 1, "nombre": "Juan Pérez", "correo": "juan@email.com" },
  "cancion": { "id": 1, "titulo": "Bohemian Rhapsody", "artista": "Queen" }
}"#,
        ),
        status: 200,
    },
    EndpointDoc {
        method: Method::Post,
        path: "/api/favoritos/",
        description: "Marcar una canción como favorita para un usuario",
        query: &[],
        request: Some(
            r#"{
  "id_usuario": 1,
  "id_cancion": 1
}"#,
        ),
        response: Some(FAVORITE_EXAMPLE),
        status: 201,
    },
    EndpointDoc {
        method: Method::Delete,
        path: "/api/favoritos/{favorito_id}",
        description: "Eliminar un favorito (desmarcar como favorito)",
        query: &[],
        request: None,
        response: None,
        status: 204,
    },
];

/// Endpoints listed under one tab, in catalog order.
pub fn group(tab: DocGroup) -> impl Iterator<Item = &'static EndpointDoc> {
    ENDPOINTS.iter().filter(move |e| e.group() == tab)
}
