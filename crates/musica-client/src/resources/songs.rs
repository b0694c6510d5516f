use super::{Resource, ResourceStore};
use crate::models::Song;

pub enum Songs {}

impl Resource for Songs {
    type Item = Song;

    const COLLECTION: &'static str = "/canciones/";
    const LOAD_FAILED: &'static str = "Error al cargar canciones";
    const DELETED_TITLE: &'static str = "Canción eliminada";
    const DELETED_DESCRIPTION: &'static str = "La canción se eliminó correctamente";
    const DELETE_FAILED: &'static str = "Error al eliminar la canción";

    fn id(item: &Song) -> i64 {
        item.id
    }
}

const SEARCH_PATH: &str = "/canciones/buscar";
const SEARCH_FAILED: &str = "Error al buscar canciones";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Artist,
    Genre,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Artist,
        SearchField::Genre,
        SearchField::Year,
    ];

    /// Query parameter name on `/canciones/buscar`.
    pub fn param(self) -> &'static str {
        match self {
            SearchField::Title => "titulo",
            SearchField::Artist => "artista",
            SearchField::Genre => "genero",
            SearchField::Year => "año",
        }
    }

    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.param() == name)
    }
}

/// Search box contents. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Exact match; kept as typed.
    pub year: String,
}

impl SearchCriteria {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Artist => &self.artist,
            SearchField::Genre => &self.genre,
            SearchField::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        let slot = match field {
            SearchField::Title => &mut self.title,
            SearchField::Artist => &mut self.artist,
            SearchField::Genre => &mut self.genre,
            SearchField::Year => &mut self.year,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        SearchField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Query pairs for the non-empty fields only.
    pub fn to_query(&self) -> Vec<(&'static str, &str)> {
        SearchField::ALL
            .iter()
            .map(|f| (f.param(), self.get(*f)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}

impl ResourceStore<Songs> {
    /// Replace items with the server-side filtered list.
    ///
    /// Callers fall back to `fetch` when `criteria` is empty.
    pub async fn search(&mut self, criteria: &SearchCriteria) {
        let query = criteria.to_query();
        self.load(SEARCH_PATH, &query, SEARCH_FAILED).await;
    }
}
