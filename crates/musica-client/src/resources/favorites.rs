use super::Resource;
use crate::models::Favorite;

pub enum Favorites {}

impl Resource for Favorites {
    type Item = Favorite;

    const COLLECTION: &'static str = "/favoritos/";
    const LOAD_FAILED: &'static str = "Error al cargar favoritos";
    const DELETED_TITLE: &'static str = "Favorito eliminado";
    const DELETED_DESCRIPTION: &'static str = "El favorito se eliminó correctamente";
    const DELETE_FAILED: &'static str = "Error al eliminar el favorito";

    fn id(item: &Favorite) -> i64 {
        item.id
    }
}
