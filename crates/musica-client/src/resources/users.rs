use super::{Resource, ResourceStore};
use crate::error::ClientError;
use crate::models::{User, UserFavorites};

pub enum Users {}

impl Resource for Users {
    type Item = User;

    const COLLECTION: &'static str = "/usuarios/";
    const LOAD_FAILED: &'static str = "Error al cargar usuarios";
    const DELETED_TITLE: &'static str = "Usuario eliminado";
    const DELETED_DESCRIPTION: &'static str = "El usuario se eliminó correctamente";
    const DELETE_FAILED: &'static str = "Error al eliminar el usuario";

    fn id(item: &User) -> i64 {
        item.id
    }
}

impl ResourceStore<Users> {
    /// Nested favorites of one user, for a transient detail view.
    ///
    /// Store state is left untouched; failures are toasted and returned.
    pub async fn favorites(&self, user_id: i64) -> Result<UserFavorites, ClientError> {
        let path = format!("/usuarios/{user_id}/favoritos");
        match self.client.get::<UserFavorites>(&path).await {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                self.toaster.failure("Error al cargar favoritos");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Toaster;
    use crate::resources::test_support::{favorite_json, user_json};
    use crate::resources::UsersStore;
    use crate::transport::ApiClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> (UsersStore, Toaster) {
        let client = ApiClient::with_base_url(&format!("{}/api", server.uri())).unwrap();
        let toaster = Toaster::new(10);
        (UsersStore::new(client, toaster.clone()), toaster)
    }

    #[test]
    fn test_item_path() {
        assert_eq!(Users::item_path(5), "/usuarios/5");
    }

    #[tokio::test]
    async fn test_fetch_replaces_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .and(query_param("skip", "0"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                user_json(1, "Juan Pérez", "juan@email.com"),
                user_json(2, "Ana", "ana@email.com"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let (mut store, toaster) = store_for(&server);
        store.fetch().await;

        assert!(!store.loading());
        assert!(store.error().is_none());
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.find(2).map(|u| u.name.as_str()), Some("Ana"));
        assert!(store.find(3).is_none());
        assert!(toaster.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                user_json(1, "Juan Pérez", "juan@email.com"),
            ])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (mut store, _) = store_for(&server);
        store.fetch().await;
        assert_eq!(store.items().len(), 1);

        store.fetch().await;
        assert!(!store.loading());
        assert_eq!(store.error(), Some("Error al cargar usuarios"));
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_next_fetch_clears_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let (mut store, _) = store_for(&server);
        store.fetch().await;
        assert!(store.error().is_some());
        store.fetch().await;
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_delete_toasts_and_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/usuarios/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                user_json(2, "Ana", "ana@email.com"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let (mut store, toaster) = store_for(&server);
        assert!(store.delete(1).await);

        let toasts = toaster.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Usuario eliminado");
        assert_eq!(store.items().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_detail() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/usuarios/9"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Usuario no encontrado"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let (mut store, toaster) = store_for(&server);
        assert!(!store.delete(9).await);

        let toasts = toaster.drain();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].is_destructive());
        assert_eq!(toasts[0].description, "Usuario no encontrado");
    }

    #[tokio::test]
    async fn test_favorites_returns_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/2/favoritos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 2,
                "nombre": "Ana",
                "favoritos": [favorite_json(1, 2, 5), favorite_json(4, 2, 6)]
            })))
            .mount(&server)
            .await;

        let (store, toaster) = store_for(&server);
        let favs = store.favorites(2).await.unwrap();
        assert_eq!(favs.favorites.len(), 2);
        assert_eq!(favs.favorites[1].song_id, 6);
        assert!(store.items().is_empty());
        assert!(toaster.is_empty());
    }

    #[tokio::test]
    async fn test_favorites_failure_toasts_and_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/usuarios/2/favoritos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (store, toaster) = store_for(&server);
        assert!(store.favorites(2).await.is_err());
        assert_eq!(toaster.drain()[0].description, "Error al cargar favoritos");
    }
}
