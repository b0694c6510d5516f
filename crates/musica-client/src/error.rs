//! Client error types.

use thiserror::Error;

/// Message shown when the backend could not be reached at all.
pub const NETWORK_MESSAGE: &str = "No se pudo conectar con el servidor";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } | ClientError::Server { status, .. } => {
                Some(*status)
            }
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-provided detail string of a 4xx answer.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server detail when there is one, a
    /// connection message for transport failures, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Network(_) => NETWORK_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull the `detail` field out of an error body.
///
/// Plain strings are returned as-is. Validation arrays
/// (`[{"loc": [...], "msg": "..."}]`) are flattened into one line.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Display messages ──────────────────────────────────────────────

    #[test]
    fn test_display_rejected_with_detail() {
        let err = ClientError::Rejected {
            status: 400,
            detail: Some("El correo ya está registrado".into()),
        };
        assert_eq!(
            err.to_string(),
            "request rejected with status 400: El correo ya está registrado"
        );
    }

    #[test]
    fn test_display_rejected_without_detail() {
        let err = ClientError::Rejected {
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "request rejected with status 404: no detail");
    }

    #[test]
    fn test_display_server() {
        let err = ClientError::Server {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "server error 500: boom");
    }

    #[test]
    fn test_from_url_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: ClientError = parse_err.into();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    // ── user_message ──────────────────────────────────────────────────

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ClientError::Rejected {
            status: 404,
            detail: Some("Usuario no encontrado".into()),
        };
        assert_eq!(err.user_message("fallback"), "Usuario no encontrado");
        assert_eq!(err.detail(), Some("Usuario no encontrado"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_user_message_falls_back_for_server_errors() {
        let err = ClientError::Server {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.user_message("Error al cargar usuarios"), "Error al cargar usuarios");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_user_message_rejected_without_detail_uses_fallback() {
        let err = ClientError::Rejected {
            status: 400,
            detail: None,
        };
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    // ── extract_detail ────────────────────────────────────────────────

    #[test]
    fn test_extract_detail_string() {
        let body = r#"{"detail": "Canción no encontrada"}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("Canción no encontrada"));
    }

    #[test]
    fn test_extract_detail_validation_array() {
        let body = r#"{"detail": [
            {"loc": ["body", "duracion"], "msg": "ensure this value is less than or equal to 3600"},
            {"loc": ["body", "año"], "msg": "ensure this value is greater than or equal to 1900"}
        ]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("ensure this value is less than or equal to 3600; ensure this value is greater than or equal to 1900")
        );
    }

    #[test]
    fn test_extract_detail_missing_or_invalid() {
        assert!(extract_detail(r#"{"error": "x"}"#).is_none());
        assert!(extract_detail("<html>bad gateway</html>").is_none());
        assert!(extract_detail(r#"{"detail": []}"#).is_none());
        assert!(extract_detail(r#"{"detail": 42}"#).is_none());
    }
}
