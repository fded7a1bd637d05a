use crate::errors::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated user acting on a request.
///
/// Inserted into request extensions by
/// [`jwt_auth_middleware`](super::jwt_auth_middleware) and handed explicitly to
/// every use-case call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Principal {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Reading the principal never fails for a correctly wired router. A missing
/// value means the auth layer was not applied, which is reported as a server
/// fault rather than a client error.
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            tracing::error!(
                path = %parts.uri.path(),
                "Principal missing from request extensions; is the auth layer applied?"
            );
            AppError::InternalServerError("principal missing from request context".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_principal_from_extensions() {
        let principal = Principal {
            id: "u-7".to_string(),
            email: "u7@example.com".to_string(),
            name: "Seven".to_string(),
            roles: vec!["admin".to_string()],
        };
        let mut request = Request::builder().uri("/product/list").body(()).unwrap();
        request.extensions_mut().insert(principal.clone());
        let (mut parts, _) = request.into_parts();

        let extracted = Principal::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, principal);
        assert!(extracted.has_role("admin"));
    }

    #[tokio::test]
    async fn test_missing_principal_is_a_server_fault() {
        let request = Request::builder().uri("/product/list").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let err = Principal::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, AppError::InternalServerError(_)));
    }
}
