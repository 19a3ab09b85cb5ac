//! Identity boundary.
//!
//! Authentication itself happens outside this service; requests arrive with
//! identity headers installed by the front proxy after sign-in. The core
//! only ever uses `uid` to scope queries.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tracing::debug;

const USER_ID_HEADER: &str = "x-user-id";
const USER_EMAIL_HEADER: &str = "x-user-email";

/// The authenticated-user handle supplied by the external identity provider.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Stable user identifier; every query is scoped by it
    pub uid: String,
    /// Display address, passed through for rendering surfaces
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(uid) = header_value(parts, USER_ID_HEADER) else {
            return Err((StatusCode::UNAUTHORIZED, "Missing user identity"));
        };
        let email = header_value(parts, USER_EMAIL_HEADER).unwrap_or_default();

        debug!("Authenticated request for user {} ({})", uid, email);
        Ok(CurrentUser { uid, email })
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_extracts_uid_and_email_from_headers() {
        let mut parts = parts_for(
            Request::builder()
                .header("x-user-id", "uid-123")
                .header("x-user-email", "player@example.com")
                .body(())
                .unwrap(),
        );

        let user = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.uid, "uid-123");
        assert_eq!(user.email, "player@example.com");
    }

    #[tokio::test]
    async fn test_missing_uid_is_unauthorized() {
        let mut parts = parts_for(Request::builder().body(()).unwrap());

        let rejection = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_blank_uid_is_unauthorized() {
        let mut parts = parts_for(
            Request::builder().header("x-user-id", "   ").body(()).unwrap(),
        );

        let rejection = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_email_is_optional() {
        let mut parts = parts_for(
            Request::builder().header("x-user-id", "uid-123").body(()).unwrap(),
        );

        let user = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.uid, "uid-123");
        assert!(user.email.is_empty());
    }
}
