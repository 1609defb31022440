use axum::{middleware::Next, response::Response};
use tracing::debug;
use uuid::Uuid;

/// Identity of the calling user, resolved by the upstream auth gateway.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// User context middleware
///
/// Token verification happens at the gateway; the service trusts the
/// x-user-id header it forwards. A missing or malformed header means the
/// request proceeds unauthenticated (public browsing is allowed).
pub async fn user_context_middleware(
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(user) = extract_auth_user(&request) {
        debug!(user_id = %user.user_id, "Authenticated request");
        request.extensions_mut().insert(user);
    } else {
        debug!("Unauthenticated request");
    }

    next.run(request).await
}

fn extract_auth_user(request: &axum::http::Request<axum::body::Body>) -> Option<AuthUser> {
    let header = request.headers().get("x-user-id")?;
    let user_id = header.to_str().ok()?.parse().ok()?;
    Some(AuthUser { user_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_valid_user_id() {
        let id = Uuid::new_v4();
        let request = axum::http::Request::builder()
            .header("x-user-id", id.to_string())
            .body(axum::body::Body::empty())
            .unwrap();

        let user = extract_auth_user(&request).unwrap();
        assert_eq!(user.user_id, id);
    }

    #[test]
    fn test_missing_header_means_anonymous() {
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(extract_auth_user(&request).is_none());
    }

    #[test]
    fn test_malformed_header_means_anonymous() {
        let request = axum::http::Request::builder()
            .header("x-user-id", "not-a-uuid")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(extract_auth_user(&request).is_none());
    }
}
