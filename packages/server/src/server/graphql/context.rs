use std::sync::Arc;

use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Shared resources plus the per-request caller identity.
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(
        db_pool: PgPool,
        server_deps: Arc<ServerDeps>,
        auth_user: Option<AuthUser>,
    ) -> Self {
        Self {
            db_pool,
            server_deps,
            auth_user,
        }
    }

    /// Caller's user id, or an auth error for resolvers that need one.
    pub fn require_user(&self) -> FieldResult<Uuid> {
        self.auth_user
            .as_ref()
            .map(|u| u.user_id)
            .ok_or_else(|| FieldError::new("Authentication required", juniper::Value::null()))
    }

    /// Caller's user id when signed in.
    pub fn user_id(&self) -> Option<Uuid> {
        self.auth_user.as_ref().map(|u| u.user_id)
    }
}
