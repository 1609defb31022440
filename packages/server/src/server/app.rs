//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::{BaseAI, OpenAIClient, ServerDeps};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{user_context_middleware, AuthUser};
use crate::server::routes::{graphql_handler, graphql_playground, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Caller identity was populated by user_context_middleware, if present
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(
        state.db_pool.clone(),
        state.server_deps.clone(),
        auth_user,
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router
pub fn build_app(
    pool: PgPool,
    openai_api_key: Option<String>,
    allowed_origins: Vec<String>,
) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    // AI is optional: without a key the price checker degrades to its
    // heuristic branch instead of failing startup.
    let ai: Option<Arc<dyn BaseAI>> = match openai_api_key {
        Some(key) => Some(Arc::new(OpenAIClient::new(&key))),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, AI price checks disabled");
            None
        }
    };

    let server_deps = Arc::new(ServerDeps::new(pool.clone(), ai));

    let app_state = AppState {
        db_pool: pool,
        server_deps,
    };

    // CORS: explicit origins when configured, permissive for development
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    };

    let mut router = Router::new().route("/graphql", post(graphql_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(user_context_middleware))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
