//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to domain edges that need more than
//! the database pool. External services sit behind trait objects so tests
//! can swap in mocks.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::BaseAI;

/// Server dependencies accessible to domain logic
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// AI client for the price checker. None when OPENAI_API_KEY is not
    /// configured; callers surface a typed "not configured" error.
    pub ai: Option<Arc<dyn BaseAI>>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, ai: Option<Arc<dyn BaseAI>>) -> Self {
        Self { db_pool, ai }
    }
}
