//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{RedirectService, ShorteningService, StatsService};
use crate::infrastructure::persistence::{PgClickRepository, PgUrlRepository};

/// Handles to the services, cloned into every request.
///
/// Everything is behind `Arc`, so cloning is cheap. The pool is the only
/// shared mutable resource and is owned here rather than held globally.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<PgUrlRepository>>,
    pub redirect_service: Arc<RedirectService<PgUrlRepository, PgClickRepository>>,
    pub stats_service: Arc<StatsService<PgUrlRepository, PgClickRepository>>,
    pub url_repository: Arc<PgUrlRepository>,
    pub pool: Arc<PgPool>,
    /// Trust forwarding headers for the client address.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires repositories and services around one pool.
    pub fn new(pool: Arc<PgPool>, behind_proxy: bool) -> Self {
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

        Self {
            shortening_service: Arc::new(ShorteningService::new(url_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(
                url_repository.clone(),
                click_repository.clone(),
            )),
            stats_service: Arc::new(StatsService::new(url_repository.clone(), click_repository)),
            url_repository,
            pool,
            behind_proxy,
        }
    }
}
