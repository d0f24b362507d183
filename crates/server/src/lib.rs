use axum::Router;
use db::DBService;

pub mod config;
pub mod error;
pub mod routes;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }
}

/// Build the full HTTP application.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}
