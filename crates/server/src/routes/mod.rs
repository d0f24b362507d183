use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod classes;
pub mod health;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(classes::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
