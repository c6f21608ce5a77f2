pub mod handlers;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leads/classify", post(handlers::classify_lead))
        .route("/leads/score", post(handlers::score_lead))
}
