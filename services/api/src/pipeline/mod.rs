pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pipeline/rank", post(handlers::rank_leads))
        .route("/pipeline/report", post(handlers::pipeline_report))
}
