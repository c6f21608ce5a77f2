pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/taxonomy/sectors", get(handlers::list_sectors))
        .route(
            "/taxonomy/sectors/{key}/sub-sectors",
            get(handlers::list_sub_sectors),
        )
}
