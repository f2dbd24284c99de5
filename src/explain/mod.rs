use axum::{routing::post, Router};

use crate::state::AppState;

pub mod handlers;
pub mod types;

pub fn router() -> Router<AppState> {
    Router::new().route("/explain", post(handlers::explain))
}
