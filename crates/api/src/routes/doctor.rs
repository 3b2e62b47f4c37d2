//! Route definitions for the `/doctors` resource and its nested reviews.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{doctor, review};
use crate::state::AppState;

/// Routes mounted at `/doctors`.
pub fn router() -> Router<AppState> {
    let review_routes = Router::new()
        .route("/", post(review::create))
        .route("/{review_id}", get(review::get_by_id).delete(review::delete));

    Router::new()
        .route("/", get(doctor::list).post(doctor::create))
        .route("/{doctor_id}", get(doctor::get_by_id).delete(doctor::delete))
        .nest("/{doctor_id}/reviews", review_routes)
}
