pub mod doctor;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// GET    /doctors                                  list
/// POST   /doctors                                  create
/// GET    /doctors/{doctor_id}                      get_by_id
/// DELETE /doctors/{doctor_id}                      delete
/// POST   /doctors/{doctor_id}/reviews              create review
/// GET    /doctors/{doctor_id}/reviews/{review_id}  get review
/// DELETE /doctors/{doctor_id}/reviews/{review_id}  delete review
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/doctors", doctor::router())
}
