//! Handlers for reviews nested under `/doctors/{doctor_id}/reviews`.
//!
//! Single-review lookups check that the path's doctor exists but not that
//! the review belongs to it.

use axum::extract::{Path, State};
use axum::Json;
use doctors_core::error::{CoreError, LookupPurpose};
use doctors_core::types::DbId;
use doctors_db::models::doctor::Doctor;
use doctors_db::models::review::CreateReview;
use doctors_db::repositories::{DoctorRepo, ReviewRepo};
use doctors_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ReviewResponse;
use crate::state::AppState;

/// Review fields accepted from clients.
#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub description: String,
}

/// Request body for `POST /doctors/{doctor_id}/reviews`:
/// `{"review": {"description": ...}}`.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub review: NewReview,
}

/// Load the doctor named in the path or fail with the given lookup purpose.
async fn require_doctor(pool: &DbPool, id: DbId, purpose: LookupPurpose) -> AppResult<Doctor> {
    DoctorRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Doctor", id, purpose)))
}

/// POST /doctors/{doctor_id}/reviews
pub async fn create(
    State(state): State<AppState>,
    Path(doctor_id): Path<DbId>,
    AppJson(input): AppJson<CreateReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    let doctor = require_doctor(&state.pool, doctor_id, LookupPurpose::Read).await?;

    let create = CreateReview {
        description: input.review.description,
        doctor_id,
    };
    let review = ReviewRepo::create(&state.pool, &create).await?;

    tracing::info!(review_id = review.id, doctor_id, "Review created");
    Ok(Json(ReviewResponse::new(review, Some(doctor))))
}

/// GET /doctors/{doctor_id}/reviews/{review_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((doctor_id, review_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ReviewResponse>> {
    require_doctor(&state.pool, doctor_id, LookupPurpose::Read).await?;

    let review = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(
            "Review",
            review_id,
            LookupPurpose::Read,
        )))?;

    // The owner may differ from the path's doctor, or be gone entirely.
    let owner = DoctorRepo::find_by_id(&state.pool, review.doctor_id).await?;
    Ok(Json(ReviewResponse::new(review, owner)))
}

/// DELETE /doctors/{doctor_id}/reviews/{review_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((doctor_id, review_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<&'static str>> {
    require_doctor(&state.pool, doctor_id, LookupPurpose::CompleteDeletion).await?;

    let deleted = ReviewRepo::delete(&state.pool, review_id).await?;
    if deleted {
        tracing::info!(review_id, doctor_id, "Review deleted");
        Ok(Json("Deleted review."))
    } else {
        Err(AppError::Core(CoreError::not_found(
            "Review",
            review_id,
            LookupPurpose::CompleteDeletion,
        )))
    }
}
