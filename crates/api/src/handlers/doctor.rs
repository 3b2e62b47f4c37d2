//! Handlers for the `/doctors` resource.

use axum::extract::{Path, State};
use axum::Json;
use doctors_core::error::{CoreError, LookupPurpose};
use doctors_core::types::DbId;
use doctors_db::models::doctor::CreateDoctor;
use doctors_db::repositories::{DoctorRepo, ReviewRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{DoctorListResponse, DoctorResponse};
use crate::state::AppState;

/// Request body for `POST /doctors`: `{"doctor": {"name": ...}}`.
#[derive(Debug, Deserialize)]
pub struct CreateDoctorRequest {
    pub doctor: CreateDoctor,
}

/// POST /doctors
///
/// Returns the bare doctor object, unlike the listing endpoint.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDoctorRequest>,
) -> AppResult<Json<DoctorResponse>> {
    let doctor = DoctorRepo::create(&state.pool, &input.doctor).await?;
    tracing::info!(doctor_id = doctor.id, "Doctor created");
    Ok(Json(DoctorResponse::new(doctor, Vec::new())))
}

/// GET /doctors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DoctorListResponse>> {
    let doctors = DoctorRepo::list(&state.pool).await?;
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(DoctorListResponse::group(doctors, reviews)))
}

/// GET /doctors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DoctorResponse>> {
    let doctor = DoctorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(
            "Doctor",
            id,
            LookupPurpose::Read,
        )))?;
    let reviews = ReviewRepo::list_by_doctor(&state.pool, id).await?;
    Ok(Json(DoctorResponse::new(doctor, reviews)))
}

/// DELETE /doctors/{id}
///
/// The doctor's reviews are not touched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<&'static str>> {
    let deleted = DoctorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(doctor_id = id, "Doctor deleted");
        Ok(Json("Deleted doctor."))
    } else {
        Err(AppError::Core(CoreError::not_found(
            "Doctor",
            id,
            LookupPurpose::Delete,
        )))
    }
}
