//! Review entity model and DTOs.

use doctors_core::types::DbId;
use sqlx::FromRow;

/// A row from the `review` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Review {
    pub id: DbId,
    pub description: String,
    pub doctor_id: DbId,
}

/// DTO for inserting a review under an existing doctor.
///
/// The caller is responsible for checking that `doctor_id` exists.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub description: String,
    pub doctor_id: DbId,
}
