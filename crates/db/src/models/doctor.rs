//! Doctor entity model and DTOs.

use doctors_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `doctor` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Doctor {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new doctor. Ids are assigned by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoctor {
    pub name: String,
}
