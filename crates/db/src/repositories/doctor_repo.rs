//! Repository for the `doctor` table.

use doctors_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::doctor::{CreateDoctor, Doctor};

const COLUMNS: &str = "id, name";

/// Provides create, read and delete operations for doctors.
pub struct DoctorRepo;

impl DoctorRepo {
    /// Insert a new doctor, returning the created row with its generated id.
    pub async fn create(pool: &SqlitePool, input: &CreateDoctor) -> Result<Doctor, sqlx::Error> {
        let query = format!("INSERT INTO doctor (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Doctor>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a doctor by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Doctor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctor WHERE id = ?");
        sqlx::query_as::<_, Doctor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all doctors in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Doctor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM doctor ORDER BY id");
        sqlx::query_as::<_, Doctor>(&query).fetch_all(pool).await
    }

    /// Delete a doctor by id. Returns `true` if a row was removed.
    ///
    /// Reviews pointing at the doctor are left in place.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doctor WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
