//! Repository for the `review` table.

use doctors_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::review::{CreateReview, Review};

const COLUMNS: &str = "id, description, doctor_id";

/// Provides create, read and delete operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO review (description, doctor_id) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.description)
            .bind(input.doctor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a review by id, whichever doctor it belongs to.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM review WHERE id = ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the reviews of one doctor, oldest first.
    pub async fn list_by_doctor(
        pool: &SqlitePool,
        doctor_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM review WHERE doctor_id = ? ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(doctor_id)
            .fetch_all(pool)
            .await
    }

    /// List every review, oldest first. Includes orphaned reviews.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM review ORDER BY id");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Delete a review by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM review WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
