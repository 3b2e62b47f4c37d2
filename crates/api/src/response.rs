//! JSON shapes returned by the handlers.
//!
//! Doctors and reviews refer to each other, so each side embeds the other
//! one level deep with a reduced field set:
//!
//! - a doctor lists its reviews as [`NestedReview`] (no `doctor` key);
//! - a review carries its doctor as [`DoctorRef`] (no `reviews` key).
//!
//! The relation is resolved from `doctor_id` at build time; rows never hold
//! pointers to each other.

use std::collections::HashMap;

use doctors_core::types::DbId;
use doctors_db::models::doctor::Doctor;
use doctors_db::models::review::Review;
use serde::Serialize;

/// A review as it appears inside a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedReview {
    pub id: DbId,
    pub description: String,
    pub doctor_id: DbId,
}

impl From<Review> for NestedReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            description: review.description,
            doctor_id: review.doctor_id,
        }
    }
}

/// A doctor as it appears inside a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorRef {
    pub id: DbId,
    pub name: String,
}

impl From<Doctor> for DoctorRef {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
        }
    }
}

/// Standalone doctor: `{id, name, reviews}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorResponse {
    pub id: DbId,
    pub name: String,
    pub reviews: Vec<NestedReview>,
}

impl DoctorResponse {
    pub fn new(doctor: Doctor, reviews: Vec<Review>) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            reviews: reviews.into_iter().map(NestedReview::from).collect(),
        }
    }
}

/// Standalone review: `{id, description, doctor_id, doctor}`.
///
/// `doctor` is `null` when the owning doctor has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResponse {
    pub id: DbId,
    pub description: String,
    pub doctor_id: DbId,
    pub doctor: Option<DoctorRef>,
}

impl ReviewResponse {
    pub fn new(review: Review, doctor: Option<Doctor>) -> Self {
        Self {
            id: review.id,
            description: review.description,
            doctor_id: review.doctor_id,
            doctor: doctor.map(DoctorRef::from),
        }
    }
}

/// `{"doctors": [...]}` envelope used by the listing endpoint only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorListResponse {
    pub doctors: Vec<DoctorResponse>,
}

impl DoctorListResponse {
    /// Attach each review to its doctor, keeping both input orders.
    ///
    /// Reviews whose doctor is not in `doctors` are dropped.
    pub fn group(doctors: Vec<Doctor>, reviews: Vec<Review>) -> Self {
        let mut by_doctor: HashMap<DbId, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_doctor.entry(review.doctor_id).or_default().push(review);
        }

        let doctors = doctors
            .into_iter()
            .map(|doctor| {
                let reviews = by_doctor.remove(&doctor.id).unwrap_or_default();
                DoctorResponse::new(doctor, reviews)
            })
            .collect();

        Self { doctors }
    }
}
