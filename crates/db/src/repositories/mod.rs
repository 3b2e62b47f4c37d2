//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod doctor_repo;
pub mod review_repo;

pub use doctor_repo::DoctorRepo;
pub use review_repo::ReviewRepo;
