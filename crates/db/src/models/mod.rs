//! Row models and create DTOs, one module per table.

pub mod doctor;
pub mod review;
