pub mod doctor;
pub mod review;
