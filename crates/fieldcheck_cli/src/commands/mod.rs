pub mod completeness;
pub mod plate;
