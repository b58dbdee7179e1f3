pub mod constraint;
pub mod error;
pub mod grid;
pub mod odometer;
