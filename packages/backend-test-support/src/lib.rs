//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing:
//! problem-details response assertions and unified logging initialization.

pub mod problem_details;
pub mod test_logging;
