//! Foundation utilities shared across the library

pub mod logging;
pub mod math;
