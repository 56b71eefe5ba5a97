//! Infrastructure layer - repository implementations, services and logging

pub mod course;
pub mod logging;
