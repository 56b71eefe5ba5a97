//! Course infrastructure implementations

mod in_memory;
mod service;

pub use in_memory::InMemoryCourseRepository;
pub use service::CourseService;
