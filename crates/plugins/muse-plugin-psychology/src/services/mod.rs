//! Profile storage and the service that shares it

pub mod psychology_service;
pub mod repository;

pub use psychology_service::PsychologyService;
pub use repository::{ProfileRepository, RepositoryStats};
