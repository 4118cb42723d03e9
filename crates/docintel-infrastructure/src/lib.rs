pub mod config_service;
pub mod memory_repository;
pub mod paths;
pub mod sample_data;

pub use crate::config_service::ConfigService;
pub use crate::memory_repository::InMemoryRepository;
