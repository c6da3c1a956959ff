pub mod file_manager;
pub mod gallery;
pub mod metadata;
pub mod stats;
pub mod thumbnail;
