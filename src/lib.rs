//! # Resumes - resume storage with interchangeable backends
//!
//! Resumes provides:
//! - A resume model with contacts and sectioned content
//! - A backend-agnostic storage contract
//! - A fixed-capacity in-memory array backend
//! - A SQLite backend mapping resumes onto `resume` and `contact` tables

pub mod model;
pub mod storage;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{Category, ContactType, Resume, SectionContent, SectionType};
pub use storage::{ArrayStorage, SqlHelper, SqlStorage, Storage};

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resume not found: {0}")]
    NotFound(String),

    #[error("Resume already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage is full (capacity {0})")]
    StorageFull(usize),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Corrupt data: {0}")]
    Corrupt(String),

    #[error("Invalid resume: {0}")]
    InvalidResume(String),
}
