//! Storage Layer - backend-agnostic persistence of resumes
//!
//! Backends:
//! - `ArrayStorage`: fixed-capacity in-memory slots
//! - `SqlStorage`: SQLite with tables
//!   - resume(uuid, full_name)
//!   - contact(resume_uuid, type, value)

pub mod array;
pub mod schema;
pub mod sql_helper;
pub mod sqlite;

pub use array::ArrayStorage;
pub use sql_helper::SqlHelper;
pub use sqlite::SqlStorage;

use crate::model::Resume;
use crate::Result;

/// Operations every storage backend implements.
///
/// `get`, `update` and `delete` fail with `Error::NotFound` when the
/// identifier is absent; `save` fails with `Error::AlreadyExists` when it
/// is present. A failed call leaves the store unchanged.
pub trait Storage {
    /// Remove every resume
    fn clear(&mut self) -> Result<()>;

    /// Persist a new resume
    fn save(&mut self, resume: &Resume) -> Result<()>;

    /// Load a resume with its contacts and sections
    fn get(&self, uuid: &str) -> Result<Resume>;

    /// Replace an existing resume, contacts and sections included
    fn update(&mut self, resume: &Resume) -> Result<()>;

    /// Remove a resume and everything attached to it
    fn delete(&mut self, uuid: &str) -> Result<()>;

    /// All resumes ordered by full name, then identifier
    fn get_all_sorted(&self) -> Result<Vec<Resume>>;

    /// Number of stored resumes
    fn size(&self) -> Result<usize>;
}
