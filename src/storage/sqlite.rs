//! SQLite storage implementation

use std::collections::HashMap;
use std::path::Path;
use rusqlite::{Connection, Row, ffi, params};
use crate::model::{Category, Resume};
use crate::{Error, Result};
use super::{schema, SqlHelper, Storage};

/// SQLite-backed storage for resumes.
///
/// Scalar fields live in `resume`; contacts and sections share `contact`,
/// one row per entry keyed by category tag. Clones share the connection
/// factory and may be used from different threads.
#[derive(Debug, Clone)]
pub struct SqlStorage {
    helper: SqlHelper,
}

impl SqlStorage {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::new(SqlHelper::for_path(path))
    }

    /// Use an existing helper; the schema is created if missing
    pub fn new(helper: SqlHelper) -> Result<Self> {
        let store = Self { helper };
        store.initialize_schema()?;
        Ok(store)
    }

    pub fn helper(&self) -> &SqlHelper {
        &self.helper
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        self.helper.transactional_execute(|tx| {
            for stmt in schema::all_schema_statements() {
                tx.execute(stmt, [])?;
            }
            Ok(())
        })
    }
}

impl Storage for SqlStorage {
    fn clear(&mut self) -> Result<()> {
        let removed = self.helper.execute("DELETE FROM resume", |stmt| Ok(stmt.execute([])?))?;
        tracing::debug!("Cleared {} resumes", removed);
        Ok(())
    }

    fn save(&mut self, resume: &Resume) -> Result<()> {
        resume.validate()?;
        self.helper.transactional_execute(|tx| {
            tx.execute(
                "INSERT INTO resume (uuid, full_name) VALUES (?1, ?2)",
                params![resume.uuid(), resume.full_name()],
            )
            .map_err(|e| already_exists_or(e, resume.uuid()))?;
            insert_entries(tx, resume)
        })?;
        tracing::debug!("Saved resume {}", resume.uuid());
        Ok(())
    }

    fn get(&self, uuid: &str) -> Result<Resume> {
        self.helper.execute(
            r#"
            SELECT r.full_name, c.type, c.value
            FROM resume r
            LEFT JOIN contact c ON r.uuid = c.resume_uuid
            WHERE r.uuid = ?1
            ORDER BY c.id
            "#,
            |stmt| {
                let mut rows = stmt.query([uuid])?;
                let mut resume = match rows.next()? {
                    Some(row) => {
                        let mut resume = Resume::with_uuid(uuid, row.get::<_, String>(0)?);
                        fold_row(&mut resume, row, 1)?;
                        resume
                    }
                    None => return Err(Error::NotFound(uuid.to_string())),
                };
                while let Some(row) = rows.next()? {
                    fold_row(&mut resume, row, 1)?;
                }
                Ok(resume)
            },
        )
    }

    fn update(&mut self, resume: &Resume) -> Result<()> {
        resume.validate()?;
        self.helper.transactional_execute(|tx| {
            let updated = tx.execute(
                "UPDATE resume SET full_name = ?1 WHERE uuid = ?2",
                params![resume.full_name(), resume.uuid()],
            )?;
            if updated == 0 {
                return Err(Error::NotFound(resume.uuid().to_string()));
            }
            tx.execute("DELETE FROM contact WHERE resume_uuid = ?1", [resume.uuid()])?;
            insert_entries(tx, resume)
        })?;
        tracing::debug!("Updated resume {}", resume.uuid());
        Ok(())
    }

    fn delete(&mut self, uuid: &str) -> Result<()> {
        // Contact rows go with the resume row through ON DELETE CASCADE
        self.helper.execute("DELETE FROM resume WHERE uuid = ?1", |stmt| {
            if stmt.execute([uuid])? == 0 {
                return Err(Error::NotFound(uuid.to_string()));
            }
            Ok(())
        })?;
        tracing::debug!("Deleted resume {}", uuid);
        Ok(())
    }

    fn get_all_sorted(&self) -> Result<Vec<Resume>> {
        self.helper.transactional_execute(|tx| {
            let mut resumes: HashMap<String, Resume> = HashMap::new();

            {
                let mut stmt = tx.prepare("SELECT uuid, full_name FROM resume")?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    let uuid: String = row.get(0)?;
                    let full_name: String = row.get(1)?;
                    resumes.insert(uuid.clone(), Resume::with_uuid(uuid, full_name));
                }
            }

            let mut stmt = tx.prepare("SELECT resume_uuid, type, value FROM contact ORDER BY id")?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let uuid: String = row.get(0)?;
                let resume = resumes.get_mut(&uuid).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(Error::Corrupt(format!("orphaned contact row for {}", uuid))),
                    )
                })?;
                fold_row(resume, row, 1)?;
            }

            let mut all: Vec<Resume> = resumes.into_values().collect();
            all.sort_by(Resume::cmp_by_name);
            Ok(all)
        })
    }

    fn size(&self) -> Result<usize> {
        self.helper.execute("SELECT COUNT(*) FROM resume", |stmt| {
            let count: i64 = stmt.query_row([], |row| row.get(0))?;
            Ok(count as usize)
        })
    }
}

/// Insert one contact row per contact and per section of `resume`
fn insert_entries(conn: &Connection, resume: &Resume) -> Result<()> {
    let mut stmt = conn.prepare("INSERT INTO contact (resume_uuid, type, value) VALUES (?1, ?2, ?3)")?;
    for (kind, value) in resume.contacts() {
        stmt.execute(params![resume.uuid(), kind.as_str(), value])?;
    }
    for (kind, content) in resume.sections() {
        stmt.execute(params![resume.uuid(), kind.as_str(), content.encode()])?;
    }
    Ok(())
}

/// Fold a (type, value) column pair into `resume`.
///
/// A null value (no contact rows on the join side) adds nothing; an unknown
/// tag fails the read.
fn fold_row(resume: &mut Resume, row: &Row<'_>, type_idx: usize) -> rusqlite::Result<()> {
    let value: Option<String> = row.get(type_idx + 1)?;
    let Some(value) = value else {
        return Ok(());
    };

    let tag: String = row.get(type_idx)?;
    let category: Category = tag.parse().map_err(|e: Error| {
        rusqlite::Error::FromSqlConversionFailure(type_idx, rusqlite::types::Type::Text, Box::new(e))
    })?;

    resume.apply(category, &value);
    Ok(())
}

/// Map a primary key violation on insert to `AlreadyExists`
fn already_exists_or(err: rusqlite::Error, uuid: &str) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::AlreadyExists(uuid.to_string())
        }
        _ => err.into(),
    }
}
