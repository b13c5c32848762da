//! Database schema definitions

/// SQL to create the resume table
pub const CREATE_RESUME_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS resume (
    uuid TEXT PRIMARY KEY NOT NULL,
    full_name TEXT NOT NULL
)
"#;

/// SQL to create the contact table
/// Holds both contacts and sections, keyed by their category tag
pub const CREATE_CONTACT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contact (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    resume_uuid TEXT NOT NULL REFERENCES resume(uuid) ON DELETE CASCADE,
    type TEXT NOT NULL,
    value TEXT
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_contact_resume ON contact(resume_uuid)",
];

/// Pragmas applied to every connection
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_RESUME_TABLE, CREATE_CONTACT_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
