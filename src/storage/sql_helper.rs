//! Connection and transaction plumbing for the SQL backend

use std::path::Path;
use std::sync::Arc;
use rusqlite::{Connection, Statement, Transaction};
use crate::Result;
use super::schema;

type ConnectionFactory = dyn Fn() -> rusqlite::Result<Connection> + Send + Sync;

/// Opens a fresh connection for every operation and scopes statements and
/// transactions to it. The connection is closed when the operation returns,
/// whatever the outcome.
#[derive(Clone)]
pub struct SqlHelper {
    factory: Arc<ConnectionFactory>,
}

impl SqlHelper {
    /// Build a helper around a connection factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> rusqlite::Result<Connection> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Connect to a database file (created if it doesn't exist)
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self::new(move || {
            let conn = Connection::open(&path)?;
            conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
            Ok(conn)
        })
    }

    /// Open a new connection
    pub fn connect(&self) -> Result<Connection> {
        Ok((self.factory)()?)
    }

    /// Prepare `sql` on a fresh connection and hand the statement to `body`
    pub fn execute<T, F>(&self, sql: &str, body: F) -> Result<T>
    where
        F: FnOnce(&mut Statement<'_>) -> Result<T>,
    {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        body(&mut stmt)
    }

    /// Run `body` inside a transaction on a fresh connection.
    ///
    /// Commits when `body` succeeds. Otherwise rolls back and returns the
    /// error `body` produced. A panic in `body` also rolls back, since an
    /// unfinished transaction is rolled back when dropped.
    pub fn transactional_execute<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        match body(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!("Rollback failed after {}: {}", err, rollback_err);
                }
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for SqlHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlHelper").finish_non_exhaustive()
    }
}
