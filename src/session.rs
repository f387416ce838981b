//! One DuckDB database and one connection on it, for the duration of a run.
//!

use duckdb::{Config, Connection};
use tracing::{debug, instrument, trace, warn};

use crate::error::{ConvertError, Result};

/// Fields drop in declaration order so the connection always goes before the
/// database that owns it.
#[derive(Debug)]
pub struct Session {
    conn: Connection,
    db: Connection,
}

impl Session {
    /// Open an in-memory database then connect to it.
    ///
    /// If the connection cannot be made, the database is released before the
    /// error is returned.
    #[instrument(skip(config))]
    pub fn open(config: Config) -> Result<Self> {
        let db = Connection::open_in_memory_with_flags(config).map_err(ConvertError::EngineOpen)?;
        trace!("database opened");

        let conn = db.try_clone().map_err(ConvertError::EngineConnect)?;
        trace!("connected");
        Ok(Session { conn, db })
    }

    /// Run `sql` to completion. On failure the engine's message, if any, is
    /// carried in [`ConvertError::QueryExecution`].
    #[instrument(skip(self, sql))]
    pub fn execute(&self, sql: &str) -> Result<()> {
        debug!("{}", sql);
        self.conn
            .execute_batch(sql)
            .map_err(|e| ConvertError::QueryExecution(diagnostic(&e)))
    }

    /// Disconnect then close the database, reporting but not failing on errors.
    #[instrument(skip(self))]
    pub fn close(self) {
        let Session { conn, db } = self;
        if let Err((_, e)) = conn.close() {
            warn!("disconnect failed: {}", e);
        }
        if let Err((_, e)) = db.close() {
            warn!("closing database failed: {}", e);
        }
        trace!("session closed");
    }
}

fn diagnostic(e: &duckdb::Error) -> Option<String> {
    let msg = match e {
        duckdb::Error::DuckDBFailure(_, Some(msg)) => msg.clone(),
        other => other.to_string(),
    };
    if msg.is_empty() {
        None
    } else {
        Some(msg)
    }
}
