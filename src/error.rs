use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open DuckDB")]
    EngineOpen(#[source] duckdb::Error),
    #[error("Failed to connect")]
    EngineConnect(#[source] duckdb::Error),
    #[error("Query failed{}", .0.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    QueryExecution(Option<String>),
    #[error("Path too long once escaped ({len} bytes, max {max})")]
    PathTooLong { len: usize, max: usize },
    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),
}
