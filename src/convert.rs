use std::path::Path;

use duckdb::Config;
use tracing::{info, instrument, warn};

use crate::{
    error::{ConvertError, Result},
    session::Session,
    sql::copy_statement,
    summary::ParquetSummary,
};

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ConvertError::InvalidPath(path.to_path_buf()))
}

/// Converts `input` (CSV with a header row) into the parquet file `output`.
///
/// Dialect and column types are whatever DuckDB's `read_csv_auto` detects.
#[instrument]
pub fn csv_to_parquet(input: &Path, output: &Path) -> Result<()> {
    let sql = copy_statement(path_str(input)?, path_str(output)?)?;

    let session = Session::open(Config::default())?;
    let res = session.execute(&sql);
    session.close();
    res?;

    match ParquetSummary::read(output) {
        Ok(summary) => info!(
            "{} rows, columns: {}",
            summary.rows,
            summary.columns.join(", ")
        ),
        Err(e) => warn!("can not read back {}: {}", output.display(), e),
    }
    Ok(())
}
