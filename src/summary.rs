use std::{fs::File, path::Path};

use parquet::{
    errors::Result,
    file::reader::{FileReader, SerializedFileReader},
};

/// What the footer of a written parquet file says about it.
#[derive(Debug, PartialEq)]
pub struct ParquetSummary {
    pub rows: i64,
    pub columns: Vec<String>,
}

impl ParquetSummary {
    pub fn read(path: &Path) -> Result<Self> {
        let reader = SerializedFileReader::new(File::open(path)?)?;
        let meta = reader.metadata().file_metadata();
        let columns = meta
            .schema_descr()
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        Ok(ParquetSummary {
            rows: meta.num_rows(),
            columns,
        })
    }
}
