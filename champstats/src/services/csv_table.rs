//! CSV table storage
//!
//! Reads the championship table and writes the enriched copy. Files are
//! read and written whole; every input field is carried through verbatim.

use std::path::PathBuf;

use async_trait::async_trait;
use shared::{stage_debug, Stage};
use tokio::fs;

use crate::error::EnrichResult;
use crate::traits::TableStore;
use crate::types::{InputRow, InputTable, OutputRow};

/// CSV-backed table store
pub struct CsvTableStore {
    input: PathBuf,
    output: PathBuf,
    has_header: bool,
}

impl CsvTableStore {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            has_header,
        }
    }
}

#[async_trait]
impl TableStore for CsvTableStore {
    async fn read_table(&self) -> EnrichResult<InputTable> {
        let bytes = fs::read(&self.input).await?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let header = if self.has_header {
            Some(reader.headers()?.iter().map(String::from).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(InputRow::new(record.iter().map(String::from).collect()));
        }

        stage_debug!(Stage::Io, "📁 Read {} rows from {}", rows.len(), self.input.display());
        Ok(InputTable { header, rows })
    }

    async fn write_table(&self, header: Option<Vec<String>>, rows: &[OutputRow]) -> EnrichResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        if let Some(header) = header {
            writer.write_record(&header)?;
        }
        for row in rows {
            writer.write_record(row.to_record())?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        fs::write(&self.output, bytes).await?;

        stage_debug!(Stage::Io, "💾 Wrote {} rows to {}", rows.len(), self.output.display());
        Ok(())
    }
}
