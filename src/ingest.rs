use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;

use crate::error::{AnalysisError, RowError};
use crate::types::RawRow;

/// Pull-based stream of raw rows, in file order.
pub struct OrderReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl<R: io::Read> OrderReader<R> {
    /// Reads the header row eagerly; data rows are read on demand.
    pub fn from_reader(source: R) -> Result<Self, AnalysisError> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(source);
        let headers = reader.headers().map_err(|e| decode_error(e, 1))?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl OrderReader<File> {
    /// Opens `path` after checking that it names an existing regular file.
    pub fn open(path: &Path) -> Result<Self, AnalysisError> {
        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AnalysisError::NotFound {
                path: path.to_path_buf(),
            },
            _ => AnalysisError::Io(e),
        })?;
        if !meta.is_file() {
            return Err(AnalysisError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        info!("reading orders from {}", path.display());
        Self::from_reader(File::open(path)?)
    }
}

impl<R: io::Read> Iterator for OrderReader<R> {
    type Item = Result<RawRow, AnalysisError>;

    fn next(&mut self) -> Option<Self::Item> {
        let fallback_line = self.reader.position().line();
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self
                    .record
                    .position()
                    .map_or(fallback_line, |p| p.line());
                Some(
                    self.record
                        .deserialize::<RawRow>(Some(&self.headers))
                        .map(|row| RawRow { line, ..row })
                        .map_err(|e| decode_error(e, line)),
                )
            }
            Err(e) => Some(Err(decode_error(e, fallback_line))),
        }
    }
}

fn decode_error(err: csv::Error, fallback_line: u64) -> AnalysisError {
    let line = err.position().map_or(fallback_line, |p| p.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => AnalysisError::Io(e),
        _ => AnalysisError::MalformedRow {
            line,
            source: RowError::Decode(message),
        },
    }
}
