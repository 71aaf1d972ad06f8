use crate::domain::{ListingField, ListingRecord};
use crate::errors::ListingError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV sink for listing rows, CRLF-terminated. Each row is flushed as soon as
/// it is written; dropping the writer flushes and closes the underlying file.
pub struct ListingCsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ListingCsvWriter<File> {
    /// Creates (truncating) the file at `path` and writes the header row.
    pub fn create(path: &Path) -> Result<Self, ListingError> {
        let file = File::create(path).map_err(|e| ListingError::io(path, e))?;
        Self::from_writer(file)
    }
}

impl<W: Write> ListingCsvWriter<W> {
    pub fn from_writer(inner: W) -> Result<Self, ListingError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(ListingField::ALL.map(|f| f.as_str()))?;
        writer.flush().map_err(csv::Error::from)?;
        Ok(Self { writer })
    }

    pub fn write_listing(&mut self, record: &ListingRecord) -> Result<(), ListingError> {
        self.writer.write_record(record.to_row())?;
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Flushes and hands back the inner writer.
    pub fn into_inner(self) -> Result<W, ListingError> {
        self.writer
            .into_inner()
            .map_err(|e| ListingError::Csv(csv::Error::from(e.into_error())))
    }
}
