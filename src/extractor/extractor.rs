// extractor.rs
use crate::domain::ListingRecord;
use crate::errors::ListingError;
use crate::extractor::parse_reply;
use crate::vision::VisionService;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

pub struct ListingExtractor<S> {
    service: S,
}

impl<S: VisionService> ListingExtractor<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Reads one image, asks the model about it, and parses the reply.
    ///
    /// An empty or partial record is still `Ok`; only unreadable files and
    /// failed model calls are errors.
    pub fn extract(&self, image_path: &Path) -> Result<ListingRecord, ListingError> {
        let file = display_name(image_path);

        let bytes = fs::read(image_path).map_err(|e| {
            error!("❌ Could not read image {file}: {e}");
            ListingError::io(image_path, e)
        })?;

        let mime_type = mime_type_for(image_path);
        debug!("📤 Sending {file} ({} bytes, {mime_type})", bytes.len());

        let reply = self.service.send(&bytes, &mime_type).map_err(|e| {
            error!("❌ Error analyzing image {file}: {e}");
            ListingError::Service {
                file: file.clone(),
                source: e,
            }
        })?;

        let record = parse_reply(&reply);
        debug!("🧾 {file}: parsed {} of 5 fields", record.len());

        Ok(record)
    }
}

/// Guessed from the extension; unknown types fall back to `application/octet-stream`.
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
        .essence_str()
        .to_string()
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
