// processor.rs
use crate::errors::ListingError;
use crate::extractor::ListingExtractor;
use crate::spreadsheets::ListingCsvWriter;
use crate::vision::VisionService;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub attempted: usize,
    pub written: usize,
    pub failed: usize,
}

/// Case-insensitive suffix match on the file name only.
pub fn is_image_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Image entries of `folder`, sorted by file name.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, ListingError> {
    let entries = fs::read_dir(folder).map_err(|e| ListingError::io(folder, e))?;
    Ok(select_images(entries.map(|entry| entry.map(|e| e.path()))))
}

/// Keeps image paths, sorted by file name. An unreadable entry is logged and skipped.
pub fn select_images<I>(entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut images = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("⚠️ Skipping unreadable directory entry: {e}");
                continue;
            }
        };

        let is_image = path
            .file_name()
            .is_some_and(|name| is_image_file(&name.to_string_lossy()));
        if is_image {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    images
}

/// Runs every image in `folder` through the extractor and writes one CSV row
/// per success to `output`. Per-file failures are logged and skipped.
pub fn process_folder<S: VisionService>(
    extractor: &ListingExtractor<S>,
    folder: &Path,
    output: &Path,
) -> Result<ProcessSummary, ListingError> {
    let mut writer = ListingCsvWriter::create(output)?;
    let images = list_images(folder)?;
    let mut summary = ProcessSummary::default();

    for path in &images {
        let file = crate::extractor::display_name(path);
        info!("📄 Processing {file}...");
        summary.attempted += 1;

        match extractor.extract(path) {
            Ok(record) => {
                if record.is_empty() {
                    warn!("⚠️ No listing fields recognized in reply for {file}");
                }
                writer.write_listing(&record)?;
                summary.written += 1;
                info!("✅ Successfully processed {file}");
            }
            Err(e) => {
                summary.failed += 1;
                warn!("⚠️ Failed to process {file}: {e}");
            }
        }
    }

    writer.into_inner()?;
    Ok(summary)
}
