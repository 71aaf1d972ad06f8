use crate::errors::ServiceError;
use crate::vision::VisionService;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const DRESSER_REPLY: &str = "TITLE: Mid-Century Oak Dresser
PRICE: 120
CONDITION: Used - Good
DESCRIPTION: 60x30x18 inches. Delivery available for a fee.
CATEGORY: Furniture/Dressers";

/// Prefix of fake image bytes that makes the fake service fail.
pub const FAIL_MARKER: &str = "FAIL";

/// Treats the "image" bytes as the model's reply text, so each test file
/// carries its own canned answer. Records every call.
#[derive(Default)]
pub struct FakeVisionService {
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeVisionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn mime_types(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl VisionService for FakeVisionService {
    fn send(&self, image: &[u8], mime_type: &str) -> Result<String, ServiceError> {
        let text = String::from_utf8_lossy(image).into_owned();
        self.calls
            .borrow_mut()
            .push((text.clone(), mime_type.to_string()));

        if text.starts_with(FAIL_MARKER) {
            return Err(ServiceError::Api {
                status: 429,
                body: "rate limited".into(),
            });
        }

        Ok(text)
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents)
        .unwrap_or_else(|e| panic!("failed to write {name}: {e}"));
}

pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));

    reader
        .records()
        .map(|r| r.expect("bad csv row").iter().map(String::from).collect())
        .collect()
}

/// Shared in-memory sink for a test-scoped tracing subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with log output captured; returns its result and the log text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
