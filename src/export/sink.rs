//! File sinks: where finished documents go.
//!
//! Handing a document to a sink is a one-way message. The exporter does not
//! wait for, or learn about, the outcome; sinks report their own failures
//! through the log. A caller that needs the outcome asks the sink afterwards,
//! e.g. [`DirectorySink::last_error`].

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info};

use super::types::ExportFile;

/// Destination for exported documents.
pub trait FileSink {
    /// Persists or delivers `file`.
    fn save(&self, file: ExportFile);
}

impl<T: FileSink + ?Sized> FileSink for &T {
    fn save(&self, file: ExportFile) {
        (**self).save(file)
    }
}

impl<T: FileSink + ?Sized> FileSink for Box<T> {
    fn save(&self, file: ExportFile) {
        (**self).save(file)
    }
}

impl<T: FileSink + ?Sized> FileSink for Arc<T> {
    fn save(&self, file: ExportFile) {
        (**self).save(file)
    }
}

/// Writes each document to `<dir>/<file_name>`, replacing existing files.
///
/// The file name must be a plain name. Names with directory components
/// (`../x`, `/abs/x`, `a/b`) are refused so nothing is written outside `dir`.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    failures: Mutex<Vec<String>>,
}

impl DirectorySink {
    /// Creates a sink rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Messages of every failed save so far, oldest first.
    pub fn failures(&self) -> Vec<String> {
        self.lock_failures().clone()
    }

    /// Message of the most recent failed save.
    pub fn last_error(&self) -> Option<String> {
        self.lock_failures().last().cloned()
    }

    fn lock_failures(&self) -> MutexGuard<'_, Vec<String>> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Directory the sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a document named `file_name` is written to.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    fn write(&self, file: &ExportFile) -> io::Result<PathBuf> {
        if !is_plain_file_name(&file.file_name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "file name must not contain directory components",
            ));
        }
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&file.file_name);
        std::fs::write(&path, file.contents.as_bytes())?;
        Ok(path)
    }
}

impl FileSink for DirectorySink {
    fn save(&self, file: ExportFile) {
        match self.write(&file) {
            Ok(path) => info!(
                "Saved {} ({} bytes, {})",
                path.display(),
                file.contents.len(),
                file.media_type
            ),
            Err(e) => {
                let message = format!(
                    "Failed to save {}: {}",
                    self.path_for(&file.file_name).display(),
                    e
                );
                error!("{}", message);
                self.lock_failures().push(message);
            }
        }
    }
}

fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Writes each document to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl FileSink for StdoutSink {
    fn save(&self, file: ExportFile) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout
            .write_all(file.contents.as_bytes())
            .and_then(|()| stdout.flush())
        {
            error!("Failed to write {} to stdout: {}", file.file_name, e);
        }
    }
}

/// Keeps every saved document in memory.
///
/// Useful when the caller wants the document text itself, e.g. to attach it
/// elsewhere, and in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<ExportFile>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents saved so far, oldest first.
    pub fn files(&self) -> Vec<ExportFile> {
        self.lock().clone()
    }

    /// The most recently saved document.
    pub fn last(&self) -> Option<ExportFile> {
        self.lock().last().cloned()
    }

    /// Number of documents saved.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ExportFile>> {
        // A panic while holding the lock cannot leave the Vec half-updated
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSink for MemorySink {
    fn save(&self, file: ExportFile) {
        self.lock().push(file);
    }
}
