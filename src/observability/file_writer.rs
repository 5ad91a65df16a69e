//! Append-only line writer with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Lexicographic order matches chronological order.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.9f";

/// Writes one JSON document per line, rotating the file once it grows past
/// the size limit.
///
/// A rotated file is renamed to `<file name>.<UTC timestamp>` and only the
/// newest backups are kept. The handle is opened lazily on the first write.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when rotating, opening or writing
    /// fails, or when the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.as_mut() {
            Some(file) => file,
            None => guard.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (self.path.parent(), file_name(&self.path)) else {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "trace file path has no parent or name",
            ));
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| file_name(path).is_some_and(|n| n.starts_with(&prefix)))
            .collect();

        // newest first
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
