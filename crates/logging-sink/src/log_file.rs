//! crates/logging-sink/src/log_file.rs
//! Append-mode file destination.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits applied when the log file is created.
#[cfg(unix)]
const LOG_FILE_MODE: u32 = 0o660;

/// A log file opened for appending.
///
/// The file is opened read-write with `O_APPEND`, so every write lands at the
/// end of the file even when other processes append to it concurrently.
/// Missing files are created; existing content is never truncated.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    /// Opens `path` for appending, creating it when absent.
    pub fn open_append(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(LOG_FILE_MODE);
        }
        let file = options.open(&path)?;
        Ok(Self { path, file })
    }

    /// Returns the path the file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use test_support::LogDir;

    #[test]
    fn creates_missing_file() {
        let dir = LogDir::new();
        let path = dir.file("fresh.log");

        let file = LogFile::open_append(&path).expect("open succeeds");

        assert!(path.is_file());
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn appends_without_truncating() {
        let dir = LogDir::new();
        let path = dir.file("existing.log");
        fs::write(&path, "first\n").expect("seed file");

        let mut file = LogFile::open_append(&path).expect("open succeeds");
        file.write_all(b"second\n").expect("write succeeds");
        drop(file);

        assert_eq!(fs::read_to_string(&path).expect("read"), "first\nsecond\n");
    }

    #[test]
    fn rejects_directories() {
        let dir = LogDir::new();
        assert!(LogFile::open_append(dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_not_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = LogDir::new();
        let path = dir.file("mode.log");
        LogFile::open_append(&path).expect("open succeeds");

        let mode = fs::metadata(&path).expect("stat").permissions().mode();
        assert_eq!(mode & 0o007, 0);
    }
}
