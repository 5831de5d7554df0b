//! Rolling File Sink
//!
//! Appends formatted records to a log file, copies it aside to
//! `<name>.log.1` once it grows past the size limit, and keeps the most
//! recent lines in a bounded in-memory ring.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::LoggerConfig;

/// Cloneable handle to a shared log file; every clone writes to the same file
#[derive(Clone)]
pub struct RollingSink {
    inner: Arc<Mutex<SinkState>>,
}

struct SinkState {
    path: PathBuf,
    backup: PathBuf,
    file: File,
    written: u64,
    max_file_bytes: u64,
    recent: VecDeque<String>,
    ring_capacity: usize,
    /// Bytes after the last newline, held until the line is complete
    pending: Vec<u8>,
}

impl RollingSink {
    /// Open (or create) the log file in append mode
    pub fn open(path: PathBuf, config: &LoggerConfig) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        let mut backup = path.clone().into_os_string();
        backup.push(".1");

        Ok(Self {
            inner: Arc::new(Mutex::new(SinkState {
                backup: PathBuf::from(backup),
                path,
                file,
                written,
                max_file_bytes: config.max_file_bytes,
                recent: VecDeque::with_capacity(config.ring_capacity),
                ring_capacity: config.ring_capacity,
                pending: Vec::new(),
            })),
        })
    }

    /// Most recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(state) => state.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.inner.lock().ok().map(|state| state.path.clone())
    }

    /// Path the file is copied to on rotation
    pub fn backup_path(&self) -> Option<PathBuf> {
        self.inner.lock().ok().map(|state| state.backup.clone())
    }
}

impl SinkState {
    // Copy + truncate rather than rename: the handle stays valid on Windows
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::copy(&self.path, &self.backup)?;
        self.file.set_len(0)?;
        self.written = 0;
        Ok(())
    }

    /// Buffer `buf` and write out whatever complete lines it finishes.
    /// Rotation only happens between lines.
    fn write_record(&mut self, buf: &[u8]) -> io::Result<()> {
        self.pending.extend_from_slice(buf);
        let Some(last_newline) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return Ok(());
        };
        let lines: Vec<u8> = self.pending.drain(..=last_newline).collect();

        if self.written > 0 && self.written + lines.len() as u64 > self.max_file_bytes {
            self.rotate()?;
        }
        self.file.write_all(&lines)?;
        self.written += lines.len() as u64;
        self.remember(&lines);
        Ok(())
    }

    fn remember(&mut self, lines: &[u8]) {
        if self.ring_capacity == 0 {
            return;
        }
        for line in String::from_utf8_lossy(lines).lines().filter(|l| !l.is_empty()) {
            if self.recent.len() == self.ring_capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
    }
}

impl Drop for SinkState {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            let _ = self.file.write_all(&self.pending);
        }
    }
}

impl Write for RollingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        state.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingSink {
    type Writer = RollingSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn file_len(path: &Path) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    fn config(max_file_bytes: u64, ring_capacity: usize) -> LoggerConfig {
        LoggerConfig {
            max_file_bytes,
            ring_capacity,
            ..LoggerConfig::default()
        }
    }

    #[test]
    fn test_appends_and_remembers_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("logs").join("app.log"), &config(1024, 10)).unwrap();

        sink.write_all(b"first\n").unwrap();
        sink.write_all(b"second\nthird\n").unwrap();

        let path = sink.path().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\nthird\n");
        assert_eq!(sink.recent_lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ring_keeps_only_latest_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("app.log"), &config(1024, 2)).unwrap();

        for n in 0..5 {
            writeln!(sink, "line {}", n).unwrap();
        }

        assert_eq!(sink.recent_lines(), vec!["line 3", "line 4"]);
    }

    #[test]
    fn test_rotates_past_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("app.log"), &config(10, 10)).unwrap();

        sink.write_all(b"aaaaaaaa\n").unwrap();
        sink.write_all(b"bbbbbbbb\n").unwrap();

        let path = sink.path().unwrap();
        let backup = sink.backup_path().unwrap();
        assert_eq!(backup.file_name().unwrap(), "app.log.1");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "aaaaaaaa\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "bbbbbbbb\n");
        assert_eq!(file_len(&path), 9);
    }

    #[test]
    fn test_existing_file_counts_toward_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "previous run\n").unwrap();
        let mut sink = RollingSink::open(path.clone(), &config(16, 10)).unwrap();

        sink.write_all(b"new run\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new run\n");
        assert_eq!(file_len(&sink.backup_path().unwrap()), 13);
    }

    #[test]
    fn test_line_split_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("app.log"), &config(1024, 10)).unwrap();

        sink.write_all(b"saved ").unwrap();
        sink.write_all(b"3 ").unwrap();
        assert!(sink.recent_lines().is_empty());
        sink.write_all(b"todos\nnext").unwrap();

        let path = sink.path().unwrap();
        assert_eq!(sink.recent_lines(), vec!["saved 3 todos"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "saved 3 todos\n");
    }

    #[test]
    fn test_rotation_keeps_lines_whole() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("app.log"), &config(12, 10)).unwrap();

        sink.write_all(b"first\n").unwrap();
        write!(sink, "second ").unwrap();
        writeln!(sink, "line").unwrap();

        let path = sink.path().unwrap();
        let backup = sink.backup_path().unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "first\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second line\n");
    }

    #[test]
    fn test_zero_capacity_ring() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingSink::open(dir.path().join("app.log"), &config(1024, 0)).unwrap();

        sink.write_all(b"hello\n").unwrap();

        assert!(sink.recent_lines().is_empty());
    }
}
