//! File log writer.
//!
//! [`FileMakeWriter`] lets the file layer carry its own `EnvFilter`,
//! independent of the terminal layer. The file layer should be built with
//! `.with_ansi(false)` so no escape codes reach the log.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Name of the log file inside the configured log directory.
pub const LOG_FILE_NAME: &str = "crewdesk.log";

/// Opens (creating if needed) `crewdesk.log` under `log_dir` for appending.
///
/// # Errors
///
/// Returns the I/O error if the directory cannot be created or the file
/// cannot be opened.
pub fn open_log_file(log_dir: &Path) -> io::Result<Arc<Mutex<File>>> {
    std::fs::create_dir_all(log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))?;
    Ok(Arc::new(Mutex::new(file)))
}

/// [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) for the file layer.
#[derive(Clone)]
pub struct FileMakeWriter {
    file: Arc<Mutex<File>>,
}

impl FileMakeWriter {
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for FileMakeWriter {
    type Writer = FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter {
            file: Arc::clone(&self.file),
            buf: Vec::with_capacity(256),
        }
    }
}

/// Per-event writer for file output.
///
/// Buffers one formatted event and appends it under the lock on
/// [`Drop`], so concurrent events never interleave mid-line.
pub struct FileWriter {
    file: Arc<Mutex<File>>,
    buf: Vec<u8>,
}

impl Write for FileWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let mut file = self.file.lock();
        let _ = file.write_all(&self.buf);
        let _ = file.flush();
    }
}
