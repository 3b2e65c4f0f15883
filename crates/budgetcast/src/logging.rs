//! File logging under the data directory
//!
//! Every run appends to `<data_dir>/budgetcast.log`. The file is trimmed on
//! startup once it outgrows [`Rotation::DEFAULT`], and a trim is itself
//! logged once the subscriber is installed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "budgetcast.log";

const ROTATION_MARKER: &[u8] = b"--- budgetcast log trimmed, older entries removed ---\n";

/// Size-based trimming of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Trim once the file is larger than this many bytes
    pub max_bytes: u64,
    /// Bytes of most recent output kept after a trim
    pub keep_bytes: u64,
}

impl Rotation {
    /// Trim past 5 MB, keeping the last 1 MB
    pub const DEFAULT: Rotation = Rotation {
        max_bytes: 5 * 1024 * 1024,
        keep_bytes: 1024 * 1024,
    };

    /// Trim `path` if it is over the limit. Returns the size before trimming
    /// when a trim happened.
    pub fn apply(&self, path: &Path) -> io::Result<Option<u64>> {
        let len = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if len <= self.max_bytes {
            return Ok(None);
        }

        let mut tail = Vec::new();
        {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(len.saturating_sub(self.keep_bytes)))?;
            file.read_to_end(&mut tail)?;
        }

        // Whole lines only
        let first_line = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        let mut file = File::create(path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(&tail[first_line..])?;
        Ok(Some(len))
    }
}

/// `MakeWriter` over one shared, append-mode log file
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

struct SharedLogWriter(Arc<Mutex<File>>);

impl SharedLogWriter {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut *file)
    }
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter(Arc::clone(&self.0))
    }
}

/// Filter used when `RUST_LOG` is unset: the CLI at `level`, the engine at warn
fn default_directives(level: &str) -> String {
    format!("budgetcast={level},budgetcast_core=warn")
}

/// Initialize logging to `{data_dir}/budgetcast.log`.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let trimmed = Rotation::DEFAULT.apply(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    match trimmed {
        Ok(Some(previous_size)) => {
            tracing::info!(previous_size, "log file trimmed");
        }
        Ok(None) => {}
        Err(err) => tracing::warn!(%err, "failed to trim log file"),
    }
    tracing::info!(log_path = %log_path.display(), "budgetcast logging initialized");
    Ok(())
}
