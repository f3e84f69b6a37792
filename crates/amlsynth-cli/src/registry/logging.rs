use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use super::{RegistryError, RegistryResult};

/// Install the process subscriber: human-readable events on stderr and,
/// when a run is active, JSON lines appended to its `logs.ndjson`.
///
/// `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str, run_log: Option<&Path>) -> RegistryResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let json_layer = match run_log {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(Mutex::new(file));
            let make_writer = BoxMakeWriter::new(move || SharedWriter {
                file: Arc::clone(&file),
            });
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(make_writer),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(json_layer)
        .try_init()
        .map_err(|err| RegistryError::Logging(err.to_string()))?;

    Ok(())
}

struct SharedWriter {
    file: Arc<Mutex<File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock run log"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("failed to lock run log"))?;
        file.flush()
    }
}
