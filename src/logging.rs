//! Logger setup: every record goes to stderr and to `log.log`

use crate::automation::{ClickerError, ClickerResult};
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const LOG_FILE: &str = "log.log";

/// Duplicates log output into a file next to stderr
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

/// Errors only by default; `verbose` switches to info and adds the module
/// path to every line. `RUST_LOG` still wins when set.
pub fn init(verbose: bool) -> ClickerResult<()> {
    init_with_file(Path::new(LOG_FILE), verbose)
}

pub fn init_with_file(path: &Path, verbose: bool) -> ClickerResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ClickerError::Logging {
            description: format!("cannot open {}: {}", path.display(), e),
        })?;

    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Error
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} - {}] in {}: {}",
                    buf.timestamp(),
                    record.level(),
                    record.module_path().unwrap_or("?"),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "[{} - {}]: {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            }
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .map_err(|e| ClickerError::Logging {
            description: e.to_string(),
        })
}
