//! Diagnostics for the help binary. Help text owns stdout, so logs go to
//! stderr and, when asked for, to a file.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The returned guards must live until
/// exit so buffered lines are flushed.
///
/// A log file that cannot be opened is reported on stderr and skipped.
pub fn init_logging(env_filter: EnvFilter, log_file: Option<&Path>) -> Vec<WorkerGuard> {
    use tracing_subscriber::prelude::*;

    let (nb_stderr, stderr_guard) = tracing_appender::non_blocking(io::stderr());
    let mut guards = vec![stderr_guard];

    let opened = log_file.map(|path| (path, open_log_file(path)));
    let mut unopened = None;
    let file_layer = match opened {
        Some((_, Ok(file))) => {
            let (nb_file, file_guard) = tracing_appender::non_blocking(file);
            guards.push(file_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(nb_file),
            )
        }
        Some((path, Err(e))) => {
            unopened = Some((path, e));
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(nb_stderr))
        .with(file_layer)
        .init();

    if let Some((path, e)) = unopened {
        tracing::warn!(path = %path.display(), error = %e, "Cannot open log file, logging to stderr only");
    }
    guards
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `error`, `warn`, ... or a full filter directive. Unparseable input
/// falls back to `warn`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_parents_are_created_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/nested/help.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn log_file_under_a_regular_file_cannot_open() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker.join("help.log")).is_err());
    }

    #[test]
    fn bad_level_falls_back_to_warn() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            env_filter("opencli_help=loud").max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
