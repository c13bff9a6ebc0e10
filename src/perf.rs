//! Timing scopes and the optional step log.
//!
//! Both are off by default. `--perf` turns on scope timings (printed to
//! stderr when a [`Scope`] drops); `--debug-log PATH` opens a file that
//! receives one line per [`log_event`] call, stamped with the elapsed time
//! since the log was opened.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Instant;

static TIMINGS: AtomicBool = AtomicBool::new(false);
static STEP_LOG: LazyLock<Mutex<StepLog>> = LazyLock::new(|| Mutex::new(StepLog::closed()));

/// Prints its lifetime to stderr on drop when timings are enabled.
#[derive(Debug)]
pub struct Scope {
    label: &'static str,
    started: Instant,
}

impl Scope {
    fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if timings_enabled() {
            eprintln!("[perf] {}: {:.2} ms", self.label, self.elapsed_ms());
        }
    }
}

#[derive(Debug)]
struct StepLog {
    opened: Instant,
    writer: Option<BufWriter<File>>,
}

impl StepLog {
    fn closed() -> Self {
        Self {
            opened: Instant::now(),
            writer: None,
        }
    }
}

fn step_log() -> MutexGuard<'static, StepLog> {
    STEP_LOG
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub fn set_timings_enabled(enabled: bool) {
    TIMINGS.store(enabled, Ordering::Relaxed);
}

pub fn timings_enabled() -> bool {
    TIMINGS.load(Ordering::Relaxed)
}

/// Start timing a named scope; the result is reported when dropped.
pub fn scope(label: &'static str) -> Scope {
    Scope {
        label,
        started: Instant::now(),
    }
}

/// Open the step log at `path`, or close it with `None`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut log = step_log();
    log.writer = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "textwalk step log start")?;
        writer.flush()?;
        log.opened = Instant::now();
        log.writer = Some(writer);
        tracing::debug!(path = %path.display(), "step log opened");
    }
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    step_log().writer.is_some()
}

/// Append one event line to the step log, if it is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut log = step_log();
    let elapsed_ms = log.opened.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = log.writer.as_mut() {
        let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_timings_enabled_toggles_flag() {
        set_timings_enabled(true);
        assert!(timings_enabled());

        set_timings_enabled(false);
        assert!(!timings_enabled());
    }

    #[test]
    fn test_scope_measures_elapsed_time() {
        let scope = scope("test.scope");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(scope.elapsed_ms() >= 1.0);
    }

    #[test]
    fn test_debug_log_path_writes_events() {
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("walk.step", "hello world");
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("textwalk step log start"));
        assert!(content.contains("walk.step: hello world"));
    }
}
