//! Diagnostic tracing setup.
//!
//! The interactive form owns the terminal, so its diagnostics only go to a
//! file named with `--trace`. One-shot commands report to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Full-screen form: stderr is unusable.
    Interactive,
    /// Non-interactive subcommand.
    OneShot,
}

impl TraceMode {
    fn default_directive(self, to_file: bool) -> &'static str {
        match (self, to_file) {
            (_, true) => "info",
            (TraceMode::OneShot, false) => "warn",
            (TraceMode::Interactive, false) => "off",
        }
    }
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber. Returns `Ok(false)` when nothing was
/// installed (interactive form without a trace file).
pub fn init_tracing(trace_file: Option<&str>, mode: TraceMode) -> Result<bool, Box<dyn Error>> {
    let directive = mode.default_directive(trace_file.is_some());

    match trace_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(directive))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
        }
        None if mode == TraceMode::Interactive => return Ok(false),
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(directive))
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_defaults_to_info() {
        assert_eq!(TraceMode::Interactive.default_directive(true), "info");
        assert_eq!(TraceMode::OneShot.default_directive(true), "info");
    }

    #[test]
    fn one_shot_commands_only_warn_on_stderr() {
        assert_eq!(TraceMode::OneShot.default_directive(false), "warn");
    }

    #[test]
    fn interactive_form_without_file_installs_nothing() {
        let installed = init_tracing(None, TraceMode::Interactive).expect("init");
        assert!(!installed);
    }

    #[test]
    fn trace_file_subscriber_installs_once() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("trace.log");
        let path = path.to_string_lossy().to_string();

        let installed = init_tracing(Some(&path), TraceMode::OneShot).expect("first init");
        assert!(installed);
        assert!(std::path::Path::new(&path).exists());

        let second = init_tracing(Some(&path), TraceMode::Interactive);
        assert!(second.is_err());
    }
}
