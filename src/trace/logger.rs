use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::trace::trace::TraceEvent;

/// Collects `TraceEvent`s during a merge and writes them as JSONL once the
/// merge has produced its output.
///
/// Nothing touches the trace file until `flush`, so a merge that fails leaves
/// no trace behind. Trace failures never abort a merge: they are logged and
/// the events are dropped.
#[derive(Debug, Default)]
pub struct TraceLogger {
    path: Option<PathBuf>,
    events: Vec<TraceEvent>,
}

impl TraceLogger {
    pub fn new(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            events: Vec::new(),
        }
    }

    /// A logger that discards every event.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn record(&mut self, event: TraceEvent) {
        if self.is_enabled() {
            self.events.push(event);
        }
    }

    /// Append every recorded event to the trace file, one JSON object per line.
    pub fn flush(self) {
        let Some(path) = self.path else {
            return;
        };

        let mut lines = String::new();
        for event in &self.events {
            match serde_json::to_string(event) {
                Ok(json) => {
                    lines.push_str(&json);
                    lines.push('\n');
                }
                Err(e) => warn!(error = %e, "failed to serialize trace event"),
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path);
        let mut file = match file {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not open trace file");
                return;
            }
        };

        if let Err(e) = file.write_all(lines.as_bytes()) {
            warn!(path = %path.display(), error = %e, "failed to write trace events");
        }
    }
}
