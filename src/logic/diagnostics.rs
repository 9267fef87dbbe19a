// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Diagnostics sink injected into the consolidator.

use log::Level;

/// Log target used by [`LogDiagnostics`].
pub const LOG_TARGET: &str = "xdextract";

/// Receiver for step-by-step progress and recoverable anomalies.
pub trait Diagnostics: Send + Sync {
    fn record(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

/// Forwards every record to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{message}");
    }
}

/// Keeps records in memory so tests can assert on them.
#[cfg(test)]
#[derive(Default)]
pub struct CapturedDiagnostics {
    records: std::sync::Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl CapturedDiagnostics {
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Diagnostics for CapturedDiagnostics {
    fn record(&self, level: Level, message: &str) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}
