//! Forwards LogPort calls to the global `tracing` subscriber.

use crate::ports::LogPort;
use tracing::{Level, debug, error, info, trace, warn};

/// Sink backed by `tracing`. Events use target `ml_signal::processor`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogPort for TracingSink {
    fn log(&self, level: Level, message: &str) {
        // tracing macros need a const level.
        match level {
            Level::ERROR => error!(target: "ml_signal::processor", "{}", message),
            Level::WARN => warn!(target: "ml_signal::processor", "{}", message),
            Level::INFO => info!(target: "ml_signal::processor", "{}", message),
            Level::DEBUG => debug!(target: "ml_signal::processor", "{}", message),
            _ => trace!(target: "ml_signal::processor", "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Shared buffer handed to the fmt layer as its writer.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_levels_reach_tracing() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let sink = TracingSink::new();
            sink.log(Level::ERROR, "schema rejected");
            sink.log(Level::WARN, "odd input");
            sink.log(Level::INFO, "generating signal");
            sink.log(Level::DEBUG, "signal result");
            sink.log(Level::TRACE, "filtered out");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("ERROR ml_signal::processor: schema rejected"));
        assert!(lines[1].contains("WARN ml_signal::processor: odd input"));
        assert!(lines[2].contains("INFO ml_signal::processor: generating signal"));
        assert!(lines[3].contains("DEBUG ml_signal::processor: signal result"));
        assert!(!output.contains("filtered out"));
    }
}
