//! JSON-lines driver: one message object per input line, one enriched object per output line.

use crate::domain::{DomainError, RawMessage};
use crate::ports::MessagePort;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Counts for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub rejected: usize,
}

/// Reads messages line by line and writes each enriched result as compact JSON.
///
/// Blank lines are skipped. Lines that are not UTF-8, not JSON objects, or that fail
/// validation are counted as rejected and produce no output.
pub struct JsonLinesDriver {
    port: Arc<dyn MessagePort>,
}

impl JsonLinesDriver {
    pub fn new(port: Arc<dyn MessagePort>) -> Self {
        Self { port }
    }

    /// Run until the reader hits EOF.
    ///
    /// # Errors
    /// `DomainError::Io` if reading or writing fails. Bad input lines are not errors.
    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> Result<RunSummary, DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| DomainError::Io(format!("read line: {}", e)))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!(line = line_no, error = %e, "skipping line with invalid UTF-8");
                    summary.rejected += 1;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let message = match parse_line(line) {
                Ok(m) => m,
                Err(e) => {
                    warn!(line = line_no, error = %e, "skipping unparseable line");
                    summary.rejected += 1;
                    continue;
                }
            };

            match self.port.process(message) {
                Ok(enriched) => {
                    let mut out = serde_json::to_string(&enriched)
                        .map_err(|e| DomainError::Parse(e.to_string()))?;
                    out.push('\n');
                    writer
                        .write_all(out.as_bytes())
                        .await
                        .map_err(|e| DomainError::Io(format!("write output: {}", e)))?;
                    summary.processed += 1;
                }
                Err(e) => {
                    debug!(line = line_no, error = %e, "message rejected");
                    summary.rejected += 1;
                }
            }
        }

        writer
            .flush()
            .await
            .map_err(|e| DomainError::Io(format!("flush output: {}", e)))?;

        info!(
            processed = summary.processed,
            rejected = summary.rejected,
            "input exhausted"
        );
        Ok(summary)
    }
}

fn parse_line(line: &str) -> Result<RawMessage, DomainError> {
    let value: Value = serde_json::from_str(line).map_err(|e| DomainError::Parse(e.to_string()))?;
    RawMessage::try_from(value)
        .map_err(|other| DomainError::Parse(format!("expected JSON object, got {}", other)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::MemorySink;
    use crate::adapters::model::PlaceholderModel;
    use crate::adapters::schema::FieldSchema;
    use crate::usecases::SignalService;

    fn driver() -> JsonLinesDriver {
        let service = SignalService::new(
            Arc::new(FieldSchema::new()),
            Arc::new(PlaceholderModel::new()),
            Arc::new(MemorySink::new()),
        );
        JsonLinesDriver::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_driver_enriches_valid_lines() {
        let input = "{\"symbol\":\"AAPL\"}\n\n{\"foo\":1}\n";
        let mut output = Vec::new();

        let summary = driver().run(input.as_bytes(), &mut output).await.unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 2,
                rejected: 0
            }
        );
        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                serde_json::json!({"symbol": "AAPL", "ml_signal": "BUY", "ml_confidence": 0.76}),
                serde_json::json!({"foo": 1, "ml_signal": "BUY", "ml_confidence": 0.76}),
            ]
        );
    }

    #[tokio::test]
    async fn test_driver_counts_rejects() {
        let input = "{}\nnot json\n[1,2]\n{\"symbol\":\"MSFT\"}";
        let mut output = Vec::new();

        let summary = driver().run(input.as_bytes(), &mut output).await.unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.rejected, 3);
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_driver_skips_invalid_utf8_line() {
        let mut input = b"{\"symbol\":\"AAPL\"}\n".to_vec();
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(b"{\"symbol\":\"MSFT\"}\n");
        let mut output = Vec::new();

        let summary = driver().run(input.as_slice(), &mut output).await.unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 2,
                rejected: 1
            }
        );
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("AAPL"));
        assert!(output.contains("MSFT"));
    }

    #[test]
    fn test_parse_line_requires_object() {
        assert!(parse_line(r#"{"a":1}"#).is_ok());
        assert!(matches!(parse_line("42"), Err(DomainError::Parse(_))));
    }
}
