//! One JSON record per agent call, plus a final session summary, written
//! under `<trace_root>/<query_id>/`.

use crate::atomic_write::write_json_atomic;
use crate::error::TraceError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct IterationRecord {
    pub prompt: String,
    pub response: String,
    pub validation_result: String,
    pub duration_ms: u64,
    pub retry_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub mode: String,
    pub iterations: u32,
    pub reject_count: u32,
    pub warnings: Vec<String>,
    pub final_confidence: String,
}

pub struct IterationLogger {
    trace_root: PathBuf,
    query_id: String,
}

impl IterationLogger {
    pub fn new(trace_root: impl Into<PathBuf>, query_id: impl Into<String>) -> Self {
        Self { trace_root: trace_root.into(), query_id: query_id.into() }
    }

    fn session_dir(&self) -> PathBuf {
        self.trace_root.join(&self.query_id)
    }

    pub async fn record_agent_call(
        &self,
        iteration: u32,
        agent: &str,
        record: &IterationRecord,
    ) -> Result<(), TraceError> {
        let path = self.session_dir().join(format!("iteration_{iteration}_{agent}.json"));
        let value = serde_json::to_value(record)?;
        write_json_atomic(&path, &value).await
    }

    pub async fn record_session_summary(&self, summary: &SessionSummary) -> Result<(), TraceError> {
        let path = self.session_dir().join("session_summary.json");
        let value = serde_json::to_value(summary)?;
        write_json_atomic(&path, &value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_per_iteration_record_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let logger = IterationLogger::new(dir.path(), "q-1");

        let record = IterationRecord {
            prompt: "p".to_string(),
            response: "r".to_string(),
            validation_result: "ok".to_string(),
            duration_ms: 120,
            retry_count: 0,
        };
        logger.record_agent_call(1, "analyst", &record).await.unwrap();

        let path = dir.path().join("q-1").join("iteration_1_analyst.json");
        assert!(path.exists());
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("\"duration_ms\": 120"));

        let summary = SessionSummary {
            mode: "discovery".to_string(),
            iterations: 2,
            reject_count: 1,
            warnings: vec!["warn".to_string()],
            final_confidence: "Medium".to_string(),
        };
        logger.record_session_summary(&summary).await.unwrap();
        assert!(dir.path().join("q-1").join("session_summary.json").exists());
    }
}
