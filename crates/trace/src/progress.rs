//! Forwards progress events to a caller-supplied sink without ever
//! blocking the reasoning loop: a slow or failing sink is logged and
//! dropped, never propagated.

use research_core::{ProgressEvent, ProgressSink};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const SINK_TIMEOUT: Duration = Duration::from_millis(500);

pub struct ProgressTracer {
    sink: Arc<dyn ProgressSink>,
}

impl ProgressTracer {
    pub fn new(sink: Arc<dyn ProgressSink>) -> Self {
        Self { sink }
    }

    pub async fn emit(&self, event: ProgressEvent) {
        let message_type = event.message_type;
        if tokio::time::timeout(SINK_TIMEOUT, self.sink.emit(event)).await.is_err() {
            warn!(?message_type, "progress sink did not accept event within timeout, dropping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use research_core::ProgressMessageType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink(AtomicUsize);

    #[async_trait]
    impl ProgressSink for CountingSink {
        async fn emit(&self, _event: ProgressEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn forwards_events_to_the_sink() {
        let sink = Arc::new(CountingSink(AtomicUsize::new(0)));
        let tracer = ProgressTracer::new(sink.clone());
        tracer
            .emit(ProgressEvent::new(ProgressMessageType::AnalystAnalyzing, "analyst", 1, 3, "分析中", 10))
            .await;
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);
    }
}
