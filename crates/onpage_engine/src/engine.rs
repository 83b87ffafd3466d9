use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use onpage_core::{AnalysisRequest, RequestId};
use onpage_logging::{onpage_info, onpage_warn};

use crate::{AnalysisClient, EngineEvent};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: AnalysisRequest,
    },
}

/// Runs analysis requests on a dedicated Tokio runtime thread and hands
/// completions back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn AnalysisClient>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("onpage-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: AnalysisRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            onpage_warn!("Engine thread is gone, request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event, or `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn AnalysisClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let _ = event_tx.send(EngineEvent::AnalysisStarted { request_id });
            let result = client.analyze(&request).await;
            match &result {
                Ok(report) => onpage_info!(
                    "Request {} done: score {} for {}",
                    request_id,
                    report.score_percentage,
                    report.url
                ),
                Err(err) => onpage_warn!(
                    "Request {} failed ({:?}): {}",
                    request_id,
                    err.kind,
                    err.message
                ),
            }
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
        }
    }
}
