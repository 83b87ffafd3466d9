use std::sync::Arc;

use onpage_core::{Effect, Msg};
use onpage_engine::{AnalysisClient, EngineEvent, EngineHandle};
use onpage_logging::{onpage_info, onpage_warn};

/// Executes effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(client: Arc<dyn AnalysisClient>) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(client)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    request_id,
                    request,
                } => {
                    onpage_info!(
                        "SubmitAnalysis request_id={} url={} keyword={}",
                        request_id,
                        request.url(),
                        request.keyword()
                    );
                    self.engine.submit(request_id, request);
                }
            }
        }
    }

    /// Blocks for the next engine event. `None` means the engine stopped.
    pub fn next_msg(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisStarted { request_id } => Msg::AnalysisStarted { request_id },
        EngineEvent::AnalysisCompleted { request_id, result } => Msg::AnalysisFinished {
            request_id,
            result: result.map_err(|err| {
                onpage_warn!("Request {} failed: {}", request_id, err);
                err.class()
            }),
        },
    }
}
