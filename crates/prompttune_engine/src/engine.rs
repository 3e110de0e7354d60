use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{GeminiClient, ModelClient, ModelSettings};
use crate::{EngineEvent, OptimizeRequest};

enum EngineCommand {
    Optimize { request: OptimizeRequest },
}

/// Handle to the engine worker: commands in, events out. The worker
/// thread owns the async runtime so the UI thread never blocks on IO.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ModelSettings) -> Self {
        let client = Arc::new(GeminiClient::new(settings));
        Self::with_client(client)
    }

    pub fn with_client(client: Arc<dyn ModelClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn optimize(&self, request: OptimizeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Optimize { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn ModelClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Optimize { request } => {
            let result = client.optimize(&request).await;
            let _ = event_tx.send(EngineEvent::OptimizeCompleted { result });
        }
    }
}
