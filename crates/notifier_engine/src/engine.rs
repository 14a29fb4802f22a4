use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use notifier_logging::notifier_debug;

use crate::delivery::{GatewaySettings, HttpPushGateway, PushGateway};
use crate::roster::{HttpRosterDirectory, RosterDirectory, RosterSettings};
use crate::{EngineEvent, PushBatch, RequestId};

/// Endpoint and timeout configuration for both external collaborators.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub gateway: GatewaySettings,
    pub roster: RosterSettings,
}

enum EngineCommand {
    SendPush {
        request_id: RequestId,
        batch: PushBatch,
    },
    LoadRoster,
}

/// Bridge between the synchronous shell and the async HTTP collaborators.
///
/// Commands are queued onto a background thread that owns a tokio runtime;
/// completions come back through `try_recv`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let gateway = Arc::new(HttpPushGateway::new(config.gateway));
        let roster = Arc::new(HttpRosterDirectory::new(config.roster));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let roster = roster.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), roster.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn send_push(&self, request_id: RequestId, batch: PushBatch) {
        let _ = self.cmd_tx.send(EngineCommand::SendPush { request_id, batch });
    }

    pub fn load_roster(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadRoster);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let guard = self.event_rx.lock().ok()?;
        guard.try_recv().ok()
    }
}

async fn handle_command(
    gateway: &dyn PushGateway,
    roster: &dyn RosterDirectory,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::SendPush { request_id, batch } => {
            notifier_debug!(
                "SendPush request_id={} recipients={}",
                request_id,
                batch.user_ids.len()
            );
            let result = gateway.send(&batch).await;
            let _ = event_tx.send(EngineEvent::DeliveryCompleted { request_id, result });
        }
        EngineCommand::LoadRoster => {
            let result = roster.fetch_ids().await;
            let _ = event_tx.send(EngineEvent::RosterFetched { result });
        }
    }
}
