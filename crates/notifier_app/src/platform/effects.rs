use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use notifier_core::{DeliveryOutcome, Effect, Msg};
use notifier_engine::{
    DeliveryReceipt, EngineConfig, EngineEvent, EngineHandle, FailureKind, GatewayError, PushBatch,
};
use notifier_logging::{notifier_info, notifier_warn};

use super::commands::ShellEvent;

/// Fallback status text when a failure carries no collaborator message.
const DELIVERY_FALLBACK_ERROR: &str = "Failed to send notification";

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(config: EngineConfig, event_tx: mpsc::Sender<ShellEvent>) -> Self {
        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendPush {
                    request_id,
                    user_ids,
                    message,
                } => {
                    notifier_info!(
                        "SendPush request_id={} recipients={} message_len={}",
                        request_id,
                        user_ids.len(),
                        message.len()
                    );
                    self.engine
                        .send_push(request_id, PushBatch { user_ids, message });
                }
                Effect::LoadRoster => {
                    self.engine.load_roster();
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<ShellEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::DeliveryCompleted { request_id, result } => {
                        Msg::DeliveryFinished {
                            request_id,
                            outcome: map_delivery_result(result),
                        }
                    }
                    EngineEvent::RosterFetched { result } => match result {
                        Ok(ids) => Msg::RosterLoaded(ids),
                        Err(err) => {
                            // The roster is a convenience; a failed read
                            // leaves the selection workflow untouched.
                            notifier_warn!("Roster fetch failed: {}", err);
                            Msg::NoOp
                        }
                    },
                };
                if event_tx.send(ShellEvent::Dispatch(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_delivery_result(result: Result<DeliveryReceipt, GatewayError>) -> DeliveryOutcome {
    match result {
        Ok(receipt) => DeliveryOutcome::Delivered {
            success_count: receipt.success_count,
        },
        Err(err) => {
            notifier_warn!("Delivery failed: {}", err);
            let message = match err.kind {
                // The collaborator's own explanation is surfaced verbatim.
                FailureKind::Rejected => err.message,
                _ => DELIVERY_FALLBACK_ERROR.to_string(),
            };
            DeliveryOutcome::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_maps_to_delivered_count() {
        let outcome = map_delivery_result(Ok(DeliveryReceipt {
            success_count: 2,
            total: 3,
        }));
        assert_eq!(outcome, DeliveryOutcome::Delivered { success_count: 2 });
    }

    #[test]
    fn rejection_surfaces_the_collaborator_message() {
        let err = GatewayError {
            kind: FailureKind::Rejected,
            message: "provider down".to_string(),
        };
        assert_eq!(
            map_delivery_result(Err(err)),
            DeliveryOutcome::Failed {
                message: "provider down".to_string()
            }
        );
    }

    #[test]
    fn transport_failures_use_the_generic_message() {
        let err = GatewayError {
            kind: FailureKind::Timeout,
            message: "operation timed out".to_string(),
        };
        assert_eq!(
            map_delivery_result(Err(err)),
            DeliveryOutcome::Failed {
                message: DELIVERY_FALLBACK_ERROR.to_string()
            }
        );
    }
}
