//! Notifier engine: HTTP collaborators and effect execution.
mod delivery;
mod engine;
mod roster;
mod types;

pub use delivery::{GatewaySettings, HttpPushGateway, PushGateway};
pub use engine::{EngineConfig, EngineHandle};
pub use roster::{HttpRosterDirectory, RosterDirectory, RosterSettings};
pub use types::{DeliveryReceipt, EngineEvent, FailureKind, GatewayError, PushBatch, RequestId};
