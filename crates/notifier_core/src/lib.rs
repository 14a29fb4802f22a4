//! Notifier core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, DeliveryOutcome, RequestId, StatusKind, SubmissionStatus};
pub use update::{update, EMPTY_MESSAGE_ERROR, EMPTY_SELECTION_ERROR, SENDING_STATUS};
pub use view_model::AppViewModel;
