use crate::{AppState, Effect, Msg, StatusKind};

/// Status text for a submit attempt with an empty (after trimming) draft.
pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty!";
/// Status text for a submit attempt with no recipients selected.
pub const EMPTY_SELECTION_ERROR: &str = "Select at least one user!";
/// Status text shown while a delivery request is in flight.
pub const SENDING_STATUS: &str = "Sending notification...";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::MessageEdited(text) => {
            state.set_message(text);
            Vec::new()
        }
        Msg::RecipientAdded(id) => {
            state.add_recipient(&id);
            Vec::new()
        }
        Msg::RecipientRemoved(id) => {
            state.remove_recipient(&id);
            Vec::new()
        }
        Msg::SelectAllClicked => {
            state.select_all_from_roster();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // A request is already in flight; the submit affordance is
            // disabled, so a repeat submit is dropped here as well.
            if state.is_sending() {
                return (state, Vec::new());
            }
            if state.message().trim().is_empty() {
                state.set_status(StatusKind::Error, EMPTY_MESSAGE_ERROR);
                Vec::new()
            } else if state.recipients().is_empty() {
                state.set_status(StatusKind::Error, EMPTY_SELECTION_ERROR);
                Vec::new()
            } else {
                state.set_status(StatusKind::Loading, SENDING_STATUS);
                let request_id = state.begin_submission();
                vec![Effect::SendPush {
                    request_id,
                    user_ids: state.recipients().to_vec(),
                    message: state.message().to_string(),
                }]
            }
        }
        Msg::RosterRefreshRequested => vec![Effect::LoadRoster],
        Msg::RosterLoaded(ids) => {
            state.set_roster(ids);
            Vec::new()
        }
        Msg::DeliveryFinished {
            request_id,
            outcome,
        } => {
            state.apply_delivery(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
