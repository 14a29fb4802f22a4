#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator edited the message draft.
    MessageEdited(String),
    /// Operator added a recipient identifier, typed or picked from the roster.
    RecipientAdded(String),
    /// Operator removed a selected recipient identifier.
    RecipientRemoved(String),
    /// Operator asked to select every known roster identifier.
    SelectAllClicked,
    /// Operator submitted the current draft and selection.
    SubmitClicked,
    /// A roster read should be issued (startup and manual refresh).
    RosterRefreshRequested,
    /// Roster identifiers arrived from the directory.
    RosterLoaded(Vec<String>),
    /// The delivery attempt finished.
    DeliveryFinished {
        request_id: crate::RequestId,
        outcome: crate::DeliveryOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
