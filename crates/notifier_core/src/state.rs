use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Lifecycle of the current submission attempt as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Status kind plus the text rendered next to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
    pub kind: StatusKind,
    pub message: String,
}

/// Outcome of one delivery attempt, as reported back by the effect layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered { success_count: usize },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    message: String,
    recipients: Vec<String>,
    roster: Vec<String>,
    status: SubmissionStatus,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status.kind,
            status_message: self.status.message.clone(),
            message_draft: self.message.clone(),
            recipients: self.recipients.clone(),
            roster: self.roster.clone(),
            submit_enabled: !self.is_sending(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The shell re-renders only
    /// when this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub(crate) fn is_sending(&self) -> bool {
        self.status.kind == StatusKind::Loading
    }

    pub(crate) fn set_message(&mut self, text: String) {
        if self.message != text {
            self.message = text;
            self.dirty = true;
        }
    }

    /// Appends a recipient. Empty (after trimming) and already-present
    /// identifiers are silently ignored.
    pub(crate) fn add_recipient(&mut self, raw: &str) {
        let id = raw.trim();
        if id.is_empty() || self.recipients.iter().any(|existing| existing == id) {
            return;
        }
        self.recipients.push(id.to_string());
        self.dirty = true;
    }

    pub(crate) fn remove_recipient(&mut self, id: &str) {
        let before = self.recipients.len();
        self.recipients.retain(|existing| existing != id);
        if self.recipients.len() != before {
            self.dirty = true;
        }
    }

    /// Appends every roster identifier not already selected, in roster
    /// order. Returns how many were added.
    pub(crate) fn select_all_from_roster(&mut self) -> usize {
        let missing: Vec<String> = self
            .roster
            .iter()
            .filter(|id| !self.recipients.contains(id))
            .cloned()
            .collect();
        let added = missing.len();
        if added > 0 {
            self.recipients.extend(missing);
            self.dirty = true;
        }
        added
    }

    pub(crate) fn set_roster(&mut self, roster: Vec<String>) {
        if self.roster != roster {
            self.roster = roster;
            self.dirty = true;
        }
    }

    pub(crate) fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = SubmissionStatus {
            kind,
            message: message.into(),
        };
        self.dirty = true;
    }

    /// Allocates the id for a new delivery attempt and records it as the
    /// one in flight. Ids start at 1.
    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.next_request_id
    }

    /// Applies a finished delivery. Completions that do not match the
    /// in-flight attempt are dropped.
    pub(crate) fn apply_delivery(&mut self, request_id: RequestId, outcome: DeliveryOutcome) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        match outcome {
            DeliveryOutcome::Delivered { success_count } => {
                self.set_status(
                    StatusKind::Success,
                    format!("Notification sent to {success_count} users!"),
                );
                // Keep the recipient selection; only the draft is spent.
                self.message.clear();
            }
            DeliveryOutcome::Failed { message } => {
                self.set_status(StatusKind::Error, message);
            }
        }
    }
}
