use crate::StatusKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: StatusKind,
    pub status_message: String,
    pub message_draft: String,
    pub recipients: Vec<String>,
    pub roster: Vec<String>,
    pub submit_enabled: bool,
    pub dirty: bool,
}
