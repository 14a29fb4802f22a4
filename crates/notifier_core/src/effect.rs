#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendPush {
        request_id: crate::RequestId,
        user_ids: Vec<String>,
        message: String,
    },
    LoadRoster,
}
