use notifier_core::{AppViewModel, StatusKind};

/// Builds the terminal lines for the current view.
pub(crate) fn view_lines(view: &AppViewModel) -> Vec<String> {
    let status_label = match view.status {
        StatusKind::Idle => "idle",
        StatusKind::Loading => "sending",
        StatusKind::Success => "success",
        StatusKind::Error => "error",
    };

    let message = if view.message_draft.is_empty() {
        "<empty>".to_string()
    } else {
        view.message_draft.clone()
    };
    let recipients = if view.recipients.is_empty() {
        "<none>".to_string()
    } else {
        view.recipients.join(", ")
    };

    let mut lines = vec![
        format!("Message: {message}"),
        format!("Recipients ({}): {recipients}", view.recipients.len()),
        format!("Roster: {} known ids", view.roster.len()),
    ];
    if view.status_message.is_empty() {
        lines.push(format!("Status: {status_label}"));
    } else {
        lines.push(format!("Status: {status_label} | {}", view.status_message));
    }
    if !view.submit_enabled {
        lines.push("Submit disabled while sending is in progress.".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_view_shows_placeholders() {
        let view = AppViewModel {
            submit_enabled: true,
            ..AppViewModel::default()
        };
        let lines = view_lines(&view);
        assert_eq!(lines[0], "Message: <empty>");
        assert_eq!(lines[1], "Recipients (0): <none>");
        assert_eq!(lines[3], "Status: idle");
    }

    #[test]
    fn sending_view_flags_the_disabled_submit() {
        let view = AppViewModel {
            status: StatusKind::Loading,
            status_message: "Sending notification...".to_string(),
            message_draft: "Hello".to_string(),
            recipients: vec!["u1".to_string(), "u2".to_string()],
            submit_enabled: false,
            ..AppViewModel::default()
        };
        let lines = view_lines(&view);
        assert_eq!(lines[1], "Recipients (2): u1, u2");
        assert_eq!(lines[3], "Status: sending | Sending notification...");
        assert!(lines
            .last()
            .unwrap()
            .contains("disabled while sending"));
    }
}
