use notifier_core::Msg;

/// One parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellEvent {
    /// Feed a message through the core update loop.
    Dispatch(Msg),
    /// Reprint the current view regardless of the dirty flag.
    Redraw,
    ShowHelp,
    Quit,
    /// Input that matched no command; carries the offending word.
    Unknown(String),
}

pub(crate) const HELP_TEXT: &str = "\
Commands:
  message <text>   set the notification message
  add <id>         select a recipient identifier
  remove <id>      deselect a recipient identifier
  all              select every roster identifier
  send             submit the notification
  roster           refresh the roster from the directory
  show             reprint the current state
  help             show this help
  quit             exit";

/// Parses one input line. Returns `None` for blank lines.
pub(crate) fn parse_line(line: &str) -> Option<ShellEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let event = match command {
        "message" | "msg" | "m" => ShellEvent::Dispatch(Msg::MessageEdited(rest.to_string())),
        "add" | "a" => ShellEvent::Dispatch(Msg::RecipientAdded(rest.to_string())),
        "remove" | "rm" => ShellEvent::Dispatch(Msg::RecipientRemoved(rest.to_string())),
        "all" => ShellEvent::Dispatch(Msg::SelectAllClicked),
        "send" | "s" => ShellEvent::Dispatch(Msg::SubmitClicked),
        "roster" => ShellEvent::Dispatch(Msg::RosterRefreshRequested),
        "show" => ShellEvent::Redraw,
        "help" | "?" => ShellEvent::ShowHelp,
        "quit" | "exit" | "q" => ShellEvent::Quit,
        other => ShellEvent::Unknown(other.to_string()),
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn message_keeps_the_full_remainder() {
        assert_eq!(
            parse_line("message Server maintenance at 22:00"),
            Some(ShellEvent::Dispatch(Msg::MessageEdited(
                "Server maintenance at 22:00".to_string()
            )))
        );
    }

    #[test]
    fn add_and_remove_carry_the_identifier() {
        assert_eq!(
            parse_line("add u1"),
            Some(ShellEvent::Dispatch(Msg::RecipientAdded("u1".to_string())))
        );
        assert_eq!(
            parse_line("remove u1"),
            Some(ShellEvent::Dispatch(Msg::RecipientRemoved("u1".to_string())))
        );
    }

    #[test]
    fn bare_commands_map_to_their_events() {
        assert_eq!(
            parse_line("all"),
            Some(ShellEvent::Dispatch(Msg::SelectAllClicked))
        );
        assert_eq!(
            parse_line("send"),
            Some(ShellEvent::Dispatch(Msg::SubmitClicked))
        );
        assert_eq!(
            parse_line("roster"),
            Some(ShellEvent::Dispatch(Msg::RosterRefreshRequested))
        );
        assert_eq!(parse_line("show"), Some(ShellEvent::Redraw));
        assert_eq!(parse_line("help"), Some(ShellEvent::ShowHelp));
        assert_eq!(parse_line("quit"), Some(ShellEvent::Quit));
    }

    #[test]
    fn unknown_input_reports_the_command_word() {
        assert_eq!(
            parse_line("launch everything"),
            Some(ShellEvent::Unknown("launch".to_string()))
        );
    }
}
