use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use notifier_core::{update, AppState, Msg};
use notifier_logging::notifier_info;

use super::commands::{self, ShellEvent};
use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let config = config::load(Path::new(config::CONFIG_FILENAME));
    notifier_info!(
        "Using push endpoint {} and roster endpoint {}",
        config.push_endpoint,
        config.roster_endpoint
    );

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let effects = EffectRunner::new(config.engine_config(), event_tx.clone());
    spawn_input_reader(event_tx);

    let mut state = AppState::new();

    println!("Push notifier. Type 'help' for commands.");
    // Populate the roster affordance before the first prompt.
    dispatch(&mut state, Msg::RosterRefreshRequested, &effects);
    render_view(&mut state, true);

    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Dispatch(msg) => {
                dispatch(&mut state, msg, &effects);
                render_view(&mut state, false);
            }
            ShellEvent::Redraw => render_view(&mut state, true),
            ShellEvent::ShowHelp => println!("{}", commands::HELP_TEXT),
            ShellEvent::Unknown(input) => {
                println!("Unknown command '{input}'. Type 'help' for commands.");
            }
            ShellEvent::Quit => break,
        }
    }

    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = commands::parse_line(&line) {
                let quitting = event == ShellEvent::Quit;
                if event_tx.send(event).is_err() || quitting {
                    return;
                }
            }
        }
        // EOF on stdin ends the session like an explicit quit.
        let _ = event_tx.send(ShellEvent::Quit);
    });
}

fn dispatch(state: &mut AppState, msg: Msg, effects: &EffectRunner) {
    let (next, pending) = update(std::mem::take(state), msg);
    *state = next;
    effects.enqueue(pending);
}

fn render_view(state: &mut AppState, force: bool) {
    let was_dirty = state.consume_dirty();
    if !(was_dirty || force) {
        return;
    }
    for line in render::view_lines(&state.view()) {
        println!("{line}");
    }
    let _ = io::stdout().flush();
}
