//! Full-frame rendering tests

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use crate::widgets::{APP_TITLE, VERSION_BADGE};
use srvctl_app::{process_message, InputKey, Message, View};

fn draw(term: &mut TestTerminal, state: &mut srvctl_app::AppState) {
    term.draw_with(|frame| view(frame, state));
}

fn type_and_submit(state: &mut srvctl_app::AppState, text: &str) {
    for c in text.chars() {
        process_message(state, Message::Key(InputKey::Char(c)));
    }
    process_message(state, Message::Key(InputKey::Enter));
}

#[test]
fn test_dashboard_frame() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains(APP_TITLE));
    assert!(term.buffer_contains("2 of 4 online"));
    assert!(term.buffer_contains("Connected to Production Server"));
    assert!(term.buffer_contains(VERSION_BADGE));
    assert!(term.buffer_contains("Commands today"));
}

#[test]
fn test_every_view_renders() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();

    let expected = [
        (View::Dashboard, "Recent events"),
        (View::Terminal, "root@production-server - bash"),
        (View::Connections, "open terminal"),
        (View::Logs, "Event log"),
        (View::Monitoring, "Uptime: 45d 12h"),
        (View::History, "History (2)"),
        (View::Settings, "Notifications"),
    ];
    for (view_id, text) in expected {
        process_message(&mut state, Message::SelectView(view_id));
        draw(&mut term, &mut state);
        assert!(term.buffer_contains(text), "{:?} missing {text:?}", view_id);
    }
}

#[test]
fn test_submitted_command_appears_in_terminal_and_log() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectView(View::Terminal));
    type_and_submit(&mut state, "uptime");
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("root@srv-01:~$ uptime"));
    assert!(term.buffer_contains("load average"));

    process_message(&mut state, Message::SelectView(View::Logs));
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("[srv-01] Command executed: uptime"));
}

#[test]
fn test_activating_connection_switches_terminal_target() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectView(View::Connections));
    process_message(&mut state, Message::Key(InputKey::Down));
    process_message(&mut state, Message::Key(InputKey::Enter));
    draw(&mut term, &mut state);

    assert_eq!(state.view, View::Terminal);
    assert!(term.buffer_contains("Connected to Dev Machine"));
    assert!(term.buffer_contains("root@dev-machine - bash"));
}

#[test]
fn test_cleared_log_renders_empty() {
    let mut term = TestTerminal::new();
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectView(View::Logs));
    process_message(&mut state, Message::Key(InputKey::Char('c')));
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Log is empty"));

    process_message(&mut state, Message::SelectView(View::Dashboard));
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("No events"));
}

#[test]
fn test_compact_layout_hides_sidebar_labels() {
    let mut term = TestTerminal::compact();
    let mut state = create_test_state();
    process_message(&mut state, Message::SelectView(View::Monitoring));
    draw(&mut term, &mut state);

    assert!(!term.buffer_contains(APP_TITLE));
    // Header still names the view
    assert!(term.buffer_contains("Monitoring"));
}

#[test]
fn test_every_view_survives_tiny_terminals() {
    let mut state = create_test_state();
    for (width, height) in [(200, 2), (1, 1), (60, 24)] {
        let mut term = TestTerminal::with_size(width, height);
        for view_id in View::ALL {
            process_message(&mut state, Message::SelectView(view_id));
            draw(&mut term, &mut state);
        }
        assert_eq!(term.area().width, width);
    }
}
