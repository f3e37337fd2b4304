//! Message processing
//!
//! Runs a message through the TEA update function and keeps going while
//! updates hand back follow-up messages.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::view::View;

    #[test]
    fn test_follow_up_messages_are_processed() {
        let mut state = AppState::new();
        assert_eq!(state.view, View::Dashboard);

        // Key -> NextView -> SelectView
        process_message(&mut state, Message::Key(InputKey::Tab));
        assert_eq!(state.view, View::Terminal);
    }

    #[test]
    fn test_quit_reaches_state() {
        let mut state = AppState::new();
        process_message(&mut state, Message::Key(InputKey::CharCtrl('c')));
        assert!(state.should_quit());
    }
}
