//! srvctl-app - Application state and orchestration for Server Control
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, [`Message`]s, and the [`handler::update`]
//! function. It also owns the mock command interpreter, the session feed and
//! configuration loading. Nothing here depends on a terminal library.

pub mod clock;
pub mod config;
pub mod feed;
pub mod handler;
pub mod input_key;
pub mod interpreter;
pub mod message;
pub mod process;
pub mod scroll_state;
pub mod settings_form;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use clock::{Clock, FixedClock, SystemClock};
pub use feed::{LogFilter, SessionFeed};
pub use handler::{handle_key, update, UpdateResult};
pub use input_key::InputKey;
pub use interpreter::CommandInterpreter;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, Submission};
pub use view::View;
