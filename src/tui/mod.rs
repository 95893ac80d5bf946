//! Terminal user interface
//!
//! A single password view: a length field, the generated password and a
//! copy button.

mod app;
mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus, Message, Popup, View};
pub use event::{Event, EventHandler};
pub use terminal::{TerminalGuard, enter_terminal, install_panic_hook, leave_terminal};
