//! TUI command - interactive password view

use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use crate::api::ApiClient;
use crate::clipboard::SystemClipboard;
use crate::error::{PassfetchError, Result};
use crate::settings::Settings;
use crate::tui::ui;
use crate::tui::{App, Event, EventHandler, TerminalGuard, enter_terminal, install_panic_hook};

#[derive(Debug, Args)]
pub struct TuiCommand;

impl TuiCommand {
    pub async fn run(&self, settings: Settings) -> Result<()> {
        let length = settings.length;
        let source = Arc::new(ApiClient::new(settings)?);

        install_panic_hook();

        let mut terminal = enter_terminal().map_err(PassfetchError::TerminalInit)?;
        let _guard = TerminalGuard;

        let mut app = App::new(length, source, Box::new(SystemClipboard::default()));
        let mut events = EventHandler::new(Duration::from_millis(250));
        app.set_event_tx(events.message_tx());

        // Initial request, like a component fetching on mount
        app.spawn_fetch(events.message_tx());

        while app.running {
            terminal
                .draw(|frame| ui::render(&mut app, frame))
                .map_err(PassfetchError::Render)?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => app.handle_key(key),
                    Event::Mouse(mouse) => app.handle_mouse(mouse),
                    Event::Tick => {}
                    Event::Message(msg) => app.handle_message(msg),
                }
            }
        }

        tracing::debug!("Leaving password view");
        Ok(())
    }
}
