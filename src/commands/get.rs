use clap::Args;

use crate::api::{ApiClient, PasswordSource};
use crate::clipboard::{SystemClipboard, copy_password};
use crate::error::{PassfetchError, Result};
use crate::settings::Settings;
use crate::tui::ui::COPIED_TEXT;

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Also copy the password to the clipboard
    ///
    /// On X11 and Wayland the command keeps running to serve the clipboard
    /// until something else is copied, unless a clipboard manager takes
    /// the password over first.
    #[arg(short, long)]
    pub copy: bool,
}

impl GetCommand {
    pub async fn run(&self, settings: Settings) -> Result<()> {
        let length = settings.length;
        tracing::debug!("Fetching a single password of length {}", length);

        let client = ApiClient::new(settings)?;
        let result = client.fetch(length).await?;

        println!("{}", result.random_password);

        if self.copy {
            // Unlike the TUI, a failed copy is reported here
            let password = result.random_password;
            tokio::task::spawn_blocking(move || {
                copy_password(&mut SystemClipboard::holding(), &password)
            })
            .await
            .map_err(|e| PassfetchError::ClipboardCopyFailed(e.to_string()))??;
            eprintln!("{}", COPIED_TEXT);
        }

        Ok(())
    }
}
