//! Clipboard access

use crate::error::{PassfetchError, Result};

/// Destination for copied passwords
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard. A fresh handle is opened for every copy so that a
/// missing clipboard (headless session, no display) only fails the copy.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    hold: bool,
}

impl SystemClipboard {
    /// For short-lived processes. On X11 and Wayland the copying process
    /// owns the selection, so `set_text` blocks and keeps serving it until
    /// something else is copied. Other platforms return right away.
    pub fn holding() -> Self {
        Self { hold: true }
    }

    pub fn holds_selection(&self) -> bool {
        self.hold
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PassfetchError::ClipboardUnavailable(e.to_string()))?;

        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))]
        if self.hold {
            use arboard::SetExtLinux;

            tracing::debug!("Serving clipboard until its contents are replaced");
            return clipboard
                .set()
                .wait()
                .text(text.to_string())
                .map_err(|e| PassfetchError::ClipboardCopyFailed(e.to_string()));
        }

        clipboard
            .set_text(text.to_string())
            .map_err(|e| PassfetchError::ClipboardCopyFailed(e.to_string()))
    }
}

/// Copy `password` unless it is empty
pub fn copy_password(sink: &mut dyn ClipboardSink, password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(PassfetchError::NothingToCopy);
    }
    sink.set_text(password)?;
    tracing::info!("Copied password ({} chars) to clipboard", password.chars().count());
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every copy. Clones share the same record.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingClipboard {
        pub copied: Arc<Mutex<Vec<String>>>,
        pub fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn copied(&self) -> Vec<String> {
            self.copied.lock().unwrap().clone()
        }
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(PassfetchError::ClipboardUnavailable(
                    "permission denied".to_string(),
                ));
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
