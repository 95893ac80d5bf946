//! Application state and message handling

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::api::PasswordSource;
use crate::clipboard::{ClipboardSink, copy_password};
use crate::error::{PassfetchError, UNKNOWN_ERROR_MESSAGE};
use crate::password::{PasswordResult, RequestedLength};
use crate::tui::event::Event;

/// Which control receives editing keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    CopyButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
    /// Acknowledgment after a successful copy, closed by any key
    Copied,
}

/// The three mutually exclusive screens, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Error,
    Ready,
}

/// Messages posted back to the app by fetch tasks
#[derive(Debug)]
pub enum Message {
    PasswordFetched {
        request_id: u64,
        password: PasswordResult,
    },
    FetchFailed {
        request_id: u64,
        message: String,
    },
}

pub struct App {
    pub running: bool,
    pub focus: Focus,
    pub popup: Popup,

    /// Length used for the most recent request
    pub length: RequestedLength,
    /// Text of the length field, may not be a valid length
    pub length_input: String,
    /// Cursor position in `length_input`, in chars
    pub cursor: usize,
    /// Validation hint for `length_input`
    pub length_error: Option<String>,

    pub loading: bool,
    pub error_message: Option<String>,
    pub password: Option<PasswordResult>,

    /// Incremented on each dispatch; responses with an older id are dropped
    pub current_request_id: u64,

    pub event_tx: Option<mpsc::UnboundedSender<Event>>,

    /// Layout areas for mouse click detection (updated during render)
    pub length_area: Rect,
    pub copy_button_area: Rect,

    source: Arc<dyn PasswordSource>,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(
        length: RequestedLength,
        source: Arc<dyn PasswordSource>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let length_input = length.to_string();
        let cursor = length_input.chars().count();

        Self {
            running: true,
            focus: Focus::Length,
            popup: Popup::None,
            length,
            length_input,
            cursor,
            length_error: None,
            loading: true,
            error_message: None,
            password: None,
            current_request_id: 0,
            event_tx: None,
            length_area: Rect::default(),
            copy_button_area: Rect::default(),
            source,
            clipboard,
        }
    }

    pub fn set_event_tx(&mut self, tx: mpsc::UnboundedSender<Event>) {
        self.event_tx = Some(tx);
    }

    pub fn view(&self) -> View {
        if self.loading {
            View::Loading
        } else if self.error_message.is_some() {
            View::Error
        } else {
            View::Ready
        }
    }

    /// Request a password for the current length in the background
    pub fn spawn_fetch(&mut self, tx: mpsc::UnboundedSender<Event>) {
        self.current_request_id = self.current_request_id.wrapping_add(1);
        let request_id = self.current_request_id;

        self.loading = true;
        self.error_message = None;

        let source = Arc::clone(&self.source);
        let length = self.length;
        tracing::debug!("Dispatching request {} for length {}", request_id, length);

        tokio::spawn(async move {
            // Run the fetch in its own task so a panic surfaces as a JoinError
            let outcome = tokio::spawn(async move { source.fetch(length).await }).await;
            let message = match outcome {
                Ok(Ok(password)) => Message::PasswordFetched {
                    request_id,
                    password,
                },
                Ok(Err(e)) => Message::FetchFailed {
                    request_id,
                    message: e.user_message(),
                },
                Err(e) => {
                    tracing::error!("Password request {} aborted: {}", request_id, e);
                    Message::FetchFailed {
                        request_id,
                        message: UNKNOWN_ERROR_MESSAGE.to_string(),
                    }
                }
            };
            let _ = tx.send(Event::Message(message));
        });
    }

    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::PasswordFetched {
                request_id,
                password,
            } => {
                if request_id != self.current_request_id {
                    tracing::debug!("Dropping stale response for request {}", request_id);
                    return;
                }
                self.password = Some(password);
                self.loading = false;
            }
            Message::FetchFailed {
                request_id,
                message,
            } => {
                if request_id != self.current_request_id {
                    tracing::debug!("Dropping stale error for request {}", request_id);
                    return;
                }
                tracing::warn!("Password request {} failed: {}", request_id, message);
                self.error_message = Some(message);
                self.password = None;
                self.loading = false;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        // Any key closes a popup
        if self.popup != Popup::None {
            self.popup = Popup::None;
            return;
        }

        match self.view() {
            View::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.running = false;
                }
            }
            View::Error => match key.code {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Esc | KeyCode::Enter => self.error_message = None,
                KeyCode::Char('r') => self.refresh(),
                _ => {}
            },
            View::Ready => self.handle_ready_key(key),
        }
    }

    fn handle_ready_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Length => Focus::CopyButton,
                    Focus::CopyButton => Focus::Length,
                };
            }
            KeyCode::Char('?') => {
                self.popup = Popup::Help;
            }
            KeyCode::Char('c') => {
                self.copy_to_clipboard();
            }
            KeyCode::Char('r') => {
                self.refresh();
            }
            KeyCode::Enter => {
                if self.focus == Focus::CopyButton {
                    self.copy_to_clipboard();
                }
            }
            KeyCode::Up | KeyCode::Char('+') => {
                self.step_length(1);
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.step_length(-1);
            }
            _ if self.focus == Focus::Length => self.handle_length_edit(key),
            _ => {}
        }
    }

    fn handle_length_edit(&mut self, key: KeyEvent) {
        let mut text = self.length_input.clone();
        let len = text.chars().count();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits are ASCII so char and byte indices agree
                text.insert(self.cursor.min(len), c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return;
                }
                text.remove(self.cursor - 1);
                self.cursor -= 1;
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return;
                }
                text.remove(self.cursor);
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                return;
            }
            KeyCode::Home => {
                self.cursor = 0;
                return;
            }
            KeyCode::End => {
                self.cursor = len;
                return;
            }
            _ => return,
        }

        self.set_length_text(&text);
    }

    /// Replace the length field's text. A valid length that differs from
    /// the current one dispatches a new request.
    pub fn set_length_text(&mut self, text: &str) {
        self.length_input = text.to_string();
        self.cursor = self.cursor.min(self.length_input.chars().count());

        match text.parse::<RequestedLength>() {
            Ok(length) => {
                self.length_error = None;
                if length != self.length {
                    self.length = length;
                    self.refresh();
                }
            }
            Err(e) => {
                tracing::debug!("Not requesting: {}", e);
                self.length_error = Some(e.to_string());
            }
        }
    }

    fn step_length(&mut self, delta: i64) {
        let base = self
            .length_input
            .parse::<RequestedLength>()
            .unwrap_or(self.length);
        let text = base.step(delta).to_string();
        self.cursor = text.chars().count();
        self.set_length_text(&text);
    }

    /// Copy the current password. Failures are logged, never shown.
    fn copy_to_clipboard(&mut self) {
        let Some(password) = self.password.as_ref() else {
            return;
        };

        match copy_password(self.clipboard.as_mut(), &password.random_password) {
            Ok(()) => self.popup = Popup::Copied,
            Err(PassfetchError::NothingToCopy) => {}
            Err(e) => tracing::error!("Failed to copy: {}", e),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.popup != Popup::None {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.popup = Popup::None;
            }
            return;
        }

        if self.view() != View::Ready {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);
                if self.is_in_area(x, y, self.copy_button_area) {
                    self.focus = Focus::CopyButton;
                    self.copy_to_clipboard();
                } else if self.is_in_area(x, y, self.length_area) {
                    self.focus = Focus::Length;
                }
            }
            MouseEventKind::ScrollUp => self.step_length(1),
            MouseEventKind::ScrollDown => self.step_length(-1),
            _ => {}
        }
    }

    fn is_in_area(&self, x: u16, y: u16, area: Rect) -> bool {
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }

    /// Request a fresh password for the current length
    fn refresh(&mut self) {
        if let Some(tx) = &self.event_tx {
            self.spawn_fetch(tx.clone());
        }
    }
}
