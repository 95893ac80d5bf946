//! UI rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::{App, Focus, Popup, View};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_DATA_TEXT: &str = "No data available";
pub const COPY_BUTTON_TEXT: &str = "Copy to Clipboard";
pub const COPIED_TEXT: &str = "Password copied to clipboard!";

const CARD_WIDTH: u16 = 60;

/// Color palette that respects --no-color
struct Colors;

impl Colors {
    fn enabled() -> bool {
        console::colors_enabled()
    }

    fn pick(color: Color) -> Color {
        if Self::enabled() { color } else { Color::Reset }
    }

    fn cyan() -> Color {
        Self::pick(Color::Cyan)
    }

    fn yellow() -> Color {
        Self::pick(Color::Yellow)
    }

    fn green() -> Color {
        Self::pick(Color::Green)
    }

    fn red() -> Color {
        Self::pick(Color::Red)
    }

    fn blue() -> Color {
        Self::pick(Color::Blue)
    }

    fn gray() -> Color {
        Self::pick(Color::Gray)
    }

    fn dark_gray() -> Color {
        Self::pick(Color::DarkGray)
    }

    fn white() -> Color {
        Self::pick(Color::White)
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    match app.view() {
        View::Loading => render_loading(frame, area),
        View::Error => render_error(app, frame, area),
        View::Ready => render_ready(app, frame, area),
    }

    match app.popup {
        Popup::Help => render_help_popup(frame),
        Popup::Copied => render_copied_popup(frame),
        Popup::None => {}
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(LOADING_TEXT)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Colors::gray())
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(loading, vertical_center(area, 1));
}

fn render_error(app: &App, frame: &mut Frame, area: Rect) {
    let message = app.error_message.as_deref().unwrap_or_default();

    let error = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Colors::red()));
    let height = rendered_height(&error, area.width);

    frame.render_widget(error, vertical_center(area, height));
}

fn render_ready(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

    let card_width = CARD_WIDTH.min(chunks[0].width);
    let inner_width = card_width.saturating_sub(4);
    let password_text = app
        .password
        .as_ref()
        .map(|p| p.random_password.as_str())
        .filter(|p| !p.is_empty());
    let password = match password_text {
        Some(p) => Paragraph::new(p)
            .wrap(Wrap { trim: false })
            .style(
                Style::default()
                    .fg(Colors::green())
                    .add_modifier(Modifier::BOLD),
            ),
        None => Paragraph::new(NO_DATA_TEXT).style(Style::default().fg(Colors::dark_gray())),
    };
    let password_height = rendered_height(&password, inner_width);

    // label, field, hint, gap, password, gap, button + borders and padding
    let card_height = (6 + password_height + 4).min(chunks[0].height);
    let card = centered_rect_fixed(card_width, card_height, chunks[0]);

    let block = Block::default()
        .title(" Password Generator ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Colors::cyan()));
    let inner = block.inner(card).inner(Margin::new(1, 1));
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Label
            Constraint::Length(1),               // Length field
            Constraint::Length(1),               // Validation hint
            Constraint::Length(1),               // Gap
            Constraint::Length(password_height), // Password
            Constraint::Length(1),               // Gap
            Constraint::Length(1),               // Copy button
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Password Length:").style(Style::default().fg(Colors::white())),
        rows[0],
    );

    app.length_area = rows[1];
    render_length_field(app, frame, rows[1]);

    if let Some(ref hint) = app.length_error {
        frame.render_widget(
            Paragraph::new(hint.as_str()).style(Style::default().fg(Colors::yellow())),
            rows[2],
        );
    }

    frame.render_widget(password, rows[4]);

    let button_label = format!(" {} ", COPY_BUTTON_TEXT);
    let button_width = (button_label.chars().count() as u16).min(rows[6].width);
    let button_area = Rect::new(
        rows[6].x + (rows[6].width.saturating_sub(button_width)) / 2,
        rows[6].y,
        button_width,
        rows[6].height,
    );
    app.copy_button_area = button_area;

    let button_style = if app.focus == Focus::CopyButton {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::blue())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Colors::blue()).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(button_label).style(button_style), button_area);

    render_keybindings(frame, chunks[1]);
}

fn render_length_field(app: &App, frame: &mut Frame, area: Rect) {
    let field_style = Style::default().bg(Colors::dark_gray()).fg(Colors::white());

    let line = if app.focus == Focus::Length {
        // Cursor rendering (chars, not bytes)
        let char_count = app.length_input.chars().count();
        let cursor_pos = app.cursor.min(char_count);
        let before: String = app.length_input.chars().take(cursor_pos).collect();
        let cursor_char = app.length_input.chars().nth(cursor_pos).unwrap_or(' ');
        let after_cursor: String = app.length_input.chars().skip(cursor_pos + 1).collect();
        Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char.to_string(),
                Style::default().bg(Colors::white()).fg(Color::Black),
            ),
            Span::raw(after_cursor),
        ])
    } else {
        Line::from(app.length_input.as_str())
    };

    frame.render_widget(Paragraph::new(line).style(field_style), area);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let bindings = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Colors::yellow())),
        Span::raw(" Focus  "),
        Span::styled("↑/↓", Style::default().fg(Colors::yellow())),
        Span::raw(" Length  "),
        Span::styled("c", Style::default().fg(Colors::yellow())),
        Span::raw(" Copy  "),
        Span::styled("r", Style::default().fg(Colors::yellow())),
        Span::raw(" Regenerate  "),
        Span::styled("?", Style::default().fg(Colors::yellow())),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Colors::yellow())),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(
        Paragraph::new(bindings).style(Style::default().fg(Colors::dark_gray())),
        area,
    );
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Colors::yellow())),
            Span::raw(desc),
        ])
    };
    let heading = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Colors::cyan()),
        )])
    };

    let help_text = vec![
        heading("Length"),
        Line::from(""),
        key("  0-9    ", "Edit length"),
        key("  ↑/+    ", "Increase length"),
        key("  ↓/-    ", "Decrease length"),
        key("  Tab    ", "Switch between field and button"),
        Line::from(""),
        heading("Password"),
        Line::from(""),
        key("  c      ", "Copy to clipboard"),
        key("  Enter  ", "Copy (when the button is focused)"),
        key("  r      ", "Generate a new password"),
        Line::from(""),
        heading("General"),
        Line::from(""),
        key("  Esc    ", "Dismiss an error"),
        key("  q      ", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "       Press any key to close",
            Style::default().fg(Colors::dark_gray()),
        )]),
    ];

    let help_block = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::cyan())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help_block, area);
}

fn render_copied_popup(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 6, frame.area());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            COPIED_TEXT,
            Style::default()
                .fg(Colors::green())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Colors::dark_gray()),
        )),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Copied ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Colors::green())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Rows `paragraph` occupies once wrapped at `width`, at least one
fn rendered_height(paragraph: &Paragraph, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    paragraph.line_count(width).clamp(1, u16::MAX as usize) as u16
}

/// Full-width strip of `height` rows centered vertically in `r`
fn vertical_center(r: Rect, height: u16) -> Rect {
    let height = height.min(r.height);
    Rect::new(r.x, r.y + (r.height - height) / 2, r.width, height)
}

fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
