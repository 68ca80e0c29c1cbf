//! Terminal demo driving the on-screen keyboard with arrow-key navigation.
//!
//! Run with: cargo run --example tui_keyboard
//!
//! Tab selects the field and brings up the keyboard, `m` simulates a mouse
//! click on the field (the keyboard stays hidden), arrows move between keys,
//! Enter presses the focused key, Esc deselects the field, Ctrl-C quits.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use osk_mini::{
    FieldBuffer, FieldEvent, FieldVisual, FocusSource, FocusTarget, KeyLabels, Keyboard,
    KeyboardHost, TextBuffer,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

const ROW_WIDTH: usize = 11;

/// Keeps the UI state the keyboard asks for
#[derive(Default)]
struct DemoHost {
    labels: HashMap<String, KeyLabels>,
    keyboard_visible: bool,
    field_editable: bool,
    field_active: bool,
    focused_key: Option<String>,
}

impl KeyboardHost for DemoHost {
    fn set_field_editable(&mut self, editable: bool) {
        self.field_editable = editable;
    }

    fn set_field_visual(&mut self, visual: FieldVisual) {
        self.field_active = visual == FieldVisual::Active;
    }

    fn request_focus(&mut self, target: FocusTarget) {
        self.focused_key = match target {
            FocusTarget::Field => None,
            FocusTarget::Key(id) => Some(id),
        };
    }

    fn set_keyboard_visible(&mut self, visible: bool) {
        self.keyboard_visible = visible;
    }

    fn render_label(&mut self, key_id: &str, labels: &KeyLabels) {
        self.labels.insert(key_id.to_string(), labels.clone());
    }
}

struct App {
    keyboard: Keyboard,
    field: FieldBuffer,
    host: DemoHost,
    cursor: usize,
    message: String,
}

impl App {
    fn new() -> Self {
        Self {
            keyboard: Keyboard::new(),
            field: FieldBuffer::new("Hello"),
            host: DemoHost::default(),
            cursor: 0,
            message: "Tab: select field, m: click field, Ctrl-C: quit".to_string(),
        }
    }

    fn handle_key(&mut self, code: CKeyCode) {
        let now = Instant::now();
        if code == CKeyCode::Esc {
            self.keyboard
                .handle_field_event(FieldEvent::Deselected, &mut self.host, now);
            self.message = "field released".to_string();
            return;
        }

        if !self.host.keyboard_visible {
            match code {
                CKeyCode::Tab | CKeyCode::Enter => {
                    self.keyboard.handle_field_event(
                        FieldEvent::Selected(FocusSource::Navigation),
                        &mut self.host,
                        now,
                    );
                    self.message = "selected with navigation".to_string();
                }
                CKeyCode::Char('m') => {
                    self.keyboard.handle_field_event(
                        FieldEvent::Selected(FocusSource::Pointer),
                        &mut self.host,
                        now,
                    );
                    self.message = "selected with pointer, keyboard suppressed".to_string();
                }
                _ => {}
            }
            return;
        }

        let last = self.keyboard.keys().len().saturating_sub(1);
        match code {
            CKeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            CKeyCode::Right => self.cursor = (self.cursor + 1).min(last),
            CKeyCode::Up => self.cursor = self.cursor.saturating_sub(ROW_WIDTH),
            CKeyCode::Down => self.cursor = (self.cursor + ROW_WIDTH).min(last),
            CKeyCode::Enter => {
                if let Some(id) = self.keyboard.keys().get(self.cursor).map(|k| k.id.clone()) {
                    let outcome = self.keyboard.press(&id, &mut self.field, &mut self.host);
                    self.message = format!("{}: {:?}", id, outcome);
                }
            }
            _ => {}
        }
        if self.host.keyboard_visible {
            self.host.focused_key = self.keyboard.keys().get(self.cursor).map(|k| k.id.clone());
        }
    }

    fn tick(&mut self) {
        self.keyboard.tick(Instant::now(), &mut self.host);
        if let Some(id) = &self.host.focused_key
            && let Some(pos) = self.keyboard.keys().iter().position(|k| &k.id == id)
        {
            self.cursor = pos;
        }
    }
}

fn field_line(field: &FieldBuffer) -> String {
    let caret = field.caret();
    let mut out = String::new();
    for (i, g) in field.as_str().graphemes(true).enumerate() {
        if i == caret {
            out.push('|');
        }
        out.push_str(g);
    }
    if caret >= field.as_str().graphemes(true).count() {
        out.push('|');
    }
    out
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(3)].as_ref())
        .split(f.size());

    let field_style = if app.host.field_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = if app.host.field_editable {
        "field (editing)"
    } else {
        "field"
    };
    let field = Paragraph::new(field_line(&app.field)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(field_style)
            .title(title),
    );
    f.render_widget(field, chunks[0]);

    if app.host.keyboard_visible {
        let mut lines = vec![];
        for (row, keys) in app.keyboard.keys().chunks(ROW_WIDTH).enumerate() {
            let mut spans = vec![];
            for (col, key) in keys.iter().enumerate() {
                let text = match app.host.labels.get(&key.id) {
                    Some(l) if l.secondary_visible => format!(" {} {} ", l.primary, l.secondary),
                    Some(l) => format!(" {} ", l.primary),
                    None => format!(" {} ", key.primary),
                };
                let style = if row * ROW_WIDTH + col == app.cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }
        let keyboard = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("osk_mini keyboard"),
        );
        f.render_widget(keyboard, chunks[1]);
    }

    let snapshot = app.keyboard.snapshot();
    let status = Paragraph::new(format!("{:?} | {}", snapshot.mode, app.message))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn main() -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                app.handle_key(key.code);
            }
        }
        app.tick();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
