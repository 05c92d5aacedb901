//! UI Application logic

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

use crate::core::{Effect, TableData, ViewMode};
use crate::ui::components::SnapshotTable;
use crate::ui::style::TableStyle;

const HELP_TEXT: &str = " [↑/↓ j/k]:Select | [esc]:Focus | [enter]:Open | [q]:Quit ";

/// View controller: one table, one mode, keys in, frames out
pub struct UiApp {
    table: SnapshotTable,
    mode: ViewMode,
    message: Option<String>,
    pub should_quit: bool,
}

impl UiApp {
    /// Create a controller over a formatted snapshot
    pub fn new(data: TableData, mode: ViewMode, style: TableStyle) -> Self {
        Self {
            table: SnapshotTable::new(data, style),
            mode,
            message: None,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn table(&self) -> &SnapshotTable {
        &self.table
    }

    /// One-shot message shown until the next event
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) -> Effect {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Effect {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return Effect::None;
        }

        self.message = None;

        let effect = match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                info!("Quit key pressed");
                Effect::Quit
            }
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                info!("Ctrl+C pressed");
                Effect::Quit
            }
            KeyCode::Esc => {
                self.toggle_focus();
                Effect::None
            }
            KeyCode::Enter => self.drill_down(),
            _ => {
                if !self.table.handle_key(key) {
                    debug!("Unhandled key: {:?}", key);
                }
                Effect::None
            }
        };

        match &effect {
            Effect::Quit => self.should_quit = true,
            Effect::Print(text) => self.message = Some(text.clone()),
            Effect::None => {}
        }

        effect
    }

    fn toggle_focus(&mut self) {
        if self.table.focused() {
            debug!("Blurring table");
            self.table.blur();
        } else {
            debug!("Focusing table");
            self.table.focus();
        }
    }

    /// Announce the selected entity. The log screen is not wired, so the mode
    /// does not change.
    fn drill_down(&mut self) -> Effect {
        let Some(name) = self.table.selected_row().and_then(|row| row.get(1)) else {
            return Effect::None;
        };
        let text = format!("Let's go to {}!", name);
        info!("{}", text);

        self.mode = self.mode.on_drill_down();
        Effect::Print(text)
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match self.mode {
            ViewMode::ListContainers | ViewMode::ListImages => {
                let width = self.table.natural_width().min(area.width);
                let height = self
                    .table
                    .natural_height()
                    .min(area.height.saturating_sub(1));
                let table_area = Rect::new(area.x, area.y, width, height);
                let title = format!(" {} ({}) ", self.mode, self.table.rows().len());
                self.table.render(frame, table_area, &title);

                if area.height > height {
                    let line_area = Rect::new(area.x, area.y + height, area.width, 1);
                    self.render_message_line(frame, line_area);
                }
            }
            ViewMode::LogContainer => self.render_log_placeholder(frame, area),
        }
    }

    /// Message line below the table, falling back to key help
    fn render_message_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.message {
            Some(text) => Paragraph::new(text.clone()),
            None => Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Gray)),
        };
        frame.render_widget(line, area);
    }

    fn render_log_placeholder(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.mode))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Indexed(240)));

        let placeholder = Paragraph::new("Log view is not available")
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(placeholder, area);
    }
}
