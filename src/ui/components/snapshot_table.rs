//! Snapshot table widget

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{Column, Row, TableData};
use crate::ui::style::TableStyle;

/// Header line plus the rule under it
const HEADER_HEIGHT: u16 = 2;

/// Navigable table over one formatted snapshot
pub struct SnapshotTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    state: TableState,
    focused: bool,
    style: TableStyle,
    page_height: usize,
}

impl SnapshotTable {
    /// Create a focused table with the first row selected
    pub fn new(data: TableData, style: TableStyle) -> Self {
        let mut state = TableState::default();
        if !data.rows.is_empty() {
            state.select(Some(0));
        }
        Self {
            columns: data.columns,
            rows: data.rows,
            state,
            focused: true,
            page_height: usize::from(style.page_height),
            style,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Index of the selected row, `None` only for an empty table
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.state.selected().and_then(|idx| self.rows.get(idx))
    }

    /// Apply a navigation key. Returns whether the key was consumed.
    ///
    /// A blurred table ignores every key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        let page = self.page_height.max(1);
        let half_page = (page / 2).max(1);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(1),
            // Half page, with or without ctrl
            KeyCode::Char('u') => self.move_up(half_page),
            KeyCode::Char('d') => self.move_down(half_page),
            KeyCode::PageUp | KeyCode::Char('b') => self.move_up(page),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => self.move_down(page),
            KeyCode::Home | KeyCode::Char('g') => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') => self.goto_bottom(),
            _ => return false,
        }
        true
    }

    fn move_up(&mut self, n: usize) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(n)));
        }
    }

    fn move_down(&mut self, n: usize) {
        if let Some(i) = self.state.selected() {
            let last = self.rows.len().saturating_sub(1);
            self.state.select(Some(i.saturating_add(n).min(last)));
        }
    }

    fn goto_top(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    fn goto_bottom(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    /// Width of the bordered table with every column at full size
    pub fn natural_width(&self) -> u16 {
        let padding = self.style.cell_padding * 2;
        let content: u16 = self.columns.iter().map(|c| c.width + padding).sum();
        content + 2
    }

    /// Height of the bordered table showing one full page
    pub fn natural_height(&self) -> u16 {
        self.style.page_height + HEADER_HEIGHT + 2
    }

    /// Render inside a single-line border
    pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str) {
        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(self.style.border_type)
            .border_style(self.style.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Rule
                Constraint::Min(0),    // Body
            ])
            .split(inner);

        let header = header_line(&self.columns, &self.style);
        frame.render_widget(Paragraph::new(header), layout[0]);

        let rule = "─".repeat(usize::from(layout[1].width));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(rule, self.style.border))),
            layout[1],
        );

        self.page_height = usize::from(layout[2].height).max(1);
        let table = build_table(&self.columns, &self.rows, &self.style, self.focused);
        frame.render_stateful_widget(table, layout[2], &mut self.state);
    }
}

fn constraints(columns: &[Column], style: &TableStyle) -> Vec<Constraint> {
    columns
        .iter()
        .map(|c| Constraint::Length(c.width + style.cell_padding * 2))
        .collect()
}

fn pad(value: &str, width: u16, padding: u16) -> String {
    let side = " ".repeat(usize::from(padding));
    format!("{}{}{}", side, truncate(value, usize::from(width)), side)
}

fn header_line(columns: &[Column], style: &TableStyle) -> Line<'static> {
    let spans: Vec<Span> = columns
        .iter()
        .map(|c| {
            let text = pad(c.title, c.width, style.cell_padding);
            let target = usize::from(c.width + style.cell_padding * 2);
            let fill = target.saturating_sub(text.width());
            Span::styled(format!("{}{}", text, " ".repeat(fill)), style.header)
        })
        .collect();
    Line::from(spans)
}

fn build_table<'a>(
    columns: &'a [Column],
    rows: &'a [Row],
    style: &TableStyle,
    focused: bool,
) -> Table<'a> {
    let body: Vec<TableRow> = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = columns
                .iter()
                .zip(row.iter())
                .map(|(c, value)| pad(value, c.width, style.cell_padding))
                .collect();
            TableRow::new(cells).style(style.cell)
        })
        .collect();

    let highlight = if focused {
        style.selected
    } else {
        style.cell
    };

    Table::new(body, constraints(columns, style))
        .column_spacing(0)
        .row_highlight_style(highlight)
}

/// Cut `value` to `width` display cells, marking the cut with an ellipsis
pub fn truncate(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }

    let limit = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_table(rows: usize) -> SnapshotTable {
        let data = TableData {
            columns: vec![Column::new("ID", 4), Column::new("Name", 8)],
            rows: (0..rows)
                .map(|i| vec![format!("{:04}", i), format!("name-{}", i)])
                .collect(),
        };
        SnapshotTable::new(data, TableStyle::default())
    }

    #[test]
    fn test_table_creation() {
        let table = create_test_table(3);
        assert!(table.focused());
        assert_eq!(table.selected(), Some(0));
        assert_eq!(table.selected_row().unwrap()[1], "name-0");
    }

    #[test]
    fn test_empty_table() {
        let mut table = create_test_table(0);
        assert_eq!(table.selected(), None);
        assert!(table.selected_row().is_none());

        table.handle_key(KeyEvent::from(KeyCode::Down));
        table.handle_key(KeyEvent::from(KeyCode::End));
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut table = create_test_table(3);

        table.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(table.selected(), Some(0));

        table.handle_key(KeyEvent::from(KeyCode::Char('j')));
        table.handle_key(KeyEvent::from(KeyCode::Down));
        table.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(table.selected(), Some(2));

        table.handle_key(KeyEvent::from(KeyCode::Char('k')));
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_paging() {
        let mut table = create_test_table(50);

        table.handle_key(KeyEvent::from(KeyCode::PageDown));
        assert_eq!(table.selected(), Some(20));

        table.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(table.selected(), Some(30));

        table.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(table.selected(), Some(20));

        table.handle_key(KeyEvent::from(KeyCode::Char('d')));
        assert_eq!(table.selected(), Some(30));

        table.handle_key(KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(table.selected(), Some(20));

        table.handle_key(KeyEvent::from(KeyCode::Char('G')));
        assert_eq!(table.selected(), Some(49));

        table.handle_key(KeyEvent::from(KeyCode::Char('g')));
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_blurred_table_ignores_keys() {
        let mut table = create_test_table(3);
        table.blur();
        assert!(!table.focused());

        assert!(!table.handle_key(KeyEvent::from(KeyCode::Down)));
        assert_eq!(table.selected(), Some(0));

        table.focus();
        assert!(table.handle_key(KeyEvent::from(KeyCode::Down)));
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_unknown_key_not_consumed() {
        let mut table = create_test_table(3);
        assert!(!table.handle_key(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("nginx", 10), "nginx");
        assert_eq!(truncate("nginx", 5), "nginx");
        assert_eq!(truncate("nginx:latest", 6), "nginx…");
    }

    #[test]
    fn test_natural_size() {
        let table = create_test_table(1);
        assert_eq!(table.natural_width(), 4 + 2 + 8 + 2 + 2);
        assert_eq!(table.natural_height(), 24);
    }

    #[test]
    fn test_rendering() {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut table = create_test_table(2);

        terminal
            .draw(|f| {
                let area = f.area();
                table.render(f, area, "");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        let header: String = (0..30).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(header.contains("ID"));
        assert!(header.contains("Name"));
        let first_row: String = (0..30).map(|x| buffer[(x, 3)].symbol()).collect();
        assert!(first_row.contains("name-0"));
    }
}
