//! Table styling

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Rows shown per page before the table scrolls
pub const DEFAULT_PAGE_HEIGHT: u16 = 20;

/// Immutable look of a snapshot table, handed to the table on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub border_type: BorderType,
    pub border: Style,
    pub header: Style,
    pub cell: Style,
    pub selected: Style,
    /// Blank cells on each side of a column
    pub cell_padding: u16,
    pub page_height: u16,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border_type: BorderType::Plain,
            border: Style::new().fg(Color::Indexed(240)),
            header: Style::new().remove_modifier(Modifier::BOLD),
            cell: Style::new(),
            selected: Style::new()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57))
                .remove_modifier(Modifier::BOLD),
            cell_padding: 1,
            page_height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = TableStyle::default();
        assert_eq!(style.border_type, BorderType::Plain);
        assert_eq!(style.border.fg, Some(Color::Indexed(240)));
        assert_eq!(style.selected.bg, Some(Color::Indexed(57)));
        assert_eq!(style.cell_padding, 1);
    }
}
