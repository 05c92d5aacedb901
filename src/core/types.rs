//! Core type definitions and shared types

/// Table column: a title and a fixed content width in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

/// One display string per column, positionally aligned
pub type Row = Vec<String>;

/// Formatted snapshot ready to be handed to a table widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

/// Which screen the controller is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    ListContainers,
    ListImages,
    /// Per-container log screen. Declared for the drill-down action, which is
    /// not wired yet; no transition produces it.
    LogContainer,
}

impl ViewMode {
    /// Mode after the drill-down (enter) action.
    ///
    /// The log screen has no destination defined yet, so every mode stays put.
    pub fn on_drill_down(self) -> Self {
        self
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::ListContainers => "Containers",
            ViewMode::ListImages => "Images",
            ViewMode::LogContainer => "Logs",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Side effect requested by key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Stop the event loop
    Quit,
    /// Show a one-shot message
    Print(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_down_keeps_mode() {
        assert_eq!(
            ViewMode::ListContainers.on_drill_down(),
            ViewMode::ListContainers
        );
        assert_eq!(ViewMode::ListImages.on_drill_down(), ViewMode::ListImages);
    }

    #[test]
    fn test_view_mode_display() {
        assert_eq!(ViewMode::ListContainers.to_string(), "Containers");
        assert_eq!(ViewMode::LogContainer.to_string(), "Logs");
    }
}
