use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::palette::Palette;

/// Purely presentational trigger button; reports activation, does nothing
/// else.
#[derive(Debug, Clone)]
pub struct TriggerButton {
    label: String,
}

impl TriggerButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn activated(&self, key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
    }

    pub fn line(&self, palette: &Palette) -> Line<'static> {
        Line::from(Span::styled(
            format!("[ {} ]", self.label),
            palette.label_style,
        ))
    }
}
