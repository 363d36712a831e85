use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::descriptor::{FieldDescriptor, value_to_string};
use crate::palette::Palette;

use super::{ComponentEvent, ComponentKind, FieldComponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextMode {
    Plain,
    Masked,
    Multiline,
}

/// Single-line and multi-line text control; `Masked` covers the password
/// kind.
#[derive(Debug, Clone)]
pub(crate) struct TextComponent {
    buffer: String,
    mode: TextMode,
}

impl TextComponent {
    pub fn new(descriptor: &FieldDescriptor, mode: TextMode) -> Self {
        let buffer = descriptor
            .seed_value()
            .map(value_to_string)
            .unwrap_or_default();
        Self { buffer, mode }
    }

    fn display_lines(&self, palette: &Palette) -> Vec<String> {
        let text = match self.mode {
            TextMode::Masked => palette
                .mask_char
                .to_string()
                .repeat(self.buffer.chars().count()),
            _ => self.buffer.clone(),
        };
        if self.mode == TextMode::Multiline {
            text.split('\n').map(str::to_string).collect()
        } else {
            vec![text]
        }
    }
}

impl FieldComponent for TextComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Text
    }

    fn display_value(&self, palette: &Palette) -> String {
        self.display_lines(palette).join("\n")
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        let edited = match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return None;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Enter if self.mode == TextMode::Multiline => {
                self.buffer.push('\n');
                true
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Delete => {
                if self.buffer.is_empty() {
                    false
                } else {
                    self.buffer.clear();
                    true
                }
            }
            _ => false,
        };
        edited.then(|| ComponentEvent::Changed(Value::String(self.buffer.clone())))
    }

    fn seed(&mut self, value: &Value) {
        self.buffer = value_to_string(value);
    }

    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        if self.buffer.is_empty() {
            if let Some(placeholder) = &descriptor.placeholder {
                return vec![Line::from(Span::styled(
                    placeholder.clone(),
                    palette.placeholder_style,
                ))];
            }
        }
        self.display_lines(palette)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, palette.value_style)))
            .collect()
    }

    fn cursor(&self, palette: &Palette) -> Option<(u16, u16)> {
        let lines = self.display_lines(palette);
        let row = lines.len().saturating_sub(1);
        let column = lines
            .last()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .unwrap_or(0);
        Some((row as u16, column as u16))
    }
}
