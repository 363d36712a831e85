use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::palette::Palette;

/// Color-picker widget. Edits a `#rrggbb` string and previews it as a
/// terminal swatch. Unlike the framed kinds it carries its own label and
/// error treatment.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    color: String,
}

impl ColorPicker {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Returns the edited color when a key changed it.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return None;
                }
                if !(ch.is_ascii_hexdigit() || ch == '#') {
                    return None;
                }
                if self.color.is_empty() && ch != '#' {
                    self.color.push('#');
                }
                if self.color.len() >= 7 {
                    return None;
                }
                self.color.push(ch.to_ascii_lowercase());
                Some(self.color.clone())
            }
            KeyCode::Backspace => {
                self.color.pop()?;
                Some(self.color.clone())
            }
            KeyCode::Delete => {
                if self.color.is_empty() {
                    return None;
                }
                self.color.clear();
                Some(self.color.clone())
            }
            _ => None,
        }
    }

    pub fn lines(&self, label: &str, error: bool, palette: &Palette) -> Vec<Line<'static>> {
        let marker_style = Style::default().fg(palette.border_color(error));
        let swatch_style = parse_hex(&self.color)
            .map(|rgb| Style::default().fg(rgb))
            .unwrap_or(palette.helper_style);
        vec![
            Line::from(Span::styled(label.to_string(), palette.label_style)),
            Line::from(vec![
                Span::styled("▌", marker_style),
                Span::styled("█ ", swatch_style),
                Span::styled(self.color.clone(), palette.value_style),
            ]),
        ]
    }
}

fn parse_hex(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_hex_digits_builds_a_color() {
        let mut picker = ColorPicker::new("");
        for ch in ['a', '1', 'b', '2', 'c', '3'] {
            picker.handle_key(&key(KeyCode::Char(ch)));
        }
        assert_eq!(picker.color(), "#a1b2c3");
        assert_eq!(picker.handle_key(&key(KeyCode::Char('f'))), None);
    }

    #[test]
    fn non_hex_input_is_ignored() {
        let mut picker = ColorPicker::new("#ff0000");
        assert_eq!(picker.handle_key(&key(KeyCode::Char('z'))), None);
        assert_eq!(picker.color(), "#ff0000");
    }

    #[test]
    fn parse_hex_accepts_full_triplets_only() {
        assert_eq!(parse_hex("#336699"), Some(Color::Rgb(0x33, 0x66, 0x99)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("336699"), None);
    }
}
