use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::palette::Palette;

use super::{ComponentKind, FieldComponent};

/// Default arm of the kind dispatch: an unrecognized tag renders a visible
/// diagnostic instead of failing, so the rest of the form keeps working.
#[derive(Debug, Clone)]
pub(crate) struct UnknownComponent {
    raw_tag: String,
}

impl UnknownComponent {
    pub fn new(raw_tag: impl Into<String>) -> Self {
        Self {
            raw_tag: raw_tag.into(),
        }
    }
}

impl FieldComponent for UnknownComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Unknown
    }

    fn display_value(&self, _palette: &Palette) -> String {
        format!("unsupported field kind: {}", self.raw_tag)
    }

    fn seed(&mut self, _value: &Value) {}

    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                descriptor.display_label().to_string(),
                palette.label_style,
            )),
            Line::from(Span::styled(
                self.display_value(palette),
                Style::default().fg(Color::Red),
            )),
        ]
    }

    fn framed(&self) -> bool {
        false
    }
}
