use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};
use serde_json::Value;
use textwrap::wrap;

use crate::descriptor::FieldDescriptor;
use crate::palette::Palette;

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Boolean toggle. Places its own label beside the mark, so it bypasses the
/// field frame.
#[derive(Debug, Clone)]
pub(crate) struct CheckboxComponent {
    checked: bool,
}

impl CheckboxComponent {
    pub fn new(descriptor: &FieldDescriptor) -> Self {
        let checked = descriptor
            .seed_value()
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { checked }
    }
}

impl FieldComponent for CheckboxComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Checkbox
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.checked.to_string()
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.checked = !self.checked;
                Some(ComponentEvent::Changed(Value::Bool(self.checked)))
            }
            _ => None,
        }
    }

    fn seed(&mut self, value: &Value) {
        if let Some(flag) = value.as_bool() {
            self.checked = flag;
        }
    }

    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        width: u16,
    ) -> Vec<Line<'static>> {
        let mark = if self.checked {
            palette.checks.checked_mark.clone()
        } else {
            palette.checks.unchecked_mark.clone()
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{mark} "), palette.value_style),
            Span::styled(descriptor.display_label().to_string(), palette.label_style),
        ])];
        if let Some(helper) = &descriptor.helper_text {
            for segment in wrap(helper, (width.max(8)) as usize) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", segment.into_owned()),
                    palette.helper_style,
                )));
            }
        }
        lines
    }

    fn framed(&self) -> bool {
        false
    }
}
