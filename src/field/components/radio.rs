use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};
use serde_json::Value;
use textwrap::wrap;

use crate::descriptor::{FieldDescriptor, value_to_string};
use crate::palette::Palette;

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Exclusive choice rendered as one inline row of marks; arrows move the
/// selection and commit it in the same stroke. Label sits beside the group,
/// so the field frame is bypassed.
#[derive(Debug, Clone)]
pub(crate) struct RadioComponent {
    options: Vec<String>,
    selected: usize,
}

impl RadioComponent {
    pub fn new(options: &[String], descriptor: &FieldDescriptor) -> Self {
        let seed = descriptor.seed_value().map(value_to_string);
        let selected = seed
            .and_then(|value| options.iter().position(|item| item == &value))
            .unwrap_or(0);
        Self {
            options: options.to_vec(),
            selected,
        }
    }

    fn current(&self) -> Option<&String> {
        self.options.get(self.selected)
    }
}

impl FieldComponent for RadioComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Radio
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.current().cloned().unwrap_or_default()
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        if self.options.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                if self.selected == 0 {
                    self.selected = self.options.len() - 1;
                } else {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Right => {
                self.selected = (self.selected + 1) % self.options.len();
            }
            _ => return None,
        }
        self.current()
            .map(|value| ComponentEvent::Changed(Value::String(value.clone())))
    }

    fn seed(&mut self, value: &Value) {
        let value = value_to_string(value);
        if let Some(idx) = self.options.iter().position(|item| item == &value) {
            self.selected = idx;
        }
    }

    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        width: u16,
    ) -> Vec<Line<'static>> {
        let mut spans = vec![Span::styled(
            format!("{}: ", descriptor.display_label()),
            palette.label_style,
        )];
        for (idx, option) in self.options.iter().enumerate() {
            let mark = if idx == self.selected {
                palette.checks.radio_on_mark.clone()
            } else {
                palette.checks.radio_off_mark.clone()
            };
            spans.push(Span::styled(
                format!("{mark} {option}"),
                palette.value_style,
            ));
            if idx + 1 != self.options.len() {
                spans.push(Span::raw("  "));
            }
        }
        let mut lines = vec![Line::from(spans)];
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn descriptor() -> FieldDescriptor {
        FieldDescriptor::new(
            "plan",
            FieldKind::Radio {
                options: vec!["free".to_string(), "pro".to_string()],
            },
        )
    }

    #[test]
    fn arrows_move_and_commit_the_choice() {
        let palette = Palette::default();
        let descriptor = descriptor();
        let mut component = RadioComponent::new(&["free".to_string(), "pro".to_string()], &descriptor);
        let event = component.handle_key(&descriptor, &palette, &key(KeyCode::Right));
        assert_eq!(
            event,
            Some(ComponentEvent::Changed(Value::String("pro".to_string())))
        );
        assert_eq!(component.display_value(&palette), "pro");
    }

    #[test]
    fn seeds_from_default_value() {
        let descriptor = descriptor().with_default_value(Value::String("pro".to_string()));
        let component = RadioComponent::new(&["free".to_string(), "pro".to_string()], &descriptor);
        assert_eq!(component.selected, 1);
    }
}
