use crossterm::event::KeyEvent;
use ratatui::text::Line;
use serde_json::Value;

use crate::descriptor::{FieldDescriptor, value_to_string};
use crate::palette::Palette;
use crate::widgets::ColorPicker;

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Passthrough binding to the color-picker widget, which carries its own
/// label and error treatment.
#[derive(Debug, Clone)]
pub(crate) struct ColorComponent {
    picker: ColorPicker,
}

impl ColorComponent {
    pub fn new(descriptor: &FieldDescriptor) -> Self {
        let color = descriptor
            .seed_value()
            .map(value_to_string)
            .unwrap_or_default();
        Self {
            picker: ColorPicker::new(color),
        }
    }
}

impl FieldComponent for ColorComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Color
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.picker.color().to_string()
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        self.picker
            .handle_key(key)
            .map(|color| ComponentEvent::Changed(Value::String(color)))
    }

    fn seed(&mut self, value: &Value) {
        self.picker.set_color(value_to_string(value));
    }

    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        self.picker
            .lines(descriptor.display_label(), descriptor.error, palette)
    }

    fn framed(&self) -> bool {
        false
    }

    fn cursor(&self, _palette: &Palette) -> Option<(u16, u16)> {
        let width = 3 + self.picker.color().chars().count();
        Some((1, width as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn edits_pass_through_as_color_strings() {
        let palette = Palette::default();
        let descriptor = FieldDescriptor::new("primary", FieldKind::Color)
            .with_value(Value::String("#00ff0".to_string()));
        let mut component = ColorComponent::new(&descriptor);
        let key = KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE);
        let event = component.handle_key(&descriptor, &palette, &key);
        assert_eq!(
            event,
            Some(ComponentEvent::Changed(Value::String("#00ff00".to_string())))
        );
    }
}
