use crossterm::event::KeyEvent;
use ratatui::text::{Line, Span};
use serde_json::Value;

use crate::descriptor::{FieldDescriptor, value_to_string};
use crate::palette::Palette;
use crate::widgets::TriggerButton;

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Visible trigger for the hidden file-picking capability. Activating the
/// button raises `Triggered`; the dispatcher runs the picker and routes the
/// payload to the upload handler, never through `on_change`.
#[derive(Debug, Clone)]
pub(crate) struct UploadComponent {
    button: TriggerButton,
    file_name: Option<String>,
}

impl UploadComponent {
    pub fn new(descriptor: &FieldDescriptor) -> Self {
        let file_name = descriptor.seed_value().map(value_to_string);
        Self {
            button: TriggerButton::new(format!("Upload {}", descriptor.display_label())),
            file_name,
        }
    }

    /// Control body plus the cursor cell: the trigger row, just inside the
    /// bracket. Kept in one place so the cursor follows any layout change.
    fn body(&self, palette: &Palette) -> (Vec<Line<'static>>, (u16, u16)) {
        let preview = self
            .file_name
            .clone()
            .unwrap_or_else(|| "<no file>".to_string());
        let lines = vec![
            Line::from(Span::styled(preview, palette.helper_style)),
            self.button.line(palette),
        ];
        let cursor = ((lines.len() - 1) as u16, 2);
        (lines, cursor)
    }
}

impl FieldComponent for UploadComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Upload
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.file_name.clone().unwrap_or_default()
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        self.button.activated(key).then_some(ComponentEvent::Triggered)
    }

    fn seed(&mut self, value: &Value) {
        self.file_name = Some(value_to_string(value));
    }

    fn control_lines(
        &self,
        _descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        self.body(palette).0
    }

    fn cursor(&self, palette: &Palette) -> Option<(u16, u16)> {
        // The trigger row; the picker itself has no on-screen control.
        Some(self.body(palette).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn activation_raises_triggered() {
        let palette = Palette::default();
        let descriptor = FieldDescriptor::new("avatar", FieldKind::Upload).with_label("Avatar");
        let mut component = UploadComponent::new(&descriptor);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            component.handle_key(&descriptor, &palette, &enter),
            Some(ComponentEvent::Triggered)
        );
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(component.handle_key(&descriptor, &palette, &other), None);
    }

    #[test]
    fn cursor_sits_on_the_trigger_row() {
        let palette = Palette::default();
        let descriptor = FieldDescriptor::new("avatar", FieldKind::Upload).with_label("Avatar");
        let component = UploadComponent::new(&descriptor);
        let lines = component.control_lines(&descriptor, &palette, 40);
        let trigger_row = (lines.len() - 1) as u16;
        assert_eq!(component.cursor(&palette), Some((trigger_row, 2)));
    }

    #[test]
    fn default_value_shows_as_preview() {
        let palette = Palette::default();
        let descriptor = FieldDescriptor::new("avatar", FieldKind::Upload)
            .with_default_value(Value::String("old-avatar.png".to_string()));
        let component = UploadComponent::new(&descriptor);
        assert_eq!(component.display_value(&palette), "old-avatar.png");
    }
}
