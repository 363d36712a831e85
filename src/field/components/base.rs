use crossterm::event::KeyEvent;
use ratatui::text::Line;
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Text,
    Checkbox,
    Select,
    Radio,
    Timezone,
    Upload,
    DateTime,
    Color,
    Unknown,
}

/// Reaction of a component to a key event. `None` from `handle_key` means
/// the key was not for this control and the host may act on it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ComponentEvent {
    /// The control's value changed; the payload is already in the shape the
    /// change event carries for this kind.
    Changed(Value),
    /// The upload trigger fired; the dispatcher runs the file picker.
    Triggered,
    /// The key moved internal state (a list highlight, a picker segment)
    /// without committing a value.
    Consumed,
}

/// One interactive control behind the kind dispatch. Every implementation
/// honors the same contract: key events either raise a `ComponentEvent` or
/// are ignored, rendering is a pure function of the component state, and
/// `seed` reflects an externally controlled value without raising events.
pub(crate) trait FieldComponent: std::fmt::Debug {
    fn kind(&self) -> ComponentKind;

    /// Value as shown to the user, single-line form.
    fn display_value(&self, palette: &Palette) -> String;

    fn handle_key(
        &mut self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        let _ = (descriptor, palette, key);
        None
    }

    /// Reflects a controlled value supplied by the caller. Never raises a
    /// change event; the caller already owns that value.
    fn seed(&mut self, value: &Value);

    /// Control body, without the frame decoration.
    fn control_lines(
        &self,
        descriptor: &FieldDescriptor,
        palette: &Palette,
        width: u16,
    ) -> Vec<Line<'static>>;

    /// Whether the shared field frame wraps this control. Checkbox, radio,
    /// color and the unknown placeholder place their own labels.
    fn framed(&self) -> bool {
        true
    }

    /// (row, column) inside the control body where the caller's cursor
    /// belongs, for the editable kinds.
    fn cursor(&self, palette: &Palette) -> Option<(u16, u16)> {
        let _ = palette;
        None
    }
}
