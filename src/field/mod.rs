mod components;
mod frame;

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Paragraph;
use serde_json::Value;

use crate::descriptor::{FieldDescriptor, FieldKind, UploadPayload};
use crate::palette::Palette;

pub use components::ComponentKind;
use components::{
    CheckboxComponent, ColorComponent, ComponentEvent, DateTimeComponent, FieldComponent,
    RadioComponent, SelectComponent, TextComponent, TextMode, TimezoneComponent, UnknownComponent,
    UploadComponent,
};
use frame::FieldFrame;

/// Uniform change shape every kind emits: the submission key plus the
/// kind-adapted value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub name: String,
    pub value: Value,
}

/// External file-picking capability behind the upload kind. `Ok(None)` is a
/// cancel; failures are tolerated as no-ops, the handler never sees an empty
/// payload.
pub trait FilePicker: std::fmt::Debug {
    fn pick(&mut self) -> anyhow::Result<Option<UploadPayload>>;
}

type ChangeHandler = Box<dyn FnMut(ChangeEvent)>;
type UploadHandler = Box<dyn FnMut(UploadPayload)>;

/// One rendered form field: the descriptor, the component its kind selected,
/// and the caller's handlers.
pub struct Field {
    descriptor: FieldDescriptor,
    palette: Arc<Palette>,
    component: Box<dyn FieldComponent>,
    on_change: Option<ChangeHandler>,
    upload_handler: Option<UploadHandler>,
    file_picker: Option<Box<dyn FilePicker>>,
    cursor: Option<Position>,
}

impl Field {
    pub fn new(descriptor: FieldDescriptor, palette: Arc<Palette>) -> Self {
        let component = build_component(&descriptor, &palette);
        Self {
            descriptor,
            palette,
            component,
            on_change: None,
            upload_handler: None,
            file_picker: None,
            cursor: None,
        }
    }

    pub fn on_change(mut self, handler: impl FnMut(ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn upload_handler(mut self, handler: impl FnMut(UploadPayload) + 'static) -> Self {
        self.upload_handler = Some(Box::new(handler));
        self
    }

    pub fn with_file_picker(mut self, picker: impl FilePicker + 'static) -> Self {
        self.file_picker = Some(Box::new(picker));
        self
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component.kind()
    }

    /// Value as currently shown to the user.
    pub fn display_value(&self) -> String {
        self.component.display_value(&self.palette)
    }

    /// Replaces the descriptor on re-render. The component is rebuilt only
    /// when the kind changed; a changed controlled value is reflected into
    /// the existing component, so local state (the date/time shadow value in
    /// particular) survives prop-only updates.
    pub fn update(&mut self, descriptor: FieldDescriptor) {
        if descriptor.kind != self.descriptor.kind {
            self.component = build_component(&descriptor, &self.palette);
        } else if descriptor.value != self.descriptor.value {
            if let Some(value) = &descriptor.value {
                self.component.seed(value);
            }
        }
        self.descriptor = descriptor;
    }

    /// Routes a key event to the component and forwards whatever it raised
    /// to the caller's handlers. Returns whether the event was consumed;
    /// navigation keys that only move internal state (a list highlight, a
    /// picker segment) count as consumed even though no change is emitted.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.descriptor.disabled {
            return false;
        }
        let Some(event) = self
            .component
            .handle_key(&self.descriptor, &self.palette, key)
        else {
            return false;
        };
        match event {
            ComponentEvent::Changed(value) => {
                let change = ChangeEvent {
                    name: self.descriptor.submission_name(),
                    value,
                };
                if let Some(handler) = &mut self.on_change {
                    handler(change);
                }
            }
            ComponentEvent::Triggered => self.run_file_picker(),
            ComponentEvent::Consumed => {}
        }
        true
    }

    fn run_file_picker(&mut self) {
        let Some(picker) = self.file_picker.as_mut() else {
            return;
        };
        // Cancel and picker failure are both no-ops: the form never crashes
        // and the handler never sees an empty payload.
        if let Ok(Some(payload)) = picker.pick() {
            self.component
                .seed(&Value::String(payload.file_name.clone()));
            if let Some(handler) = &mut self.upload_handler {
                handler(payload);
            }
        }
    }

    /// Draws the field. Framed kinds get the shared label/helper/error
    /// decoration; checkbox, radio, color and the unknown placeholder render
    /// their own layout.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.cursor = None;
        if area.width < 3 || area.height == 0 {
            return;
        }
        let inner_width = area.width.saturating_sub(4);
        let lines = self
            .component
            .control_lines(&self.descriptor, &self.palette, inner_width);
        if self.component.framed() {
            let decoration = FieldFrame::from_descriptor(&self.descriptor);
            let control = decoration.render(frame, area, &self.palette, lines);
            if let Some((row, column)) = self.component.cursor(&self.palette) {
                let x = control.x.saturating_add(1).saturating_add(column);
                let y = control.y.saturating_add(1).saturating_add(row);
                if x < control.right() && y < control.bottom() {
                    self.cursor = Some(Position::new(x, y));
                }
            }
        } else {
            frame.render_widget(Paragraph::new(lines), area);
            if let Some((row, column)) = self.component.cursor(&self.palette) {
                let x = area.x.saturating_add(column);
                let y = area.y.saturating_add(row);
                if x < area.right() && y < area.bottom() {
                    self.cursor = Some(Position::new(x, y));
                }
            }
        }
    }

    /// Terminal cell for the caller's cursor, valid after the last `render`.
    pub fn cursor_position(&self) -> Option<Position> {
        self.cursor
    }
}

fn build_component(descriptor: &FieldDescriptor, palette: &Palette) -> Box<dyn FieldComponent> {
    match &descriptor.kind {
        FieldKind::Text => Box::new(TextComponent::new(descriptor, TextMode::Plain)),
        FieldKind::Password => Box::new(TextComponent::new(descriptor, TextMode::Masked)),
        FieldKind::Textarea => Box::new(TextComponent::new(descriptor, TextMode::Multiline)),
        FieldKind::Checkbox => Box::new(CheckboxComponent::new(descriptor)),
        FieldKind::Select { options, multiple } => {
            Box::new(SelectComponent::new(options, *multiple, descriptor))
        }
        FieldKind::Radio { options } => Box::new(RadioComponent::new(options, descriptor)),
        FieldKind::Timezone { options } => {
            Box::new(TimezoneComponent::new(options, descriptor, palette))
        }
        FieldKind::Upload => Box::new(UploadComponent::new(descriptor)),
        FieldKind::DateTime => Box::new(DateTimeComponent::new(descriptor, palette)),
        FieldKind::Color => Box::new(ColorComponent::new(descriptor)),
        FieldKind::Unknown(raw) => Box::new(UnknownComponent::new(raw.clone())),
    }
}
