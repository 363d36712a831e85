use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::KeyEvent;
use ratatui::text::Line;
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::palette::Palette;
use crate::widgets::{DatePickerEvent, DateTimePicker};

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Controlled-component adapter for the date/time picker.
///
/// The picker owns its selection, so this component keeps a shadow copy of
/// the external value: every user selection updates the shadow cell and
/// raises the change event in the same step, keeping internal and external
/// value in lock-step. Seeded from `value ?? default_value`; when neither
/// parses, the palette clock supplies the starting instant.
#[derive(Debug, Clone)]
pub(crate) struct DateTimeComponent {
    picker: DateTimePicker,
    shadow: DateTime<Utc>,
}

impl DateTimeComponent {
    pub fn new(descriptor: &FieldDescriptor, palette: &Palette) -> Self {
        let shadow = descriptor
            .value
            .as_ref()
            .and_then(parse_temporal)
            .or_else(|| descriptor.default_value.as_ref().and_then(parse_temporal))
            .unwrap_or_else(|| (palette.clock)());
        Self {
            picker: DateTimePicker::new(shadow, true),
            shadow,
        }
    }

    pub fn shadow(&self) -> DateTime<Utc> {
        self.shadow
    }
}

/// RFC 3339 strings and unix-millisecond numbers both coerce to an instant.
fn parse_temporal(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        Value::Number(num) => num
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

impl FieldComponent for DateTimeComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::DateTime
    }

    fn display_value(&self, palette: &Palette) -> String {
        self.shadow.format(&palette.date_format).to_string()
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        match self.picker.handle_key(key)? {
            DatePickerEvent::SegmentChanged => Some(ComponentEvent::Consumed),
            DatePickerEvent::Selected(next) => {
                self.shadow = next;
                Some(ComponentEvent::Changed(Value::String(next.to_rfc3339())))
            }
        }
    }

    fn seed(&mut self, value: &Value) {
        if let Some(instant) = parse_temporal(value) {
            self.shadow = instant;
            self.picker.set_selected(instant);
        }
    }

    fn control_lines(
        &self,
        _descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        vec![self.picker.line(palette)]
    }

    fn cursor(&self, palette: &Palette) -> Option<(u16, u16)> {
        let width = self.display_value(palette).chars().count();
        Some((0, width as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 5, 4, 12, 0, 0).unwrap()
    }

    fn descriptor() -> FieldDescriptor {
        FieldDescriptor::new("starts_at", FieldKind::DateTime)
    }

    #[test]
    fn seeds_from_default_value() {
        let palette = Palette::default();
        let descriptor = descriptor()
            .with_default_value(Value::String("2024-01-01T00:00:00Z".to_string()));
        let component = DateTimeComponent::new(&descriptor, &palette);
        assert_eq!(
            component.shadow(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn controlled_value_wins_over_default() {
        let palette = Palette::default();
        let descriptor = descriptor()
            .with_value(Value::String("2025-02-02T00:00:00Z".to_string()))
            .with_default_value(Value::String("2024-01-01T00:00:00Z".to_string()));
        let component = DateTimeComponent::new(&descriptor, &palette);
        assert_eq!(
            component.shadow(),
            Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_and_malformed_seeds_fall_back_to_the_clock() {
        let palette = Palette::default().with_clock(fixed_clock);
        let component = DateTimeComponent::new(&descriptor(), &palette);
        assert_eq!(component.shadow(), fixed_clock());

        let garbled = descriptor().with_value(Value::String("not a date".to_string()));
        let component = DateTimeComponent::new(&garbled, &palette);
        assert_eq!(component.shadow(), fixed_clock());
    }

    #[test]
    fn selection_updates_shadow_and_raises_the_change() {
        let palette = Palette::default();
        let descriptor = descriptor()
            .with_default_value(Value::String("2024-01-01T00:00:00Z".to_string()));
        let mut component = DateTimeComponent::new(&descriptor, &palette);
        let key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let event = component.handle_key(&descriptor, &palette, &key);
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(component.shadow(), expected);
        assert_eq!(
            event,
            Some(ComponentEvent::Changed(Value::String(expected.to_rfc3339())))
        );
    }

    #[test]
    fn segment_switch_is_consumed_without_a_change() {
        let palette = Palette::default();
        let descriptor = descriptor()
            .with_default_value(Value::String("2024-01-01T00:00:00Z".to_string()));
        let mut component = DateTimeComponent::new(&descriptor, &palette);
        let before = component.shadow();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let event = component.handle_key(&descriptor, &palette, &tab);
        assert_eq!(event, Some(ComponentEvent::Consumed));
        assert_eq!(component.shadow(), before);
    }

    #[test]
    fn millisecond_timestamps_coerce() {
        assert_eq!(
            parse_temporal(&Value::from(0)),
            Some(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap())
        );
    }
}
