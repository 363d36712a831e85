use chrono::{DateTime, Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Date,
    Time,
}

/// Reaction of the picker to a key: the editing segment switched, or a new
/// instant was selected. `None` means the key was not a picker key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerEvent {
    SegmentChanged,
    Selected(DateTime<Utc>),
}

/// Date/time picker widget. Owns its selection and editing segment; the
/// date/time field component bridges it back to controlled semantics.
///
/// Up/Down step the active segment (one day, or thirty minutes when the time
/// segment is active); Tab switches segments when time selection is enabled.
#[derive(Debug, Clone)]
pub struct DateTimePicker {
    selected: DateTime<Utc>,
    show_time_select: bool,
    segment: Segment,
}

impl DateTimePicker {
    pub fn new(selected: DateTime<Utc>, show_time_select: bool) -> Self {
        Self {
            selected,
            show_time_select,
            segment: Segment::Date,
        }
    }

    pub fn selected(&self) -> DateTime<Utc> {
        self.selected
    }

    pub fn set_selected(&mut self, selected: DateTime<Utc>) {
        self.selected = selected;
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<DatePickerEvent> {
        let step = match key.code {
            KeyCode::Up | KeyCode::Right => 1,
            KeyCode::Down | KeyCode::Left => -1,
            KeyCode::Tab if self.show_time_select => {
                self.segment = match self.segment {
                    Segment::Date => Segment::Time,
                    Segment::Time => Segment::Date,
                };
                return Some(DatePickerEvent::SegmentChanged);
            }
            _ => return None,
        };
        let delta = match self.segment {
            Segment::Date => Duration::days(step),
            Segment::Time => Duration::minutes(30 * step),
        };
        self.selected = self
            .selected
            .checked_add_signed(delta)
            .unwrap_or(self.selected);
        Some(DatePickerEvent::Selected(self.selected))
    }

    pub fn line(&self, palette: &Palette) -> Line<'static> {
        let text = self.selected.format(&palette.date_format).to_string();
        let hint = if self.show_time_select {
            match self.segment {
                Segment::Date => "  (date)",
                Segment::Time => "  (time)",
            }
        } else {
            ""
        };
        Line::from(vec![
            Span::styled(text, palette.value_style),
            Span::styled(hint.to_string(), palette.helper_style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn date_segment_steps_whole_days() {
        let mut picker = DateTimePicker::new(instant(), true);
        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let event = picker.handle_key(&key(KeyCode::Up));
        assert_eq!(event, Some(DatePickerEvent::Selected(expected)));
        assert_eq!(picker.selected(), expected);
    }

    #[test]
    fn tab_switches_to_time_segment() {
        let mut picker = DateTimePicker::new(instant(), true);
        assert_eq!(
            picker.handle_key(&key(KeyCode::Tab)),
            Some(DatePickerEvent::SegmentChanged)
        );
        picker.handle_key(&key(KeyCode::Up));
        assert_eq!(
            picker.selected(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap()
        );
    }

    #[test]
    fn tab_is_inert_without_time_selection() {
        let mut picker = DateTimePicker::new(instant(), false);
        assert_eq!(picker.handle_key(&key(KeyCode::Tab)), None);
        picker.handle_key(&key(KeyCode::Down));
        assert_eq!(
            picker.selected(),
            Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap()
        );
    }
}
