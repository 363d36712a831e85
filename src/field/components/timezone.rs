use crossterm::event::KeyEvent;
use ratatui::text::Line;
use serde_json::Value;

use crate::descriptor::{Choice, FieldDescriptor, value_to_string};
use crate::palette::Palette;
use crate::widgets::{OptionList, OptionListEvent};

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Option list pre-populated with zone names. Descriptors may carry their own
/// subset; otherwise the full IANA table is offered. When no value names a
/// zone the palette's injected default zone is pre-selected.
#[derive(Debug, Clone)]
pub(crate) struct TimezoneComponent {
    list: OptionList,
}

impl TimezoneComponent {
    pub fn new(options: &[String], descriptor: &FieldDescriptor, palette: &Palette) -> Self {
        let names: Vec<Choice> = if options.is_empty() {
            chrono_tz::TZ_VARIANTS
                .iter()
                .map(|zone| Choice::from_label(zone.name()))
                .collect()
        } else {
            options
                .iter()
                .map(|option| Choice::from_label(option.clone()))
                .collect()
        };
        let mut list = OptionList::new(names, false);
        let seed = descriptor
            .seed_value()
            .map(value_to_string)
            .unwrap_or_else(|| palette.default_zone.name().to_string());
        list.seed_single(&seed);
        Self { list }
    }
}

impl FieldComponent for TimezoneComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Timezone
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.list.summary("select timezone")
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        match self.list.handle_key(key)? {
            OptionListEvent::Moved => Some(ComponentEvent::Consumed),
            OptionListEvent::Single(choice) => {
                Some(ComponentEvent::Changed(Value::String(choice.value)))
            }
            OptionListEvent::Multi(_) => None,
        }
    }

    fn seed(&mut self, value: &Value) {
        self.list.seed_single(&value_to_string(value));
    }

    fn control_lines(
        &self,
        _descriptor: &FieldDescriptor,
        palette: &Palette,
        _width: u16,
    ) -> Vec<Line<'static>> {
        self.list.lines(palette, palette.list_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldKind;

    fn descriptor(options: Vec<String>) -> FieldDescriptor {
        FieldDescriptor::new("zone", FieldKind::Timezone { options })
    }

    #[test]
    fn empty_options_fall_back_to_the_iana_table() {
        let palette = Palette::default();
        let component = TimezoneComponent::new(&[], &descriptor(Vec::new()), &palette);
        assert!(component.list.options().len() > 100);
        assert_eq!(component.display_value(&palette), "UTC");
    }

    #[test]
    fn injected_default_zone_is_preselected() {
        let palette = Palette::default().with_default_zone(chrono_tz::Europe::Berlin);
        let component = TimezoneComponent::new(&[], &descriptor(Vec::new()), &palette);
        assert_eq!(component.display_value(&palette), "Europe/Berlin");
    }

    #[test]
    fn descriptor_value_beats_the_default_zone() {
        let palette = Palette::default().with_default_zone(chrono_tz::Europe::Berlin);
        let options = vec!["UTC".to_string(), "Asia/Tokyo".to_string()];
        let descriptor =
            descriptor(options.clone()).with_value(Value::String("Asia/Tokyo".to_string()));
        let component = TimezoneComponent::new(&options, &descriptor, &palette);
        assert_eq!(component.display_value(&palette), "Asia/Tokyo");
    }
}
