use crossterm::event::KeyEvent;
use ratatui::text::Line;
use serde_json::Value;

use crate::descriptor::{Choice, FieldDescriptor, value_to_string};
use crate::palette::Palette;
use crate::widgets::{OptionList, OptionListEvent};

use super::{ComponentEvent, ComponentKind, FieldComponent};

/// Option-list binding for the select kind. Single mode emits one
/// `{label, value}` object; multi mode emits the full chosen set as an array
/// of such objects.
#[derive(Debug, Clone)]
pub(crate) struct SelectComponent {
    list: OptionList,
}

impl SelectComponent {
    pub fn new(options: &[String], multiple: bool, descriptor: &FieldDescriptor) -> Self {
        let choices = options
            .iter()
            .map(|option| Choice::from_label(option.clone()))
            .collect();
        let mut list = OptionList::new(choices, multiple);
        if let Some(seed) = descriptor.seed_value() {
            seed_list(&mut list, seed);
        }
        Self { list }
    }

    /// Exposed for the dispatcher's initial-selection queries and for tests.
    pub fn selection(&self) -> Vec<Choice> {
        if self.list.is_multi() {
            self.list.multi_selection()
        } else {
            self.list.single_selection().cloned().into_iter().collect()
        }
    }
}

fn seed_list(list: &mut OptionList, seed: &Value) {
    if list.is_multi() {
        let values = match seed {
            Value::Array(items) => items.iter().map(value_to_string).collect::<Vec<_>>(),
            other => vec![value_to_string(other)],
        };
        list.seed_multi(&values);
    } else {
        list.seed_single(&value_to_string(seed));
    }
}

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn display_value(&self, _palette: &Palette) -> String {
        self.list.summary("<none>")
    }

    fn handle_key(
        &mut self,
        _descriptor: &FieldDescriptor,
        _palette: &Palette,
        key: &KeyEvent,
    ) -> Option<ComponentEvent> {
        let value = match self.list.handle_key(key)? {
            OptionListEvent::Moved => return Some(ComponentEvent::Consumed),
            OptionListEvent::Single(choice) => choice.to_value(),
            OptionListEvent::Multi(choices) => {
                Value::Array(choices.iter().map(Choice::to_value).collect())
            }
        };
        Some(ComponentEvent::Changed(value))
    }

    fn seed(&mut self, value: &Value) {
        seed_list(&mut self.list, value);
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
