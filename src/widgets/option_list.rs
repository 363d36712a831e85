use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::descriptor::Choice;
use crate::palette::Palette;

/// Reaction of the list to a key: the highlight moved without committing,
/// a single choice was committed, or the full chosen set changed (multi
/// mode). `None` from `handle_key` means the key was not a list key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionListEvent {
    Moved,
    Single(Choice),
    Multi(Vec<Choice>),
}

/// Generic option-list widget shared by the select and timezone kinds.
///
/// Up/Down move the highlight without committing; Enter commits the
/// highlighted entry (single mode) or toggles it (multi mode). Space also
/// toggles in multi mode.
#[derive(Debug, Clone)]
pub struct OptionList {
    options: Vec<Choice>,
    multi: bool,
    highlighted: usize,
    selected: Option<usize>,
    chosen: Vec<bool>,
}

impl OptionList {
    pub fn new(options: Vec<Choice>, multi: bool) -> Self {
        let chosen = vec![false; options.len()];
        Self {
            options,
            multi,
            highlighted: 0,
            selected: None,
            chosen,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    /// Marks the entry whose value matches, moving the highlight with it.
    pub fn seed_single(&mut self, value: &str) -> bool {
        match self.options.iter().position(|choice| choice.value == value) {
            Some(idx) => {
                self.selected = Some(idx);
                self.highlighted = idx;
                true
            }
            None => false,
        }
    }

    pub fn seed_multi(&mut self, values: &[String]) {
        for flag in &mut self.chosen {
            *flag = false;
        }
        for value in values {
            if let Some(idx) = self.options.iter().position(|choice| &choice.value == value) {
                self.chosen[idx] = true;
            }
        }
    }

    pub fn single_selection(&self) -> Option<&Choice> {
        self.selected.and_then(|idx| self.options.get(idx))
    }

    pub fn multi_selection(&self) -> Vec<Choice> {
        self.options
            .iter()
            .zip(self.chosen.iter())
            .filter_map(|(choice, flag)| flag.then(|| choice.clone()))
            .collect()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<OptionListEvent> {
        if self.options.is_empty() {
            return None;
        }
        match key.code {
            KeyCode::Up => {
                if self.highlighted == 0 {
                    self.highlighted = self.options.len() - 1;
                } else {
                    self.highlighted -= 1;
                }
                Some(OptionListEvent::Moved)
            }
            KeyCode::Down => {
                self.highlighted = (self.highlighted + 1) % self.options.len();
                Some(OptionListEvent::Moved)
            }
            KeyCode::Enter => Some(self.commit()),
            KeyCode::Char(' ') if self.multi => Some(self.commit()),
            _ => None,
        }
    }

    fn commit(&mut self) -> OptionListEvent {
        if self.multi {
            self.chosen[self.highlighted] = !self.chosen[self.highlighted];
            OptionListEvent::Multi(self.multi_selection())
        } else {
            self.selected = Some(self.highlighted);
            OptionListEvent::Single(self.options[self.highlighted].clone())
        }
    }

    /// Rows for the visible window around the highlight.
    pub fn lines(&self, palette: &Palette, max_rows: u16) -> Vec<Line<'static>> {
        let rows = (max_rows.max(1) as usize).min(self.options.len());
        let mut start = 0;
        if self.highlighted >= rows {
            start = self.highlighted + 1 - rows;
        }
        self.options
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(idx, choice)| {
                let mark = if self.multi {
                    if self.chosen[idx] {
                        palette.checks.checked_mark.clone()
                    } else {
                        palette.checks.unchecked_mark.clone()
                    }
                } else if self.selected == Some(idx) {
                    palette.checks.radio_on_mark.clone()
                } else {
                    palette.checks.radio_off_mark.clone()
                };
                let style = if idx == self.highlighted {
                    palette.highlight_style
                } else {
                    palette.value_style
                };
                Line::from(vec![
                    Span::styled(format!("{mark} "), style),
                    Span::styled(choice.label.clone(), style),
                ])
            })
            .collect()
    }

    /// Short summary of the current selection, for single-line display.
    pub fn summary(&self, placeholder: &str) -> String {
        if self.multi {
            let values = self
                .multi_selection()
                .into_iter()
                .map(|choice| choice.label)
                .collect::<Vec<_>>();
            if values.is_empty() {
                "[]".to_string()
            } else {
                format!("[{}]", values.join(", "))
            }
        } else {
            self.single_selection()
                .map(|choice| choice.label.clone())
                .unwrap_or_else(|| placeholder.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn choices(labels: &[&str]) -> Vec<Choice> {
        labels.iter().map(|label| Choice::from_label(*label)).collect()
    }

    #[test]
    fn enter_commits_highlighted_entry_in_single_mode() {
        let mut list = OptionList::new(choices(&["a", "b", "c"]), false);
        assert_eq!(
            list.handle_key(&key(KeyCode::Down)),
            Some(OptionListEvent::Moved)
        );
        let event = list.handle_key(&key(KeyCode::Enter));
        assert_eq!(event, Some(OptionListEvent::Single(Choice::from_label("b"))));
        assert_eq!(list.single_selection(), Some(&Choice::from_label("b")));
    }

    #[test]
    fn toggling_in_multi_mode_reports_full_selection() {
        let mut list = OptionList::new(choices(&["a", "b"]), true);
        list.handle_key(&key(KeyCode::Enter));
        list.handle_key(&key(KeyCode::Down));
        let event = list.handle_key(&key(KeyCode::Char(' ')));
        assert_eq!(
            event,
            Some(OptionListEvent::Multi(choices(&["a", "b"])))
        );
        let event = list.handle_key(&key(KeyCode::Enter));
        assert_eq!(event, Some(OptionListEvent::Multi(choices(&["a"]))));
    }

    #[test]
    fn highlight_wraps_around() {
        let mut list = OptionList::new(choices(&["a", "b"]), false);
        list.handle_key(&key(KeyCode::Up));
        list.handle_key(&key(KeyCode::Enter));
        assert_eq!(list.single_selection(), Some(&Choice::from_label("b")));
    }

    #[test]
    fn seeded_values_show_up_in_selection() {
        let mut list = OptionList::new(choices(&["a", "b", "c"]), true);
        list.seed_multi(&["a".to_string(), "c".to_string(), "nope".to_string()]);
        assert_eq!(list.multi_selection(), choices(&["a", "c"]));
    }

    #[test]
    fn window_follows_the_highlight() {
        let palette = Palette::default();
        let mut list = OptionList::new(choices(&["a", "b", "c", "d"]), false);
        for _ in 0..3 {
            list.handle_key(&key(KeyCode::Down));
        }
        let lines = list.lines(&palette, 2);
        assert_eq!(lines.len(), 2);
    }
}
