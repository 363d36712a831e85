use std::borrow::Cow;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ratatui::style::{Color, Modifier, Style};

/// Marker glyphs for the toggle-style controls.
#[derive(Debug, Clone)]
pub struct CheckPresentation {
    pub checked_mark: Cow<'static, str>,
    pub unchecked_mark: Cow<'static, str>,
    pub radio_on_mark: Cow<'static, str>,
    pub radio_off_mark: Cow<'static, str>,
}

impl CheckPresentation {
    pub fn with_check_marks(
        mut self,
        checked: impl Into<Cow<'static, str>>,
        unchecked: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.checked_mark = checked.into();
        self.unchecked_mark = unchecked.into();
        self
    }

    pub fn with_radio_marks(
        mut self,
        on: impl Into<Cow<'static, str>>,
        off: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.radio_on_mark = on.into();
        self.radio_off_mark = off.into();
        self
    }
}

impl Default for CheckPresentation {
    fn default() -> Self {
        Self {
            checked_mark: Cow::Borrowed("[x]"),
            unchecked_mark: Cow::Borrowed("[ ]"),
            radio_on_mark: Cow::Borrowed("(•)"),
            radio_off_mark: Cow::Borrowed("( )"),
        }
    }
}

/// Shared presentation configuration for every rendered field.
///
/// Environment the components would otherwise look up ambiently lives here
/// explicitly: the current timezone and the clock are injected values, so
/// tests can pin both.
#[derive(Debug, Clone)]
pub struct Palette {
    pub error_border: Color,
    pub neutral_border: Color,
    pub label_style: Style,
    pub value_style: Style,
    pub helper_style: Style,
    pub placeholder_style: Style,
    pub highlight_style: Style,
    pub checks: CheckPresentation,
    pub mask_char: char,
    pub date_format: Cow<'static, str>,
    pub list_rows: u16,
    pub default_zone: Tz,
    pub clock: fn() -> DateTime<Utc>,
}

impl Palette {
    pub fn border_color(&self, error: bool) -> Color {
        if error {
            self.error_border
        } else {
            self.neutral_border
        }
    }

    pub fn with_border_colors(mut self, error: Color, neutral: Color) -> Self {
        self.error_border = error;
        self.neutral_border = neutral;
        self
    }

    pub fn with_checks(mut self, checks: CheckPresentation) -> Self {
        self.checks = checks;
        self
    }

    pub fn with_mask_char(mut self, mask: char) -> Self {
        self.mask_char = mask;
        self
    }

    pub fn with_date_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_list_rows(mut self, rows: u16) -> Self {
        self.list_rows = rows.max(1);
        self
    }

    pub fn with_default_zone(mut self, zone: Tz) -> Self {
        self.default_zone = zone;
        self
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            error_border: Color::Red,
            neutral_border: Color::Gray,
            label_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            value_style: Style::default().fg(Color::White),
            helper_style: Style::default().fg(Color::DarkGray),
            placeholder_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            highlight_style: Style::default().bg(Color::DarkGray),
            checks: CheckPresentation::default(),
            mask_char: '•',
            date_format: Cow::Borrowed("%B %-d, %Y %-I:%M %p"),
            list_rows: 6,
            default_zone: chrono_tz::UTC,
            clock: Utc::now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_color_tracks_error_flag() {
        let palette = Palette::default();
        assert_eq!(palette.border_color(true), Color::Red);
        assert_eq!(palette.border_color(false), Color::Gray);
        assert_ne!(palette.border_color(true), palette.border_color(false));
    }

    #[test]
    fn builders_override_defaults() {
        let palette = Palette::default()
            .with_border_colors(Color::Magenta, Color::Blue)
            .with_list_rows(0)
            .with_default_zone(chrono_tz::Europe::Berlin);
        assert_eq!(palette.border_color(true), Color::Magenta);
        assert_eq!(palette.list_rows, 1);
        assert_eq!(palette.default_zone, chrono_tz::Europe::Berlin);
    }
}
