use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use textwrap::wrap;

use crate::descriptor::FieldDescriptor;
use crate::palette::Palette;

/// Shared decorator: label above the control, helper text below, border
/// color driven by the error flag. Stateless; the toggle-style kinds bypass
/// it and inline their own labels.
pub(crate) struct FieldFrame<'a> {
    label: &'a str,
    helper_text: Option<&'a str>,
    error: bool,
}

impl<'a> FieldFrame<'a> {
    pub fn from_descriptor(descriptor: &'a FieldDescriptor) -> Self {
        Self {
            label: descriptor.display_label(),
            helper_text: descriptor.helper_text.as_deref(),
            error: descriptor.error,
        }
    }

    /// Draws the decoration and the control body; returns the bordered
    /// control area so the dispatcher can place the cursor inside it.
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        palette: &Palette,
        control: Vec<Line<'static>>,
    ) -> Rect {
        let control_height = (control.len() as u16).max(1).saturating_add(2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(control_height),
                Constraint::Min(0),
            ])
            .split(area);

        let label = Paragraph::new(Line::from(Span::styled(
            self.label.to_string(),
            palette.label_style,
        )));
        frame.render_widget(label, chunks[0]);

        let border = Style::default().fg(palette.border_color(self.error));
        let body = Paragraph::new(control)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(body, chunks[1]);

        if let Some(helper) = self.helper_text {
            let width = (area.width.max(8) as usize).saturating_sub(2);
            let lines = wrap(helper, width)
                .into_iter()
                .map(|segment| {
                    Line::from(Span::styled(segment.into_owned(), palette.helper_style))
                })
                .collect::<Vec<_>>();
            frame.render_widget(Paragraph::new(lines), chunks[2]);
        }

        chunks[1]
    }
}
