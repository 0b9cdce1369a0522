//! Settings page form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::settings_form::{SettingsField, SettingsForm};

pub struct SettingsPage<'a> {
    form: &'a SettingsForm,
}

impl<'a> SettingsPage<'a> {
    pub fn new(form: &'a SettingsForm) -> Self {
        Self { form }
    }

    fn field_box(&self, field: SettingsField, value: &str) -> (String, Style) {
        let focused = self.form.focus == field;
        let border = if focused && self.form.editing {
            Style::default().fg(Color::Yellow)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = if focused && self.form.editing {
            format!("{}█", value)
        } else {
            value.to_string()
        };
        (text, border)
    }

    fn hint_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        if self.form.editing {
            return Line::from(vec![
                Span::styled("[", dim),
                Span::styled("Enter", key),
                Span::styled("] Done editing", dim),
            ]);
        }

        let mut spans = vec![
            Span::styled("[", dim),
            Span::styled("Tab", key),
            Span::styled("] Field  ", dim),
            Span::styled("[", dim),
            Span::styled("Enter", key),
            Span::styled("] Edit  ", dim),
            Span::styled("[", dim),
            Span::styled("b", key),
            Span::styled("] Browse folder  ", dim),
        ];
        if self.form.save_enabled {
            spans.extend([
                Span::styled("[", dim),
                Span::styled("s", key),
                Span::styled("] Save", Style::default().fg(Color::Green)),
            ]);
        }
        Line::from(spans)
    }
}

impl<'a> Widget for SettingsPage<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // address
            Constraint::Length(3), // blockchain dir
            Constraint::Length(1), // restart notice
            Constraint::Min(1),    // hints
        ])
        .split(area);

        let (text, border) =
            self.field_box(SettingsField::MoneroAddress, &self.form.monero_address);
        Paragraph::new(text)
            .block(
                Block::default()
                    .title(" Monero address ")
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .render(chunks[0], buf);

        let (text, border) =
            self.field_box(SettingsField::BlockchainDir, &self.form.blockchain_dir);
        Paragraph::new(text)
            .block(
                Block::default()
                    .title(" Blockchain folder ")
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .render(chunks[1], buf);

        if self.form.restart_notice {
            Paragraph::new(Line::from(Span::styled(
                " Changes take effect after restarting mining",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(chunks[2], buf);
        }

        Paragraph::new(self.hint_line()).render(chunks[3], buf);
    }
}
