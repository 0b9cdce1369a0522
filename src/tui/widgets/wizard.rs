//! First-run setup wizard page

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::wizard::{SetupWizard, WizardField, LAST_STEP};

pub struct WizardPage<'a> {
    wizard: &'a SetupWizard,
}

impl<'a> WizardPage<'a> {
    pub fn new(wizard: &'a SetupWizard) -> Self {
        Self { wizard }
    }

    fn prompt(&self) -> &'static str {
        match self.wizard.field() {
            WizardField::MoneroAddress => "Enter the Monero address that receives your rewards:",
            WizardField::BlockchainDir => "Where should the blockchain be stored?",
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        let advance = if self.wizard.is_last_step() {
            "] Finish  "
        } else {
            "] Next  "
        };

        let mut spans = vec![
            Span::styled("[", dim),
            Span::styled("Enter", key),
            Span::styled(advance, dim),
        ];
        if self.wizard.can_go_back() {
            spans.extend([
                Span::styled("[", dim),
                Span::styled("Esc", key),
                Span::styled("] Back", dim),
            ]);
        }
        Line::from(spans)
    }
}

impl<'a> Widget for WizardPage<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Welcome · step {} of {} ",
                self.wizard.step() + 1,
                LAST_STEP + 1
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // prompt
            Constraint::Length(3), // input box
            Constraint::Min(1),    // hints
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.prompt(),
            Style::default().fg(Color::White),
        )))
        .render(chunks[0], buf);

        let input = format!("{}█", self.wizard.input());
        Paragraph::new(Line::from(Span::styled(
            input,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .render(chunks[1], buf);

        Paragraph::new(self.hint_line()).render(chunks[2], buf);
    }
}
