//! Bottom status bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::core::AppPhase;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_span(&self) -> Span<'static> {
        match self.state.phase {
            AppPhase::Loading => Span::styled(" ⟳ loading ", Style::default().fg(Color::Yellow)),
            AppPhase::Quitting => Span::styled(" ✗ quitting ", Style::default().fg(Color::Red)),
            AppPhase::Ready => {
                if !self.state.mining.running {
                    Span::styled(" ○ idle ", Style::default().fg(Color::DarkGray))
                } else if self.state.mining.paused {
                    Span::styled(" ◐ paused ", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled(" ● mining ", Style::default().fg(Color::Green))
                }
            }
        }
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![self.phase_span()];

        if self.state.is_ready() {
            spans.push(Span::styled(
                format!("│ {} ", self.state.hashrate.h10s),
                Style::default().fg(Color::Gray),
            ));
        }

        if let Some(notice) = &self.state.notice {
            spans.push(Span::styled(
                format!("│ {} ", notice.text),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
