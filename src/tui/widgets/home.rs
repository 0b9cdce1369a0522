//! Home page: mining controls and hashrate summary

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::{HashrateDisplay, MiningState};

pub struct HomePage<'a> {
    mining: MiningState,
    hashrate: &'a HashrateDisplay,
}

impl<'a> HomePage<'a> {
    pub fn new(mining: MiningState, hashrate: &'a HashrateDisplay) -> Self {
        Self { mining, hashrate }
    }

    fn mining_line(&self) -> Line<'static> {
        let (icon, text, color) = if !self.mining.running {
            ("○", "Stopped", Color::DarkGray)
        } else if self.mining.paused {
            ("◐", "Paused", Color::Yellow)
        } else {
            ("●", "Mining", Color::Green)
        };

        Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn hashrate_rows(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        vec![
            Line::from(vec![
                Span::styled("   10s  ", label),
                Span::styled(self.hashrate.h10s.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("   60s  ", label),
                Span::styled(self.hashrate.h60s.clone(), value),
            ]),
            Line::from(vec![
                Span::styled("   15m  ", label),
                Span::styled(self.hashrate.h15m.clone(), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" donate ", label),
                Span::styled(self.hashrate.donate.clone(), Style::default().fg(Color::Gray)),
            ]),
        ]
    }

    fn controls_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        let mut spans = vec![Span::raw(" ")];
        if !self.mining.running {
            spans.extend([
                Span::styled("[", dim),
                Span::styled("s", key),
                Span::styled("] Start mining", dim),
            ]);
        } else if self.mining.paused {
            spans.extend([
                Span::styled("[", dim),
                Span::styled("r", key),
                Span::styled("] Resume", dim),
            ]);
        } else {
            spans.extend([
                Span::styled("[", dim),
                Span::styled("p", key),
                Span::styled("] Pause", dim),
            ]);
        }
        Line::from(spans)
    }
}

impl<'a> Widget for HomePage<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // mining state
            Constraint::Length(7), // hashrate
            Constraint::Min(1),    // controls
        ])
        .split(area);

        Paragraph::new(self.mining_line())
            .block(Block::default().title(" Miner ").borders(Borders::ALL))
            .render(chunks[0], buf);

        Paragraph::new(self.hashrate_rows())
            .block(Block::default().title(" Hashrate ").borders(Borders::ALL))
            .render(chunks[1], buf);

        Paragraph::new(self.controls_line()).render(chunks[2], buf);
    }
}
