//! Donate page with one tab per project

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget, Wrap},
};

use crate::core::DonateTab;

const MINETOP_ADDRESS: &str = "45uBYox4g6oGPkWCyDpkGahM76qt2wAWGbYu3cQSFKevRTjSLFyHJfFLEiWp64rXM1ckRKGYrRvMt2c9NVNJ4y9Q27PLRTh";
const P2POOL_ADDRESS: &str = "44MnN1f3Eto8DZYUWuE5XZNUtE3vcRzt2j6PzqWpPau34e6Cf4fAxt6X2QDmixmbPWtGpzZpgMsaoxxDDXqcxcPv8KCCBdK";
const XMRIG_ADDRESS: &str = "48edfHu7V9Z84YzzMa6fUueoELZ9ZRXq9VetWzYGzKt52XU5xvqgzYnDK9URnRoJMk1j8nLwEVsaSWJ4fhdUyZijBGUicoD";

pub struct DonatePage {
    selected: DonateTab,
}

impl DonatePage {
    pub fn new(selected: DonateTab) -> Self {
        Self { selected }
    }

    fn blurb(&self) -> &'static str {
        match self.selected {
            DonateTab::Minetop => {
                "Support development of this control panel. Every donation \
                 helps keep the project maintained."
            }
            DonateTab::P2pool => {
                "P2Pool is the decentralized pool this app mines through. \
                 Donations fund its continued development."
            }
            DonateTab::Xmrig => {
                "XMRig is the miner doing the actual work. Consider \
                 supporting its authors."
            }
        }
    }

    fn address(&self) -> &'static str {
        match self.selected {
            DonateTab::Minetop => MINETOP_ADDRESS,
            DonateTab::P2pool => P2POOL_ADDRESS,
            DonateTab::Xmrig => XMRIG_ADDRESS,
        }
    }
}

impl Widget for DonatePage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // tabs
            Constraint::Length(4), // blurb
            Constraint::Min(4),    // address
        ])
        .split(area);

        let titles: Vec<Line> = DonateTab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} ", tab.label())))
            .collect();
        let selected = DonateTab::ALL
            .iter()
            .position(|t| *t == self.selected)
            .unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .block(Block::default().borders(Borders::BOTTOM))
            .render(chunks[0], buf);

        Paragraph::new(self.blurb())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            self.address(),
            Style::default().fg(Color::White),
        )))
        .block(
            Block::default()
                .title(format!(" {} donation address ", self.selected.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .render(chunks[2], buf);
    }
}
