//! Process tabs for the diagnostics page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::core::ProcessKind;

/// Tab row selecting which process log panel is visible
pub struct ProcessTabs {
    selected: ProcessKind,
}

impl ProcessTabs {
    pub fn new(selected: ProcessKind) -> Self {
        Self { selected }
    }
}

impl Widget for ProcessTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = ProcessKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| Line::from(format!(" {} {} ", i + 1, kind.label())))
            .collect();

        let selected = ProcessKind::ALL
            .iter()
            .position(|k| *k == self.selected)
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
            .render(area, buf);
    }
}
