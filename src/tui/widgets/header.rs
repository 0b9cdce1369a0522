//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::Page;

/// Header widget displaying app title, active page, and shortcuts
pub struct Header {
    page: Page,
}

impl Header {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);
        let page_style = Style::default().fg(Color::White);

        let content = Line::from(vec![
            Span::styled(" minetop", title),
            Span::raw("  "),
            Span::styled(self.page.title(), page_style),
            Span::raw("   "),
            Span::styled("[", dim),
            Span::styled("m", key),
            Span::styled("] Menu  ", dim),
            Span::styled("[", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
