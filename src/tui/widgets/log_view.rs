//! Scrollable log panel fed by a process output buffer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};

use crate::core::LogBuffer;

/// State for log view scrolling
#[derive(Debug, Default)]
pub struct LogViewState {
    /// Current scroll offset from top
    pub offset: usize,
    /// Whether auto-scroll is enabled (follow new content)
    pub auto_scroll: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl LogViewState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_lines);
        self.offset = (self.offset + n).min(max_offset);

        // Re-enable auto-scroll if at bottom
        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.total_lines.saturating_sub(self.visible_lines);
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_down(page);
    }

    /// Update with new content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        // Auto-scroll if enabled
        if self.auto_scroll && total > visible {
            self.offset = total.saturating_sub(visible);
        }
    }
}

/// Log view widget rebuilt from the buffer on every frame
pub struct LogView<'a> {
    buffer: &'a LogBuffer,
    title: &'a str,
}

impl<'a> LogView<'a> {
    pub fn new(buffer: &'a LogBuffer) -> Self {
        Self {
            buffer,
            title: " Logs ",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Style a raw output line by content
    fn format_line(line: &str) -> Line<'static> {
        let lower = line.to_ascii_lowercase();
        let style = if lower.contains("error") || lower.contains("fail") {
            Style::default().fg(Color::LightRed)
        } else if lower.contains("warn") {
            Style::default().fg(Color::Yellow)
        } else if lower.contains("accepted") || lower.contains("share found") {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        Line::from(Span::styled(line.to_string(), style))
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let waiting = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No output yet",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];

        Paragraph::new(waiting)
            .alignment(ratatui::layout::Alignment::Center)
            .render(inner, buf);
    }
}

impl<'a> StatefulWidget for LogView<'a> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.buffer.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let block = Block::default()
            .title(format!(" {} ", self.title.trim()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let visible_lines = inner.height as usize;
        state.update_content_size(self.buffer.len(), visible_lines);

        let start = state.offset;
        let end = (start + visible_lines).min(self.buffer.len());

        let lines: Vec<Line> = self
            .buffer
            .lines()
            .skip(start)
            .take(end - start)
            .map(Self::format_line)
            .collect();

        Paragraph::new(lines).render(inner, buf);

        if self.buffer.len() > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(self.buffer.len()).position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_buffer(n: usize) -> LogBuffer {
        let mut buffer = LogBuffer::new(1000);
        for i in 0..n {
            buffer.push(format!("line {}", i));
        }
        buffer
    }

    #[test]
    fn test_scroll_up_disables_auto_scroll() {
        let mut state = LogViewState::new();
        state.update_content_size(100, 10);
        assert_eq!(state.offset, 90);

        state.scroll_up(5);
        assert_eq!(state.offset, 85);
        assert!(!state.auto_scroll);
    }

    #[test]
    fn test_scroll_down_to_bottom_reenables_auto_scroll() {
        let mut state = LogViewState::new();
        state.update_content_size(100, 10);
        state.scroll_up(50);

        state.scroll_down(100);
        assert_eq!(state.offset, 90);
        assert!(state.auto_scroll);
    }

    #[test]
    fn test_auto_scroll_follows_new_content() {
        let mut state = LogViewState::new();
        state.update_content_size(100, 10);
        state.update_content_size(120, 10);
        assert_eq!(state.offset, 110);
    }

    #[test]
    fn test_manual_offset_survives_new_content() {
        let mut state = LogViewState::new();
        state.update_content_size(100, 10);
        state.scroll_to_top();

        state.update_content_size(120, 10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_render_buffer_into_view() {
        let buffer = filled_buffer(50);
        let mut state = LogViewState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));

        LogView::new(&buffer)
            .title(" xmrig ")
            .render(Rect::new(0, 0, 40, 12), &mut buf, &mut state);

        // 12 rows minus the border leaves 10 content rows
        assert_eq!(state.visible_lines, 10);
        assert_eq!(state.total_lines, 50);
        assert_eq!(state.offset, 40);
    }

    #[test]
    fn test_render_empty_buffer() {
        let buffer = LogBuffer::new(1000);
        let mut state = LogViewState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 12));

        LogView::new(&buffer).render(Rect::new(0, 0, 40, 12), &mut buf, &mut state);
        assert_eq!(state.total_lines, 0);
    }
}
