//! Navigation drawer overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

use crate::app::state::DrawerState;
use crate::core::Page;

const DRAWER_WIDTH: u16 = 24;

/// Side menu listing the reachable pages
pub struct Drawer<'a> {
    state: &'a DrawerState,
    active_page: Page,
}

impl<'a> Drawer<'a> {
    pub fn new(state: &'a DrawerState, active_page: Page) -> Self {
        Self { state, active_page }
    }
}

impl<'a> Widget for Drawer<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DRAWER_WIDTH.min(area.width);
        let drawer_area = Rect {
            x: area.x,
            y: area.y,
            width,
            height: area.height,
        };

        Clear.render(drawer_area, buf);

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(drawer_area);
        block.render(drawer_area, buf);

        let items: Vec<ListItem> = Page::NAVIGABLE
            .iter()
            .enumerate()
            .map(|(i, page)| {
                let selected = i == self.state.selected;
                let marker = if *page == self.active_page { "●" } else { " " };

                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} ", marker)),
                    Span::styled(page.title().to_string(), style),
                ]))
            })
            .collect();

        let list_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };
        List::new(items).render(list_area, buf);

        if inner.height > 1 {
            let hint_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(Span::styled(
                " ↑↓ move · Enter open · Esc close",
                Style::default().fg(Color::DarkGray),
            )))
            .render(hint_area, buf);
        }
    }
}
