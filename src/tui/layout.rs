//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(5),    // Page body
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the diagnostics body into tab row and log panel
pub fn diagnostics(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).split(body);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.status.height, 2);
        assert_eq!(areas.body.height, 20);
    }

    #[test]
    fn test_diagnostics_split() {
        let areas = create(Rect::new(0, 0, 80, 24));
        let (tabs, logs) = diagnostics(areas.body);
        assert_eq!(tabs.height, 2);
        assert_eq!(logs.height, 18);
    }
}
