//! Main render/view function (View in TEA pattern)

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{layout, widgets};
use crate::app::state::AppState;
use crate::core::Page;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from scroll state: each log panel is rebuilt from its
/// buffer on every frame, so the view and the buffer can never drift.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state.active_page), areas.header);

    if !state.is_ready() {
        render_loading(frame, areas.body);
    } else {
        render_page(frame, state, areas.body);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Drawer overlays the body when open
    if state.drawer.open {
        frame.render_widget(
            widgets::Drawer::new(&state.drawer, state.active_page),
            areas.body,
        );
    }
}

fn render_loading(frame: &mut Frame, body: ratatui::layout::Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Connecting to the mining backend...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn render_page(frame: &mut Frame, state: &mut AppState, body: ratatui::layout::Rect) {
    match state.active_page {
        Page::Home => {
            frame.render_widget(widgets::HomePage::new(state.mining, &state.hashrate), body);
        }

        Page::Welcome => {
            if let Some(wizard) = &state.wizard {
                frame.render_widget(widgets::WizardPage::new(wizard), body);
            }
        }

        Page::Settings => {
            frame.render_widget(widgets::SettingsPage::new(&state.settings_form), body);
        }

        Page::Diagnostics => {
            let (tabs_area, logs_area) = layout::diagnostics(body);
            let tab = state.diagnostics_tab;
            frame.render_widget(widgets::ProcessTabs::new(tab), tabs_area);

            let panel = state.panel_mut(tab);
            let log_view = widgets::LogView::new(&panel.buffer).title(tab.label());
            frame.render_stateful_widget(log_view, logs_area, &mut panel.view);
        }

        Page::Donate => {
            frame.render_widget(widgets::DonatePage::new(state.donate_tab), body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::update;
    use crate::app::message::Message;
    use crate::core::{MinerConfig, ProcessKind};
    use ratatui::{backend::TestBackend, Terminal};

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        let config: MinerConfig = serde_json::from_str(
            r#"{"pool":{"Local":{"monero_address":"4xyz","blockchain_dir":"/blocks"}}}"#,
        )
        .unwrap();
        update(&mut state, Message::ConfigLoaded(config));
        state
    }

    fn draw(state: &mut AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_loading_screen() {
        let mut state = AppState::new();
        let terminal = draw(&mut state);
        assert!(buffer_text(&terminal).contains("Connecting to the mining backend"));
    }

    #[test]
    fn test_home_page_renders_hashrate() {
        let mut state = ready_state();
        let terminal = draw(&mut state);
        let text = buffer_text(&terminal);
        assert!(text.contains("Hashrate"));
        assert!(text.contains("0 H/s"));
    }

    #[test]
    fn test_each_page_renders() {
        let mut state = ready_state();
        for page in Page::NAVIGABLE {
            update(&mut state, Message::Navigate(page));
            let terminal = draw(&mut state);
            assert!(buffer_text(&terminal).contains(page.title()));
        }
    }

    #[test]
    fn test_wizard_page_renders() {
        let mut state = AppState::new();
        let config: MinerConfig = serde_json::from_str(r#"{"pool":null}"#).unwrap();
        update(&mut state, Message::ConfigLoaded(config));

        let terminal = draw(&mut state);
        assert!(buffer_text(&terminal).contains("Monero address"));
    }

    #[test]
    fn test_diagnostics_log_panel_rebuilds_from_buffer() {
        let mut state = ready_state();
        update(&mut state, Message::Navigate(Page::Diagnostics));
        state
            .panel_mut(ProcessKind::Xmrig)
            .buffer
            .push("accepted share 1/1");

        let terminal = draw(&mut state);
        assert!(buffer_text(&terminal).contains("accepted share 1/1"));
    }

    #[test]
    fn test_drawer_overlay() {
        let mut state = ready_state();
        update(&mut state, Message::ToggleDrawer);

        let terminal = draw(&mut state);
        assert!(buffer_text(&terminal).contains("Menu"));
    }

    #[test]
    fn test_notice_in_status_bar() {
        let mut state = ready_state();
        state.raise_notice("Backend exited");

        let terminal = draw(&mut state);
        assert!(buffer_text(&terminal).contains("Backend exited"));
    }
}
