use crate::app::state::{AppState, DownloadPhase};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.phase {
        DownloadPhase::Running => {
            // Ticks arrive every 50ms; advance the spinner every 4th
            let frame_idx = (state.tick_count / 4) as usize % SPINNER.len();
            format!(" Download Progress {} ", SPINNER[frame_idx])
        }
        _ => " Download Progress ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let gauge_style = if state.phase == DownloadPhase::Failed {
        Theme::gauge_failed()
    } else {
        Theme::gauge()
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(gauge_style)
        .percent(state.progress.min(100))
        .label(Span::styled(
            format!("{}%", state.progress),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}
