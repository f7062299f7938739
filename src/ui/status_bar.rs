use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Selected platform
    parts.push(Span::styled(
        format!(" [{}] ", state.platform),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    if state.is_downloading() {
        parts.push(Span::styled(
            format!(" | {}% ", state.progress),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Platform => "PLATFORM",
        FocusPanel::Link => "LINK",
        FocusPanel::DownloadButton => "DOWNLOAD",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
