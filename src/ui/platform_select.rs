use crate::app::state::{AppState, FocusPanel, Platform};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Platform;
    let block = Block::default()
        .title(" Select Platform ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1))
        .style(if focused {
            Theme::panel_bg_focused()
        } else {
            Theme::panel_bg()
        });

    let mut spans: Vec<Span> = Vec::new();
    if focused {
        spans.push(Span::styled("◀ ", Theme::key_hint()));
    }
    for (i, platform) in Platform::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Theme::hint_text()));
        }
        let selected = *platform == state.platform;
        let style = if selected {
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Theme::hint_text()
        };
        spans.push(Span::styled(format!(" {} ", platform.name()), style));
    }
    if focused {
        spans.push(Span::styled(" ▶", Theme::key_hint()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
