mod input_field;
mod layout;
mod message_dialog;
mod platform_select;
mod progress_bar;
mod save_dialog;
mod status_bar;
mod theme;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::panel_bg()), area);
    let app_layout = layout::compute_layout(area);

    render_title(frame, app_layout.title_bar);
    platform_select::render(frame, app_layout.platform, state);
    input_field::render(
        frame,
        app_layout.link_input,
        "Enter Video Link",
        &state.link,
        "Paste your video link here...",
        state.focus == FocusPanel::Link && !state.save_dialog.visible && state.message.is_none(),
    );
    progress_bar::render(frame, app_layout.progress, state);
    render_download_button(frame, app_layout.download_button, state);
    render_help(frame, app_layout.help);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popups go last so they draw over the form
    save_dialog::render(frame, state);
    message_dialog::render(frame, state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("vidgrab", Theme::title().fg(Theme::ACCENT_TEAL)),
        Span::styled("  video downloader", Theme::hint_text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_download_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::DownloadButton;
    let style = if state.is_downloading() {
        Theme::button_disabled()
    } else if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    let block = Block::default()
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
        });

    let button = Paragraph::new(Line::from("Download").alignment(Alignment::Center))
        .style(style)
        .block(block);
    frame.render_widget(button, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let help = Line::from(vec![
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" Next field  ", Theme::hint_text()),
        Span::styled("←→", Theme::key_hint()),
        Span::styled(" Platform  ", Theme::hint_text()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" Download  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Quit", Theme::hint_text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(
        Paragraph::new(help),
        Rect::new(area.x, area.y + 1.min(area.height - 1), area.width, 1),
    );
}
