use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use crate::ui::input_field;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.save_dialog.visible {
        return;
    }

    let popup_area = centered(frame.area(), 80, 8);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Save Video As ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 5 || inner.width < 10 {
        return;
    }

    let filter_area = Rect::new(inner.x + 1, inner.y, inner.width - 1, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "MP4 files (*.mp4) - other extensions are kept as typed",
            Theme::hint_text(),
        )),
        filter_area,
    );

    let input_area = Rect::new(inner.x, inner.y + 1, inner.width, 3);
    input_field::render(
        frame,
        input_area,
        "File name",
        &state.save_dialog.input,
        "/path/to/video.mp4",
        true,
    );

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled(" Enter", Theme::key_hint()),
        Span::styled(" Save  ", Theme::hint_text()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Cancel  ", Theme::hint_text()),
        Span::styled("Ctrl+U", Theme::key_hint()),
        Span::styled(" Clear", Theme::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
