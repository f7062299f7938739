use crate::app::state::{AppState, DialogKind};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(dialog) = &state.message else {
        return;
    };

    let (accent, icon) = match dialog.kind {
        DialogKind::Info => (Theme::ACCENT_GREEN, "✔"),
        DialogKind::Error => (Theme::ACCENT_RED, "✖"),
    };

    let area = frame.area();
    let width = 64u16;
    // Rough wrap estimate: text rows + blank + help
    let text_rows = (dialog.text.chars().count() as u16 / width.saturating_sub(6).max(1)) + 1;
    let popup_area = centered(area, width, text_rows + 5);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} {} ", icon, dialog.title))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let text_area = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height - 1);
    frame.render_widget(
        Paragraph::new(dialog.text.as_str())
            .style(Theme::input_text())
            .wrap(Wrap { trim: false }),
        text_area,
    );

    let help_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let help = Line::from(vec![
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" OK", Theme::hint_text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(help), help_area);
}
