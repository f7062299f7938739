use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bordered single-line text field. Places the terminal cursor when focused.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    placeholder: &str,
    focused: bool,
) {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Prompt chevron is 2 columns wide
    let prompt_offset = 2u16;
    let visible = inner.width.saturating_sub(prompt_offset + 1) as usize;
    let cursor_col = input.cursor_column();
    // Scroll horizontally so the cursor stays visible
    let scroll = cursor_col.saturating_sub(visible);

    let body = if input.text.is_empty() {
        Span::styled(placeholder, Theme::placeholder())
    } else {
        Span::styled(input.text.as_str(), Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled(
            "❯ ",
            Style::default().fg(if focused {
                Theme::ACCENT_TEAL
            } else {
                Theme::TEXT_SECONDARY
            }),
        ),
        body,
    ]);
    let paragraph = Paragraph::new(line).scroll((0, scroll as u16));
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + prompt_offset + (cursor_col - scroll) as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
