use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub platform: Rect,
    pub link_input: Rect,
    pub progress: Rect,
    pub download_button: Rect,
    pub help: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Keep the form readable on very wide terminals
    let form_w = content.width.min(100);
    let form = Rect::new(
        content.x + (content.width - form_w) / 2,
        content.y,
        form_w,
        content.height,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Platform selector
            Constraint::Length(3), // Link input
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Download button
            Constraint::Min(0),    // Key help
        ])
        .split(form);

    // Center the button under the form
    let button_w = 16.min(form.width);
    let download_button = Rect::new(
        chunks[4].x + (chunks[4].width - button_w) / 2,
        chunks[4].y,
        button_w,
        chunks[4].height,
    );

    AppLayout {
        title_bar: chunks[0],
        platform: chunks[1],
        link_input: chunks[2],
        progress: chunks[3],
        download_button,
        help: chunks[5],
        status_bar,
    }
}

/// A rectangle of `w` x `h` centered in `area`, shrunk to fit.
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2)).max(1);
    let h = h.min(area.height).max(1);
    Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    )
}
