use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(32, 35, 44);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 146, 160);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(76, 175, 80);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(225, 90, 90);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_SECONDARY)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Self::BG_SURFACE)
    }

    pub fn gauge_failed() -> Style {
        Style::default().fg(Self::ACCENT_RED).bg(Self::BG_SURFACE)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT_GREEN)
    }

    pub fn button_focused() -> Style {
        Self::button().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_SURFACE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
