//! Demo theme helpers
//!
//! A small palette plus style functions for the control widgets, working in
//! both dark and light mode.

use iced::widget::{button, pick_list, slider};
use iced::{Background, Border, Color, Shadow, Theme, color};

/// Accent used for interactive controls
pub const ACCENT: Color = color!(0xff1744);
pub const ACCENT_HOVER: Color = color!(0xff5c72);

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xffffff)
    } else {
        color!(0x1a1a1a)
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xb3b3b3)
    } else {
        color!(0x555555)
    }
}

fn track_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x333333)
    } else {
        color!(0xdddddd)
    }
}

/// Slider styling for the control panel
pub fn control_slider(theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 7.0,
        _ => 5.0,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(ACCENT),
                Background::Color(track_color(theme)),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(ACCENT),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}

/// Pick list styling for the easing selector
pub fn control_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    } else {
        match status {
            pick_list::Status::Active => Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            pick_list::Status::Hovered => Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            pick_list::Status::Opened { .. } => Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        }
    };

    let border_color = if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_secondary(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
    }
}

pub fn control_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    let (bg, selected_bg, border_color) = if is_dark(theme) {
        (
            Color::from_rgb(0.15, 0.15, 0.15),
            Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        )
    } else {
        (
            Color::from_rgb(0.98, 0.98, 0.98),
            Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        )
    };

    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(selected_bg),
        shadow: Shadow::default(),
    }
}

/// Filled accent button (the +10% action)
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Subtle outlined button (the clear action)
pub fn plain_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: text_primary(theme),
        border: Border {
            radius: 20.0.into(),
            width: 1.0,
            color: track_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.1))),
            ..base
        },
        _ => base,
    }
}
