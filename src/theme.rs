use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label of the toggle button: it names the theme you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }

    pub fn toggle_class(self) -> &'static str {
        match self {
            Theme::Light => "btn btn-outline-primary btn-sm ms-2",
            Theme::Dark => "btn btn-outline-warning btn-sm ms-2",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                secondary: Color::Gray,
                accent: Color::Blue,
                success: Color::Green,
                warning: Color::Rgb(0xd9, 0x77, 0x06),
                danger: Color::Red,
            },
            Theme::Dark => Palette {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::Gray,
                secondary: Color::White,
                accent: Color::LightBlue,
                success: Color::LightGreen,
                warning: Color::Yellow,
                danger: Color::LightRed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}
