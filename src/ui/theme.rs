use ratatui::style::Color;

use crate::config::ThemeMode;

pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colours for one theme mode. Passed explicitly to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                background: Color::Rgb(0x11, 0x18, 0x27),
                surface: Color::Rgb(0x1f, 0x29, 0x37),
                text: Color::Rgb(0xe5, 0xe5, 0xe5),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
                accent: Color::Rgb(0x60, 0xa5, 0xfa),
                border: Color::Rgb(0x40, 0x40, 0x40),
                highlight: Color::Rgb(0x26, 0x26, 0x26),
                success: STATUS_OK,
                error: STATUS_ERROR,
            },
            ThemeMode::Light => Self {
                background: Color::Rgb(0xf9, 0xfa, 0xfb),
                surface: Color::Rgb(0xf3, 0xf4, 0xf6),
                text: Color::Rgb(0x11, 0x18, 0x27),
                muted: Color::Rgb(0x4b, 0x55, 0x63),
                accent: Color::Rgb(0x25, 0x63, 0xeb),
                border: Color::Rgb(0xd1, 0xd5, 0xdb),
                highlight: Color::Rgb(0xdb, 0xea, 0xfe),
                success: STATUS_OK,
                error: STATUS_ERROR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_differ() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Dark),
            Palette::for_mode(ThemeMode::Light)
        );
    }
}
