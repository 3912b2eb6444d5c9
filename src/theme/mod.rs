//! Color palette and filesystem locations shared by the UI and runtime.

mod paths;

pub use paths::{config_dir, lists_dir, logs_dir};

use ratatui::style::Color;

/// Palette used by every widget. Field names follow the Catppuccin Mocha
/// naming so the hex table below reads against the upstream reference.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade, used as foreground on bright selections.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for section headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color (favorite stars, no-results notice).
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for the selection bar.
    pub lavender: Color,
}

/// Build a [`Color`] from an RGB triple.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// The static palette (Catppuccin Mocha).
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((30, 30, 46)),
        mantle: hex((24, 24, 37)),
        crust: hex((17, 17, 27)),
        surface1: hex((69, 71, 90)),
        overlay1: hex((127, 132, 156)),
        text: hex((205, 214, 244)),
        subtext0: hex((166, 173, 200)),
        sapphire: hex((116, 199, 236)),
        mauve: hex((203, 166, 247)),
        green: hex((166, 227, 161)),
        yellow: hex((249, 226, 175)),
        red: hex((243, 139, 168)),
        lavender: hex((180, 190, 254)),
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

/// Serializes tests that mutate `HOME` so path resolution stays deterministic.
#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
