use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

/// Dark palette for after-hours desk shifts.
pub struct Nightshift;

impl Theme for Nightshift {
    fn name(&self) -> &'static str {
        "Nightshift"
    }

    fn background(&self) -> Color {
        hex_to_color(0x0f172a)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0xe2e8f0)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x64748b)
    }

    fn surface(&self) -> Color {
        hex_to_color(0x1e293b)
    }

    fn border(&self) -> Color {
        hex_to_color(0x334155)
    }

    fn selection(&self) -> Color {
        hex_to_color(0x134e4a)
    }

    fn accent(&self) -> Color {
        hex_to_color(0x2dd4bf)
    }

    fn success(&self) -> Color {
        hex_to_color(0x4ade80)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xfacc15)
    }

    fn error(&self) -> Color {
        hex_to_color(0xf87171)
    }

    fn info(&self) -> Color {
        hex_to_color(0x60a5fa)
    }
}
