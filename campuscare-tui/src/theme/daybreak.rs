use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

/// Light palette echoing the clinic's teal-on-white look.
pub struct Daybreak;

impl Theme for Daybreak {
    fn name(&self) -> &'static str {
        "Daybreak"
    }

    fn background(&self) -> Color {
        hex_to_color(0xf8fafc)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0x1e293b)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x64748b)
    }

    fn surface(&self) -> Color {
        hex_to_color(0xe2e8f0)
    }

    fn border(&self) -> Color {
        hex_to_color(0xcbd5e1)
    }

    fn selection(&self) -> Color {
        hex_to_color(0xccfbf1)
    }

    fn accent(&self) -> Color {
        hex_to_color(0x0d9488)
    }

    fn success(&self) -> Color {
        hex_to_color(0x16a34a)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xca8a04)
    }

    fn error(&self) -> Color {
        hex_to_color(0xdc2626)
    }

    fn info(&self) -> Color {
        hex_to_color(0x2563eb)
    }
}
