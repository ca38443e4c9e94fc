//! Brand palette shared by the TUI widgets.
//!
//! Colors are stored once as RGB triples and converted on demand into Ratatui
//! (`Color`) or Plotters (`RGBColor`) values.

use plotters::style::RGBColor;
use ratatui::style::Color;

pub type Rgb = (u8, u8, u8);

/// IDBI green.
pub const PRIMARY: Rgb = (0x00, 0x6D, 0x44);
/// IDBI orange; also the reference institution's bar.
pub const SECONDARY: Rgb = (0xFF, 0x6B, 0x00);
/// Darker green for headers.
pub const ACCENT: Rgb = (0x00, 0x4D, 0x2F);
pub const LIGHT: Rgb = (0xE8, 0xF5, 0xE9);
pub const WHITE: Rgb = (0xFF, 0xFF, 0xFF);

/// Bar colors for non-reference institutions, cycled by row index.
pub const CHART_PALETTE: [Rgb; 10] = [
    PRIMARY,
    (0x2E, 0x8B, 0x57),
    (0x3C, 0xB3, 0x71),
    (0x90, 0xEE, 0x90),
    (0x98, 0xFB, 0x98),
    (0x8F, 0xBC, 0x8F),
    (0x9D, 0xC1, 0x83),
    (0x77, 0xAB, 0x59),
    (0x55, 0x8B, 0x2F),
    (0x33, 0x69, 0x1E),
];

pub const POSITIVE: Color = Color::Green;
pub const NEGATIVE: Color = Color::Red;
pub const MUTED: Color = Color::Gray;
pub const WARNING: Color = Color::Yellow;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn plot_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Fill for the bar at `index`; the reference institution always gets `SECONDARY`.
pub fn bar_fill(index: usize, is_reference: bool) -> Rgb {
    if is_reference {
        SECONDARY
    } else {
        CHART_PALETTE[index % CHART_PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bar_is_orange() {
        assert_eq!(bar_fill(0, true), SECONDARY);
        assert_eq!(bar_fill(7, true), SECONDARY);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(bar_fill(0, false), PRIMARY);
        assert_eq!(bar_fill(10, false), PRIMARY);
        assert_eq!(bar_fill(11, false), CHART_PALETTE[1]);
    }

    #[test]
    fn conversions_keep_channels() {
        assert_eq!(color(SECONDARY), Color::Rgb(255, 107, 0));
        let c = plot_color(ACCENT);
        assert_eq!((c.0, c.1, c.2), ACCENT);
    }
}
