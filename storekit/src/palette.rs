//! `palette`
//!
//! Fixed colours used by the generated artwork.

use resvg::tiny_skia::Color;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Converts to a fully opaque drawing colour.
    pub fn to_color(self) -> Color {
        let [r, g, b] = self.0;
        Color::from_rgba8(r, g, b, 255)
    }

    /// Hex notation, e.g. `#4ecdc4`.
    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The colour as an RGBA pixel with full alpha.
    pub fn rgba(self) -> [u8; 4] {
        let [r, g, b] = self.0;
        [r, g, b, 255]
    }
}

/// Colours of the placeholder store artwork.
pub mod placeholder {
    use super::Rgb;

    /// `#4ECDC4` teal.
    pub const BACKGROUND: Rgb = Rgb([78, 205, 196]);
    /// `#FF6B6B` coral.
    pub const ACCENT: Rgb = Rgb([255, 107, 107]);
    /// `#45B7D1` blue.
    pub const HIGHLIGHT: Rgb = Rgb([69, 183, 209]);
    /// `#96CEB4` green.
    pub const GREEN: Rgb = Rgb([150, 206, 180]);
    /// `#FECA57` yellow.
    pub const YELLOW: Rgb = Rgb([254, 202, 87]);
    /// Amber used for the third speech bubble on the store feature graphic.
    pub const AMBER: Rgb = Rgb([255, 193, 7]);
    /// Text and foreground shapes.
    pub const TEXT: Rgb = Rgb([255, 255, 255]);
    /// Drop shadow behind titles.
    pub const SHADOW: Rgb = Rgb([0, 0, 0]);
}

/// Colours of the figures app icon.
pub mod figures {
    use super::Rgb;

    /// Blue figure.
    pub const BLUE: Rgb = Rgb([0, 149, 221]);
    /// Green figure.
    pub const GREEN: Rgb = Rgb([139, 195, 74]);
    /// Orange figure.
    pub const ORANGE: Rgb = Rgb([255, 152, 0]);
    /// Purple figure.
    pub const PURPLE: Rgb = Rgb([156, 39, 176]);
    /// Teal figure.
    pub const TEAL: Rgb = Rgb([0, 150, 136]);
    /// The central play disc.
    pub const PLAY_BUTTON: Rgb = Rgb([13, 71, 161]);
    /// Background and play triangle.
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Figure colours clockwise from the top.
    pub const RING: [Rgb; 5] = [BLUE, TEAL, PURPLE, GREEN, ORANGE];
}

/// Colours of the replica artwork.
pub mod replica {
    use super::Rgb;

    /// Blue figure, at the top.
    pub const BLUE: Rgb = Rgb([0, 150, 220]);
    /// Orange figure.
    pub const ORANGE: Rgb = Rgb([255, 165, 0]);
    /// Green figure.
    pub const GREEN: Rgb = Rgb([76, 175, 80]);
    /// Purple figure.
    pub const PURPLE: Rgb = Rgb([156, 39, 176]);
    /// Teal figure.
    pub const TEAL: Rgb = Rgb([0, 150, 136]);
    /// The play triangle.
    pub const PLAY_BUTTON: Rgb = Rgb([25, 118, 210]);
    /// Background.
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Figure colours clockwise from the top.
    pub const RING: [Rgb; 5] = [BLUE, ORANGE, GREEN, PURPLE, TEAL];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(placeholder::BACKGROUND.hex(), "#4ecdc4", "teal");
        assert_eq!(figures::PLAY_BUTTON.hex(), "#0d47a1", "play button");
        assert_eq!(replica::PLAY_BUTTON.hex(), "#1976d2", "replica play button");
    }
}
