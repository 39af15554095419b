use serde::{Deserialize, Serialize};

/// Color of a single facelet (sticker).
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum FaceletColor {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl FaceletColor {
    /// Returns the display color as `0xRRGGBB`.
    pub const fn rgb_hex(self) -> u32 {
        match self {
            FaceletColor::White => 0xFFFFFF,
            FaceletColor::Yellow => 0xFFFF00,
            FaceletColor::Red => 0xFF0000,
            FaceletColor::Orange => 0xFFA500,
            FaceletColor::Blue => 0x0000FF,
            FaceletColor::Green => 0x00AA00,
        }
    }

    /// Returns the display color as separate red, green, and blue channels.
    pub const fn rgb(self) -> [u8; 3] {
        let hex = self.rgb_hex();
        [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
    }

    /// Returns the first letter of the color name, for plain-text output.
    pub const fn initial(self) -> char {
        match self {
            FaceletColor::White => 'W',
            FaceletColor::Yellow => 'Y',
            FaceletColor::Red => 'R',
            FaceletColor::Orange => 'O',
            FaceletColor::Blue => 'B',
            FaceletColor::Green => 'G',
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rgb_channels() {
        assert_eq!(FaceletColor::Orange.rgb(), [0xFF, 0xA5, 0x00]);
        assert_eq!(FaceletColor::Green.rgb(), [0x00, 0xAA, 0x00]);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(FaceletColor::White.to_string(), "WHITE");
        assert_eq!(
            serde_json::to_string(&FaceletColor::Yellow).unwrap(),
            "\"YELLOW\"",
        );
    }
}
