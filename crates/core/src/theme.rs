//! Palette, fonts and geometry units shared by every slide.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul};

/// English Metric Units, the coordinate system of OOXML drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Emu(pub i64);

impl Emu {
    pub const PER_INCH: i64 = 914_400;

    /// Convert inches to EMU, truncating like the OOXML tooling does.
    pub fn inches(value: f64) -> Self {
        Self((value * Self::PER_INCH as f64) as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;

    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl Sum for Emu {
    fn sum<I: Iterator<Item = Emu>>(iter: I) -> Emu {
        iter.fold(Emu(0), Add::add)
    }
}

/// Slide width (widescreen 13.333in).
pub const SLIDE_WIDTH: Emu = Emu(12_191_695);
/// Slide height (7.5in).
pub const SLIDE_HEIGHT: Emu = Emu(6_858_000);

/// An sRGB colour from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Upper-case hex string as used by `a:srgbClr`.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const AZURE_BLUE: Color = Color(0x00, 0x78, 0xD4);
pub const DARK_BLUE: Color = Color(0x00, 0x20, 0x50);
pub const GREEN: Color = Color(0x00, 0xA3, 0x6C);
pub const PINK: Color = Color(0xE8, 0x3E, 0x8C);
pub const PURPLE: Color = Color(0x77, 0x19, 0xAA);
pub const GOLD: Color = Color(0xFF, 0xB9, 0x00);
pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);
pub const LIGHT_GRAY: Color = Color(0xF2, 0xF2, 0xF2);
pub const BLACK: Color = Color(0x00, 0x00, 0x00);
pub const MID_GRAY: Color = Color(0x44, 0x44, 0x44);
pub const LIGHT_BLUE: Color = Color(0xE8, 0xF4, 0xFD);
pub const LIGHT_GOLD: Color = Color(0xFF, 0xF8, 0xE1);

/// The two typefaces the deck uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Font {
    #[default]
    Regular,
    Semibold,
}

impl Font {
    pub fn typeface(self) -> &'static str {
        match self {
            Font::Regular => "Segoe UI",
            Font::Semibold => "Segoe UI Semibold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_truncate() {
        assert_eq!(Emu::inches(13.333), SLIDE_WIDTH);
        assert_eq!(Emu::inches(7.5), SLIDE_HEIGHT);
        assert_eq!(Emu::inches(1.0).value(), 914_400);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(AZURE_BLUE.hex(), "0078D4");
        assert_eq!(WHITE.hex(), "FFFFFF");
    }

    #[test]
    fn test_emu_sum() {
        let total: Emu = [Emu::inches(1.0), Emu::inches(2.0)].into_iter().sum();
        assert_eq!(total, Emu::inches(3.0));
    }
}
