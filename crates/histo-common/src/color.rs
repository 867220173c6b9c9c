//! Color values and hex parsing.

use std::str::FromStr;

use crate::error::HistoError;

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string to an opaque color.
    ///
    /// Accepts `#rrggbb` and the `#rgb` shorthand (each digit doubled,
    /// so `#d55` is `#dd5555`). The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, HistoError> {
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(HistoError::InvalidColor(hex.to_string()));
        }

        let channel =
            |s: &str| u8::from_str_radix(s, 16).map_err(|_| HistoError::InvalidColor(hex.to_string()));

        match digits.len() {
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::opaque(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = channel(&digits[0..2])?;
                let g = channel(&digits[2..4])?;
                let b = channel(&digits[4..6])?;
                Ok(Self::opaque(r, g, b))
            }
            _ => Err(HistoError::InvalidColor(hex.to_string())),
        }
    }
}

impl FromStr for Rgba {
    type Err = HistoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digit() {
        assert_eq!(Rgba::from_hex("#FF0000").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(Rgba::from_hex("#00FF00").unwrap(), Rgba::opaque(0, 255, 0));
        assert_eq!(Rgba::from_hex("0000FF").unwrap(), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn test_from_hex_shorthand() {
        // Each digit doubles: #d55 == #dd5555
        assert_eq!(Rgba::from_hex("#d55").unwrap(), Rgba::opaque(0xdd, 0x55, 0x55));
        assert_eq!(Rgba::from_hex("#555").unwrap(), Rgba::opaque(0x55, 0x55, 0x55));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgba::from_hex("#GGGGGG").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#d5é").is_err());
    }

    #[test]
    fn test_from_str() {
        let color: Rgba = "#5d5".parse().unwrap();
        assert_eq!(color, Rgba::opaque(0x55, 0xdd, 0x55));
    }
}
