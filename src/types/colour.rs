//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SwatchError};

/// A 24-bit sRGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts `#RRGGBB` with an optional leading `#`. Anything else is an
    /// `InvalidColour` error; there is no fallback colour.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidColour {
                value: s.to_string(),
                help: Some("use #RRGGBB format, e.g. #3498db".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::InvalidColour {
        value: s.to_string(),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::new(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("3498db").unwrap();
        assert_eq!(c, Colour::new(0x34, 0x98, 0xdb));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGGGGG").is_err());
        assert!(Colour::from_hex("#fff").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#1234567").is_err());
        assert!(Colour::from_hex("").is_err());
        // multi-byte input must error, not panic on a slice boundary
        assert!(Colour::from_hex("€€").is_err());
    }

    #[test]
    fn test_from_hex_error_variant() {
        let err = Colour::from_hex("#zzzzzz").unwrap_err();
        assert!(matches!(err, SwatchError::InvalidColour { .. }));
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(format!("{}", Colour::new(255, 0, 128)), "#ff0080");
        assert_eq!(Colour::new(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#ffc371".parse().unwrap();
        assert_eq!(c, Colour::new(0xff, 0xc3, 0x71));
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let json = serde_json::to_string(&Colour::new(255, 95, 109)).unwrap();
        assert_eq!(json, "\"#ff5f6d\"");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::new(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::new(255, 255, 255));
    }
}
