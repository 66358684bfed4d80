//! Palette scheme names.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::SwatchError;

/// A palette generation scheme.
///
/// The schemes are a closed set; anything else fails to parse. There is no
/// fallback palette for unrecognized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Adjacent hues, 30 degrees apart, centred on the base hue
    Analogous,
    /// A single hue swept across lightness
    Monochromatic,
    /// Hues spaced evenly around the colour wheel
    Triadic,
    /// Hues stepped toward the opposite side of the wheel
    Complementary,
}

impl Scheme {
    /// All recognized schemes.
    pub const ALL: [Scheme; 4] = [
        Scheme::Analogous,
        Scheme::Monochromatic,
        Scheme::Triadic,
        Scheme::Complementary,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Analogous => "analogous",
            Scheme::Monochromatic => "monochromatic",
            Scheme::Triadic => "triadic",
            Scheme::Complementary => "complementary",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, SwatchError> {
        match s {
            "analogous" => Ok(Scheme::Analogous),
            "monochromatic" => Ok(Scheme::Monochromatic),
            "triadic" => Ok(Scheme::Triadic),
            "complementary" => Ok(Scheme::Complementary),
            _ => Err(SwatchError::UnknownScheme {
                name: s.to_string(),
                help: Some(
                    "available schemes: analogous, monochromatic, triadic, complementary"
                        .to_string(),
                ),
            }),
        }
    }
}
