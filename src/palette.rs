//! Palette generation.
//!
//! A `PaletteSpec` pairs a base colour with a scheme and a count; `generate`
//! converts the base to HSL once, derives one hue/lightness per output slot,
//! and converts each back to hex. Generation is pure and order-preserving:
//! the same spec always yields an identical palette, in index order.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::{Colour, Hsl, Scheme};

/// Input for palette generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSpec {
    pub base: Colour,
    pub scheme: Scheme,
    pub count: usize,
}

/// A generated palette. Colour order is meaningful and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub base: Colour,
    pub scheme: Scheme,
    pub colours: Vec<Colour>,
}

impl PaletteSpec {
    pub const fn new(base: Colour, scheme: Scheme, count: usize) -> Self {
        Self {
            base,
            scheme,
            count,
        }
    }

    /// Generate the palette.
    ///
    /// Fewer than 2 colours is rejected before any computation; the
    /// monochromatic lightness sweep divides by `count - 1`.
    pub fn generate(&self) -> Result<Palette> {
        if self.count < 2 {
            return Err(SwatchError::InvalidCount {
                count: self.count,
                help: Some("palettes need at least 2 colours".to_string()),
            });
        }

        let hsl = self.base.to_hsl();
        let n = self.count;

        let colours = (0..n)
            .map(|i| {
                let derived = match self.scheme {
                    Scheme::Analogous => {
                        let offset = 30.0 * (i as f32 - (n / 2) as f32);
                        Hsl::new((hsl.h + offset).rem_euclid(360.0), hsl.s, hsl.l)
                    }
                    Scheme::Monochromatic => {
                        let light =
                            (hsl.l - 30.0 + 60.0 * i as f32 / (n - 1) as f32).clamp(20.0, 80.0);
                        Hsl::new(hsl.h, hsl.s, light)
                    }
                    Scheme::Triadic => {
                        // count == 3 takes the exact 120-degree branch
                        let step = if n == 3 { 120.0 } else { 360.0 / n as f32 };
                        Hsl::new((hsl.h + step * i as f32).rem_euclid(360.0), hsl.s, hsl.l)
                    }
                    Scheme::Complementary => {
                        let step = if n <= 2 { 180.0 } else { 180.0 / (n - 1) as f32 };
                        Hsl::new((hsl.h + step * i as f32).rem_euclid(360.0), hsl.s, hsl.l)
                    }
                };
                derived.to_colour()
            })
            .collect();

        Ok(Palette {
            base: self.base,
            scheme: self.scheme,
            colours,
        })
    }
}

impl Palette {
    /// Number of colours in the palette.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Render as a `:root` block of CSS custom properties.
    pub fn css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (i, colour) in self.colours.iter().enumerate() {
            out.push_str(&format!("  --swatch-{}: {};\n", i + 1, colour));
        }
        out.push('}');
        out
    }
}
