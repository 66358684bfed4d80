//! HSL representation and conversions to and from hex.
//!
//! Both directions use the standard six-sector formulas. Converting from hex
//! rounds hue to a whole degree and saturation/lightness to one decimal
//! place, which is the precision the palette generator works at. The
//! round trip reproduces each RGB channel within one unit.

use crate::types::Colour;

/// A colour in HSL space.
///
/// `h` is degrees in [0, 360), `s` and `l` are percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to the nearest 24-bit sRGB colour.
    ///
    /// Hue is normalized into [0, 360) before the sector lookup, so
    /// out-of-range hues wrap around instead of collapsing to black.
    pub fn to_colour(self) -> Colour {
        let h = self.h.rem_euclid(360.0);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Colour::new(channel(r + m), channel(g + m), channel(b + m))
    }
}

impl Colour {
    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let delta = cmax - cmin;

        // Six-region hue, keyed on which channel is the maximum.
        let hue = if delta == 0.0 {
            0.0
        } else if cmax == r {
            ((g - b) / delta) % 6.0
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = (hue * 60.0).round();
        if h < 0.0 {
            h += 360.0;
        }

        let l = (cmax + cmin) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl::new(h, round1(s * 100.0), round1(l * 100.0))
    }
}

/// Scale a [0, 1] channel to a byte, rounding and clamping.
fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Round to one decimal place.
fn round1(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}
