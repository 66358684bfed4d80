//! swatch - CSS colour utility toolkit
//!
//! A library for generating colour palettes, CSS gradients, and
//! glassmorphism snippets from plain colour inputs.

pub mod cli;
pub mod error;
pub mod glass;
pub mod gradient;
pub mod output;
pub mod palette;
pub mod types;

pub use error::{Result, SwatchError};
pub use glass::GlassEffect;
pub use gradient::{ColourStop, Gradient, GradientKind};
pub use output::{plural, Printer};
pub use palette::{Palette, PaletteSpec};
pub use types::{Colour, Hsl, Scheme};
