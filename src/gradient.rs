//! CSS gradient generation.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::Colour;

/// A colour stop: a colour at a percentage position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColourStop {
    pub colour: Colour,
    /// Position in percent, 0 to 100.
    pub position: u8,
}

impl ColourStop {
    pub const fn new(colour: Colour, position: u8) -> Self {
        Self { colour, position }
    }
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    /// Straight-line gradient at an angle in degrees.
    Linear { angle: i32 },
    /// Circular gradient from the centre.
    Radial,
}

impl GradientKind {
    pub const fn name(self) -> &'static str {
        match self {
            GradientKind::Linear { .. } => "linear",
            GradientKind::Radial => "radial",
        }
    }
}

/// A CSS gradient: geometry plus at least two colour stops.
///
/// Stops keep their construction order; `css` sorts a copy by position when
/// rendering, so callers can hold stops in whatever order they were entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub kind: GradientKind,
    stops: Vec<ColourStop>,
}

impl Gradient {
    /// Create a gradient, validating the stop list.
    pub fn new(kind: GradientKind, stops: Vec<ColourStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(SwatchError::Validation {
                message: format!("gradient needs at least 2 colour stops, got {}", stops.len()),
                help: Some("supply two or more colours".to_string()),
            });
        }
        if let Some(stop) = stops.iter().find(|s| s.position > 100) {
            return Err(SwatchError::Validation {
                message: format!("stop position out of range: {}%", stop.position),
                help: Some("positions are percentages from 0 to 100".to_string()),
            });
        }
        Ok(Self { kind, stops })
    }

    pub fn stops(&self) -> &[ColourStop] {
        &self.stops
    }

    /// Render the `background:` declaration.
    pub fn css(&self) -> String {
        let mut stops = self.stops.clone();
        stops.sort_by_key(|s| s.position);

        let list = stops
            .iter()
            .map(|s| format!("{} {}%", s.colour, s.position))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            GradientKind::Linear { angle } => {
                format!("background: linear-gradient({angle}deg, {list});")
            }
            GradientKind::Radial => format!("background: radial-gradient(circle, {list});"),
        }
    }
}
