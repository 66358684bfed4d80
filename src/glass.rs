//! Glassmorphism CSS generation.
//!
//! Produces a `.glass-effect` rule block: a translucent background, a soft
//! shadow, a backdrop blur, and optionally a faint outline and a lift-on-hover
//! rule. Translucent colours are written as 8-digit hex with the alpha byte
//! appended to the base colour.

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::Colour;

/// Parameters for a glassmorphism effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlassEffect {
    pub background: Colour,
    /// Background opacity, 0 to 1.
    pub transparency: f32,
    /// Backdrop blur radius in pixels.
    pub blur: f32,
    /// Corner radius in pixels.
    pub border_radius: u32,
    /// Draw the faint white outline border.
    pub outline: bool,
    pub shadow_colour: Colour,
    /// Shadow opacity, 0 to 1.
    pub shadow_opacity: f32,
    /// Shadow blur spread in pixels.
    pub shadow_spread: u32,
    /// Emit the hover rule.
    pub hover: bool,
}

impl Default for GlassEffect {
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            transparency: 0.25,
            blur: 4.0,
            border_radius: 10,
            outline: true,
            shadow_colour: Colour::new(0x1f, 0x26, 0x87),
            shadow_opacity: 0.37,
            shadow_spread: 32,
            hover: true,
        }
    }
}

impl GlassEffect {
    /// Render the `.glass-effect` rule block.
    pub fn css(&self) -> Result<String> {
        self.validate()?;

        let shadow = alpha_hex(self.shadow_colour, self.shadow_opacity);
        let mut lines = vec![
            ".glass-effect {".to_string(),
            format!(
                "  background: {};",
                alpha_hex(self.background, self.transparency)
            ),
            format!("  box-shadow: 0 8px {}px 0 {};", self.shadow_spread, shadow),
            format!("  backdrop-filter: blur({}px);", self.blur),
            format!("  -webkit-backdrop-filter: blur({}px);", self.blur),
            format!("  border-radius: {}px;", self.border_radius),
        ];
        if self.outline {
            lines.push("  border: 1px solid rgba(255, 255, 255, 0.18);".to_string());
        }
        lines.push("  transition: all 0.3s ease;".to_string());
        lines.push("}".to_string());

        if self.hover {
            lines.push(String::new());
            lines.push(".glass-effect:hover {".to_string());
            lines.push("  transform: translateY(-5px);".to_string());
            lines.push(format!(
                "  box-shadow: 0 12px {}px 0 {};",
                self.shadow_spread + 8,
                shadow
            ));
            lines.push(format!(
                "  background: {};",
                alpha_hex(self.background, (self.transparency + 0.05).min(1.0))
            ));
            lines.push("}".to_string());
        }

        Ok(lines.join("\n"))
    }

    fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("transparency", self.transparency),
            ("shadow opacity", self.shadow_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SwatchError::Validation {
                    message: format!("{label} out of range: {value}"),
                    help: Some("opacity values run from 0 to 1".to_string()),
                });
            }
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(SwatchError::Validation {
                message: format!("blur out of range: {}", self.blur),
                help: Some("blur is a non-negative pixel radius".to_string()),
            });
        }
        Ok(())
    }
}

/// Suffix a colour with a 2-digit alpha byte, e.g. `#ffffff40`.
fn alpha_hex(colour: Colour, opacity: f32) -> String {
    format!("{}{:02x}", colour, (opacity * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_css() {
        let expected = "\
.glass-effect {
  background: #ffffff40;
  box-shadow: 0 8px 32px 0 #1f26875e;
  backdrop-filter: blur(4px);
  -webkit-backdrop-filter: blur(4px);
  border-radius: 10px;
  border: 1px solid rgba(255, 255, 255, 0.18);
  transition: all 0.3s ease;
}

.glass-effect:hover {
  transform: translateY(-5px);
  box-shadow: 0 12px 40px 0 #1f26875e;
  background: #ffffff4d;
}";
        assert_eq!(GlassEffect::default().css().unwrap(), expected);
    }

    #[test]
    fn test_no_outline() {
        let effect = GlassEffect {
            outline: false,
            ..GlassEffect::default()
        };
        assert!(!effect.css().unwrap().contains("border: 1px solid"));
    }

    #[test]
    fn test_no_hover() {
        let effect = GlassEffect {
            hover: false,
            ..GlassEffect::default()
        };
        let css = effect.css().unwrap();
        assert!(!css.contains(":hover"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_fractional_blur() {
        let effect = GlassEffect {
            blur: 7.5,
            ..GlassEffect::default()
        };
        assert!(effect.css().unwrap().contains("backdrop-filter: blur(7.5px);"));
    }

    #[test]
    fn test_hover_opacity_caps_at_one() {
        let effect = GlassEffect {
            transparency: 1.0,
            ..GlassEffect::default()
        };
        // alpha byte stays ff rather than overflowing
        assert!(effect.css().unwrap().contains("background: #ffffffff;"));
    }

    #[test]
    fn test_opacity_out_of_range() {
        let effect = GlassEffect {
            transparency: 1.5,
            ..GlassEffect::default()
        };
        assert!(matches!(
            effect.css().unwrap_err(),
            SwatchError::Validation { .. }
        ));
    }

    #[test]
    fn test_negative_blur() {
        let effect = GlassEffect {
            blur: -1.0,
            ..GlassEffect::default()
        };
        assert!(effect.css().is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(GlassEffect::default()).unwrap();
        assert_eq!(value["background"], "#ffffff");
        assert_eq!(value["shadow_colour"], "#1f2687");
        assert_eq!(value["border_radius"], 10);
    }
}
