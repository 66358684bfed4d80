//! Glass command implementation.

use clap::Args;

use crate::cli::Format;
use crate::error::Result;
use crate::glass::GlassEffect;
use crate::output::Printer;
use crate::types::Colour;

/// Generate a glassmorphism CSS snippet
#[derive(Args, Debug)]
pub struct GlassArgs {
    /// Card background colour
    #[arg(long, default_value = "#ffffff")]
    pub background: Colour,

    /// Background opacity (0 to 1)
    #[arg(long, default_value_t = 0.25)]
    pub transparency: f32,

    /// Backdrop blur radius in pixels
    #[arg(long, default_value_t = 4.0)]
    pub blur: f32,

    /// Corner radius in pixels
    #[arg(long, default_value_t = 10)]
    pub radius: u32,

    /// Skip the faint outline border
    #[arg(long)]
    pub no_outline: bool,

    /// Shadow colour
    #[arg(long, default_value = "#1f2687")]
    pub shadow_colour: Colour,

    /// Shadow opacity (0 to 1)
    #[arg(long, default_value_t = 0.37)]
    pub shadow_opacity: f32,

    /// Shadow spread in pixels
    #[arg(long, default_value_t = 32)]
    pub shadow_spread: u32,

    /// Skip the hover rule
    #[arg(long)]
    pub no_hover: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    pub format: Format,
}

pub fn run(args: GlassArgs, printer: &Printer) -> Result<()> {
    let effect = GlassEffect {
        background: args.background,
        transparency: args.transparency,
        blur: args.blur,
        border_radius: args.radius,
        outline: !args.no_outline,
        shadow_colour: args.shadow_colour,
        shadow_opacity: args.shadow_opacity,
        shadow_spread: args.shadow_spread,
        hover: !args.no_hover,
    };
    let css = effect.css()?;

    printer.status(
        "Generated",
        &format!("glass effect ({} at blur {}px)", args.background, args.blur),
    );

    match args.format {
        Format::Text | Format::Css => println!("{css}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&effect)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&effect)?),
    }

    Ok(())
}
