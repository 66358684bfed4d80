//! Gradient command implementation.

use clap::Args;

use crate::cli::Format;
use crate::error::{Result, SwatchError};
use crate::gradient::{ColourStop, Gradient, GradientKind};
use crate::output::{plural, Printer};
use crate::types::Colour;

/// Generate a CSS gradient declaration
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Colour stops as #RRGGBB or #RRGGBB:POS (position in percent)
    #[arg(required = true, num_args = 2..)]
    pub stops: Vec<String>,

    /// Generate a radial gradient instead of a linear one
    #[arg(long)]
    pub radial: bool,

    /// Angle in degrees for linear gradients
    #[arg(long, short, default_value_t = 90)]
    pub angle: i32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    pub format: Format,
}

pub fn run(args: GradientArgs, printer: &Printer) -> Result<()> {
    let total = args.stops.len();
    let stops = args
        .stops
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_stop(raw, i, total))
        .collect::<Result<Vec<_>>>()?;

    let kind = if args.radial {
        GradientKind::Radial
    } else {
        GradientKind::Linear { angle: args.angle }
    };
    let gradient = Gradient::new(kind, stops)?;

    printer.status(
        "Generated",
        &format!("{} gradient ({})", kind.name(), plural(total, "stop", "stops")),
    );

    match args.format {
        Format::Text | Format::Css => println!("{}", gradient.css()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&gradient)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&gradient)?),
    }

    Ok(())
}

/// Parse a `#RRGGBB[:POS]` stop. Stops without an explicit position get an
/// even spread slot for their index (first at 0%, last at 100%).
fn parse_stop(raw: &str, index: usize, total: usize) -> Result<ColourStop> {
    let (hex, position) = match raw.rsplit_once(':') {
        Some((hex, pos)) => (hex, Some(pos)),
        None => (raw, None),
    };

    let colour = Colour::from_hex(hex)?;
    let position = match position {
        Some(pos) => pos.parse::<u8>().map_err(|_| SwatchError::Validation {
            message: format!("invalid stop position: {pos}"),
            help: Some("positions are whole percentages from 0 to 100".to_string()),
        })?,
        None => even_position(index, total),
    };

    Ok(ColourStop::new(colour, position))
}

/// Even-spread position for stop `index` of `total` (total is at least 2).
fn even_position(index: usize, total: usize) -> u8 {
    ((100 * index) as f32 / (total - 1) as f32).round() as u8
}
