//! Palette command implementation.

use clap::Args;

use crate::cli::Format;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::palette::PaletteSpec;
use crate::types::{Colour, Scheme};

/// Generate a colour palette from a base colour
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base colour as #RRGGBB hex
    #[arg(required = true)]
    pub base: Colour,

    /// Palette scheme
    #[arg(long, short, value_enum, default_value_t = Scheme::Analogous)]
    pub scheme: Scheme,

    /// Number of colours to generate (at least 2)
    #[arg(long, short, default_value_t = 5)]
    pub count: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let spec = PaletteSpec::new(args.base, args.scheme, args.count);
    let palette = spec.generate()?;

    let hsl = args.base.to_hsl();
    printer.info("Base", &format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l));
    printer.status(
        "Generated",
        &format!(
            "{} ({} from {})",
            plural(palette.len(), "colour", "colours"),
            args.scheme,
            args.base
        ),
    );

    match args.format {
        Format::Text => {
            for colour in palette.colours() {
                println!("{colour}");
            }
        }
        Format::Css => println!("{}", palette.css()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&palette)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&palette)?),
    }

    Ok(())
}
