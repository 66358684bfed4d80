use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Palette(args) => swatch::cli::palette::run(args, &printer)?,
        Commands::Gradient(args) => swatch::cli::gradient::run(args, &printer)?,
        Commands::Glass(args) => swatch::cli::glass::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
