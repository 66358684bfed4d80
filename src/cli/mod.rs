pub mod completions;
pub mod glass;
pub mod gradient;
pub mod palette;

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};

/// swatch - CSS colour palette, gradient, and glass-effect generator
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a colour palette from a base colour
    Palette(palette::PaletteArgs),

    /// Generate a CSS gradient declaration
    Gradient(gradient::GradientArgs),

    /// Generate a glassmorphism CSS snippet
    Glass(glass::GlassArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Output format for generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One value per line
    Text,
    /// CSS declarations
    Css,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Css => "css",
            Format::Json => "json",
            Format::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
