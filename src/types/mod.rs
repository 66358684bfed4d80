//! Core colour types.

mod colour;
mod hsl;
mod scheme;

pub use colour::Colour;
pub use hsl::Hsl;
pub use scheme::Scheme;
