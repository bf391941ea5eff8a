//! Rayna Theme
//!
//! Design tokens for the Rayna catalog: the primary (orange) ramp, the gray
//! ramp, semantic status colors and typography. Components mostly bake their
//! tokens into utility-class strings; the typed tokens here back the places
//! that need a raw color (SVG strokes, inline styles, the app shell).

pub mod theme;
pub mod tokens;

pub use theme::{ColorToken, RaynaTheme};
pub use tokens::{Gray, PrimaryShade, SemanticColors, TypographyTokens};
