//! Theme lookup by semantic token

use rayna_core::Color;
use serde::Serialize;

use crate::tokens::{Gray, PrimaryShade, SemanticColors, TypographyTokens};

/// Semantic color slots resolved through [`RaynaTheme::color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    PrimaryHover,
    PrimaryActive,
    PrimarySubtle,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    Border,
    BorderSubtle,
    Surface,
    SurfaceMuted,
    Info,
    Success,
    Warning,
    Error,
}

/// The Rayna light theme
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RaynaTheme {
    pub semantic: SemanticColors,
    pub typography: TypographyTokens,
}

impl RaynaTheme {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn primary(&self, shade: PrimaryShade) -> Color {
        shade.color()
    }

    pub fn gray(&self, gray: Gray) -> Color {
        gray.color()
    }

    pub fn color(&self, token: ColorToken) -> Color {
        let hex = match token {
            ColorToken::Primary => PrimaryShade::S500.hex(),
            ColorToken::PrimaryHover => PrimaryShade::S600.hex(),
            ColorToken::PrimaryActive => PrimaryShade::S700.hex(),
            ColorToken::PrimarySubtle => PrimaryShade::S50.hex(),
            ColorToken::TextPrimary => Gray::G900.hex(),
            ColorToken::TextSecondary => Gray::G600.hex(),
            ColorToken::TextTertiary => Gray::G500.hex(),
            ColorToken::TextDisabled => Gray::G400.hex(),
            ColorToken::Border => Gray::G300.hex(),
            ColorToken::BorderSubtle => Gray::G200.hex(),
            ColorToken::Surface => 0xFFFFFF,
            ColorToken::SurfaceMuted => Gray::G100.hex(),
            ColorToken::Info => self.semantic.info,
            ColorToken::Success => self.semantic.success_strong,
            ColorToken::Warning => self.semantic.warning_strong,
            ColorToken::Error => self.semantic.error_strong,
        };
        Color::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        let theme = RaynaTheme::light();
        assert_eq!(theme.color(ColorToken::Primary).to_hex(), "#EB5017");
        assert_eq!(theme.color(ColorToken::Success).to_hex(), "#04802E");
        assert_eq!(theme.color(ColorToken::Error).to_hex(), "#CB1A14");
        assert_eq!(theme.color(ColorToken::Surface), Color::WHITE);
    }

    #[test]
    fn test_theme_serializes() {
        let json = serde_json::to_string(&RaynaTheme::light()).unwrap();
        assert!(json.contains("\"font_sans\":\"Inter\""));
    }
}
