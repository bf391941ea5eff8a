//! Raw token tables

use rayna_core::Color;
use serde::Serialize;

/// Shades of the primary orange ramp
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PrimaryShade {
    /// Lightest shade, used for selected backgrounds
    S50,
    S75,
    S100,
    S200,
    S300,
    /// Base color
    S400,
    #[default]
    S500,
    S600,
    S700,
    S800,
    /// Darkest shade
    S900,
}

impl PrimaryShade {
    pub const ALL: [PrimaryShade; 11] = [
        PrimaryShade::S50,
        PrimaryShade::S75,
        PrimaryShade::S100,
        PrimaryShade::S200,
        PrimaryShade::S300,
        PrimaryShade::S400,
        PrimaryShade::S500,
        PrimaryShade::S600,
        PrimaryShade::S700,
        PrimaryShade::S800,
        PrimaryShade::S900,
    ];

    pub fn hex(&self) -> u32 {
        match self {
            PrimaryShade::S50 => 0xFFECE5,
            PrimaryShade::S75 => 0xFCD2C2,
            PrimaryShade::S100 => 0xFCB59A,
            PrimaryShade::S200 => 0xFA9874,
            PrimaryShade::S300 => 0xF77A4A,
            PrimaryShade::S400 => 0xF56630,
            PrimaryShade::S500 => 0xEB5017,
            PrimaryShade::S600 => 0xCC400C,
            PrimaryShade::S700 => 0xAD3307,
            PrimaryShade::S800 => 0x8F2802,
            PrimaryShade::S900 => 0x711E00,
        }
    }

    pub fn color(&self) -> Color {
        Color::from_hex(self.hex())
    }

    /// Numeric weight as written in the palette (`50`, `75`, `100`, ...)
    pub fn weight(&self) -> u16 {
        match self {
            PrimaryShade::S50 => 50,
            PrimaryShade::S75 => 75,
            PrimaryShade::S100 => 100,
            PrimaryShade::S200 => 200,
            PrimaryShade::S300 => 300,
            PrimaryShade::S400 => 400,
            PrimaryShade::S500 => 500,
            PrimaryShade::S600 => 600,
            PrimaryShade::S700 => 700,
            PrimaryShade::S800 => 800,
            PrimaryShade::S900 => 900,
        }
    }
}

/// The neutral ramp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Gray {
    G100,
    G200,
    G300,
    G400,
    G500,
    G600,
    G700,
    G800,
    G900,
}

impl Gray {
    pub fn hex(&self) -> u32 {
        match self {
            Gray::G100 => 0xF9FAFB,
            Gray::G200 => 0xE4E7EC,
            Gray::G300 => 0xD0D5DD,
            Gray::G400 => 0x98A2B3,
            Gray::G500 => 0x667185,
            Gray::G600 => 0x475367,
            Gray::G700 => 0x344054,
            Gray::G800 => 0x1D2939,
            Gray::G900 => 0x101928,
        }
    }

    pub fn color(&self) -> Color {
        Color::from_hex(self.hex())
    }
}

/// Status colors shared by badges, toasts, inputs and avatars
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SemanticColors {
    pub info: u32,
    pub info_strong: u32,
    pub info_bg: u32,
    pub success: u32,
    pub success_strong: u32,
    pub success_bg: u32,
    pub warning: u32,
    pub warning_strong: u32,
    pub warning_bg: u32,
    pub error: u32,
    pub error_strong: u32,
    pub error_bg: u32,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            info: 0x1671D9,
            info_strong: 0x0D5EBA,
            info_bg: 0xE3EFFC,
            success: 0x0F973D,
            success_strong: 0x04802E,
            success_bg: 0xE7F6EC,
            warning: 0xF3A218,
            warning_strong: 0xDD900D,
            warning_bg: 0xFEF6E7,
            error: 0xD42620,
            error_strong: 0xCB1A14,
            error_bg: 0xFBEAE9,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub font_sans: &'static str,
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_sans: "Inter",
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_ramp_is_ordered_by_weight() {
        let weights: Vec<u16> = PrimaryShade::ALL.iter().map(|s| s.weight()).collect();
        let mut sorted = weights.clone();
        sorted.sort_unstable();
        assert_eq!(weights, sorted);
    }

    #[test]
    fn test_primary_default_is_brand_orange() {
        assert_eq!(PrimaryShade::default().color().to_hex(), "#EB5017");
        assert_eq!(PrimaryShade::S400.color().to_hex(), "#F56630");
    }

    #[test]
    fn test_gray_extremes() {
        assert_eq!(Gray::G100.color().to_hex(), "#F9FAFB");
        assert_eq!(Gray::G900.color().to_hex(), "#101928");
    }
}
