//! Badge component for status labels
//!
//! ```ignore
//! cn::badge("Approved")
//!     .color(BadgeColor::Success)
//!     .badge_type(BadgeType::Accent)
//!     .size(BadgeSize::Lg)
//! ```

use rayna_core::{cx, span, ElementBuilder, Node};

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-full font-medium";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeColor {
    Orange,
    #[default]
    Blue,
    Success,
    Warning,
    Error,
    Neutral,
    Disabled,
}

impl BadgeColor {
    pub const ALL: [BadgeColor; 7] = [
        BadgeColor::Orange,
        BadgeColor::Blue,
        BadgeColor::Success,
        BadgeColor::Warning,
        BadgeColor::Error,
        BadgeColor::Neutral,
        BadgeColor::Disabled,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BadgeColor::Orange => "orange",
            BadgeColor::Blue => "blue",
            BadgeColor::Success => "success",
            BadgeColor::Warning => "warning",
            BadgeColor::Error => "error",
            BadgeColor::Neutral => "neutral",
            BadgeColor::Disabled => "disabled",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeType {
    /// Solid background
    #[default]
    Filled,
    /// Tinted background, dark text
    Accent,
    /// Border only
    Outline,
}

impl BadgeType {
    pub const ALL: [BadgeType; 3] = [BadgeType::Filled, BadgeType::Accent, BadgeType::Outline];

    pub fn classes(&self, color: BadgeColor) -> &'static str {
        use BadgeColor as C;
        match (self, color) {
            (BadgeType::Filled, C::Orange) => "bg-[#F56630] text-white",
            (BadgeType::Filled, C::Blue) => "bg-[#1671D9] text-white",
            (BadgeType::Filled, C::Success) => "bg-[#0F973D] text-white",
            (BadgeType::Filled, C::Warning) => "bg-[#F3A218] text-black",
            (BadgeType::Filled, C::Error) => "bg-[#D42620] text-white",
            (BadgeType::Filled, C::Neutral) => "bg-[#101928] text-white",
            (BadgeType::Filled, C::Disabled) => "bg-[#98A2B3] text-[#F9FAFB]",

            (BadgeType::Accent, C::Orange) => "bg-[#FFECE5] text-[#AD3307]",
            (BadgeType::Accent, C::Blue) => "bg-[#E3EFFC] text-[#04326B]",
            (BadgeType::Accent, C::Success) => "bg-[#E7F6EC] text-[#036B26]",
            (BadgeType::Accent, C::Warning) => "bg-[#FEF6E7] text-[#865503]",
            (BadgeType::Accent, C::Error) => "bg-[#FBEAE9] text-[#9E0A05]",
            (BadgeType::Accent, C::Neutral) => "bg-[#F0F2F5] text-[#344054]",
            (BadgeType::Accent, C::Disabled) => "bg-[#D0D5DD] text-[#344054]",

            (BadgeType::Outline, C::Orange) => "border border-[#AD3307] text-[#AD3307]",
            (BadgeType::Outline, C::Blue) => "border border-[#04326B] text-[#04326B]",
            (BadgeType::Outline, C::Success) => "border border-[#036B26] text-[#036B26]",
            (BadgeType::Outline, C::Warning) => "border border-[#865503] text-[#865503]",
            (BadgeType::Outline, C::Error) => "border border-[#9E0A05] text-[#9E0A05]",
            (BadgeType::Outline, C::Neutral) => "border border-[#344054] text-[#344054]",
            (BadgeType::Outline, C::Disabled) => "border border-[#98A2B3] text-[#98A2B3]",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 3] = [BadgeSize::Sm, BadgeSize::Md, BadgeSize::Lg];

    pub fn classes(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "text-xs py-0 px-2",
            BadgeSize::Md => "text-sm py-[2px] px-3",
            BadgeSize::Lg => "text-sm py-1 px-3",
        }
    }
}

/// Badge component for status indicators
#[derive(Clone, Debug)]
pub struct Badge {
    label: String,
    color: BadgeColor,
    badge_type: BadgeType,
    size: BadgeSize,
    class: String,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: BadgeColor::default(),
            badge_type: BadgeType::default(),
            size: BadgeSize::default(),
            class: String::new(),
        }
    }

    pub fn color(mut self, color: BadgeColor) -> Self {
        self.color = color;
        self
    }

    pub fn badge_type(mut self, badge_type: BadgeType) -> Self {
        self.badge_type = badge_type;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn class_string(&self) -> String {
        cx([
            BASE_CLASSES,
            self.size.classes(),
            self.badge_type.classes(self.color),
            self.class.as_str(),
        ])
    }
}

impl ElementBuilder for Badge {
    fn build(&self) -> Node {
        span()
            .class(&self.class_string())
            .text(self.label.clone())
            .into_node()
    }
}

/// Create a badge with text
pub fn badge(label: impl Into<String>) -> Badge {
    Badge::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_defaults() {
        let b = badge("New");
        assert_eq!(
            b.class_string(),
            "inline-flex items-center justify-center rounded-full font-medium text-sm py-[2px] px-3 bg-[#1671D9] text-white"
        );
        assert_eq!(b.build().text_content(), "New");
    }

    #[test]
    fn test_every_combination_is_defined() {
        for badge_type in BadgeType::ALL {
            for color in BadgeColor::ALL {
                assert!(!badge_type.classes(color).is_empty());
            }
        }
        for size in BadgeSize::ALL {
            assert!(!size.classes().is_empty());
        }
    }

    #[test]
    fn test_warning_filled_uses_dark_text() {
        let b = badge("Pending").color(BadgeColor::Warning);
        assert!(b.class_string().contains("text-black"));
    }
}
