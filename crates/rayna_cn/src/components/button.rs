//! Button component with Rayna variants
//!
//! Nine visual variants across three families (solid/outlined, grey and text),
//! two sizes, four icon placements and four visual states. Every combination
//! resolves through the lookup tables on [`ButtonVariant`] and [`ButtonSize`].
//!
//! # Example
//!
//! ```ignore
//! use rayna_cn::prelude::*;
//!
//! cn::button("Save")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Lg)
//!     .icon_style(IconStyle::Leading)
//!     .on_click(|| println!("saved"))
//! ```

use std::rc::Rc;

use rayna_core::{cx, el, span, ElementBuilder, Node};

use crate::icons::Icon;

const BASE_CLASSES: &str =
    "flex justify-center items-center gap-2 rounded-lg font-inter font-semibold transition-colors duration-200";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled brand orange
    #[default]
    Primary,
    /// White with a gray outline
    Secondary,
    GreySolid,
    GreyOutlined,
    DestructiveSolid,
    DestructiveOutlined,
    /// Text-only variants have no padding or background
    TextPrimary,
    TextSecondary,
    TextDestructive,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 9] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::GreySolid,
        ButtonVariant::GreyOutlined,
        ButtonVariant::DestructiveSolid,
        ButtonVariant::DestructiveOutlined,
        ButtonVariant::TextPrimary,
        ButtonVariant::TextSecondary,
        ButtonVariant::TextDestructive,
    ];

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ButtonVariant::TextPrimary | ButtonVariant::TextSecondary | ButtonVariant::TextDestructive
        )
    }

    pub fn is_outlined(&self) -> bool {
        matches!(
            self,
            ButtonVariant::GreyOutlined | ButtonVariant::DestructiveOutlined
        )
    }

    /// Display name used by the demo page
    pub fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::GreySolid => "grey-solid",
            ButtonVariant::GreyOutlined => "grey-outlined",
            ButtonVariant::DestructiveSolid => "destructive-solid",
            ButtonVariant::DestructiveOutlined => "destructive-outlined",
            ButtonVariant::TextPrimary => "text-primary",
            ButtonVariant::TextSecondary => "text-secondary",
            ButtonVariant::TextDestructive => "text-destructive",
        }
    }

    /// Color, background and border classes for a state
    pub fn classes(&self, state: ButtonState) -> &'static str {
        use ButtonState as S;
        use ButtonVariant as V;

        if state == S::Disabled {
            return if self.is_text() {
                "text-[#D0D5DD] cursor-not-allowed"
            } else if self.is_outlined() {
                "bg-white border-2 border-[#F0F2F5] text-[#98A2B3] cursor-not-allowed"
            } else {
                "bg-[#D0D5DD] text-white cursor-not-allowed"
            };
        }

        match (self, state) {
            (V::TextPrimary, S::Hover) => "text-[#CC400C] hover:text-[#CC400C]",
            (V::TextPrimary, S::Focused) => "text-[#AD3307] focus:text-[#AD3307]",
            (V::TextPrimary, _) => "text-[#EB5017] hover:text-[#CC400C] focus:text-[#AD3307]",

            (V::TextSecondary, S::Hover) => "text-[#98A2B3] hover:text-[#98A2B3]",
            (V::TextSecondary, S::Focused) => "text-[#344054] focus:text-[#344054]",
            (V::TextSecondary, _) => "text-[#667185] hover:text-[#98A2B3] focus:text-[#344054]",

            (V::TextDestructive, S::Hover) => "text-[#E26E6A] hover:text-[#E26E6A]",
            (V::TextDestructive, S::Focused) => "text-[#9E0A05] focus:text-[#9E0A05]",
            (V::TextDestructive, _) => "text-[#D42620] hover:text-[#E26E6A] focus:text-[#9E0A05]",

            (V::Primary, S::Hover) => "bg-[#CC400C] text-white hover:bg-[#CC400C]",
            (V::Primary, S::Focused) => "bg-[#AD3307] text-white focus:bg-[#AD3307]",
            (V::Primary, _) => "bg-[#EB5017] text-white hover:bg-[#CC400C] focus:bg-[#AD3307]",

            (V::Secondary, S::Hover) => {
                "bg-[#F9FAFB] border-[1.5px] border-[#D0D5DD] text-[#344054] hover:bg-[#F9FAFB] hover:border-[#D0D5DD]"
            }
            (V::Secondary, S::Focused) => {
                "bg-[#F9FAFB] border-2 border-[#D0D5DD] text-[#101828] focus:bg-[#F9FAFB] focus:border-[#D0D5DD]"
            }
            (V::Secondary, _) => {
                "bg-white border-[1.5px] border-[#D0D5DD] text-[#344054] hover:bg-[#F9FAFB] hover:border-[#D0D5DD] focus:bg-[#F9FAFB] focus:border-[#D0D5DD]"
            }

            (V::GreySolid, S::Hover) => "bg-[#F0F2F5] text-[#475467] hover:bg-[#F0F2F5]",
            (V::GreySolid, S::Focused) => "bg-[#E4E7EC] text-[#344054] focus:bg-[#E4E7EC]",
            (V::GreySolid, _) => "bg-[#F9FAFB] text-[#475467] hover:bg-[#F0F2F5] focus:bg-[#E4E7EC]",

            (V::GreyOutlined, S::Hover) => {
                "bg-[#F9FAFB] border-[1.5px] border-[#D0D5DD] text-[#475467] hover:bg-[#F9FAFB] hover:border-[#D0D5DD]"
            }
            (V::GreyOutlined, S::Focused) => {
                "bg-[#F9FAFB] border-2 border-[#D0D5DD] text-[#344054] focus:bg-[#F9FAFB] focus:border-[#D0D5DD]"
            }
            (V::GreyOutlined, _) => {
                "bg-white border-[1.5px] border-[#E4E7EC] text-[#475467] hover:bg-[#F9FAFB] hover:border-[#D0D5DD] focus:bg-[#F9FAFB] focus:border-[#D0D5DD]"
            }

            (V::DestructiveSolid, S::Hover) => "bg-[#DD524D] text-white hover:bg-[#DD524D]",
            (V::DestructiveSolid, S::Focused) => "bg-[#9E0A05] text-white focus:bg-[#9E0A05]",
            (V::DestructiveSolid, _) => "bg-[#CB1A14] text-white hover:bg-[#DD524D] focus:bg-[#9E0A05]",

            (V::DestructiveOutlined, S::Hover) => {
                "bg-[#FBEAE9] border-[1.5px] border-[#BA110B] text-[#BA110B] hover:bg-[#FBEAE9] hover:border-[#BA110B]"
            }
            (V::DestructiveOutlined, S::Focused) => {
                "bg-[#FBEAE9] border-2 border-[#9E0A05] text-[#9E0A05] focus:bg-[#FBEAE9] focus:border-[#9E0A05]"
            }
            (V::DestructiveOutlined, _) => {
                "bg-white border-[1.5px] border-[#D42620] text-[#D42620] hover:bg-[#FBEAE9] hover:border-[#BA110B] focus:bg-[#FBEAE9] focus:border-[#9E0A05]"
            }
        }
    }

    /// Default icon for the variant family
    pub fn icon(&self) -> Icon {
        match self {
            ButtonVariant::Primary | ButtonVariant::TextPrimary => Icon::Plus,
            ButtonVariant::Secondary | ButtonVariant::TextSecondary => Icon::Check,
            ButtonVariant::GreySolid | ButtonVariant::GreyOutlined => Icon::Dots,
            ButtonVariant::DestructiveSolid
            | ButtonVariant::DestructiveOutlined
            | ButtonVariant::TextDestructive => Icon::Trash,
        }
    }

    /// Icon tint for a state
    pub fn icon_color(&self, state: ButtonState) -> &'static str {
        use ButtonState as S;
        use ButtonVariant as V;

        if state == S::Disabled {
            return if self.is_text() {
                "text-[#D0D5DD]"
            } else if self.is_outlined() {
                "text-[#98A2B3]"
            } else {
                "text-white"
            };
        }

        match (self, state) {
            (V::TextPrimary, S::Hover) => "text-[#CC400C]",
            (V::TextPrimary, S::Focused) => "text-[#AD3307]",
            (V::TextPrimary, _) => "text-[#EB5017]",
            (V::TextSecondary, S::Hover) => "text-[#98A2B3]",
            (V::TextSecondary, S::Focused) => "text-[#344054]",
            (V::TextSecondary, _) => "text-[#667185]",
            (V::TextDestructive, S::Hover) => "text-[#E26E6A]",
            (V::TextDestructive, S::Focused) => "text-[#9E0A05]",
            (V::TextDestructive, _) => "text-[#D42620]",
            (V::Primary | V::DestructiveSolid, _) => "text-white",
            (V::Secondary, S::Focused) => "text-[#101828]",
            (V::Secondary, _) => "text-[#344054]",
            (V::GreySolid | V::GreyOutlined, S::Focused) => "text-[#344054]",
            (V::GreySolid | V::GreyOutlined, _) => "text-[#475467]",
            (V::DestructiveOutlined, S::Hover) => "text-[#BA110B]",
            (V::DestructiveOutlined, S::Focused) => "text-[#9E0A05]",
            (V::DestructiveOutlined, _) => "text-[#D42620]",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Sm,
    Lg,
}

impl ButtonSize {
    /// Padding and font classes; text variants carry no padding
    pub fn classes(&self, icon_style: IconStyle, is_text: bool) -> &'static str {
        match (self, is_text, icon_style) {
            (ButtonSize::Lg, true, _) => "text-base",
            (ButtonSize::Sm, true, _) => "text-sm",
            (ButtonSize::Lg, false, IconStyle::IconOnly) => "p-4 text-base",
            (ButtonSize::Sm, false, IconStyle::IconOnly) => "p-2 text-sm",
            (ButtonSize::Lg, false, _) => "px-6 py-4 text-base",
            (ButtonSize::Sm, false, _) => "px-4 py-2 text-sm",
        }
    }
}

/// Where the icon sits relative to the label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconStyle {
    #[default]
    None,
    Leading,
    Trailing,
    IconOnly,
}

/// Visual state forced onto the button (for showcasing)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Default,
    Hover,
    Focused,
    Disabled,
}

/// Internal configuration for ButtonBuilder
#[derive(Clone)]
struct ButtonConfig {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    state: ButtonState,
    icon_style: IconStyle,
    icon: Option<Icon>,
    disabled: bool,
    button_type: &'static str,
    class: String,
    test_id: Option<String>,
    on_click: Option<Rc<dyn Fn()>>,
}

/// Builder returned by [`button`]
#[derive(Clone)]
pub struct ButtonBuilder {
    config: ButtonConfig,
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            state: ButtonState::default(),
            icon_style: IconStyle::default(),
            icon: None,
            disabled: false,
            button_type: "button",
            class: String::new(),
            test_id: None,
            on_click: None,
        },
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        button("Label")
    }
}

impl ButtonBuilder {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn state(mut self, state: ButtonState) -> Self {
        self.config.state = state;
        self
    }

    pub fn icon_style(mut self, icon_style: IconStyle) -> Self {
        self.config.icon_style = icon_style;
        self
    }

    /// Override the variant's default icon
    pub fn icon(mut self, icon: Icon) -> Self {
        self.config.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// HTML `type` attribute (`button`, `submit`, `reset`)
    pub fn button_type(mut self, button_type: &'static str) -> Self {
        self.config.button_type = button_type;
        self
    }

    /// Extra classes appended after the variant classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.config.class = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.config.test_id = Some(id.into());
        self
    }

    pub fn on_click<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.config.on_click = Some(Rc::new(handler));
        self
    }

    /// True when either the `disabled` flag or the Disabled state is set
    pub fn is_disabled(&self) -> bool {
        self.config.disabled || self.config.state == ButtonState::Disabled
    }

    /// The full class string for the current configuration
    pub fn class_string(&self) -> String {
        let c = &self.config;
        let state = if self.is_disabled() {
            ButtonState::Disabled
        } else {
            c.state
        };
        cx([
            BASE_CLASSES,
            c.size.classes(c.icon_style, c.variant.is_text()),
            c.variant.classes(state),
            c.class.as_str(),
        ])
    }
}

impl ElementBuilder for ButtonBuilder {
    fn build(&self) -> Node {
        let c = &self.config;
        let disabled = self.is_disabled();
        let state = if disabled { ButtonState::Disabled } else { c.state };
        let icon = c.icon.unwrap_or_else(|| c.variant.icon());
        let icon_classes = format!("w-5 h-5 {}", c.variant.icon_color(state));

        let mut root = el("button")
            .class(&self.class_string())
            .attr("type", c.button_type)
            .attr_if(disabled, "disabled", "");
        if let Some(id) = &c.test_id {
            root = root.test_id(id.clone());
        }
        if let (Some(handler), false) = (c.on_click.clone(), disabled) {
            root = root.on_click(move |_| handler());
        }

        if matches!(c.icon_style, IconStyle::Leading | IconStyle::IconOnly) {
            root = root.child(icon.render(20.0, &icon_classes));
        }
        if c.icon_style != IconStyle::IconOnly {
            root = root.child(span().text(c.label.clone()));
        } else {
            root = root.attr("aria-label", c.label.clone());
        }
        if c.icon_style == IconStyle::Trailing {
            root = root.child(icon.render(20.0, &icon_classes));
        }

        root.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    const STATES: [ButtonState; 4] = [
        ButtonState::Default,
        ButtonState::Hover,
        ButtonState::Focused,
        ButtonState::Disabled,
    ];

    #[test]
    fn test_every_variant_state_has_classes() {
        for variant in ButtonVariant::ALL {
            for state in STATES {
                assert!(!variant.classes(state).is_empty(), "{variant:?}/{state:?}");
                assert!(!variant.icon_color(state).is_empty());
            }
        }
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(ButtonSize::Lg.classes(IconStyle::None, false), "px-6 py-4 text-base");
        assert_eq!(ButtonSize::Sm.classes(IconStyle::IconOnly, false), "p-2 text-sm");
        assert_eq!(ButtonSize::Lg.classes(IconStyle::IconOnly, true), "text-base");
    }

    #[test]
    fn test_disabled_classes_by_family() {
        let outlined = button("x").variant(ButtonVariant::GreyOutlined).disabled(true);
        assert!(outlined.class_string().contains("border-[#F0F2F5]"));

        let text = button("x").variant(ButtonVariant::TextPrimary).state(ButtonState::Disabled);
        assert!(text.class_string().contains("text-[#D0D5DD]"));

        let solid = button("x").disabled(true);
        assert!(solid.class_string().contains("bg-[#D0D5DD] text-white"));
    }

    #[test]
    fn test_icon_placement() {
        let node = button("Save").icon_style(IconStyle::Trailing).build();
        let el = node.as_element().unwrap();
        let tags: Vec<_> = el
            .child_nodes()
            .iter()
            .filter_map(|n| n.as_element().map(|e| e.tag().to_string()))
            .collect();
        assert_eq!(tags, vec!["span", "svg"]);

        let icon_only = button("Add").icon_style(IconStyle::IconOnly).build();
        assert_eq!(icon_only.text_content(), "");
        assert_eq!(
            icon_only.as_element().and_then(|e| e.get_attr("aria-label")),
            Some("Add")
        );
    }

    #[test]
    fn test_click_ignored_when_disabled() {
        let clicks = Rc::new(Cell::new(0));
        let c = Rc::clone(&clicks);
        let enabled = button("Go")
            .test_id("go")
            .on_click(move || c.set(c.get() + 1));
        let disabled = enabled.clone().disabled(true);

        assert!(enabled.build().dispatch("go", EventContext::click()));
        assert!(!disabled.build().dispatch("go", EventContext::click()));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_default_label() {
        assert_eq!(ButtonBuilder::default().build().text_content(), "Label");
    }
}
