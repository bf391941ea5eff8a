//! Text input with label, helper text and derived visual state
//!
//! The rendered state is derived from the flags and from live interaction
//! (hover, focus, current value). Interaction lives in a shared [`State`], so
//! a rebuilt input reflects events dispatched to an earlier tree.

use std::rc::Rc;

use rayna_core::{cx, div, el, span, ElementBuilder, EventContext, EventKind, Node, State};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    #[default]
    Sm,
    Lg,
}

impl InputSize {
    pub fn classes(&self) -> &'static str {
        match self {
            InputSize::Sm => "py-2 px-3",
            InputSize::Lg => "p-4",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Default,
    Hover,
    Active,
    Typing,
    Filled,
    Success,
    Error,
    ReadOnly,
}

impl InputState {
    pub const ALL: [InputState; 8] = [
        InputState::Default,
        InputState::Hover,
        InputState::Active,
        InputState::Typing,
        InputState::Filled,
        InputState::Success,
        InputState::Error,
        InputState::ReadOnly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InputState::Default => "default",
            InputState::Hover => "hover",
            InputState::Active => "active",
            InputState::Typing => "typing",
            InputState::Filled => "filled",
            InputState::Success => "success",
            InputState::Error => "error",
            InputState::ReadOnly => "read only",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            InputState::Hover => "border-[#FCB59A] hover:border-[#FCB59A]",
            InputState::Active | InputState::Typing => "border-[#FA9874] focus:border-[#FA9874]",
            InputState::Success => "border-[#5FC381]",
            InputState::Error => "border-[#E26E6A]",
            InputState::ReadOnly => "bg-[#F0F2F5] border-gray-300 cursor-default",
            InputState::Default | InputState::Filled => {
                "border-gray-300 hover:border-[#FCB59A] focus:border-[#FA9874]"
            }
        }
    }

    pub fn helper_classes(&self) -> &'static str {
        match self {
            InputState::Success => "text-[#04802E]",
            InputState::Error => "text-[#CB1A14]",
            _ => "text-gray-500",
        }
    }
}

const BASE_CLASSES: &str =
    "flex items-center w-full bg-white rounded-md border font-inter transition-colors duration-200 outline-none";
const DISABLED_CLASSES: &str = "bg-gray-100 border-gray-300 text-gray-400 cursor-not-allowed";

/// Live interaction tracked between renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub focused: bool,
    pub value: String,
}

#[derive(Clone)]
pub struct Input {
    size: InputSize,
    state: InputState,
    label: Option<String>,
    helper_text: Option<String>,
    placeholder: String,
    left_icon: Option<Icon>,
    right_icon: Option<Icon>,
    read_only: bool,
    success: bool,
    error: bool,
    disabled: bool,
    input_type: &'static str,
    class: String,
    test_id: String,
    interaction: State<Interaction>,
    on_change: Option<Rc<dyn Fn(&str)>>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            size: InputSize::default(),
            state: InputState::default(),
            label: None,
            helper_text: Some("Helper text".to_string()),
            placeholder: "Placeholder".to_string(),
            left_icon: None,
            right_icon: None,
            read_only: false,
            success: false,
            error: false,
            disabled: false,
            input_type: "text",
            class: String::new(),
            test_id: "input".to_string(),
            interaction: State::default(),
            on_change: None,
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: InputState) -> Self {
        self.state = state;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `None` hides the helper line entirely
    pub fn helper_text(mut self, text: Option<String>) -> Self {
        self.helper_text = text;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn left_icon(mut self, icon: Icon) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: Icon) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.interaction.update(|i| i.value = value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Prefix for the test ids of the field (`<id>`) and its wrapper (`<id>-box`)
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    pub fn on_change<F: Fn(&str) + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction.get()
    }

    /// The state used for styling, from flags first and interaction second
    pub fn effective_state(&self) -> InputState {
        let live = self.interaction.get();
        if self.read_only {
            InputState::ReadOnly
        } else if self.error {
            InputState::Error
        } else if self.success {
            InputState::Success
        } else if self.disabled {
            InputState::Default
        } else if !live.value.is_empty() {
            if live.focused {
                InputState::Typing
            } else {
                InputState::Filled
            }
        } else if live.focused {
            InputState::Active
        } else if live.hovered {
            InputState::Hover
        } else {
            self.state
        }
    }

    pub fn helper_message(&self) -> Option<String> {
        let helper = self.helper_text.as_ref()?;
        Some(if self.error {
            "Error text".to_string()
        } else if self.success {
            "Success text".to_string()
        } else {
            helper.clone()
        })
    }

    fn trailing_icon(&self) -> Option<rayna_core::Element> {
        if self.error {
            Some(Icon::AlertCircle.render(20.0, "w-5 h-5 text-[#CB1A14]"))
        } else if self.success {
            Some(Icon::CheckCircle.render(20.0, "w-5 h-5 text-[#04802E]"))
        } else {
            self.right_icon.map(|icon| icon.render(20.0, "w-5 h-5"))
        }
    }
}

impl ElementBuilder for Input {
    fn build(&self) -> Node {
        let state = self.effective_state();
        let live = self.interaction.get();

        let hover_on = self.interaction.clone();
        let hover_off = self.interaction.clone();
        let focus = self.interaction.clone();
        let blur = self.interaction.clone();
        let typed = self.interaction.clone();
        let on_change = self.on_change.clone();

        let mut field = el("input")
            .test_id(self.test_id.clone())
            .attr("type", self.input_type)
            .class(&cx([
                "w-full bg-transparent border-none outline-none text-gray-900 placeholder-gray-400",
                "disabled:bg-transparent disabled:text-gray-400",
                self.class.as_str(),
            ]))
            .attr("placeholder", self.placeholder.clone())
            .attr("value", live.value)
            .attr_if(self.disabled, "disabled", "")
            .attr_if(self.read_only, "readonly", "")
            .on(EventKind::Focus, move |_| focus.update(|i| i.focused = true))
            .on(EventKind::Blur, move |_| blur.update(|i| i.focused = false));

        if !self.disabled && !self.read_only {
            field = field.on(EventKind::Input, move |ctx: &EventContext| {
                let value = ctx.value.clone().unwrap_or_default();
                typed.update(|i| i.value = value.clone());
                if let Some(handler) = &on_change {
                    handler(&value);
                }
            });
        }

        let wrapper = div()
            .test_id(format!("{}-box", self.test_id))
            .class(BASE_CLASSES)
            .class(self.size.classes())
            .class(if self.disabled { DISABLED_CLASSES } else { state.classes() })
            .on(EventKind::MouseEnter, move |_| hover_on.update(|i| i.hovered = true))
            .on(EventKind::MouseLeave, move |_| hover_off.update(|i| i.hovered = false))
            .child_opt(self.left_icon.map(|icon| {
                div()
                    .class("flex items-center mr-2 text-gray-500")
                    .child(icon.render(20.0, "w-5 h-5"))
            }))
            .child(field)
            .child_opt(self.trailing_icon().map(|icon| {
                div().class("flex items-center ml-2 text-gray-500").child(icon)
            }));

        div()
            .class("flex flex-col w-full gap-1")
            .child_opt(self.label.as_ref().map(|label| {
                el("label")
                    .class("text-gray-900 text-sm font-medium mb-1")
                    .text(label.clone())
            }))
            .child(wrapper)
            .child_opt(self.helper_message().map(|message| {
                span()
                    .class("text-xs mt-1")
                    .class(state.helper_classes())
                    .text(message)
            }))
            .into_node()
    }
}

pub fn input() -> Input {
    Input::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_state_priority() {
        assert_eq!(input().read_only(true).error(true).effective_state(), InputState::ReadOnly);
        assert_eq!(input().error(true).success(true).effective_state(), InputState::Error);
        assert_eq!(input().disabled(true).value("x").effective_state(), InputState::Default);
        assert_eq!(input().value("x").effective_state(), InputState::Filled);
        assert_eq!(input().state(InputState::Hover).effective_state(), InputState::Hover);
    }

    #[test]
    fn test_interaction_drives_state() {
        let field = input();
        let node = field.build();

        node.dispatch("input-box", EventContext::new(EventKind::MouseEnter));
        assert_eq!(field.effective_state(), InputState::Hover);

        node.dispatch("input", EventContext::new(EventKind::Focus));
        assert_eq!(field.effective_state(), InputState::Active);

        node.dispatch("input", EventContext::input("abc"));
        assert_eq!(field.effective_state(), InputState::Typing);

        node.dispatch("input", EventContext::new(EventKind::Blur));
        assert_eq!(field.effective_state(), InputState::Filled);

        let rebuilt = field.build().to_html();
        assert!(rebuilt.contains("value=\"abc\""));
    }

    #[test]
    fn test_on_change_receives_value() {
        let seen = Rc::new(RefCell::new(String::new()));
        let s = Rc::clone(&seen);
        let node = input().on_change(move |v| *s.borrow_mut() = v.to_string()).build();
        node.dispatch("input", EventContext::input("hello"));
        assert_eq!(*seen.borrow(), "hello");
    }

    #[test]
    fn test_helper_text() {
        assert_eq!(input().helper_message().as_deref(), Some("Helper text"));
        assert_eq!(input().error(true).helper_message().as_deref(), Some("Error text"));
        assert_eq!(input().success(true).helper_message().as_deref(), Some("Success text"));
        assert_eq!(input().helper_text(None).helper_message(), None);
    }

    #[test]
    fn test_every_state_has_classes() {
        for state in InputState::ALL {
            assert!(!state.classes().is_empty(), "{}", state.name());
        }
    }
}
