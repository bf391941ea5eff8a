//! Toast notification card
//!
//! This is the visual only. Queueing, timers and dismissal live in
//! [`ToastProvider`](super::toast_provider::ToastProvider).

use std::rc::Rc;

use rayna_core::{cx, div, el, p, ElementBuilder, Node};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    #[default]
    Information,
    Success,
    Warning,
    Error,
}

/// Hex colors for one toast type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastColors {
    pub border: &'static str,
    pub icon_bg: &'static str,
    pub icon_border: &'static str,
    pub icon_color: &'static str,
}

impl ToastType {
    pub const ALL: [ToastType; 4] = [
        ToastType::Information,
        ToastType::Success,
        ToastType::Warning,
        ToastType::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToastType::Information => "information",
            ToastType::Success => "success",
            ToastType::Warning => "warning",
            ToastType::Error => "error",
        }
    }

    pub fn colors(&self) -> ToastColors {
        match self {
            ToastType::Information => ToastColors {
                border: "#0D5EBA",
                icon_bg: "#E3EFFC",
                icon_border: "#C6DDF7",
                icon_color: "#1671D9",
            },
            ToastType::Success => ToastColors {
                border: "#04802E",
                icon_bg: "#E7F6EC",
                icon_border: "#B5E3C4",
                icon_color: "#04802E",
            },
            ToastType::Warning => ToastColors {
                border: "#DD900D",
                icon_bg: "#FEF6E7",
                icon_border: "#FBE2B7",
                icon_color: "#DD900D",
            },
            ToastType::Error => ToastColors {
                border: "#CB1A14",
                icon_bg: "#FBEAE9",
                icon_border: "#F2BCBA",
                icon_color: "#CB1A14",
            },
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ToastType::Information => Icon::Info,
            ToastType::Success => Icon::CheckCircle,
            ToastType::Warning => Icon::AlertTriangle,
            ToastType::Error => Icon::Close,
        }
    }
}

#[derive(Clone, Default)]
pub struct Toast {
    toast_type: ToastType,
    title: String,
    message: Option<String>,
    class: String,
    close_test_id: Option<String>,
    on_close: Option<Rc<dyn Fn()>>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = toast_type;
        self
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn close_test_id(mut self, id: impl Into<String>) -> Self {
        self.close_test_id = Some(id.into());
        self
    }

    /// The close button is only rendered when a handler is set
    pub fn on_close<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl ElementBuilder for Toast {
    fn build(&self) -> Node {
        let colors = self.toast_type.colors();

        let close = self.on_close.as_ref().map(|handler| {
            let handler = Rc::clone(handler);
            let mut button = el("button")
                .class("flex h-6 w-6 items-center justify-center text-[#000000] hover:text-[#475367] transition-colors duration-200")
                .attr("aria-label", "Close toast")
                .on_click(move |_| handler())
                .child(Icon::Close.render(16.0, ""));
            if let Some(id) = &self.close_test_id {
                button = button.test_id(id.clone());
            }
            button
        });

        div()
            .class(&cx(["flex w-[390px] rounded-[4px] bg-white shadow-lg", self.class.as_str()]))
            .attr("role", "alert")
            .attr("data-type", self.toast_type.name())
            .child(
                div()
                    .class("w-[6px] rounded-l-[4px]")
                    .style("background-color", colors.border),
            )
            .child(
                div()
                    .class("flex flex-1 items-start gap-3 border border-l-0 border-[#E4E7EC] rounded-r-[4px] p-3")
                    .child(
                        div()
                            .class("flex h-8 w-8 items-center justify-center rounded-lg")
                            .style("background-color", colors.icon_bg)
                            .style("border-color", colors.icon_border)
                            .style("border-width", "1px")
                            .child(
                                self.toast_type
                                    .icon()
                                    .render(16.0, "")
                                    .style("color", colors.icon_color),
                            ),
                    )
                    .child(
                        div()
                            .class("flex flex-1 flex-col gap-0.5")
                            .child(
                                el("h6")
                                    .class("text-[14px] font-semibold text-[#101928] leading-[1.45]")
                                    .text(self.title.clone()),
                            )
                            .child_opt(self.message.as_ref().map(|message| {
                                p().class("text-[14px] text-[#475367] leading-[1.43]")
                                    .text(message.clone())
                            })),
                    )
                    .child_opt(close),
            )
            .into_node()
    }
}

pub fn toast(title: impl Into<String>) -> Toast {
    Toast::new(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_per_type() {
        assert_eq!(ToastType::Information.colors().border, "#0D5EBA");
        assert_eq!(ToastType::Success.colors().icon_bg, "#E7F6EC");
        assert_eq!(ToastType::Warning.colors().icon_border, "#FBE2B7");
        assert_eq!(ToastType::Error.colors().icon_color, "#CB1A14");
    }

    #[test]
    fn test_message_and_close_are_optional() {
        let bare = toast("Saved").build();
        assert_eq!(bare.text_content(), "Saved");
        assert!(bare.find(&|e| e.tag() == "button").is_none());

        let full = toast("Saved")
            .message(Some("All changes stored".into()))
            .on_close(|| {})
            .build();
        assert_eq!(full.text_content(), "SavedAll changes stored");
        assert!(full.find(&|e| e.tag() == "button").is_some());
    }
}
