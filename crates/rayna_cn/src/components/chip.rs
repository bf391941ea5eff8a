//! Chip component
//!
//! Compact input or filter tokens. Input chips show a remove button while
//! focused; filter chips always show a dropdown chevron.

use std::rc::Rc;

use rayna_core::{cx, div, span, ElementBuilder, Node};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipType {
    #[default]
    Input,
    Filter,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipState {
    #[default]
    Default,
    Focused,
    Disabled,
}

impl ChipState {
    pub const ALL: [ChipState; 3] = [ChipState::Default, ChipState::Focused, ChipState::Disabled];

    pub fn container_classes(&self) -> &'static str {
        match self {
            ChipState::Focused => "bg-[#FBF1F1] border border-[#CC400C]",
            ChipState::Disabled => "bg-white border border-[#D0D5DD] cursor-not-allowed",
            ChipState::Default => "bg-white border border-[#D0D5DD] hover:border-[#98A2B3]",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            ChipState::Focused => "text-[#475367]",
            ChipState::Disabled => "text-[#98A2B3]",
            ChipState::Default => "text-[#667185]",
        }
    }

    pub fn icon_color(&self) -> &'static str {
        match self {
            ChipState::Disabled => "text-[#98A2B3]",
            ChipState::Default | ChipState::Focused => "text-[#475367]",
        }
    }
}

#[derive(Clone, Default)]
pub struct Chip {
    label: String,
    chip_type: ChipType,
    state: ChipState,
    leading_icon: Option<Icon>,
    class: String,
    test_id: Option<String>,
    on_click: Option<Rc<dyn Fn()>>,
    on_delete: Option<Rc<dyn Fn()>>,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn chip_type(mut self, chip_type: ChipType) -> Self {
        self.chip_type = chip_type;
        self
    }

    pub fn state(mut self, state: ChipState) -> Self {
        self.state = state;
        self
    }

    /// Show the home icon in front of the label
    pub fn leading_icon(mut self, show: bool) -> Self {
        self.leading_icon = show.then_some(Icon::Home);
        self
    }

    pub fn leading_icon_with(mut self, icon: Icon) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn on_click<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn on_delete<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn shows_remove(&self) -> bool {
        self.state == ChipState::Focused && self.chip_type == ChipType::Input
    }

    fn icon_slot(&self, icon: Icon) -> rayna_core::Element {
        span()
            .class("flex items-center")
            .class(self.state.icon_color())
            .child(icon.render(16.0, "w-4 h-4"))
    }
}

impl ElementBuilder for Chip {
    fn build(&self) -> Node {
        let disabled = self.state == ChipState::Disabled;
        let mut root = div().class(&cx([
            "inline-flex items-center gap-2 rounded-lg",
            self.state.container_classes(),
            "py-[6px] px-3",
            if disabled { "" } else { "cursor-pointer" },
            self.class.as_str(),
        ]));
        if let Some(id) = &self.test_id {
            root = root.test_id(id.clone());
        }
        if let (false, Some(handler)) = (disabled, &self.on_click) {
            let handler = Rc::clone(handler);
            root = root.on_click(move |_| handler());
        }

        let remove = self.shows_remove().then(|| {
            let mut slot = self.icon_slot(Icon::Close).attr("aria-label", "Remove");
            if let Some(id) = &self.test_id {
                slot = slot.test_id(format!("{id}-remove"));
            }
            if let Some(handler) = &self.on_delete {
                let handler = Rc::clone(handler);
                slot = slot.on_click(move |_| handler());
            }
            slot
        });

        root.child_opt(self.leading_icon.map(|icon| self.icon_slot(icon)))
            .child(
                span()
                    .class("font-medium text-sm")
                    .class(self.state.text_color())
                    .text(self.label.clone()),
            )
            .child_opt(remove)
            .child_opt(
                (self.chip_type == ChipType::Filter).then(|| self.icon_slot(Icon::ChevronDown)),
            )
            .into_node()
    }
}

pub fn chip(label: impl Into<String>) -> Chip {
    Chip::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    #[test]
    fn test_remove_only_on_focused_input() {
        assert!(chip("a").state(ChipState::Focused).shows_remove());
        assert!(!chip("a").shows_remove());
        assert!(!chip("a")
            .chip_type(ChipType::Filter)
            .state(ChipState::Focused)
            .shows_remove());
    }

    #[test]
    fn test_delete_dispatch() {
        let deleted = Rc::new(Cell::new(false));
        let d = Rc::clone(&deleted);
        let node = chip("Tag")
            .state(ChipState::Focused)
            .test_id("tag")
            .on_delete(move || d.set(true))
            .build();
        assert!(node.dispatch("tag-remove", EventContext::click()));
        assert!(deleted.get());
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let clicked = Rc::new(Cell::new(false));
        let c = Rc::clone(&clicked);
        let node = chip("Off")
            .state(ChipState::Disabled)
            .test_id("off")
            .on_click(move || c.set(true))
            .build();
        node.dispatch("off", EventContext::click());
        assert!(!clicked.get());
        assert!(node.to_html().contains("cursor-not-allowed"));
    }
}
