//! Dropdown menu
//!
//! A trigger button that toggles a menu of sectioned items. Picking an
//! enabled item runs its callback and closes the menu.

use std::fmt;
use std::rc::Rc;

use rayna_core::{cx, div, el, span, Element, ElementBuilder, Node, State};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerType {
    #[default]
    Default,
    Avatar,
    IconOnly,
}

impl TriggerType {
    pub fn padding(&self) -> &'static str {
        match self {
            TriggerType::Default => "px-3 py-2",
            TriggerType::IconOnly => "p-2",
            TriggerType::Avatar => "p-0",
        }
    }
}

#[derive(Clone, Default)]
pub struct DropdownItem {
    pub id: String,
    pub label: String,
    pub icon: Option<Icon>,
    pub shortcut: Option<String>,
    pub disabled: bool,
    on_click: Option<Rc<dyn Fn()>>,
}

impl DropdownItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for DropdownItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DropdownSection {
    pub items: Vec<DropdownItem>,
}

impl DropdownSection {
    pub fn new(items: Vec<DropdownItem>) -> Self {
        Self { items }
    }
}

#[derive(Clone, Default)]
pub struct Dropdown {
    label: Option<String>,
    avatar: Option<String>,
    icon: Option<Icon>,
    sections: Vec<DropdownSection>,
    trigger: TriggerType,
    disabled: bool,
    class: String,
    button_class: String,
    menu_class: String,
    test_id: String,
    open: State<bool>,
}

impl Dropdown {
    pub fn new(sections: Vec<DropdownSection>) -> Self {
        Self {
            sections,
            test_id: "dropdown".to_string(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Image shown by the avatar trigger
    pub fn avatar(mut self, src: impl Into<String>) -> Self {
        self.avatar = Some(src.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn trigger(mut self, trigger: TriggerType) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn button_class(mut self, class: impl Into<String>) -> Self {
        self.button_class = class.into();
        self
    }

    pub fn menu_class(mut self, class: impl Into<String>) -> Self {
        self.menu_class = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    /// Render with the menu already expanded
    pub fn open(self, open: bool) -> Self {
        self.open.set(open);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    fn trigger_content(&self) -> Element {
        match (self.trigger, &self.avatar, self.icon) {
            (TriggerType::Avatar, Some(src), _) => el("img")
                .attr("src", src.clone())
                .attr("alt", "User avatar")
                .class("w-8 h-8 rounded-full object-cover border border-white cursor-pointer"),
            (TriggerType::IconOnly, _, Some(icon)) => div()
                .class("p-1 cursor-pointer")
                .child(icon.render(20.0, "w-5 h-5")),
            _ => div()
                .class("flex items-center gap-2 cursor-pointer")
                .child_opt(
                    self.icon
                        .map(|icon| span().class("text-[#344054]").child(icon.render(20.0, "w-5 h-5"))),
                )
                .child_opt(self.label.as_ref().map(|label| {
                    span()
                        .class("text-sm font-semibold text-[#344054]")
                        .text(label.clone())
                }))
                .child(Icon::ChevronDown.render(20.0, "w-5 h-5 text-[#667185]")),
        }
    }

    fn item(&self, item: &DropdownItem) -> Element {
        let mut button = el("button")
            .test_id(format!("{}-item-{}", self.test_id, item.id))
            .attr("role", "menuitem")
            .attr_if(item.disabled, "aria-disabled", "true")
            .class("flex w-full items-center justify-between px-4 py-2 text-sm cursor-pointer hover:bg-[#F9FAFB]")
            .class(if item.disabled {
                "text-[#98A2B3] cursor-not-allowed"
            } else {
                "text-[#101928]"
            })
            .child(
                div()
                    .class("flex items-center gap-3")
                    .child_opt(
                        item.icon
                            .map(|icon| span().class("text-[#667185]").child(icon.render(16.0, "w-4 h-4"))),
                    )
                    .child(span().text(item.label.clone())),
            )
            .child_opt(item.shortcut.as_ref().map(|shortcut| {
                span()
                    .class("ml-4 rounded bg-[#F9FAFB] px-2 py-0.5 text-xs text-[#475367] border border-[#F0F2F5]")
                    .text(shortcut.clone())
            }));

        if !item.disabled {
            let open = self.open.clone();
            let handler = item.on_click.clone();
            let id = item.id.clone();
            button = button.on_click(move |_| {
                tracing::debug!(item = %id, "dropdown item selected");
                if let Some(handler) = &handler {
                    handler();
                }
                open.set(false);
            });
        }
        button
    }
}

impl ElementBuilder for Dropdown {
    fn build(&self) -> Node {
        let open = self.is_open();
        let mut trigger = el("button")
            .test_id(format!("{}-trigger", self.test_id))
            .attr("aria-haspopup", "menu")
            .attr("aria-expanded", open.to_string())
            .attr_if(self.disabled, "disabled", "")
            .class(&cx([
                "flex items-center justify-center rounded-lg border border-[#D0D5DD] bg-white cursor-pointer",
                self.trigger.padding(),
                if self.disabled {
                    "bg-[#F9FAFB] border-[#F0F2F5] cursor-not-allowed"
                } else {
                    "hover:border-[#B6D8FF] focus:border-[#3D89DF] focus:ring-2 focus:ring-[#E3EFFC]"
                },
                self.button_class.as_str(),
            ]))
            .child(self.trigger_content());
        if !self.disabled {
            let state = self.open.clone();
            trigger = trigger.on_click(move |_| state.update(|open| *open = !*open));
        }

        let last = self.sections.len().saturating_sub(1);
        let menu = open.then(|| {
            div()
                .attr("role", "menu")
                .class(&cx([
                    "absolute right-0 mt-2 min-w-[14rem] rounded-lg bg-white shadow-lg z-50",
                    "shadow-[0px_4px_6px_-2px_rgba(0,0,0,0.05),0px_10px_15px_-3px_rgba(0,0,0,0.1),0px_0px_0px_1px_rgba(0,0,0,0.05)]",
                    self.menu_class.as_str(),
                ]))
                .children(self.sections.iter().enumerate().map(|(index, section)| {
                    div()
                        .class("py-1")
                        .class_if(index != last, "border-b border-[#F0F2F5]")
                        .children(section.items.iter().map(|item| self.item(item)))
                }))
        });

        div()
            .class(&cx(["relative inline-block text-left", self.class.as_str()]))
            .child(trigger)
            .child_opt(menu)
            .into_node()
    }
}

pub fn dropdown(sections: Vec<DropdownSection>) -> Dropdown {
    Dropdown::new(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    fn menu(counter: Rc<Cell<u32>>) -> Dropdown {
        dropdown(vec![
            DropdownSection::new(vec![
                DropdownItem::new("profile", "View profile")
                    .shortcut("⌘K->P")
                    .on_click(move || counter.set(counter.get() + 1)),
                DropdownItem::new("settings", "Settings").disabled(true),
            ]),
            DropdownSection::new(vec![DropdownItem::new("logout", "Log out")]),
        ])
        .label("Account")
    }

    #[test]
    fn test_trigger_toggles() {
        let dd = menu(Rc::new(Cell::new(0)));
        assert!(dd.build().find(&|e| e.get_attr("role") == Some("menu")).is_none());
        dd.build().dispatch("dropdown-trigger", EventContext::click());
        assert!(dd.is_open());
        dd.build().dispatch("dropdown-trigger", EventContext::click());
        assert!(!dd.is_open());
    }

    #[test]
    fn test_item_fires_and_closes() {
        let count = Rc::new(Cell::new(0));
        let dd = menu(Rc::clone(&count)).open(true);
        let node = dd.build();
        assert!(node.dispatch("dropdown-item-profile", EventContext::click()));
        assert_eq!(count.get(), 1);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_disabled_item_and_trigger() {
        let dd = menu(Rc::new(Cell::new(0))).open(true);
        assert!(!dd.build().dispatch("dropdown-item-settings", EventContext::click()));
        assert!(dd.is_open());

        let locked = menu(Rc::new(Cell::new(0))).disabled(true);
        assert!(!locked.build().dispatch("dropdown-trigger", EventContext::click()));
        assert!(!locked.is_open());
    }

    #[test]
    fn test_section_borders() {
        let node = menu(Rc::new(Cell::new(0))).open(true).build();
        let bordered = node.find_all(&|e| e.has_class("py-1") && e.has_class("border-b"));
        assert_eq!(bordered.len(), 1);
    }
}
