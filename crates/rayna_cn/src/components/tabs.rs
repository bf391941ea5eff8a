//! Tabs with line or pill styling
//!
//! ```ignore
//! cn::tabs(vec![
//!     TabItem::new("Overview", text("...")),
//!     TabItem::new("Inbox", text("...")).badge("3"),
//! ])
//! .tab_style(TabStyle::Pill)
//! .on_change(|index| tracing::info!(index, "tab changed"))
//! ```

use std::rc::Rc;

use rayna_core::{cx, div, el, span, ElementBuilder, Node, State};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabStyle {
    #[default]
    Line,
    Pill,
}

impl TabStyle {
    pub fn header_classes(&self) -> &'static str {
        match self {
            TabStyle::Line => "border-b border-[#E5E7EB] gap-8",
            TabStyle::Pill => "gap-2",
        }
    }

    pub fn item_classes(&self, active: bool) -> &'static str {
        match (self, active) {
            (TabStyle::Line, true) => {
                "px-1 py-3 font-inter text-sm hover:text-[#F56630] text-[#F56630] font-medium before:absolute before:bottom-[-1px] before:left-0 before:w-full before:h-[2px] before:bg-[#F56630]"
            }
            (TabStyle::Line, false) => "px-1 py-3 font-inter text-sm hover:text-[#F56630] text-[#6B7280]",
            (TabStyle::Pill, true) => {
                "px-4 py-2 font-inter text-sm rounded-full hover:bg-opacity-90 text-white bg-[#F56630] font-medium"
            }
            (TabStyle::Pill, false) => {
                "px-4 py-2 font-inter text-sm rounded-full hover:bg-opacity-90 text-[#6B7280] bg-[#F3F4F6]"
            }
        }
    }

    pub fn icon_color(&self, active: bool) -> &'static str {
        match (self, active) {
            (TabStyle::Line, true) => "text-[#F56630]",
            (TabStyle::Pill, true) => "text-white",
            (_, false) => "text-[#6B7280]",
        }
    }

    pub fn badge_classes(&self, active: bool) -> &'static str {
        match (self, active) {
            (TabStyle::Pill, true) => "bg-white text-[#F56630]",
            _ => "bg-[#EF4444] text-white",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TabItem {
    pub label: String,
    pub content: Node,
    pub icon: Option<Icon>,
    pub badge: Option<String>,
}

impl TabItem {
    pub fn new(label: impl Into<String>, content: impl ElementBuilder) -> Self {
        Self {
            label: label.into(),
            content: content.into_node(),
            icon: None,
            badge: None,
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn badge(mut self, badge: impl ToString) -> Self {
        self.badge = Some(badge.to_string());
        self
    }
}

#[derive(Clone)]
pub struct Tabs {
    items: Vec<TabItem>,
    style: TabStyle,
    active: State<usize>,
    class: String,
    test_id: String,
    on_change: Option<Rc<dyn Fn(usize)>>,
}

impl Tabs {
    pub fn new(items: Vec<TabItem>) -> Self {
        Self {
            items,
            style: TabStyle::default(),
            active: State::new(0),
            class: String::new(),
            test_id: "tab".to_string(),
            on_change: None,
        }
    }

    pub fn tab_style(mut self, style: TabStyle) -> Self {
        self.style = style;
        self
    }

    pub fn initial_active_index(self, index: usize) -> Self {
        self.active.set(index);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Tab buttons get `<prefix>-<index>`
    pub fn test_id(mut self, prefix: impl Into<String>) -> Self {
        self.test_id = prefix.into();
        self
    }

    pub fn on_change<F: Fn(usize) + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn active_index(&self) -> usize {
        self.active.get()
    }
}

impl ElementBuilder for Tabs {
    fn build(&self) -> Node {
        let active = self.active.get();
        let style = self.style;

        let buttons = self.items.iter().enumerate().map(|(index, tab)| {
            let is_active = index == active;
            let state = self.active.clone();
            let on_change = self.on_change.clone();
            el("button")
                .test_id(format!("{}-{index}", self.test_id))
                .class("tab-item flex items-center gap-2 transition-all duration-200 relative")
                .class(style.item_classes(is_active))
                .attr("role", "tab")
                .attr("aria-selected", is_active.to_string())
                .on_click(move |_| {
                    state.set(index);
                    if let Some(handler) = &on_change {
                        handler(index);
                    }
                })
                .child_opt(tab.icon.map(|icon| {
                    span()
                        .class("tab-icon text-lg")
                        .class(style.icon_color(is_active))
                        .child(icon.render(18.0, ""))
                }))
                .text(tab.label.clone())
                .child_opt(tab.badge.as_ref().map(|badge| {
                    span()
                        .class("tab-badge px-2 py-0.5 text-xs rounded-full font-medium")
                        .class(style.badge_classes(is_active))
                        .text(badge.clone())
                }))
        });

        let panels = self.items.iter().enumerate().map(|(index, tab)| {
            div()
                .class("tab-panel transition-all duration-300 transform")
                .class(if index == active {
                    "opacity-100 translate-x-0"
                } else {
                    "opacity-0 -translate-x-4 hidden"
                })
                .child(tab.content.clone())
        });

        div()
            .class(&cx(["tabs-container", self.class.as_str()]))
            .child(
                div()
                    .class("tabs-header flex items-center")
                    .class(style.header_classes())
                    .attr("role", "tablist")
                    .children(buttons),
            )
            .child(div().class("tabs-content py-4").children(panels))
            .into_node()
    }
}

pub fn tabs(items: Vec<TabItem>) -> Tabs {
    Tabs::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::{text, EventContext};
    use std::cell::Cell;

    fn sample() -> Vec<TabItem> {
        vec![
            TabItem::new("One", text("first")),
            TabItem::new("Two", text("second")).badge(4),
            TabItem::new("Three", text("third")),
        ]
    }

    #[test]
    fn test_click_activates_and_notifies() {
        let changed = Rc::new(Cell::new(usize::MAX));
        let c = Rc::clone(&changed);
        let t = tabs(sample()).on_change(move |i| c.set(i));
        let node = t.build();

        assert!(node.dispatch("tab-2", EventContext::click()));
        assert_eq!(t.active_index(), 2);
        assert_eq!(changed.get(), 2);

        let rebuilt = t.build();
        let active = rebuilt.find_by_test_id("tab-2").unwrap();
        assert_eq!(active.get_attr("aria-selected"), Some("true"));
    }

    #[test]
    fn test_initial_index_and_hidden_panels() {
        let node = tabs(sample()).initial_active_index(1).build();
        let hidden = node.find_all(&|e| e.has_class("tab-panel") && e.has_class("hidden"));
        assert_eq!(hidden.len(), 2);
        let visible = node
            .find(&|e| e.has_class("tab-panel") && !e.has_class("hidden"))
            .unwrap();
        assert_eq!(visible.text_content(), "second");
    }

    #[test]
    fn test_pill_active_badge() {
        let node = tabs(sample())
            .tab_style(TabStyle::Pill)
            .initial_active_index(1)
            .build();
        let badge = node.find(&|e| e.has_class("tab-badge")).unwrap();
        assert!(badge.has_class("bg-white"));
    }
}
