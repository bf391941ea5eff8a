//! Column header with optional select-all checkbox and sort indicator

use std::rc::Rc;

use rayna_core::{cx, div, el, span, ElementBuilder, EventKind, Node, State};
use serde::Serialize;

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Clone)]
pub struct TableHeader {
    label: String,
    show_checkbox: bool,
    show_separator: bool,
    show_sort_icon: bool,
    selected: bool,
    sort_direction: Option<SortDirection>,
    class: String,
    test_id: String,
    hovered: State<bool>,
    on_sort: Option<Rc<dyn Fn()>>,
    on_checkbox_change: Option<Rc<dyn Fn(bool)>>,
}

impl TableHeader {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            show_checkbox: false,
            show_separator: true,
            show_sort_icon: false,
            selected: false,
            sort_direction: None,
            class: String::new(),
            test_id: "table-header".to_string(),
            hovered: State::new(false),
            on_sort: None,
            on_checkbox_change: None,
        }
    }

    pub fn show_checkbox(mut self, show: bool) -> Self {
        self.show_checkbox = show;
        self
    }

    pub fn show_separator(mut self, show: bool) -> Self {
        self.show_separator = show;
        self
    }

    pub fn show_sort_icon(mut self, show: bool) -> Self {
        self.show_sort_icon = show;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn sort_direction(mut self, direction: Option<SortDirection>) -> Self {
        self.sort_direction = direction;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    pub fn on_sort<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_sort = Some(Rc::new(handler));
        self
    }

    pub(crate) fn on_sort_rc(mut self, handler: Option<Rc<dyn Fn()>>) -> Self {
        self.on_sort = handler;
        self
    }

    pub fn on_checkbox_change<F: Fn(bool) + 'static>(mut self, handler: F) -> Self {
        self.on_checkbox_change = Some(Rc::new(handler));
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    fn background(&self) -> &'static str {
        if self.selected {
            "bg-[#FFECE5]"
        } else if self.is_hovered() {
            "bg-[#F9FAFB]"
        } else {
            "bg-white"
        }
    }
}

impl ElementBuilder for TableHeader {
    fn build(&self) -> Node {
        let checkbox = self.show_checkbox.then(|| {
            let mut input = el("input")
                .attr("type", "checkbox")
                .test_id(format!("{}-checkbox", self.test_id))
                .attr_if(self.selected, "checked", "")
                .class("h-4 w-4 rounded border-[1.5px] transition-colors")
                .class(if self.selected {
                    "border-[#F56630] bg-[#F56630] checked:hover:bg-[#F56630]/90"
                } else {
                    "border-[#D0D5DD] bg-white hover:border-[#F56630]/50"
                });
            if let Some(handler) = &self.on_checkbox_change {
                let handler = Rc::clone(handler);
                input = input.on(EventKind::Change, move |ctx| handler(ctx.checked.unwrap_or(false)));
            }
            div()
                .class("flex-none")
                .child(el("label").class("relative flex items-center").child(input))
        });

        let arrow = self.show_sort_icon.then(|| {
            let icon = match self.sort_direction {
                Some(SortDirection::Asc) => Icon::ChevronUp.render(16.0, ""),
                Some(SortDirection::Desc) => Icon::ChevronDown.render(16.0, ""),
                None => Icon::ChevronDown.render(16.0, "opacity-0 group-hover:opacity-100"),
            };
            div()
                .class("text-[#667185]")
                .attr(
                    "data-sort",
                    self.sort_direction.map_or("none", |d| match d {
                        SortDirection::Asc => "asc",
                        SortDirection::Desc => "desc",
                    }),
                )
                .child(icon)
        });

        let mut sort_button = el("button")
            .test_id(format!("{}-sort", self.test_id))
            .class("flex items-center gap-1 text-sm font-medium")
            .class(if self.on_sort.is_some() { "cursor-pointer" } else { "cursor-default" })
            .child(span().class("text-[#344054]").text(self.label.clone()))
            .child_opt(arrow);
        if let Some(handler) = &self.on_sort {
            let handler = Rc::clone(handler);
            sort_button = sort_button.on_click(move |_| handler());
        }

        let enter = self.hovered.clone();
        let leave = self.hovered.clone();
        div()
            .test_id(self.test_id.clone())
            .class(&cx(["group relative flex items-center h-[44px]", self.class.as_str()]))
            .on(EventKind::MouseEnter, move |_| enter.set(true))
            .on(EventKind::MouseLeave, move |_| leave.set(false))
            .child(
                div()
                    .class("flex items-center gap-3 px-6 py-3 flex-1")
                    .class(self.background())
                    .child_opt(checkbox)
                    .child(sort_button),
            )
            .child_opt(
                self.show_separator
                    .then(|| div().class("absolute bottom-0 left-0 right-0 h-[1px] bg-[#E4E7EC]")),
            )
            .into_node()
    }
}

pub fn table_header(label: impl Into<String>) -> TableHeader {
    TableHeader::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    fn sort_attr(header: &TableHeader) -> Option<String> {
        header
            .build()
            .find(&|e| e.get_attr("data-sort").is_some())
            .and_then(|e| e.get_attr("data-sort").map(str::to_string))
    }

    #[test]
    fn test_sort_arrow_direction() {
        let base = table_header("Name").show_sort_icon(true);
        assert_eq!(sort_attr(&base.clone().sort_direction(Some(SortDirection::Asc))).as_deref(), Some("asc"));
        assert_eq!(sort_attr(&base.clone().sort_direction(Some(SortDirection::Desc))).as_deref(), Some("desc"));
        assert_eq!(sort_attr(&base).as_deref(), Some("none"));
        assert_eq!(sort_attr(&table_header("Status")), None);
    }

    #[test]
    fn test_hover_background() {
        let header = table_header("Name");
        header.build().dispatch("table-header", EventContext::new(EventKind::MouseEnter));
        assert!(header.is_hovered());
        assert!(header.build().find(&|e| e.has_class("bg-[#F9FAFB]")).is_some());

        let selected = table_header("Name").selected(true);
        selected.build().dispatch("table-header", EventContext::new(EventKind::MouseEnter));
        assert!(selected.build().find(&|e| e.has_class("bg-[#FFECE5]")).is_some());
    }

    #[test]
    fn test_sort_and_checkbox_callbacks() {
        let sorts = Rc::new(Cell::new(0));
        let checked = Rc::new(Cell::new(false));
        let (s, c) = (Rc::clone(&sorts), Rc::clone(&checked));
        let node = table_header("Name")
            .show_checkbox(true)
            .on_sort(move || s.set(s.get() + 1))
            .on_checkbox_change(move |value| c.set(value))
            .build();
        assert!(node.dispatch("table-header-sort", EventContext::click()));
        assert!(node.dispatch("table-header-checkbox", EventContext::checked(true)));
        assert_eq!(sorts.get(), 1);
        assert!(checked.get());

        assert!(!table_header("Plain").build().dispatch("table-header-sort", EventContext::click()));
    }
}
