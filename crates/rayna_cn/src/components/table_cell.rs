//! Table body cell with an optional selection control and leading media

use std::rc::Rc;

use rayna_core::{cx, div, el, span, Element, ElementBuilder, EventKind, Node};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    #[default]
    Radio,
    Checkbox,
    Toggle,
}

impl ControlType {
    pub const ALL: [ControlType; 3] = [ControlType::Radio, ControlType::Checkbox, ControlType::Toggle];

    pub fn input_type(&self) -> &'static str {
        match self {
            ControlType::Radio => "radio",
            ControlType::Checkbox | ControlType::Toggle => "checkbox",
        }
    }

    pub fn input_classes(&self, checked: bool) -> &'static str {
        match (self, checked) {
            (ControlType::Radio, true) => "h-4 w-4 rounded-full border-[1.25px] transition-colors border-[#F56630] bg-[#F56630]",
            (ControlType::Radio, false) => "h-4 w-4 rounded-full border-[1.25px] transition-colors border-[#D0D5DD] bg-white",
            (ControlType::Checkbox, true) => "h-4 w-4 rounded border-[1.25px] transition-colors border-[#F56630] bg-[#F56630]",
            (ControlType::Checkbox, false) => "h-4 w-4 rounded border-[1.25px] transition-colors border-[#D0D5DD] bg-white",
            (ControlType::Toggle, _) => "sr-only peer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Icon,
    Avatar,
}

/// Content of one cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CellData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<(MediaType, String)>,
}

impl CellData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn media(mut self, kind: MediaType, url: impl Into<String>) -> Self {
        self.media = Some((kind, url.into()));
        self
    }
}

#[derive(Clone, Default)]
pub struct TableCell {
    data: CellData,
    control: Option<ControlType>,
    selected: bool,
    checked: bool,
    class: String,
    test_id: Option<String>,
    on_change: Option<Rc<dyn Fn(bool)>>,
}

impl TableCell {
    pub fn new(data: CellData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn control(mut self, control: Option<ControlType>) -> Self {
        self.control = control;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Test id for the control input
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn on_change<F: Fn(bool) + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    fn control_element(&self, control: ControlType) -> Element {
        let mut input = el("input")
            .attr("type", control.input_type())
            .attr_if(self.checked, "checked", "")
            .class(control.input_classes(self.checked));
        if let Some(id) = &self.test_id {
            input = input.test_id(id.clone());
        }
        if let Some(handler) = &self.on_change {
            let handler = Rc::clone(handler);
            input = input.on(EventKind::Change, move |ctx| handler(ctx.checked.unwrap_or(false)));
        }

        let label = match control {
            ControlType::Toggle => el("label")
                .class("relative inline-flex items-center cursor-pointer")
                .child(input)
                .child(
                    div()
                        .class("relative w-9 h-5 rounded-full transition-colors")
                        .class(if self.checked { "bg-[#F56630]" } else { "bg-[#E4E7EC]" })
                        .child(
                            div()
                                .class("absolute top-[2px] left-[2px] w-4 h-4 bg-white rounded-full transition-transform")
                                .class(if self.checked { "translate-x-4" } else { "translate-x-0" }),
                        ),
                ),
            ControlType::Radio => el("label")
                .class("relative flex items-center")
                .child(input)
                .child_opt(self.checked.then(|| {
                    div()
                        .class("absolute inset-0 flex items-center justify-center")
                        .child(div().class("w-1.5 h-1.5 rounded-full bg-white"))
                })),
            ControlType::Checkbox => el("label").class("relative flex items-center").child(input),
        };
        div().class("flex-none").child(label)
    }

    fn media_element(kind: MediaType, url: &str) -> Element {
        let frame = match kind {
            MediaType::Icon => div()
                .class("w-8 h-8 rounded-lg border border-[#E4E7EC] flex items-center justify-center")
                .child(el("img").attr("src", url).attr("alt", "").class("w-4 h-4")),
            MediaType::Avatar => div()
                .class("w-8 h-8 rounded-full border border-white overflow-hidden")
                .child(el("img").attr("src", url).attr("alt", "").class("w-full h-full object-cover")),
        };
        div().class("flex-none").child(frame)
    }
}

impl ElementBuilder for TableCell {
    fn build(&self) -> Node {
        let body = div()
            .class("flex items-center gap-3 px-6 flex-1")
            .class_if(self.selected, "bg-[#FFECE5]")
            .child_opt(self.control.map(|control| self.control_element(control)))
            .child_opt(
                self.data
                    .media
                    .as_ref()
                    .map(|(kind, url)| Self::media_element(*kind, url)),
            )
            .child(
                div()
                    .class("flex flex-col min-w-0")
                    .child(
                        span()
                            .class("text-sm font-medium text-[#101928] truncate")
                            .text(self.data.label.clone()),
                    )
                    .child_opt(self.data.description.as_ref().map(|description| {
                        span().class("text-sm text-[#475367] truncate").text(description.clone())
                    })),
            );
        div()
            .class(&cx(["relative flex items-center h-[44px]", self.class.as_str()]))
            .child(body)
            .into_node()
    }
}

pub fn table_cell(data: CellData) -> TableCell {
    TableCell::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    #[test]
    fn test_control_classes_cover_every_state() {
        for control in ControlType::ALL {
            for checked in [true, false] {
                assert!(!control.input_classes(checked).is_empty());
            }
        }
    }

    #[test]
    fn test_toggle_and_change() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let node = table_cell(CellData::new("Alerts"))
            .control(Some(ControlType::Toggle))
            .checked(true)
            .test_id("cell-toggle")
            .on_change(move |checked| sink.set(Some(checked)))
            .build();
        assert!(node.find(&|e| e.has_class("translate-x-4")).is_some());
        assert!(node.dispatch("cell-toggle", EventContext::checked(false)));
        assert_eq!(seen.get(), Some(false));
    }

    #[test]
    fn test_media_and_description() {
        let node = table_cell(
            CellData::new("Sarah Thompson")
                .description("sarah.t@example.com")
                .media(MediaType::Avatar, "/a.png"),
        )
        .selected(true)
        .build();
        assert!(node.find(&|e| e.has_class("rounded-full") && e.has_class("overflow-hidden")).is_some());
        assert!(node.text_content().contains("sarah.t@example.com"));
        assert!(node.find(&|e| e.has_class("bg-[#FFECE5]")).is_some());
        assert!(node.find(&|e| e.tag() == "input").is_none());
    }

    #[test]
    fn test_cell_serializes_lowercase_media() {
        let json = serde_json::to_string(&CellData::new("Design").media(MediaType::Icon, "/i.svg")).unwrap();
        assert!(json.contains("\"icon\""));
        assert!(!json.contains("description"));
    }
}
