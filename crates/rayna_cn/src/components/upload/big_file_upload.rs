//! Image drop zone
//!
//! A dashed card that accepts a picked or dropped image. Dragging a file over
//! it highlights the border until the drag leaves or the file is dropped.

use std::rc::Rc;

use rayna_core::{
    circle, cx, div, el, span, svg, Element, ElementBuilder, EventContext, EventKind, FileInfo,
    Node, State,
};

use super::operation::{ProgressOperation, UploadStatus};
use crate::components::spinner::{fmt_num, RingMetrics};
use crate::icons::Icon;

const RING_RADIUS: f32 = 36.0;
const DEFAULT_ERROR: &str = "Failed to upload";

fn variant_classes(status: &UploadStatus) -> &'static str {
    match status {
        UploadStatus::Error { .. } => "border-[#E26E6A] bg-[#FEFBFB]",
        UploadStatus::Success => "border-[#5FC381] bg-[#FBFEFC]",
        UploadStatus::Uploading { .. } => "border-[#FA9874] bg-[#FFFBFA]",
        UploadStatus::Default => "border-[#D0D5DD] bg-white",
    }
}

#[derive(Clone)]
pub struct BigFileUpload {
    operation: ProgressOperation,
    dragging: State<bool>,
    accept: String,
    max_dimensions: (u32, u32),
    class: String,
    test_id: String,
    on_delete: Option<Rc<dyn Fn()>>,
}

impl BigFileUpload {
    pub fn new(operation: ProgressOperation) -> Self {
        Self {
            operation,
            dragging: State::new(false),
            accept: "image/*".to_string(),
            max_dimensions: (800, 400),
            class: String::new(),
            test_id: "big-upload".to_string(),
            on_delete: None,
        }
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Dimensions quoted in the hint text
    pub fn max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = (width, height);
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

    /// Called with each dropped or chosen image that passes validation
    pub fn on_change<F: Fn(&FileInfo) + 'static>(mut self, handler: F) -> Self {
        self.operation = self.operation.on_accept(handler);
        self
    }

    pub fn on_delete<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    pub fn hint(&self) -> String {
        let (w, h) = self.max_dimensions;
        format!("SVG, PNG, JPG or GIF (max. {w}x{h}px)")
    }

    fn select_first(operation: &ProgressOperation, ctx: &EventContext) {
        if let Some(file) = ctx.files.first() {
            operation.select(file.clone());
        }
    }

    fn caption(title: &str, detail: String) -> Element {
        div()
            .class("flex flex-col items-center gap-1")
            .child(span().class("text-sm font-semibold text-[#1D2739]").text(title))
            .child(span().class("text-xs text-[#98A2B3]").text(detail))
    }

    fn icon_disc(bg: &str, icon: Icon, color: &str) -> Element {
        div()
            .class("w-12 h-12 rounded-full flex items-center justify-center")
            .class(bg)
            .child(icon.render(24.0, &format!("w-6 h-6 {color}")))
    }

    fn content(&self, status: &UploadStatus, file: Option<FileInfo>) -> Element {
        let file_name = file.map(|f| f.name).unwrap_or_default();
        let column = || div().class("flex flex-col items-center gap-6");

        match status {
            UploadStatus::Error { message } => {
                let op = self.operation.clone();
                let message = if message.is_empty() {
                    DEFAULT_ERROR.to_string()
                } else {
                    message.clone()
                };
                column()
                    .child(Self::icon_disc("bg-[#FBEAE9]", Icon::AlertTriangle, "text-[#D42620]"))
                    .child(Self::caption("Failed to Upload", message))
                    .child(
                        el("button")
                            .test_id(format!("{}-retry", self.test_id))
                            .class("px-4 py-2 text-sm font-semibold text-[#F56630] hover:text-[#EB5017] transition-colors")
                            .text("Try Again")
                            .on_click(move |_| op.retry()),
                    )
            }
            UploadStatus::Success => {
                let op = self.operation.clone();
                let on_delete = self.on_delete.clone();
                column()
                    .child(Self::icon_disc("bg-[#E7F6EC]", Icon::CheckCircle, "text-[#0F973D]"))
                    .child(Self::caption("Upload Complete", file_name))
                    .child(
                        el("button")
                            .test_id(format!("{}-clear", self.test_id))
                            .class("px-4 py-2 text-sm font-semibold text-[#98A2B3] hover:text-[#1D2739] transition-colors")
                            .text("Clear Upload")
                            .on_click(move |_| {
                                op.clear();
                                if let Some(handler) = &on_delete {
                                    handler();
                                }
                            }),
                    )
            }
            UploadStatus::Uploading { progress } => {
                let ring = RingMetrics::new(RING_RADIUS, f32::from(*progress));
                let track = |stroke: &str| {
                    circle(40.0, RING_RADIUS)
                        .attr("fill", "none")
                        .attr("stroke", stroke)
                        .attr("stroke-width", "8")
                };
                column()
                    .child(
                        div().class("w-20 h-20").child(
                            div()
                                .class("relative w-full h-full")
                                .child(
                                    svg(80.0, 80.0)
                                        .class("w-full h-full transform -rotate-90")
                                        .child(track("#FCD2C2"))
                                        .child(
                                            track("#F56630")
                                                .class("transition-all duration-300")
                                                .attr(
                                                    "stroke-dasharray",
                                                    format!(
                                                        "{} {}",
                                                        fmt_num(ring.circumference - ring.dash_offset),
                                                        fmt_num(ring.circumference)
                                                    ),
                                                ),
                                        ),
                                )
                                .child(
                                    div()
                                        .class("absolute inset-0 flex items-center justify-center")
                                        .child(
                                            span()
                                                .class("text-base font-semibold")
                                                .text(format!("{progress}%")),
                                        ),
                                ),
                        ),
                    )
                    .child(Self::caption("Uploading Document...", file_name))
            }
            UploadStatus::Default => {
                // both buttons open the hidden picker
                let browse = |label: &str, id: &str, classes: &str| {
                    el("button")
                        .test_id(format!("{}-{id}", self.test_id))
                        .attr("type", "button")
                        .class(classes)
                        .text(label)
                };
                div()
                    .class("flex flex-col items-center gap-4 w-full")
                    .child(Self::icon_disc("bg-[#F0F2F5]", Icon::CloudUpload, "text-[#475367]"))
                    .child(
                        div()
                            .class("flex flex-col items-center gap-0.5")
                            .child(
                                div()
                                    .class("flex items-center gap-1")
                                    .child(browse(
                                        "Click to upload",
                                        "click",
                                        "text-sm font-semibold text-[#EB5017] hover:text-[#F56630] transition-colors",
                                    ))
                                    .child(span().class("text-sm text-[#475367]").text("or drag and drop")),
                            )
                            .child(span().class("text-xs text-[#98A2B3]").text(self.hint())),
                    )
                    .child(
                        div()
                            .class("w-full flex items-center gap-2 my-2")
                            .child(div().class("flex-1 h-px bg-[#F0F2F5]"))
                            .child(span().class("text-xs font-semibold text-[#98A2B3]").text("OR"))
                            .child(div().class("flex-1 h-px bg-[#F0F2F5]")),
                    )
                    .child(browse(
                        "Browse Files",
                        "browse",
                        "px-4 py-2 bg-[#EB5017] hover:bg-[#F56630] text-white text-sm font-semibold rounded-md transition-colors",
                    ))
            }
        }
    }
}

impl ElementBuilder for BigFileUpload {
    fn build(&self) -> Node {
        let status = self.operation.status();
        let file = self.operation.file();

        let drag_over = self.dragging.clone();
        let drag_leave = self.dragging.clone();
        let dropped = self.dragging.clone();
        let drop_op = self.operation.clone();
        let picked_op = self.operation.clone();

        div()
            .test_id(self.test_id.clone())
            .class(&cx([
                "w-[400px] min-h-[264px] p-6 rounded-2xl border-2 border-dashed",
                variant_classes(&status),
                if self.dragging.get() { "border-[#EB5017]" } else { "" },
                "transition-colors",
                self.class.as_str(),
            ]))
            .attr("data-status", status.name())
            .on(EventKind::DragOver, move |_| drag_over.set(true))
            .on(EventKind::DragLeave, move |_| drag_leave.set(false))
            .on(EventKind::Drop, move |ctx| {
                dropped.set(false);
                Self::select_first(&drop_op, ctx);
            })
            .child(
                el("input")
                    .attr("type", "file")
                    .class("hidden")
                    .attr("accept", self.accept.clone())
                    .test_id(format!("{}-input", self.test_id))
                    .on(EventKind::Change, move |ctx| Self::select_first(&picked_op, ctx)),
            )
            .child(
                div()
                    .class("flex items-center justify-center h-full")
                    .child(self.content(&status, file)),
            )
            .into_node()
    }
}

pub fn big_file_upload(operation: ProgressOperation) -> BigFileUpload {
    BigFileUpload::new(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::upload::operation::{UploadRules, IMAGE_TYPE_MESSAGE};
    use rayna_core::{ManualClock, Scheduler};
    use std::cell::Cell;
    use std::time::Duration;

    fn setup() -> (Scheduler, BigFileUpload) {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let op = ProgressOperation::new(UploadRules::image(), scheduler.handle());
        (scheduler, big_file_upload(op))
    }

    fn drop_file(node: &Node, file: FileInfo) {
        node.dispatch("big-upload", EventContext::files(EventKind::Drop, vec![file]));
    }

    #[test]
    fn test_drag_highlight() {
        let (_s, zone) = setup();
        let node = zone.build();
        node.dispatch("big-upload", EventContext::new(EventKind::DragOver));
        assert!(zone.is_dragging());
        assert!(zone.build().to_html().contains("border-[#EB5017]"));

        node.dispatch("big-upload", EventContext::new(EventKind::DragLeave));
        assert!(!zone.is_dragging());
    }

    #[test]
    fn test_on_change_skips_rejected_types() {
        let (_s, zone) = setup();
        let accepted = Rc::new(Cell::new(0));
        let count = Rc::clone(&accepted);
        let zone = zone.on_change(move |_| count.set(count.get() + 1));

        drop_file(&zone.build(), FileInfo::new("notes.txt", 10, "text/plain"));
        assert_eq!(accepted.get(), 0);
        drop_file(&zone.build(), FileInfo::new("logo.png", 4096, "image/png"));
        assert_eq!(accepted.get(), 1);
    }

    #[test]
    fn test_drop_runs_upload_to_success() {
        let (scheduler, zone) = setup();
        let node = zone.build();
        node.dispatch("big-upload", EventContext::new(EventKind::DragOver));
        drop_file(&node, FileInfo::new("logo.png", 4096, "image/png"));
        assert!(!zone.is_dragging());

        scheduler.advance(Duration::from_millis(500));
        let html = zone.build().to_html();
        assert!(html.contains("25%"));
        assert!(html.contains("Uploading Document..."));

        scheduler.advance(Duration::from_millis(1500));
        let done = zone.build();
        assert!(done.text_content().contains("Upload Complete"));
        done.dispatch("big-upload-clear", EventContext::click());
        assert!(zone.build().text_content().contains("Click to upload"));
    }

    #[test]
    fn test_wrong_type_error() {
        let (_s, zone) = setup();
        drop_file(&zone.build(), FileInfo::new("notes.txt", 10, "text/plain"));
        let node = zone.build();
        assert!(node.text_content().contains("Failed to Upload"));
        assert!(node.text_content().contains(IMAGE_TYPE_MESSAGE));
        assert!(node.dispatch("big-upload-retry", EventContext::click()));
        assert!(zone.build().text_content().contains(&zone.hint()));
    }
}
