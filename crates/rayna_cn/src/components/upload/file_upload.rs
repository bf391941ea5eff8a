//! Single document upload row
//!
//! Renders one of four variants from a [`ProgressOperation`]: the upload
//! prompt, a progress ring, the completed file with download/delete actions,
//! or the error with a retry button. `FileUpload::preview` renders a fixed
//! variant with no operation behind it, for showcases.

use std::rc::Rc;

use chrono::NaiveDateTime;
use rayna_core::{circle, cx, div, el, p, span, svg, Element, ElementBuilder, EventKind, FileInfo, Node};

use super::format::{format_file_size, format_upload_time};
use super::operation::{ProgressOperation, UploadStatus, MAX_UPLOAD_SIZE};
use crate::components::spinner::{fmt_num, RingMetrics};
use crate::icons::Icon;

const RING_RADIUS: f32 = 18.0;

#[derive(Clone, Debug)]
enum Source {
    Live(ProgressOperation),
    Preview {
        status: UploadStatus,
        file: Option<FileInfo>,
    },
}

#[derive(Clone)]
pub struct FileUpload {
    source: Source,
    accept: String,
    class: String,
    test_id: String,
    uploaded_at: Option<NaiveDateTime>,
    on_download: Option<Rc<dyn Fn()>>,
    on_delete: Option<Rc<dyn Fn()>>,
}

impl FileUpload {
    pub fn new(operation: ProgressOperation) -> Self {
        Self::with_source(Source::Live(operation))
    }

    pub fn preview(status: UploadStatus, file: Option<FileInfo>) -> Self {
        Self::with_source(Source::Preview { status, file })
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            accept: "application/pdf".to_string(),
            class: String::new(),
            test_id: "file-upload".to_string(),
            uploaded_at: None,
            on_download: None,
            on_delete: None,
        }
    }

    /// Value of the picker's `accept` attribute
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Prefix for the test ids of the picker, retry, download and delete controls
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    /// Timestamp shown next to the file size
    pub fn uploaded_at(mut self, at: NaiveDateTime) -> Self {
        self.uploaded_at = Some(at);
        self
    }

    /// Called with each chosen file that passes validation
    ///
    /// Previews have no operation behind them and ignore the handler.
    pub fn on_change<F: Fn(&FileInfo) + 'static>(self, handler: F) -> Self {
        if let Source::Live(operation) = &self.source {
            operation.clone().on_accept(handler);
        }
        self
    }

    pub fn on_download<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_download = Some(Rc::new(handler));
        self
    }

    /// Called after the completed file is cleared
    pub fn on_delete<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn status(&self) -> UploadStatus {
        match &self.source {
            Source::Live(op) => op.status(),
            Source::Preview { status, .. } => status.clone(),
        }
    }

    fn file(&self) -> Option<FileInfo> {
        match &self.source {
            Source::Live(op) => op.file(),
            Source::Preview { file, .. } => file.clone(),
        }
    }

    fn operation(&self) -> Option<&ProgressOperation> {
        match &self.source {
            Source::Live(op) => Some(op),
            Source::Preview { .. } => None,
        }
    }

    fn max_size_mb(&self) -> u64 {
        let max = self.operation().map_or(MAX_UPLOAD_SIZE, |op| op.rules().max_size);
        max / (1024 * 1024)
    }

    fn picker(&self) -> Element {
        let mut input = el("input")
            .attr("type", "file")
            .class("hidden")
            .attr("accept", self.accept.clone())
            .test_id(format!("{}-input", self.test_id));
        if let Some(op) = self.operation().cloned() {
            input = input.on(EventKind::Change, move |ctx| {
                if let Some(file) = ctx.files.first() {
                    op.select(file.clone());
                }
            });
        }
        input
    }

    fn state_icon(&self, status: &UploadStatus) -> Element {
        let badge = |bg: &str, icon: Icon, color: &str| {
            div()
                .class("w-10 h-10 rounded-full flex items-center justify-center")
                .class(bg)
                .child(icon.render(20.0, &format!("w-5 h-5 {color}")))
        };
        match status {
            UploadStatus::Default => badge("bg-gray-100", Icon::CloudUpload, "text-gray-600"),
            UploadStatus::Success => badge("bg-green-100", Icon::CheckCircle, "text-green-600"),
            UploadStatus::Error { .. } => badge("bg-[#FBEAE9]", Icon::AlertTriangle, "text-[#D42620]"),
            UploadStatus::Uploading { progress } => {
                let ring = RingMetrics::new(RING_RADIUS, f32::from(*progress));
                div()
                    .class("relative w-10 h-10")
                    .child(
                        svg(40.0, 40.0)
                            .class("w-10 h-10 transform -rotate-90")
                            .child(
                                circle(20.0, RING_RADIUS)
                                    .attr("fill", "none")
                                    .attr("stroke", "#F0F2F5")
                                    .attr("stroke-width", "4"),
                            )
                            .child(
                                circle(20.0, RING_RADIUS)
                                    .class("transition-all duration-300")
                                    .attr("fill", "none")
                                    .attr("stroke", "#F56630")
                                    .attr("stroke-width", "4")
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
                            .class("absolute inset-0 flex items-center justify-center text-xs font-semibold")
                            .text(format!("{progress}%")),
                    )
            }
        }
    }

    fn details(&self, status: &UploadStatus) -> Element {
        let title = |text: String| el("h3").class("text-base font-semibold text-gray-900").text(text);
        let dot = || div().class("w-1 h-1 bg-gray-500 rounded-full");

        if *status == UploadStatus::Default {
            return div()
                .class("flex-1")
                .child(title("Upload your document".to_string()))
                .child(
                    div()
                        .class("flex items-center gap-1.5 text-sm text-gray-500")
                        .child(span().text("PDF format"))
                        .child(dot())
                        .child(span().text(format!("Max. {}MB", self.max_size_mb()))),
                );
        }

        let file = self.file();
        let meta = div()
            .class("flex items-center gap-1.5 text-sm text-gray-500")
            .child_opt(self.uploaded_at.map(|at| span().text(format_upload_time(at))))
            .child_opt(self.uploaded_at.map(|_| dot()))
            .child(span().text(file.as_ref().map(|f| format_file_size(f.size)).unwrap_or_default()));

        div()
            .class("flex-1")
            .child(title(file.map(|f| f.name).unwrap_or_default()))
            .child(meta)
            .child_opt(status.error_message().map(|message| {
                p().class("mt-1 text-sm font-medium text-[#D42620]")
                    .text(message.to_string())
            }))
    }

    fn actions(&self, status: &UploadStatus) -> Option<Element> {
        let op = self.operation().cloned();
        match status {
            UploadStatus::Default => Some(
                el("button")
                    .test_id(format!("{}-browse", self.test_id))
                    .class("px-4 py-2 bg-[#EB5017] hover:bg-[#F56630] text-white text-sm font-semibold rounded-lg shadow transition-colors")
                    .text("Upload")
                    .child(self.picker()),
            ),
            UploadStatus::Error { .. } => {
                let mut button = el("button")
                    .test_id(format!("{}-retry", self.test_id))
                    .class("px-4 py-2 text-[#EB5017] hover:text-[#F56630] text-sm font-semibold rounded-lg transition-colors")
                    .text("Try Again")
                    .child(self.picker());
                if let Some(op) = op {
                    button = button.on_click(move |_| op.retry());
                }
                Some(button)
            }
            UploadStatus::Success => {
                let action = |name: &str, icon: Icon| {
                    el("button")
                        .test_id(format!("{}-{}", self.test_id, name.to_lowercase()))
                        .class("p-2 text-gray-600 hover:text-gray-800 rounded transition-colors")
                        .attr("title", name)
                        .child(icon.render(20.0, "w-5 h-5"))
                };
                let mut download = action("Download", Icon::Download);
                if let Some(handler) = self.on_download.clone() {
                    download = download.on_click(move |_| handler());
                }
                let mut delete = action("Delete", Icon::Trash);
                let on_delete = self.on_delete.clone();
                if op.is_some() || on_delete.is_some() {
                    delete = delete.on_click(move |_| {
                        if let Some(op) = &op {
                            op.clear();
                        }
                        if let Some(handler) = &on_delete {
                            handler();
                        }
                    });
                }
                Some(
                    div()
                        .class("flex items-center gap-2")
                        .child(download)
                        .child(delete),
                )
            }
            UploadStatus::Uploading { .. } => None,
        }
    }
}

impl ElementBuilder for FileUpload {
    fn build(&self) -> Node {
        let status = self.status();
        let border = if matches!(status, UploadStatus::Error { .. }) {
            "border-red-200"
        } else {
            "border-gray-200"
        };
        div()
            .class(&cx(["w-[450px] p-4 rounded-lg border", border, self.class.as_str()]))
            .attr("data-status", status.name())
            .child(
                div()
                    .class("flex items-center gap-4")
                    .child(self.state_icon(&status))
                    .child(self.details(&status))
                    .child_opt(self.actions(&status)),
            )
            .into_node()
    }
}

pub fn file_upload(operation: ProgressOperation) -> FileUpload {
    FileUpload::new(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::upload::operation::{UploadRules, SIZE_LIMIT_MESSAGE};
    use rayna_core::{EventContext, ManualClock, Scheduler};
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    fn setup() -> (Scheduler, ProgressOperation) {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let op = ProgressOperation::new(UploadRules::small(), scheduler.handle());
        (scheduler, op)
    }

    fn choose(node: &Node, file: FileInfo) {
        node.dispatch("file-upload-input", EventContext::files(EventKind::Change, vec![file]));
    }

    #[test]
    fn test_picker_starts_upload() {
        let (scheduler, op) = setup();
        let widget = file_upload(op.clone());
        choose(&widget.build(), FileInfo::new("doc.pdf", 2048, "application/pdf"));

        scheduler.advance(Duration::from_millis(1000));
        let html = widget.build().to_html();
        assert!(html.contains("40%"));
        assert!(html.contains("doc.pdf"));
        assert!(html.contains("2.0 KB"));
    }

    #[test]
    fn test_on_change_sees_only_accepted_files() {
        let (_scheduler, op) = setup();
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&chosen);
        let widget = file_upload(op).on_change(move |file| log.borrow_mut().push(file.name.clone()));

        choose(&widget.build(), FileInfo::new("big.pdf", 13 * 1024 * 1024, "application/pdf"));
        choose(&widget.build(), FileInfo::new("doc.pdf", 2048, "application/pdf"));
        assert_eq!(*chosen.borrow(), vec!["doc.pdf".to_string()]);
    }

    #[test]
    fn test_oversize_shows_error_then_retry() {
        let (_scheduler, op) = setup();
        let widget = file_upload(op.clone());
        choose(&widget.build(), FileInfo::new("big.pdf", 13 * 1024 * 1024, "application/pdf"));

        let node = widget.build();
        assert!(node.to_html().contains(SIZE_LIMIT_MESSAGE));
        assert!(node.dispatch("file-upload-retry", EventContext::click()));
        assert_eq!(op.status(), UploadStatus::Default);
    }

    #[test]
    fn test_delete_after_complete() {
        let (scheduler, op) = setup();
        let deleted = Rc::new(Cell::new(false));
        let d = Rc::clone(&deleted);
        let widget = file_upload(op.clone()).on_delete(move || d.set(true));
        op.select(FileInfo::new("doc.pdf", 10, "application/pdf"));
        scheduler.advance(Duration::from_millis(2500));
        assert_eq!(op.status(), UploadStatus::Success);

        let node = widget.build();
        assert!(node.find_by_test_id("file-upload-download").is_some());
        node.dispatch("file-upload-delete", EventContext::click());
        assert!(deleted.get());
        assert_eq!(op.status(), UploadStatus::Default);
    }

    #[test]
    fn test_preview_variants() {
        let file = FileInfo::new("document.pdf", 5 * 1024 * 1024 / 2, "application/pdf");
        let html = FileUpload::preview(UploadStatus::Uploading { progress: 65 }, Some(file))
            .build()
            .to_html();
        assert!(html.contains("65%"));
        assert!(html.contains("2.5 MB"));

        let default = FileUpload::preview(UploadStatus::Default, None).build();
        assert!(default.text_content().contains("Max. 5MB"));
    }
}
