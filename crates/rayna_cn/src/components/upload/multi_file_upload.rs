//! Multi-file upload list
//!
//! Every added file gets its own [`ProgressOperation`]. Oversize files show up
//! as error rows straight away; the rest count up independently.

use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use rayna_core::{
    div, el, p, span, Element, ElementBuilder, EventKind, FileInfo, Node, SchedulerHandle, State,
};

use super::format::{format_file_size_long, format_list_time};
use super::operation::{ProgressOperation, UploadRules, UploadStatus};
use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemStatus {
    Uploading,
    Complete,
    Error,
}

/// Snapshot of one row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadItemView {
    pub id: u64,
    pub file: FileInfo,
    pub status: ItemStatus,
    pub progress: u8,
    pub error: Option<String>,
}

#[derive(Clone)]
struct UploadItem {
    id: u64,
    file: FileInfo,
    operation: ProgressOperation,
    uploaded_at: NaiveDateTime,
}

impl UploadItem {
    fn view(&self) -> UploadItemView {
        let status = self.operation.status();
        UploadItemView {
            id: self.id,
            file: self.file.clone(),
            status: match status {
                UploadStatus::Success => ItemStatus::Complete,
                UploadStatus::Error { .. } => ItemStatus::Error,
                UploadStatus::Default | UploadStatus::Uploading { .. } => ItemStatus::Uploading,
            },
            progress: status.progress(),
            error: status.error_message().map(str::to_string),
        }
    }
}

#[derive(Clone)]
pub struct MultiFileUpload {
    items: State<Vec<UploadItem>>,
    next_id: State<u64>,
    dragging: State<bool>,
    rules: UploadRules,
    scheduler: SchedulerHandle,
    test_id: String,
    on_files_change: Option<Rc<dyn Fn(&[FileInfo])>>,
    on_file_delete: Option<Rc<dyn Fn(u64)>>,
    on_file_download: Option<Rc<dyn Fn(u64)>>,
}

impl MultiFileUpload {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            items: State::new(Vec::new()),
            next_id: State::new(1),
            dragging: State::new(false),
            rules: UploadRules::multi(),
            scheduler,
            test_id: "multi-upload".to_string(),
            on_files_change: None,
            on_file_delete: None,
            on_file_download: None,
        }
    }

    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.rules = self.rules.max_size(bytes);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    /// Called with every batch of added files, valid or not
    pub fn on_files_change<F: Fn(&[FileInfo]) + 'static>(mut self, handler: F) -> Self {
        self.on_files_change = Some(Rc::new(handler));
        self
    }

    pub fn on_file_delete<F: Fn(u64) + 'static>(mut self, handler: F) -> Self {
        self.on_file_delete = Some(Rc::new(handler));
        self
    }

    pub fn on_file_download<F: Fn(u64) + 'static>(mut self, handler: F) -> Self {
        self.on_file_download = Some(Rc::new(handler));
        self
    }

    /// Append `files`, starting an upload for each; returns the new ids
    pub fn add_files(&self, files: Vec<FileInfo>) -> Vec<u64> {
        if files.is_empty() {
            return Vec::new();
        }
        let uploaded_at = Local::now().naive_local();
        let added: Vec<UploadItem> = files
            .iter()
            .map(|file| {
                let id = self.next_id.update(|next| {
                    let id = *next;
                    *next += 1;
                    id
                });
                let operation = ProgressOperation::new(self.rules.clone(), self.scheduler.clone());
                operation.select(file.clone());
                UploadItem {
                    id,
                    file: file.clone(),
                    operation,
                    uploaded_at,
                }
            })
            .collect();
        let ids = added.iter().map(|item| item.id).collect();
        tracing::debug!(count = added.len(), "files added");
        self.items.update(|items| items.extend(added));

        if let Some(handler) = &self.on_files_change {
            handler(files.as_slice());
        }
        ids
    }

    /// Remove a row, cancelling its upload
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.items.update(|items| {
            let index = items.iter().position(|item| item.id == id)?;
            Some(items.remove(index))
        });
        let Some(item) = removed else {
            return false;
        };
        drop(item);
        if let Some(handler) = &self.on_file_delete {
            handler(id);
        }
        true
    }

    /// Forward a download request for a completed row
    pub fn download(&self, id: u64) -> bool {
        let complete = self.items.with(|items| {
            items
                .iter()
                .any(|item| item.id == id && item.view().status == ItemStatus::Complete)
        });
        if complete {
            if let Some(handler) = &self.on_file_download {
                handler(id);
            }
        }
        complete
    }

    pub fn clear_all(&self) {
        let removed = self.items.update(std::mem::take);
        tracing::debug!(count = removed.len(), "upload list cleared");
    }

    pub fn items(&self) -> Vec<UploadItemView> {
        self.items.with(|items| items.iter().map(UploadItem::view).collect())
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    fn file_badge(small: bool) -> Element {
        div()
            .class(if small { "w-8 h-8 text-xs" } else { "w-10 h-10" })
            .class("bg-[#CC400C] rounded flex items-center justify-center text-white")
            .text("PDF")
    }

    fn drop_zone(&self) -> Element {
        let over = self.dragging.clone();
        let leave = self.dragging.clone();
        let (dropped, drop_target) = (self.dragging.clone(), self.clone());
        let picker_target = self.clone();

        div()
            .test_id(format!("{}-zone", self.test_id))
            .class("border-2 border-dashed rounded-2xl p-6 mb-7 text-center transition-colors duration-200 cursor-pointer")
            .class(if self.is_dragging() {
                "border-[#FA9874] bg-[#FFFBFA]"
            } else {
                "border-gray-200 hover:border-[#FA9874] hover:bg-[#FFFBFA]"
            })
            .on(EventKind::DragOver, move |_| over.set(true))
            .on(EventKind::DragLeave, move |_| leave.set(false))
            .on(EventKind::Drop, move |ctx| {
                dropped.set(false);
                drop_target.add_files(ctx.files.clone());
            })
            .child(
                el("input")
                    .test_id(format!("{}-input", self.test_id))
                    .attr("type", "file")
                    .attr("multiple", "")
                    .class("hidden")
                    .on(EventKind::Change, move |ctx| {
                        picker_target.add_files(ctx.files.clone());
                    }),
            )
            .child(
                div()
                    .class("flex flex-col items-center gap-5")
                    .child(Self::file_badge(false))
                    .child(
                        div()
                            .class("text-center")
                            .child(
                                p().class("text-gray-600 font-medium mb-1")
                                    .text("Drop your files here or ")
                                    .child(span().class("text-[#F56630]").text("browse")),
                            )
                            .child(p().class("text-sm text-gray-500").text(format!(
                                "Maximum file size: {}MB",
                                self.rules.max_size / (1024 * 1024)
                            ))),
                    ),
            )
    }

    fn row(&self, item: &UploadItem) -> Element {
        let view = item.view();
        let delete_button = |classes: &str, icon: Icon| {
            let list = self.clone();
            let id = view.id;
            el("button")
                .test_id(format!("{}-delete-{id}", self.test_id))
                .class(classes)
                .attr("aria-label", "Delete")
                .on_click(move |_| {
                    list.delete(id);
                })
                .child(icon.render(20.0, ""))
        };

        let leading = if view.status == ItemStatus::Complete {
            div()
                .class("w-8 h-8 rounded-full bg-[#E7F6EC] flex items-center justify-center")
                .child(Icon::CheckCircle.render(16.0, "text-[#0F973D]"))
        } else {
            Self::file_badge(true)
        };

        let trailing = match view.status {
            ItemStatus::Uploading => div()
                .class("flex items-center gap-4")
                .child(
                    div()
                        .class("flex flex-col items-center gap-2")
                        .child(div().class("text-sm font-semibold").text(format!("{}%", view.progress)))
                        .child(
                            div()
                                .class("w-[313px] h-2 bg-[#FCD2C2] rounded-2xl overflow-hidden")
                                .child(
                                    div()
                                        .class("h-full bg-[#F56630] rounded-2xl transition-all duration-300")
                                        .style("width", format!("{}%", view.progress)),
                                ),
                        )
                        .child(div().class("text-sm text-gray-900 font-semibold").text("Uploading Document..."))
                        .child(div().class("text-xs text-gray-500").text(view.file.name.clone())),
                )
                .child(delete_button("text-gray-400 hover:text-gray-600", Icon::Close)),
            ItemStatus::Complete => {
                let list = self.clone();
                let id = view.id;
                div()
                    .class("flex items-center gap-4")
                    .child(
                        el("button")
                            .test_id(format!("{}-download-{id}", self.test_id))
                            .class("text-gray-500 hover:text-gray-700")
                            .attr("aria-label", "Download")
                            .on_click(move |_| {
                                list.download(id);
                            })
                            .child(Icon::Download.render(20.0, "")),
                    )
                    .child(delete_button("text-[#D42620] hover:text-red-700", Icon::Trash))
            }
            ItemStatus::Error => div()
                .class("text-red-600 text-sm")
                .text(view.error.clone().unwrap_or_default()),
        };

        div()
            .class("flex items-center justify-between pb-6 border-b border-gray-100")
            .attr("data-item-id", view.id.to_string())
            .child(
                div()
                    .class("flex items-center gap-4 flex-1")
                    .child(leading)
                    .child(
                        div()
                            .class("flex-1")
                            .child(p().class("font-semibold text-gray-900 mb-1").text(view.file.name.clone()))
                            .child(
                                div()
                                    .class("flex items-center gap-1.5 text-sm text-gray-500")
                                    .child(span().text(format_list_time(item.uploaded_at)))
                                    .child(span().class("w-1 h-1 rounded-full bg-gray-400"))
                                    .child(span().text(format_file_size_long(view.file.size))),
                            ),
                    ),
            )
            .child(trailing)
    }
}

impl ElementBuilder for MultiFileUpload {
    fn build(&self) -> Node {
        let clear = self.clone();
        let list = self.items.with(|items| {
            if items.is_empty() {
                return None;
            }
            Some(
                div()
                    .class("space-y-6")
                    .child(
                        div()
                            .class("flex items-center gap-2")
                            .child(span().class("text-gray-600 font-semibold").text("Uploaded Files"))
                            .child(
                                div()
                                    .class("bg-[#F56630] text-white text-xs font-semibold px-2 py-1 rounded-full")
                                    .text(items.len().to_string()),
                            ),
                    )
                    .child(div().class("space-y-6").children(items.iter().map(|item| self.row(item)))),
            )
        });

        div()
            .test_id(self.test_id.clone())
            .class("bg-white rounded-lg shadow-sm p-8")
            .child(
                div()
                    .class("flex justify-between items-center mb-7")
                    .child(el("h2").class("text-lg font-semibold text-gray-900").text("Upload Documents"))
                    .child(
                        el("button")
                            .test_id(format!("{}-clear-all", self.test_id))
                            .class("text-gray-400 hover:text-gray-600")
                            .attr("aria-label", "Clear all")
                            .on_click(move |_| clear.clear_all())
                            .child(Icon::Close.render(24.0, "")),
                    ),
            )
            .child(self.drop_zone())
            .child_opt(list)
            .into_node()
    }
}

pub fn multi_file_upload(scheduler: SchedulerHandle) -> MultiFileUpload {
    MultiFileUpload::new(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::upload::operation::{MAX_UPLOAD_SIZE, SIZE_LIMIT_MESSAGE};
    use rayna_core::{EventContext, ManualClock, Scheduler};
    use std::cell::RefCell;
    use std::time::Duration;

    fn pdf(name: &str, size: u64) -> FileInfo {
        FileInfo::new(name, size, "application/pdf")
    }

    #[test]
    fn test_oversize_becomes_error_row() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let list = multi_file_upload(scheduler.handle());
        list.add_files(vec![pdf("a.pdf", 100), pdf("huge.pdf", MAX_UPLOAD_SIZE + 1)]);

        let items = list.items();
        assert_eq!(items[0].status, ItemStatus::Uploading);
        assert_eq!(items[1].status, ItemStatus::Error);
        assert_eq!(items[1].error.as_deref(), Some(SIZE_LIMIT_MESSAGE));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_items_progress_independently() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let list = multi_file_upload(scheduler.handle());
        list.add_files(vec![pdf("a.pdf", 1)]);
        scheduler.advance(Duration::from_millis(1000));
        list.add_files(vec![pdf("b.pdf", 1)]);
        scheduler.advance(Duration::from_millis(500));

        let progress: Vec<_> = list.items().iter().map(|i| i.progress).collect();
        assert_eq!(progress, vec![75, 25]);

        scheduler.advance(Duration::from_millis(500));
        assert_eq!(list.items()[0].status, ItemStatus::Complete);
    }

    #[test]
    fn test_delete_cancels_and_notifies() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let d = Rc::clone(&deleted);
        let list = multi_file_upload(scheduler.handle()).on_file_delete(move |id| d.borrow_mut().push(id));
        let ids = list.add_files(vec![pdf("a.pdf", 1), pdf("b.pdf", 1)]);
        assert_eq!(scheduler.pending_count(), 2);

        let node = list.build();
        assert!(node.dispatch(&format!("multi-upload-delete-{}", ids[0]), EventContext::click()));
        drop(node);

        assert_eq!(list.items().len(), 1);
        assert_eq!(*deleted.borrow(), vec![ids[0]]);
        assert_eq!(scheduler.pending_count(), 1);
        assert!(!list.delete(ids[0]));
    }

    #[test]
    fn test_download_only_when_complete() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let downloads = Rc::new(RefCell::new(Vec::new()));
        let d = Rc::clone(&downloads);
        let list = multi_file_upload(scheduler.handle()).on_file_download(move |id| d.borrow_mut().push(id));
        let ids = list.add_files(vec![pdf("a.pdf", 1)]);

        assert!(!list.download(ids[0]));
        scheduler.advance(Duration::from_secs(2));
        assert!(list.download(ids[0]));
        assert_eq!(*downloads.borrow(), ids);
    }

    #[test]
    fn test_drop_and_clear_all() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let list = multi_file_upload(scheduler.handle());
        let node = list.build();
        node.dispatch("multi-upload-zone", EventContext::new(EventKind::DragOver));
        assert!(list.is_dragging());
        node.dispatch(
            "multi-upload-zone",
            EventContext::files(EventKind::Drop, vec![pdf("a.pdf", 1), pdf("b.pdf", 2)]),
        );
        assert!(!list.is_dragging());
        assert_eq!(list.items().len(), 2);
        assert!(list.build().text_content().contains("Uploaded Files2"));

        list.clear_all();
        assert!(list.items().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }
}
