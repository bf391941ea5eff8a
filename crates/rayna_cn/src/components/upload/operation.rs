//! The upload state machine
//!
//! ```text
//! Default ──select──▶ Uploading{0..100} ──▶ Success ──clear──▶ Default
//!    ▲        │                                               
//!    │        └─(rejected)─▶ Error ──retry──▶ Default
//! ```
//!
//! Progress is simulated: an interval timer adds `step` every `interval`
//! until it reaches 100. The same operation backs every upload widget; the
//! widgets differ only in their [`UploadRules`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rayna_core::{FileInfo, SchedulerHandle, TimerId};

use super::format::format_file_size_long;

/// 5 MiB
pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

pub const SIZE_LIMIT_MESSAGE: &str = "File size exceeds 5MB limit";
/// Size error for a `max_size` limit, e.g. `File size exceeds 10MB limit`
pub fn size_limit_message(max_size: u64) -> String {
    let limit = format_file_size_long(max_size).replace(' ', "");
    format!("File size exceeds {limit} limit")
}

pub const IMAGE_TYPE_MESSAGE: &str = "Invalid file type. Please upload SVG, PNG, JPG or GIF";
pub const IMAGE_TYPES: [&str; 4] = ["image/svg+xml", "image/png", "image/jpeg", "image/gif"];

/// Validation limits and progress pacing for one kind of upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRules {
    /// Largest accepted file in bytes
    pub max_size: u64,
    /// MIME allow-list; `None` accepts any type
    pub allowed_types: Option<Vec<String>>,
    /// Percentage added per tick
    pub step: u8,
    pub interval: Duration,
    pub size_message: String,
    pub type_message: String,
}

impl UploadRules {
    /// Single document upload: size check only, 20% every 500ms
    pub fn small() -> Self {
        Self {
            max_size: MAX_UPLOAD_SIZE,
            allowed_types: None,
            step: 20,
            interval: Duration::from_millis(500),
            size_message: SIZE_LIMIT_MESSAGE.to_string(),
            type_message: String::new(),
        }
    }

    /// Image drop zone: size and type checks, 5% every 100ms
    pub fn image() -> Self {
        Self {
            allowed_types: Some(IMAGE_TYPES.iter().map(|t| t.to_string()).collect()),
            step: 5,
            interval: Duration::from_millis(100),
            type_message: IMAGE_TYPE_MESSAGE.to_string(),
            ..Self::small()
        }
    }

    /// One entry of a multi-file list: size check only, 5% every 100ms
    pub fn multi() -> Self {
        Self {
            step: 5,
            interval: Duration::from_millis(100),
            ..Self::small()
        }
    }

    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self.size_message = size_limit_message(max_size);
        self
    }

    pub fn allowed_types(mut self, types: Option<Vec<String>>) -> Self {
        self.allowed_types = types;
        self
    }

    /// The error message for `file`, if it breaks a rule
    ///
    /// Size is checked before type.
    pub fn rejection(&self, file: &FileInfo) -> Option<&str> {
        if file.size > self.max_size {
            return Some(&self.size_message);
        }
        match &self.allowed_types {
            Some(types) if !types.iter().any(|t| *t == file.mime) => Some(&self.type_message),
            _ => None,
        }
    }
}

impl Default for UploadRules {
    fn default() -> Self {
        Self::small()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Default,
    Uploading {
        progress: u8,
    },
    Success,
    Error {
        message: String,
    },
}

impl UploadStatus {
    pub fn name(&self) -> &'static str {
        match self {
            UploadStatus::Default => "default",
            UploadStatus::Uploading { .. } => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error { .. } => "error",
        }
    }

    pub fn progress(&self) -> u8 {
        match self {
            UploadStatus::Uploading { progress } => *progress,
            UploadStatus::Success => 100,
            _ => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UploadStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Uploading { progress } => write!(f, "uploading ({progress}%)"),
            UploadStatus::Error { message } => write!(f, "error: {message}"),
            other => f.write_str(other.name()),
        }
    }
}

type FileCallback = Rc<dyn Fn(&FileInfo)>;
type ProgressCallback = Rc<dyn Fn(u8)>;

struct Operation {
    rules: UploadRules,
    status: UploadStatus,
    file: Option<FileInfo>,
    timer: Option<TimerId>,
    scheduler: SchedulerHandle,
    on_accept: Option<FileCallback>,
    on_progress: Option<ProgressCallback>,
    on_complete: Option<FileCallback>,
}

impl Operation {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.clear(timer);
        }
    }
}

impl Drop for Operation {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// A simulated upload driven by the scheduler
///
/// Clones share the same state. The timer is cancelled when the last clone
/// is dropped.
#[derive(Clone)]
pub struct ProgressOperation {
    inner: Rc<RefCell<Operation>>,
}

impl ProgressOperation {
    pub fn new(rules: UploadRules, scheduler: SchedulerHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Operation {
                rules,
                status: UploadStatus::Default,
                file: None,
                timer: None,
                scheduler,
                on_accept: None,
                on_progress: None,
                on_complete: None,
            })),
        }
    }

    /// An operation parked in `status` with no scheduler behind it
    pub fn fixed(rules: UploadRules, status: UploadStatus, file: Option<FileInfo>) -> Self {
        let operation = Self::new(rules, SchedulerHandle::detached());
        {
            let mut op = operation.inner.borrow_mut();
            op.status = status;
            op.file = file;
        }
        operation
    }

    /// Called with a file that passed validation
    pub fn on_accept<F: Fn(&FileInfo) + 'static>(self, handler: F) -> Self {
        self.inner.borrow_mut().on_accept = Some(Rc::new(handler));
        self
    }

    /// Called after every progress step, including the final 100
    pub fn on_progress<F: Fn(u8) + 'static>(self, handler: F) -> Self {
        self.inner.borrow_mut().on_progress = Some(Rc::new(handler));
        self
    }

    /// Called once when the upload reaches success
    pub fn on_complete<F: Fn(&FileInfo) + 'static>(self, handler: F) -> Self {
        self.inner.borrow_mut().on_complete = Some(Rc::new(handler));
        self
    }

    pub fn rules(&self) -> UploadRules {
        self.inner.borrow().rules.clone()
    }

    pub fn status(&self) -> UploadStatus {
        self.inner.borrow().status.clone()
    }

    pub fn file(&self) -> Option<FileInfo> {
        self.inner.borrow().file.clone()
    }

    pub fn progress(&self) -> u8 {
        self.inner.borrow().status.progress()
    }

    /// True while a progress timer is scheduled
    pub fn is_running(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    /// Validate `file` and start uploading it
    ///
    /// Any upload already in flight is abandoned.
    pub fn select(&self, file: FileInfo) -> UploadStatus {
        let accepted = {
            let mut op = self.inner.borrow_mut();
            op.cancel_timer();
            op.file = Some(file.clone());

            if let Some(message) = op.rules.rejection(&file).map(str::to_string) {
                tracing::warn!(file = %file.name, size = file.size, mime = %file.mime, %message, "upload rejected");
                op.status = UploadStatus::Error { message };
                return op.status.clone();
            }

            op.status = UploadStatus::Uploading { progress: 0 };
            let interval = op.rules.interval;
            let weak = Rc::downgrade(&self.inner);
            let timer = op.scheduler.set_interval(interval, move || Self::advance(&weak));
            op.timer = timer;
            if op.timer.is_none() {
                tracing::warn!(file = %file.name, "scheduler gone, upload will not progress");
            }
            tracing::debug!(file = %file.name, size = file.size, "upload started");
            op.on_accept.clone()
        };

        if let Some(handler) = accepted {
            handler(&file);
        }
        self.status()
    }

    fn advance(weak: &Weak<RefCell<Operation>>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let (progress, on_progress, completed) = {
            let mut op = inner.borrow_mut();
            let UploadStatus::Uploading { progress } = op.status else {
                op.cancel_timer();
                return;
            };
            let next = progress.saturating_add(op.rules.step.max(1)).min(100);
            let completed = if next == 100 {
                op.status = UploadStatus::Success;
                op.cancel_timer();
                tracing::debug!(file = ?op.file.as_ref().map(|f| &f.name), "upload complete");
                op.on_complete.clone().zip(op.file.clone())
            } else {
                op.status = UploadStatus::Uploading { progress: next };
                None
            };
            (next, op.on_progress.clone(), completed)
        };

        tracing::trace!(progress, "upload progress");
        if let Some(handler) = on_progress {
            handler(progress);
        }
        if let Some((handler, file)) = completed {
            handler(&file);
        }
    }

    /// Leave the error state and forget the rejected file
    pub fn retry(&self) {
        self.reset("retry");
    }

    /// Leave the success state and forget the uploaded file
    pub fn clear(&self) {
        self.reset("clear");
    }

    fn reset(&self, action: &'static str) {
        let mut op = self.inner.borrow_mut();
        op.cancel_timer();
        op.file = None;
        tracing::debug!(action, from = op.status.name(), "upload reset");
        op.status = UploadStatus::Default;
    }
}

impl fmt::Debug for ProgressOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.inner.borrow();
        f.debug_struct("ProgressOperation")
            .field("status", &op.status)
            .field("file", &op.file)
            .field("running", &op.timer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::{ManualClock, Scheduler};
    use std::cell::Cell;

    fn scheduler() -> Scheduler {
        Scheduler::with_clock(ManualClock::new())
    }

    fn pdf(size: u64) -> FileInfo {
        FileInfo::new("report.pdf", size, "application/pdf")
    }

    #[test]
    fn test_fixed_operation_never_progresses() {
        let op = ProgressOperation::fixed(
            UploadRules::image(),
            UploadStatus::Uploading { progress: 65 },
            Some(FileInfo::new("image.png", 1024, "image/png")),
        );
        assert_eq!(op.progress(), 65);
        assert_eq!(op.file().map(|f| f.name), Some("image.png".to_string()));
        assert!(!op.is_running());
        op.clear();
        assert_eq!(op.status(), UploadStatus::Default);
    }

    #[test]
    fn test_size_message_follows_configured_limit() {
        assert_eq!(size_limit_message(MAX_UPLOAD_SIZE), SIZE_LIMIT_MESSAGE);

        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::small().max_size(10 * 1024 * 1024), s.handle());
        let pdf = FileInfo::new("report.pdf", 12 * 1024 * 1024, "application/pdf");
        assert_eq!(
            op.select(pdf),
            UploadStatus::Error {
                message: "File size exceeds 10MB limit".to_string()
            }
        );

        let fits = FileInfo::new("notes.pdf", 8 * 1024 * 1024, "application/pdf");
        assert!(matches!(op.select(fits), UploadStatus::Uploading { .. }));
    }

    #[test]
    fn test_oversize_rejected_regardless_of_type() {
        let s = scheduler();
        for rules in [UploadRules::small(), UploadRules::image(), UploadRules::multi()] {
            let op = ProgressOperation::new(rules, s.handle());
            let png = FileInfo::new("big.png", MAX_UPLOAD_SIZE + 1, "image/png");
            assert_eq!(
                op.select(png),
                UploadStatus::Error {
                    message: SIZE_LIMIT_MESSAGE.to_string()
                }
            );
            assert!(!op.is_running());
        }
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_exact_limit_accepted() {
        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::small(), s.handle());
        assert_eq!(op.select(pdf(MAX_UPLOAD_SIZE)), UploadStatus::Uploading { progress: 0 });
    }

    #[test]
    fn test_image_rejects_wrong_type() {
        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::image(), s.handle());
        let status = op.select(pdf(1024));
        assert_eq!(status.error_message(), Some(IMAGE_TYPE_MESSAGE));

        let ok = op.select(FileInfo::new("logo.svg", 1024, "image/svg+xml"));
        assert_eq!(ok, UploadStatus::Uploading { progress: 0 });
    }

    #[test]
    fn test_progress_steps_and_single_success() {
        let s = scheduler();
        let steps = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));
        let (st, c) = (Rc::clone(&steps), Rc::clone(&completions));
        let op = ProgressOperation::new(UploadRules::small(), s.handle())
            .on_progress(move |p| st.borrow_mut().push(p))
            .on_complete(move |_| c.set(c.get() + 1));

        op.select(pdf(2048));
        s.advance(Duration::from_millis(499));
        assert_eq!(op.progress(), 0);

        for _ in 0..4 {
            s.advance(Duration::from_millis(500));
        }
        assert_eq!(op.status(), UploadStatus::Uploading { progress: 80 });

        s.advance(Duration::from_millis(500));
        assert_eq!(op.status(), UploadStatus::Success);
        s.advance(Duration::from_secs(10));

        assert_eq!(*steps.borrow(), vec![20, 40, 60, 80, 100]);
        assert_eq!(completions.get(), 1);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_clamped_at_100() {
        let s = scheduler();
        let mut rules = UploadRules::multi();
        rules.step = 30;
        let op = ProgressOperation::new(rules, s.handle());
        op.select(pdf(10));
        s.advance(Duration::from_millis(300));
        assert_eq!(op.progress(), 90);
        s.advance(Duration::from_millis(100));
        assert_eq!(op.status(), UploadStatus::Success);
        assert_eq!(op.progress(), 100);
    }

    #[test]
    fn test_reselect_restarts() {
        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::multi(), s.handle());
        op.select(pdf(10));
        s.advance(Duration::from_millis(300));
        assert_eq!(op.progress(), 15);

        op.select(FileInfo::new("other.pdf", 10, "application/pdf"));
        assert_eq!(op.progress(), 0);
        assert_eq!(s.pending_count(), 1);
        assert_eq!(op.file().map(|f| f.name), Some("other.pdf".to_string()));
    }

    #[test]
    fn test_retry_and_clear_cancel() {
        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::small(), s.handle());
        op.select(pdf(MAX_UPLOAD_SIZE * 2));
        op.retry();
        assert_eq!(op.status(), UploadStatus::Default);
        assert!(op.file().is_none());

        op.select(pdf(1));
        assert_eq!(s.pending_count(), 1);
        op.clear();
        assert_eq!(s.pending_count(), 0);
        assert_eq!(op.status(), UploadStatus::Default);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let s = scheduler();
        let op = ProgressOperation::new(UploadRules::small(), s.handle());
        op.select(pdf(1));
        let clone = op.clone();
        drop(op);
        assert_eq!(s.pending_count(), 1);
        drop(clone);
        assert_eq!(s.pending_count(), 0);
    }

    #[test]
    fn test_on_accept_only_for_valid_files() {
        let s = scheduler();
        let accepted = Rc::new(Cell::new(0));
        let a = Rc::clone(&accepted);
        let op = ProgressOperation::new(UploadRules::image(), s.handle())
            .on_accept(move |_| a.set(a.get() + 1));
        op.select(pdf(1));
        op.select(FileInfo::new("a.gif", 1, "image/gif"));
        assert_eq!(accepted.get(), 1);
    }
}
