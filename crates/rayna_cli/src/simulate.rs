//! `rayna simulate` - drive components on the wall clock
//!
//! A current-thread tokio runtime ticks the scheduler until the simulated
//! component settles or the time budget runs out.

use std::cell::Cell;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use rayna_app::AppSettings;
use rayna_cn::components::toast_provider::EXIT_DELAY;
use rayna_cn::upload::ItemStatus;
use rayna_cn::{
    use_toast, MultiFileUpload, ProgressOperation, ToastOptions, ToastProvider, ToastType, UploadRules,
    UploadStatus,
};
use rayna_core::{Context, FileInfo, Scheduler};
use tracing::{info, warn};

const TICK: Duration = Duration::from_millis(10);
const SLACK: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Widget {
    /// Single document upload
    Small,
    /// Image drop zone
    Big,
    /// Multi-file list
    Multi,
}

impl Widget {
    pub fn rules(self, settings: &AppSettings) -> UploadRules {
        let rules = match self {
            Widget::Small => UploadRules::small(),
            Widget::Big => UploadRules::image(),
            Widget::Multi => UploadRules::multi(),
        };
        rules.max_size(settings.max_upload_size)
    }
}

/// Tick `scheduler` every [`TICK`] until `done` or `limit` elapses
///
/// Returns whether `done` was reached.
fn drive(scheduler: &Scheduler, limit: Duration, mut done: impl FnMut() -> bool) -> Result<bool> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start the tokio runtime")?;

    Ok(runtime.block_on(async {
        let deadline = tokio::time::Instant::now() + limit;
        let mut ticker = tokio::time::interval(TICK);
        loop {
            ticker.tick().await;
            scheduler.tick();
            if done() {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
        }
    }))
}

fn budget(rules: &UploadRules) -> Duration {
    let steps = u32::from(100u8.div_ceil(rules.step.max(1)));
    rules.interval * steps + SLACK
}

/// Upload `file` through `widget` and report where it ended up
pub fn upload(widget: Widget, file: FileInfo, settings: &AppSettings) -> Result<UploadStatus> {
    let scheduler = Scheduler::new();
    let rules = widget.rules(settings);
    let limit = budget(&rules);
    info!(?widget, file = %file.name, size = file.size, mime = %file.mime, "simulating upload");

    let status = match widget {
        Widget::Small | Widget::Big => {
            let operation = ProgressOperation::new(rules, scheduler.handle())
                .on_progress(|progress| info!(progress, "upload progress"))
                .on_complete(|file| info!(file = %file.name, "upload complete"));
            if let UploadStatus::Error { message } = operation.select(file) {
                warn!(%message, "upload rejected");
                return Ok(operation.status());
            }
            if !drive(&scheduler, limit, || !operation.is_running())? {
                warn!(?limit, "upload did not finish in time");
            }
            operation.status()
        }
        Widget::Multi => {
            let list = MultiFileUpload::new(scheduler.handle())
                .max_file_size(settings.max_upload_size)
                .on_files_change(|files| info!(count = files.len(), "files accepted"));
            list.add_files(vec![file]);

            let last = Cell::new(None);
            let settled = drive(&scheduler, limit, || {
                let items = list.items();
                let Some(item) = items.first() else {
                    return true;
                };
                if last.replace(Some(item.progress)) != Some(item.progress) {
                    info!(progress = item.progress, "upload progress");
                }
                item.status != ItemStatus::Uploading
            })?;
            if !settled {
                warn!(?limit, "upload did not finish in time");
            }

            match list.items().first() {
                Some(item) => match item.status {
                    ItemStatus::Complete => UploadStatus::Success,
                    ItemStatus::Error => UploadStatus::Error {
                        message: item.error.clone().unwrap_or_default(),
                    },
                    ItemStatus::Uploading => UploadStatus::Uploading {
                        progress: item.progress,
                    },
                },
                None => UploadStatus::Default,
            }
        }
    };

    info!(%status, "upload finished");
    Ok(status)
}

/// Show one toast and follow it until it is removed
///
/// Returns the time the toast spent in the queue.
pub fn toast(duration_ms: u64) -> Result<Duration> {
    let scheduler = Scheduler::new();
    let mut context = Context::new();
    let provider = ToastProvider::install(&mut context, scheduler.handle());
    let toasts = use_toast(&context)?;

    let started = scheduler.now();
    let id = toasts.show_toast(
        ToastOptions::new("Simulated toast")
            .toast_type(ToastType::Information)
            .message("Shown from the command line")
            .duration_ms(duration_ms),
    );
    info!(%id, duration_ms, "toast shown");

    if duration_ms == 0 {
        warn!("duration 0 never auto-dismisses; dismissing now");
        toasts.dismiss(id);
    }

    let exiting = Cell::new(false);
    let limit = Duration::from_millis(duration_ms) + EXIT_DELAY + SLACK;
    let removed = drive(&scheduler, limit, || {
        let entries = provider.toasts();
        if !exiting.get() && entries.iter().any(|e| e.exiting) {
            exiting.set(true);
            info!(%id, "toast exiting");
        }
        entries.is_empty()
    })?;

    let lifetime = scheduler.now().saturating_sub(started);
    if removed {
        info!(%id, lifetime_ms = lifetime.as_millis() as u64, "toast removed");
    } else {
        warn!(%id, "toast still queued after {limit:?}");
    }
    Ok(lifetime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_rules_use_configured_limit() {
        let settings = AppSettings {
            max_upload_size: 42,
            ..AppSettings::default()
        };
        for widget in [Widget::Small, Widget::Big, Widget::Multi] {
            assert_eq!(widget.rules(&settings).max_size, 42);
        }
        assert!(Widget::Big.rules(&settings).allowed_types.is_some());
    }

    #[test]
    fn test_budget_covers_every_step() {
        let rules = UploadRules::small();
        assert_eq!(budget(&rules), Duration::from_millis(2500) + SLACK);
    }

    #[test]
    fn test_rejected_upload_returns_immediately() {
        let file = FileInfo::new("huge.pdf", u64::MAX, "application/pdf");
        let status = upload(Widget::Small, file, &AppSettings::default()).unwrap();
        assert!(matches!(status, UploadStatus::Error { .. }));
    }

    #[test]
    fn test_wrong_type_rejected_by_big() {
        let file = FileInfo::new("notes.txt", 10, "text/plain");
        let status = upload(Widget::Big, file, &AppSettings::default()).unwrap();
        assert!(matches!(status, UploadStatus::Error { .. }));
    }

    #[test]
    fn test_toast_lifecycle_completes() {
        let lifetime = toast(50).unwrap();
        assert!(lifetime >= Duration::from_millis(50) + EXIT_DELAY);
    }
}
