//! `/small-file-upload`, `/big-file-upload` and `/multi-file-upload`
//!
//! The interactive widgets run a real [`ProgressOperation`] on the app's
//! scheduler; the "All States" grids freeze one operation per status.

use rayna_cn::prelude::*;
use rayna_cn::upload::{format_file_size, size_limit_message};
use rayna_core::{div, p, Element, ElementBuilder, FileInfo, Node};

use super::{demo_page, example, section, PageContext};
use crate::error::Result;

const MIB: u64 = 1024 * 1024;

fn interactive(note: String, widget: impl ElementBuilder) -> Element {
    div()
        .class("space-y-4")
        .child(p().class("text-sm text-gray-500").text(note))
        .child(div().class("bg-white p-6 rounded-lg shadow-sm").child(widget))
}

fn limit_note(cx: &PageContext<'_>, what: &str) -> String {
    format!(
        "{what} Files larger than {} will trigger an error state.",
        format_file_size(cx.settings.max_upload_size)
    )
}

pub fn small_page(cx: &PageContext<'_>) -> Result<Node> {
    let operation = ProgressOperation::new(
        UploadRules::small().max_size(cx.settings.max_upload_size),
        cx.scheduler.clone(),
    )
    .on_complete(|file| tracing::info!(file = %file.name, "document uploaded"));

    let live = FileUpload::new(operation)
        .test_id("file-upload")
        .on_change(|file| tracing::debug!(file = %file.name, size = file.size, "document chosen"))
        .on_download(|| tracing::info!("downloading file"));

    let document = FileInfo::new("document.pdf", 5 * MIB / 2, "application/pdf");
    let states = div().class("grid grid-cols-1 gap-6").children([
        example("Default", FileUpload::preview(UploadStatus::Default, None)),
        example(
            "Progress",
            FileUpload::preview(UploadStatus::Uploading { progress: 65 }, Some(document.clone())),
        ),
        example(
            "Complete",
            FileUpload::preview(UploadStatus::Success, Some(document))
                .test_id("file-upload-complete")
                .on_download(|| tracing::debug!("download clicked"))
                .on_delete(|| tracing::debug!("delete clicked")),
        ),
        example(
            "Error",
            FileUpload::preview(
                UploadStatus::Error {
                    message: size_limit_message(cx.settings.max_upload_size),
                },
                Some(FileInfo::new("large-document.pdf", 13 * MIB, "application/pdf")),
            ),
        ),
    ]);

    Ok(demo_page(
        "Small File Upload Component",
        [
            section(
                "Interactive Example",
                interactive(limit_note(cx, "Try uploading a PDF file."), live),
            ),
            section("All States", states),
        ],
    ))
}

fn frozen_image(status: UploadStatus, name: &str) -> BigFileUpload {
    let file = (status != UploadStatus::Default).then(|| FileInfo::new(name, 2 * MIB, "image/png"));
    BigFileUpload::new(ProgressOperation::fixed(UploadRules::image(), status, file))
}

pub fn big_page(cx: &PageContext<'_>) -> Result<Node> {
    let operation = ProgressOperation::new(
        UploadRules::image().max_size(cx.settings.max_upload_size),
        cx.scheduler.clone(),
    )
    .on_complete(|file| tracing::info!(file = %file.name, "image uploaded"));

    let live = BigFileUpload::new(operation)
        .max_dimensions(800, 400)
        .test_id("big-upload")
        .on_change(|file| tracing::debug!(file = %file.name, mime = %file.mime, "image chosen"));

    let states = div().class("grid grid-cols-1 gap-6").children([
        example("Default", frozen_image(UploadStatus::Default, "")),
        example(
            "Uploading",
            frozen_image(UploadStatus::Uploading { progress: 65 }, "image.png"),
        ),
        example(
            "Success",
            frozen_image(UploadStatus::Success, "image.png")
                .test_id("big-upload-success")
                .on_delete(|| tracing::debug!("delete clicked")),
        ),
        example(
            "Error",
            frozen_image(
                UploadStatus::Error {
                    message: size_limit_message(cx.settings.max_upload_size),
                },
                "large-image.png",
            ),
        ),
    ]);

    Ok(demo_page(
        "Big File Upload Component",
        [
            section(
                "Interactive Example",
                interactive(
                    limit_note(cx, "Try uploading an image file (SVG, PNG, JPG, GIF)."),
                    live,
                ),
            ),
            section("All States", states),
        ],
    ))
}

pub fn multi_page(cx: &PageContext<'_>) -> Result<Node> {
    let widget = MultiFileUpload::new(cx.scheduler.clone())
        .max_file_size(cx.settings.max_upload_size)
        .test_id("multi-upload")
        .on_files_change(|files| tracing::info!(count = files.len(), "files changed"))
        .on_file_delete(|id| tracing::info!(id, "file deleted"))
        .on_file_download(|id| tracing::info!(id, "file download"));

    let body = div()
        .class("space-y-4")
        .child(p().class("text-sm text-gray-500").text(limit_note(cx, "Try uploading multiple files.")))
        .child(widget);

    Ok(demo_page(
        "Multi-File Upload Component",
        [section("Interactive Example", body)],
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rayna_core::{Context, EventContext, EventKind, ManualClock, Scheduler};

    use super::*;
    use crate::app::AppSettings;

    fn with_cx<R>(settings: AppSettings, f: impl FnOnce(&Scheduler, &PageContext<'_>) -> R) -> R {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let context = Context::new();
        let cx = PageContext {
            context: &context,
            scheduler: scheduler.handle(),
            settings: &settings,
            today: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        f(&scheduler, &cx)
    }

    fn status_of(node: &Node, test_id: &str) -> Option<String> {
        node.find_by_test_id(test_id)
            .and_then(|e| e.get_attr("data-status").map(str::to_string))
    }

    #[test]
    fn test_small_page_uploads_pdf() {
        with_cx(AppSettings::default(), |scheduler, cx| {
            let node = small_page(cx).unwrap();
            let pdf = FileInfo::new("report.pdf", 1024, "application/pdf");
            assert!(node.dispatch("file-upload-input", EventContext::files(EventKind::Change, vec![pdf])));
            assert!(scheduler.pending_count() > 0);
            scheduler.run_until_idle(Duration::from_secs(60));
            assert_eq!(scheduler.pending_count(), 0);
        });
    }

    #[test]
    fn test_big_page_honours_configured_limit() {
        let settings = AppSettings {
            max_upload_size: 1024,
            ..AppSettings::default()
        };
        with_cx(settings, |scheduler, cx| {
            let node = big_page(cx).unwrap();
            let png = FileInfo::new("photo.png", 4096, "image/png");
            node.dispatch("big-upload-input", EventContext::files(EventKind::Change, vec![png]));
            assert_eq!(scheduler.pending_count(), 0);
        });
    }

    #[test]
    fn test_frozen_states_render() {
        let node = frozen_image(UploadStatus::Success, "image.png").test_id("frozen").build();
        assert_eq!(status_of(&node, "frozen").as_deref(), Some("success"));
        let text = node.as_element().map(|e| e.text_content()).unwrap_or_default();
        assert!(text.contains("image.png"));
    }

    #[test]
    fn test_error_preview_quotes_configured_limit() {
        let settings = AppSettings {
            max_upload_size: 10 * MIB,
            ..AppSettings::default()
        };
        with_cx(settings, |_, cx| {
            let html = small_page(cx).unwrap().to_html();
            assert!(html.contains("File size exceeds 10MB limit"));
            assert!(!html.contains("exceeds 5MB"));
        });
    }

    #[test]
    fn test_limit_note_uses_settings() {
        with_cx(AppSettings::default(), |_, cx| {
            assert!(limit_note(cx, "Try.").contains("5.0 MB"));
        });
    }
}
