//! `/toasts`

use rayna_cn::prelude::*;
use rayna_core::{div, el, p, ElementBuilder, Node};

use super::{demo_page, example, section, PageContext};
use crate::error::Result;

struct Sample {
    toast_type: ToastType,
    title: &'static str,
    message: &'static str,
    button: &'static str,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        toast_type: ToastType::Information,
        title: "Information Toast",
        message: "This is an information message for the user.",
        button: "bg-[#0D5EBA] hover:bg-[#0A4A94]",
    },
    Sample {
        toast_type: ToastType::Success,
        title: "Success Toast",
        message: "Your action was completed successfully!",
        button: "bg-[#04802E] hover:bg-[#036D27]",
    },
    Sample {
        toast_type: ToastType::Warning,
        title: "Warning Toast",
        message: "Please review your input before proceeding.",
        button: "bg-[#DD900D] hover:bg-[#C27B0B]",
    },
    Sample {
        toast_type: ToastType::Error,
        title: "Error Toast",
        message: "An error occurred while processing your request.",
        button: "bg-[#CB1A14] hover:bg-[#B01510]",
    },
];

pub fn page(cx: &PageContext<'_>) -> Result<Node> {
    let toasts = use_toast(cx.context)?;
    let duration = cx.settings.toast_duration_ms;

    let buttons = div().class("flex flex-wrap gap-4").children(SAMPLES.iter().map(|sample| {
        let handle = toasts.clone();
        let options = ToastOptions::new(sample.title)
            .toast_type(sample.toast_type)
            .message(sample.message)
            .duration_ms(duration);
        el("button")
            .class("px-4 py-2 text-white rounded-lg transition-colors")
            .class(sample.button)
            .test_id(format!("toast-show-{}", sample.toast_type.name()))
            .text(format!("Show {}", sample.title))
            .on_click(move |_| {
                let id = handle.show_toast(options.clone());
                tracing::debug!(%id, "demo toast shown");
            })
    }));

    let interactive = div()
        .class("space-y-4")
        .child(p().class("text-sm text-gray-500").text(
            "Click the buttons below to see different types of toasts in action.",
        ))
        .child(buttons);

    let statics = div().class("grid grid-cols-1 gap-6").children(SAMPLES.iter().map(|sample| {
        example(
            sample.title,
            div().class("w-fit").child(
                cn::toast(sample.title)
                    .toast_type(sample.toast_type)
                    .message(Some(sample.message.to_string()))
                    .close_test_id(format!("toast-static-{}-close", sample.toast_type.name()))
                    .on_close(|| {}),
            ),
        )
    }));

    Ok(demo_page(
        "Toast Component",
        [
            section("Interactive Example", interactive),
            section("Static Examples", statics),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rayna_core::{Context, EventContext, ManualClock, Scheduler};

    use super::*;
    use crate::app::AppSettings;

    #[test]
    fn test_show_buttons_queue_toasts() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let mut context = Context::new();
        let provider = ToastProvider::install(&mut context, scheduler.handle());
        let settings = AppSettings {
            toast_duration_ms: 1000,
            ..AppSettings::default()
        };
        let cx = PageContext {
            context: &context,
            scheduler: scheduler.handle(),
            settings: &settings,
            today: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };

        let node = page(&cx).unwrap();
        assert!(node.dispatch("toast-show-success", EventContext::click()));
        assert!(node.dispatch("toast-show-error", EventContext::click()));
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.toasts()[0].options.toast_type, ToastType::Success);

        scheduler.advance(Duration::from_millis(1000) + rayna_cn::components::toast_provider::EXIT_DELAY);
        assert!(provider.is_empty());
    }

    #[test]
    fn test_page_requires_provider() {
        let scheduler = Scheduler::new();
        let context = Context::new();
        let settings = AppSettings::default();
        let cx = PageContext {
            context: &context,
            scheduler: scheduler.handle(),
            settings: &settings,
            today: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert!(page(&cx).is_err());
    }
}
