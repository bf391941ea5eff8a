//! Demo pages, one per route
//!
//! Every page is a plain function from [`PageContext`] to a node tree. Pages
//! that need timers take the scheduler handle from the context; the toast
//! page resolves its provider through `use_toast`.

use chrono::NaiveDate;
use rayna_core::{div, el, p, Context, Element, ElementBuilder, Node, SchedulerHandle};

use crate::app::AppSettings;

pub mod avatars;
pub mod badges;
pub mod breadcrumbs;
pub mod buttons;
pub mod chips;
pub mod consult;
pub mod date_picker;
pub mod dropdowns;
pub mod headers;
pub mod inputs;
pub mod sidebars;
pub mod spinners;
pub mod tables;
pub mod tabs;
pub mod toasts;
pub mod uploads;

/// What a page may reach while rendering
pub struct PageContext<'a> {
    pub context: &'a Context,
    pub scheduler: SchedulerHandle,
    pub settings: &'a AppSettings,
    pub today: NaiveDate,
}

/// Standard demo layout: a title over stacked sections
pub(crate) fn demo_page(title: &str, sections: impl IntoIterator<Item = Element>) -> Node {
    div()
        .class("flex-1 overflow-y-auto")
        .child(
            div()
                .class("max-w-7xl mx-auto p-8")
                .child(el("h1").class("text-3xl font-inter text-gray-800 mb-8").text(title))
                .child(div().class("space-y-12").children(sections)),
        )
        .into_node()
}

pub(crate) fn section(title: &str, content: impl ElementBuilder) -> Element {
    el("section")
        .child(el("h2").class("text-2xl font-semibold text-gray-900 mb-6").text(title))
        .child(content)
}

/// A labelled example inside a section
pub(crate) fn example(label: &str, content: impl ElementBuilder) -> Element {
    div()
        .child(el("h3").class("text-sm font-medium text-gray-600 mb-2").text(label))
        .child(div().class("bg-white p-6 rounded-lg shadow-sm").child(content))
}

pub(crate) fn row(items: impl IntoIterator<Item = Node>) -> Element {
    div().class("flex flex-wrap items-center gap-4").children(items)
}

pub(crate) fn caption(text: &str) -> Element {
    p().class("text-sm text-gray-500").text(text)
}

/// Render `page` against a throwaway context with the toast provider installed
#[cfg(test)]
pub(crate) fn render_for_test(page: fn(&PageContext<'_>) -> crate::error::Result<Node>) -> Node {
    use rayna_core::{ManualClock, Scheduler};

    let scheduler = Scheduler::with_clock(ManualClock::new());
    let mut context = Context::new();
    let _toasts = rayna_cn::ToastProvider::install(&mut context, scheduler.handle());
    let settings = AppSettings::default();
    let cx = PageContext {
        context: &context,
        scheduler: scheduler.handle(),
        settings: &settings,
        today: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
    };
    page(&cx).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_page_layout() {
        let node = demo_page("Chips", [section("Input", caption("hello"))]);
        let title = node.find(&|e| e.tag() == "h1").map(|e| e.text_content());
        assert_eq!(title.as_deref(), Some("Chips"));
        assert_eq!(node.find_all(&|e| e.tag() == "section").len(), 1);
    }
}
