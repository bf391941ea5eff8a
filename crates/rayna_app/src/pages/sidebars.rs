//! `/sidebars`

use rayna_cn::components::sidebar::{BOTTOM_NAV, LOGOUT_PATH, TOP_NAV};
use rayna_cn::prelude::*;
use rayna_core::{div, el, p, ElementBuilder, Node, State};

use super::PageContext;
use crate::error::Result;

fn item_name(path: &str) -> &'static str {
    TOP_NAV
        .iter()
        .chain(BOTTOM_NAV.iter())
        .find(|item| item.href == path)
        .map_or("Sign out", |item| item.name)
}

fn demo(current: &State<String>) -> Node {
    let path = current.get();
    let sink = current.clone();
    let nav = cn::sidebar().current_path(path.clone()).on_navigate(move |to| {
        tracing::debug!(to, "sidebar navigation");
        sink.set(to.to_string());
    });

    let status = div()
        .class("p-6 rounded-lg bg-white shadow-sm")
        .child(el("h2").class("text-lg font-medium mb-4 text-gray-900").text("Current State"))
        .child(
            div()
                .class("space-y-2 text-gray-600")
                .child(p().test_id("sidebar-demo-active").text(format!("• Active item: {}", item_name(&path))))
                .child(p().text(format!("• Path: {path}")))
                .child(p().text(format!(
                    "• Selecting the logout button navigates to {LOGOUT_PATH}"
                ))),
        );

    div()
        .class("flex w-full h-full")
        .child(nav)
        .child(
            el("main").class("flex-1 p-8 bg-gray-50").child(
                div()
                    .class("max-w-4xl mx-auto")
                    .child(el("h1").class("text-2xl font-semibold text-gray-900 mb-8").text("Sidebar Demo"))
                    .child(status),
            ),
        )
        .into_node()
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    Ok(demo(&State::new("/dashboard".to_string())))
}

#[cfg(test)]
mod tests {
    use rayna_core::EventContext;

    use super::*;

    #[test]
    fn test_navigation_updates_state() {
        let current = State::new("/dashboard".to_string());
        let node = demo(&current);
        assert!(node.dispatch("sidebar-help", EventContext::click()));
        assert_eq!(current.get(), "/help");

        let node = demo(&current);
        let active = node.find_by_test_id("sidebar-demo-active").map(|e| e.text_content());
        assert_eq!(active.as_deref(), Some("• Active item: Help Center"));

        node.dispatch("sidebar-logout", EventContext::click());
        assert_eq!(current.get(), LOGOUT_PATH);
        assert_eq!(item_name(LOGOUT_PATH), "Sign out");
    }
}
