//! `/tabs`

use rayna_cn::prelude::*;
use rayna_core::{div, p, ElementBuilder, Node};

use super::{demo_page, example, section, PageContext};
use crate::error::Result;

fn panel(body: &str) -> Node {
    div().class("p-4").child(p().class("text-gray-600").text(body)).into_node()
}

fn tab_data() -> Vec<TabItem> {
    vec![
        TabItem::new("Home", panel("Welcome to the home tab! This is where your journey begins."))
            .icon(Icon::Home)
            .badge(3),
        TabItem::new("Profile", panel("View and edit your profile information here.")).icon(Icon::User),
        TabItem::new("Settings", panel("Customize your application settings and preferences."))
            .icon(Icon::Settings)
            .badge("New"),
    ]
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let styles = div()
        .class("space-y-8")
        .child(example(
            "Line Tabs",
            cn::tabs(tab_data())
                .tab_style(TabStyle::Line)
                .test_id("tabs-line")
                .on_change(|index| tracing::debug!(index, "line tab changed")),
        ))
        .child(example(
            "Pill Tabs",
            cn::tabs(tab_data())
                .tab_style(TabStyle::Pill)
                .test_id("tabs-pill")
                .on_change(|index| tracing::debug!(index, "pill tab changed")),
        ));

    Ok(demo_page("Tabs Component", [section("Tab Styles", styles)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_data_badges() {
        let items = tab_data();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].badge.as_deref(), Some("3"));
        assert_eq!(items[1].badge, None);
        assert_eq!(items[2].badge.as_deref(), Some("New"));
    }
}
