//! `/dropdowns`

use rayna_cn::prelude::*;
use rayna_core::{div, el, p, Element, ElementBuilder, Node};

use super::{demo_page, PageContext};
use crate::error::Result;

const AVATAR_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

fn item(id: &'static str, label: &str, icon: Icon, shortcut: &str) -> DropdownItem {
    DropdownItem::new(id, label)
        .icon(icon)
        .shortcut(shortcut)
        .on_click(move || tracing::info!(item = id, "menu item selected"))
}

/// Navigation, settings and account groups shared by every demo menu
fn common_sections() -> Vec<DropdownSection> {
    vec![
        DropdownSection::new(vec![
            item("home", "Home", Icon::Home, "⌘H"),
            item("search", "Search", Icon::Search, "⌘S"),
            item("notifications", "Notifications", Icon::Bell, "⌘N"),
        ]),
        DropdownSection::new(vec![
            item("account", "Account Settings", Icon::Settings, "⌘A"),
            item("admin", "Admin Settings", Icon::User, "⌘M").disabled(true),
        ]),
        DropdownSection::new(vec![
            item("signout", "Sign out", Icon::Logout, "⌘L"),
            item("delete", "Delete account", Icon::Trash, "⌘D"),
        ]),
    ]
}

fn group(title: &str, blurb: &str, menus: [Dropdown; 2]) -> Element {
    div()
        .class("space-y-4")
        .child(el("h2").class("text-lg font-semibold").text(title))
        .child(p().class("text-gray-600 mb-4").text(blurb))
        .child(div().class("flex items-center gap-4").children(menus))
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let menu = || cn::dropdown(common_sections());

    let groups = [
        group(
            "Default Dropdown",
            "A dropdown with a label and icon. Supports hover, active, and disabled states.",
            [
                menu().label("Menu").icon(Icon::Menu).test_id("dropdown-default"),
                menu()
                    .label("Disabled")
                    .icon(Icon::Menu)
                    .disabled(true)
                    .test_id("dropdown-default-disabled"),
            ],
        ),
        group(
            "Avatar Dropdown",
            "A dropdown triggered by an avatar image. Perfect for user menus.",
            [
                menu().trigger(TriggerType::Avatar).avatar(AVATAR_URL).test_id("dropdown-avatar"),
                menu()
                    .trigger(TriggerType::Avatar)
                    .avatar(AVATAR_URL)
                    .disabled(true)
                    .test_id("dropdown-avatar-disabled"),
            ],
        ),
        group(
            "Icon-only Dropdown",
            "A minimal dropdown triggered by a single icon.",
            [
                menu().trigger(TriggerType::IconOnly).icon(Icon::Menu).test_id("dropdown-icon"),
                menu()
                    .trigger(TriggerType::IconOnly)
                    .icon(Icon::Menu)
                    .disabled(true)
                    .test_id("dropdown-icon-disabled"),
            ],
        ),
        group(
            "Custom Positioning",
            "Dropdowns can be positioned relative to their trigger button.",
            [
                menu()
                    .label("Left-aligned")
                    .icon(Icon::Menu)
                    .menu_class("left-0")
                    .test_id("dropdown-left"),
                menu()
                    .label("Center-aligned")
                    .icon(Icon::Menu)
                    .menu_class("-translate-x-1/2 left-1/2")
                    .test_id("dropdown-center"),
            ],
        ),
    ];

    Ok(demo_page("Dropdown Demo", groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_sections() {
        let sections = common_sections();
        assert_eq!(sections.len(), 3);
        assert!(sections[1].items[1].disabled);
        assert_eq!(sections[2].items[0].shortcut.as_deref(), Some("⌘L"));
    }
}
