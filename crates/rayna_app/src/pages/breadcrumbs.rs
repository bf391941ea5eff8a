//! `/breadcrumbs`

use rayna_cn::prelude::*;
use rayna_core::{div, Node};

use super::{demo_page, example, section, PageContext};
use crate::error::Result;

fn profile_trail() -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Home", "/").icon(Icon::Home),
        BreadcrumbItem::new("Settings", "/settings").icon(Icon::Settings),
        BreadcrumbItem::new("Profile", "/settings/profile").icon(Icon::User),
    ]
}

fn favorites_trail() -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Dashboard", "/dashboard").icon(Icon::Dashboard),
        BreadcrumbItem::new("Favorites", "/dashboard/favorites").icon(Icon::BadgeCheck),
        BreadcrumbItem::new("Item List", "/dashboard/favorites/items"),
    ]
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let plain = vec![
        BreadcrumbItem::new("Home", "/"),
        BreadcrumbItem::new("Products", "/products"),
        BreadcrumbItem::new("Details", "/products/details"),
    ];
    let long = vec![
        BreadcrumbItem::new("Home", "/").icon(Icon::Home),
        BreadcrumbItem::new("Workspace", "/workspace"),
        BreadcrumbItem::new("Projects", "/workspace/projects"),
        BreadcrumbItem::new("Design System", "/workspace/projects/design"),
        BreadcrumbItem::new("Components", "/workspace/projects/design/components"),
        BreadcrumbItem::new("Breadcrumb", "/workspace/projects/design/components/breadcrumb"),
    ];

    let variations = div()
        .class("space-y-6")
        .child(example(
            "With Icons",
            cn::breadcrumb(profile_trail()).current_path("/settings/profile"),
        ))
        .child(example(
            "Mixed Icons",
            cn::breadcrumb(favorites_trail()).current_path("/dashboard/favorites/items"),
        ))
        .child(example(
            "Without Icons",
            cn::breadcrumb(plain).current_path("/products/details"),
        ))
        .child(example(
            "Long Path",
            cn::breadcrumb(long).current_path("/workspace/projects/design/components/breadcrumb"),
        ));

    Ok(demo_page("Breadcrumb Component", [section("Breadcrumb Variations", variations)]))
}
