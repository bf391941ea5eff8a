//! `/badges`

use rayna_cn::prelude::*;
use rayna_core::{div, ElementBuilder, Node};

use super::{demo_page, example, row, section, PageContext};
use crate::error::Result;

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let sizes = row(BadgeSize::ALL.iter().map(|&size| cn::badge(format!("Size {size:?}")).size(size).build()));
    let types = row(BadgeType::ALL.iter().map(|&t| cn::badge(format!("{t:?}")).badge_type(t).build()));
    let colors = row(BadgeColor::ALL.iter().map(|&c| cn::badge(c.name()).color(c).build()));

    let grid = div().class("space-y-6").children(BadgeType::ALL.iter().map(|&badge_type| {
        example(
            &format!("{badge_type:?}"),
            row(BadgeColor::ALL.iter().flat_map(|&color| {
                BadgeSize::ALL.iter().map(move |&size| {
                    cn::badge(color.name())
                        .color(color)
                        .badge_type(badge_type)
                        .size(size)
                        .build()
                })
            })),
        )
    }));

    let usage = div()
        .class("grid grid-cols-1 md:grid-cols-2 gap-6")
        .child(example(
            "Order Status",
            row([
                cn::badge("Completed").color(BadgeColor::Success).build(),
                cn::badge("Failed").color(BadgeColor::Error).build(),
                cn::badge("In Transit").color(BadgeColor::Warning).build(),
            ]),
        ))
        .child(example(
            "Feature Labels",
            row([
                cn::badge("PRO").color(BadgeColor::Blue).build(),
                cn::badge("NEW").color(BadgeColor::Orange).badge_type(BadgeType::Accent).build(),
                cn::badge("BETA").color(BadgeColor::Neutral).badge_type(BadgeType::Outline).build(),
            ]),
        ));

    Ok(demo_page(
        "Badge Component",
        [
            section("Sizes", sizes),
            section("Types", types),
            section("Colors", colors),
            section("All Variations", grid),
            section("Usage Examples", usage),
        ],
    ))
}
