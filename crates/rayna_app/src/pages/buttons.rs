//! `/` - button variants, sizes, states and icon placements

use rayna_cn::prelude::*;
use rayna_core::{div, el, ElementBuilder, Node};

use super::{demo_page, section, PageContext};
use crate::error::Result;

const ICON_STYLES: [IconStyle; 4] = [IconStyle::None, IconStyle::Leading, IconStyle::Trailing, IconStyle::IconOnly];
const STATES: [ButtonState; 4] = [ButtonState::Default, ButtonState::Hover, ButtonState::Focused, ButtonState::Disabled];
const SHOWCASE: [ButtonVariant; 4] = [
    ButtonVariant::Primary,
    ButtonVariant::Secondary,
    ButtonVariant::DestructiveSolid,
    ButtonVariant::TextPrimary,
];

fn card(title: String, buttons: impl IntoIterator<Item = ButtonBuilder>) -> rayna_core::Element {
    div()
        .class("flex flex-col gap-4 p-4 border border-gray-200 rounded-md")
        .child(el("h3").class("text-lg font-inter font-semibold text-gray-700").text(title))
        .child(
            div()
                .class("flex flex-wrap gap-4 items-center")
                .children(buttons.into_iter().map(|b| b.build())),
        )
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let variants = ButtonVariant::ALL.iter().map(|&variant| {
        card(
            variant.name().to_string(),
            ICON_STYLES.iter().map(move |&style| {
                let label = if style == IconStyle::IconOnly { "" } else { variant.name() };
                cn::button(label).variant(variant).icon_style(style)
            }),
        )
    });

    let sizes = [ButtonSize::Sm, ButtonSize::Lg].into_iter().map(|size| {
        card(
            format!("Size: {size:?}"),
            SHOWCASE
                .iter()
                .map(move |&variant| cn::button(format!("Size {size:?}")).size(size).variant(variant)),
        )
    });

    let states = STATES.into_iter().map(|state| {
        card(
            format!("State: {state:?}"),
            SHOWCASE
                .iter()
                .map(move |&variant| cn::button(format!("{state:?}")).state(state).variant(variant)),
        )
    });

    let icons = ICON_STYLES.into_iter().map(|style| {
        card(
            format!("Icon Style: {style:?}"),
            [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::DestructiveOutlined]
                .into_iter()
                .map(move |variant| cn::button(format!("{style:?}")).icon_style(style).variant(variant)),
        )
    });

    Ok(demo_page(
        "Button Component Demo",
        [
            section(
                "All Button Variants",
                div().class("grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6").children(variants),
            ),
            section("Button Sizes", div().class("grid grid-cols-1 sm:grid-cols-2 gap-6").children(sizes)),
            section("Button States", div().class("grid grid-cols-1 md:grid-cols-2 gap-6").children(states)),
            section("Icon Styles", div().class("grid grid-cols-1 md:grid-cols-2 gap-6").children(icons)),
        ],
    ))
}
