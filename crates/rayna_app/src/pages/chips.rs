//! `/chips`

use rayna_cn::prelude::*;
use rayna_core::{div, ElementBuilder, Node, State};

use super::{demo_page, example, row, section, PageContext};
use crate::error::Result;

/// Tags that can be removed one by one; focused input chips carry the remove button
fn tags_input(tags: State<Vec<String>>) -> Node {
    let chips = tags.get().into_iter().enumerate().map(|(index, tag)| {
        let tags = tags.clone();
        cn::chip(tag.clone())
            .state(ChipState::Focused)
            .test_id(format!("tag-{index}"))
            .on_delete(move || tags.update(|list| list.retain(|t| *t != tag)))
            .build()
    });
    row(chips).into_node()
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let types = row([ChipType::Input, ChipType::Filter].map(|t| cn::chip(format!("{t:?}")).chip_type(t).build()));
    let states = row(ChipState::ALL.iter().map(|&s| cn::chip(format!("{s:?}")).state(s).build()));
    let icons = row([
        cn::chip("With Icon").leading_icon(true).build(),
        cn::chip("Filter").chip_type(ChipType::Filter).build(),
        cn::chip("With Both").chip_type(ChipType::Filter).leading_icon(true).build(),
        cn::chip("Custom Icon").leading_icon_with(Icon::Calendar).build(),
    ]);

    let all = div().class("space-y-6").children([ChipType::Input, ChipType::Filter].map(|chip_type| {
        example(
            &format!("{chip_type:?} Chips"),
            row(ChipState::ALL.iter().flat_map(|&state| {
                [false, true].map(|icon| {
                    cn::chip(format!("{state:?}"))
                        .chip_type(chip_type)
                        .state(state)
                        .leading_icon(icon)
                        .on_delete(|| {})
                        .build()
                })
            })),
        )
    }));

    let tags = State::new(
        ["Design", "Frontend", "Rust"]
            .map(String::from)
            .to_vec(),
    );
    let filters = row(["All", "Active", "Archived", "Drafts"].map(|label| {
        cn::chip(label)
            .chip_type(ChipType::Filter)
            .state(if label == "All" { ChipState::Focused } else { ChipState::Default })
            .build()
    }));

    Ok(demo_page(
        "Chip Component",
        [
            section("Chip Types", types),
            section("Chip States", states),
            section("With Icons", icons),
            section("All Variations", all),
            section(
                "Interactive Examples",
                div()
                    .class("space-y-6")
                    .child(example("Tags Input", tags_input(tags)))
                    .child(example("Filter Selection", filters)),
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;

    #[test]
    fn test_tag_removed_on_delete() {
        let tags = State::new(vec!["Design".to_string(), "Rust".to_string()]);
        let node = tags_input(tags.clone());
        assert!(node.dispatch("tag-0-remove", EventContext::click()));
        assert_eq!(tags.get(), vec!["Rust".to_string()]);
    }
}
