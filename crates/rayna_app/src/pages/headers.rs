//! `/headers`
//!
//! One section per distinct layout; the remaining variants draw variant one.

use rayna_cn::prelude::*;
use rayna_core::{div, Node};

use super::{caption, demo_page, section, PageContext};
use crate::error::Result;

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let distinct = HeaderVariant::ALL.iter().filter(|v| v.layout() == **v);
    let mut sections: Vec<_> = distinct
        .map(|&variant| {
            section(
                &format!("Header Variant {}", title_case(variant.name())),
                div()
                    .class("rounded-lg border border-gray-200 bg-white shadow-sm")
                    .child(cn::header().variant(variant)),
            )
        })
        .collect();

    let fallbacks: Vec<_> = HeaderVariant::ALL
        .iter()
        .filter(|v| v.layout() != **v)
        .map(|v| v.name())
        .collect();
    sections.push(section(
        "Other Variants",
        caption(&format!("Variants {} render the variant one layout.", fallbacks.join(", "))),
    ));

    Ok(demo_page("Header Component", sections))
}

#[cfg(test)]
mod tests {
    use super::super::render_for_test;
    use super::*;

    #[test]
    fn test_distinct_layouts_shown() {
        let node = render_for_test(page);
        assert_eq!(node.find_all(&|e| e.tag() == "header").len(), 4);
        assert!(node.find_by_test_id("header-new-dot").is_some());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nine"), "Nine");
        assert_eq!(title_case(""), "");
    }
}
