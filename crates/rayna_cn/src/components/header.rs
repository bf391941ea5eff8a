//! Marketing site headers
//!
//! Eleven named variants. Only `One`, `Two`, `Three` and `Nine` have their
//! own layouts; the rest render the `One` layout.

use rayna_core::{cx, div, el, span, Element, ElementBuilder, Node};

use crate::icons::Icon;

const LINK: &str = "text-sm font-semibold text-[#101928] hover:text-[#101928]/80";
const PRIMARY: &str =
    "rounded-lg bg-[#EB5017] px-4 py-2 text-sm font-semibold text-white shadow-md hover:bg-[#EB5017]/90";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
}

impl HeaderVariant {
    pub const ALL: [HeaderVariant; 11] = [
        HeaderVariant::One,
        HeaderVariant::Two,
        HeaderVariant::Three,
        HeaderVariant::Four,
        HeaderVariant::Five,
        HeaderVariant::Six,
        HeaderVariant::Seven,
        HeaderVariant::Eight,
        HeaderVariant::Nine,
        HeaderVariant::Ten,
        HeaderVariant::Eleven,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeaderVariant::One => "one",
            HeaderVariant::Two => "two",
            HeaderVariant::Three => "three",
            HeaderVariant::Four => "four",
            HeaderVariant::Five => "five",
            HeaderVariant::Six => "six",
            HeaderVariant::Seven => "seven",
            HeaderVariant::Eight => "eight",
            HeaderVariant::Nine => "nine",
            HeaderVariant::Ten => "ten",
            HeaderVariant::Eleven => "eleven",
        }
    }

    /// The layout actually drawn for this variant
    pub fn layout(&self) -> HeaderVariant {
        match self {
            HeaderVariant::Two | HeaderVariant::Three | HeaderVariant::Nine => *self,
            _ => HeaderVariant::One,
        }
    }
}

fn logo() -> Element {
    div().class("flex items-center").child(
        el("a").attr("href", "/").child(
            el("img")
                .attr("src", "/images/logo.svg")
                .attr("alt", "Logo")
                .attr("width", "129")
                .attr("height", "32"),
        ),
    )
}

fn link(label: &str) -> Element {
    el("button").class(LINK).text(label)
}

fn menu_link(label: &str, extra: &str) -> Element {
    div().class(&cx(["relative", extra])).child(
        el("button")
            .class("flex items-center gap-2")
            .class(LINK)
            .text(label)
            .child(Icon::ChevronDown.render(20.0, "h-5 w-5 text-[#667185]")),
    )
}

#[derive(Clone, Debug, Default)]
pub struct Header {
    variant: HeaderVariant,
    class: String,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: HeaderVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn one() -> Element {
        let banner = div().class("w-full bg-[#290B00] py-4").child(
            div()
                .class("flex items-center justify-center gap-2")
                .child(
                    span()
                        .class("text-sm text-white")
                        .text("Rayna UI is now features on Product Hunt!"),
                )
                .child(
                    el("button")
                        .class("text-sm font-semibold text-[#F3A218] hover:text-[#F3A218]/90")
                        .text("Support Us"),
                ),
        );
        let main = div().class("w-full px-[72px] py-6").child(
            div()
                .class("flex items-center justify-between")
                .child(logo())
                .child(
                    div()
                        .class("flex items-center gap-6")
                        .child(menu_link("Solutions", ""))
                        .child(link("How it works"))
                        .child(menu_link("About", ""))
                        .child(link("Resources")),
                )
                .child(
                    div()
                        .class("flex items-center gap-6")
                        .child(el("button").class(PRIMARY).text("Get Started")),
                ),
        );
        div().class("w-full").child(banner).child(main)
    }

    fn two() -> Element {
        div().class("w-full px-[72px] py-6").child(
            div()
                .class("flex items-center justify-between")
                .child(logo())
                .child(
                    div()
                        .class("flex items-center gap-6")
                        .children(
                            ["Use Cases", "Pricing", "Partners", "Affiliates", "Customers", "Blog"]
                                .into_iter()
                                .map(link),
                        )
                        .child(menu_link("Resources", "")),
                )
                .child(
                    div()
                        .class("flex items-center gap-6")
                        .child(
                            el("button")
                                .class("text-sm font-semibold text-[#EB5017] hover:text-[#EB5017]/90")
                                .text("Login"),
                        )
                        .child(el("button").class(PRIMARY).text("Get Started")),
                ),
        )
    }

    fn three() -> Element {
        let pill = div()
            .class("flex items-center rounded-[40px] bg-[#F7F9FC] px-10 py-4")
            .child(menu_link("Use Cases", ""))
            .child(menu_link("Resources", "ml-8"))
            .child(link("Pricing").class("ml-8"))
            .child(
                div()
                    .class("relative ml-8 flex items-center gap-2")
                    .child(link("What's New?"))
                    .child(span().test_id("header-new-dot").class("h-2 w-2 rounded-full bg-[#D42620]")),
            );
        div().class("w-full px-[112px] py-6").child(
            div()
                .class("flex items-center justify-between")
                .child(logo())
                .child(div().class("flex items-center").child(pill))
                .child(
                    el("button")
                        .class("rounded-[40px] bg-[#EB5017] px-6 py-4 text-sm font-semibold text-white hover:bg-[#EB5017]/90")
                        .text("Book a Demo"),
                ),
        )
    }

    fn nine() -> Element {
        let search = div()
            .class("relative ml-8 flex items-center")
            .child(
                div()
                    .class("pointer-events-none absolute left-3")
                    .child(Icon::Search.render(20.0, "h-5 w-5 text-[#667185]")),
            )
            .child(
                el("input")
                    .attr("type", "text")
                    .attr("placeholder", "Search for components...")
                    .class("w-[375px] rounded-lg border border-[#D0D5DD] py-2.5 pl-10 pr-4 text-sm text-[#101928] placeholder:text-[#98A2B3] focus:outline-none"),
            );
        div().class("w-full px-[72px] py-6").child(
            div()
                .class("flex items-center justify-between")
                .child(div().class("flex items-center").child(logo()).child(search))
                .child(
                    div()
                        .class("flex items-center gap-6")
                        .children(["About", "Partners", "Sign in"].into_iter().map(link))
                        .child(
                            el("button")
                                .class("rounded-2xl bg-[#EB5017] px-4 py-2 text-sm font-semibold text-white hover:bg-[#EB5017]/90")
                                .text("Post a job"),
                        ),
                ),
        )
    }
}

impl ElementBuilder for Header {
    fn build(&self) -> Node {
        let body = match self.variant.layout() {
            HeaderVariant::Two => Self::two(),
            HeaderVariant::Three => Self::three(),
            HeaderVariant::Nine => Self::nine(),
            _ => Self::one(),
        };
        el("header")
            .class(&cx(["relative bg-white", self.class.as_str()]))
            .attr("data-variant", self.variant.name())
            .child(body)
            .into_node()
    }
}

pub fn header() -> Header {
    Header::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_layouts() {
        let one = header().build().find(&|e| e.tag() == "header").map(|e| e.text_content());
        for variant in [HeaderVariant::Four, HeaderVariant::Eleven] {
            let other = header()
                .variant(variant)
                .build()
                .find(&|e| e.tag() == "header")
                .map(|e| e.text_content());
            assert_eq!(one, other);
        }
        assert_eq!(HeaderVariant::Nine.layout(), HeaderVariant::Nine);
    }

    #[test]
    fn test_variant_content() {
        let one = header().build().text_content();
        assert!(one.contains("Product Hunt"));
        assert!(one.contains("Get Started"));

        let two = header().variant(HeaderVariant::Two).build().text_content();
        assert!(two.contains("Affiliates"));
        assert!(two.contains("Login"));

        let three = header().variant(HeaderVariant::Three).build();
        assert!(three.text_content().contains("Book a Demo"));
        assert!(three.find_by_test_id("header-new-dot").is_some());

        let nine = header().variant(HeaderVariant::Nine).build();
        let search = nine.find(&|e| e.tag() == "input");
        assert_eq!(
            search.and_then(|e| e.get_attr("placeholder")),
            Some("Search for components...")
        );
        assert!(nine.text_content().contains("Post a job"));
    }
}
