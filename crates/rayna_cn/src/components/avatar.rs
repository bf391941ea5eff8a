//! Avatar component
//!
//! An image, icon or initials disc with an optional presence dot or verified
//! check. Sizes run from `xs` (24px) to `2xl` (64px).

use rayna_core::{circle, cx, div, el, path, svg, ElementBuilder, Node};

const PLACEHOLDER_SRC: &str = "https://via.placeholder.com/150";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl AvatarSize {
    pub const ALL: [AvatarSize; 6] = [
        AvatarSize::Xs,
        AvatarSize::Sm,
        AvatarSize::Md,
        AvatarSize::Lg,
        AvatarSize::Xl,
        AvatarSize::Xxl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "xs",
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
            AvatarSize::Xl => "xl",
            AvatarSize::Xxl => "2xl",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "w-6 h-6 text-xs",
            AvatarSize::Sm => "w-8 h-8 text-sm",
            AvatarSize::Md => "w-10 h-10 text-base",
            AvatarSize::Lg => "w-12 h-12 text-lg",
            AvatarSize::Xl => "w-14 h-14 text-xl",
            AvatarSize::Xxl => "w-16 h-16 text-2xl",
        }
    }

    /// Placement of the online/offline dot
    pub fn status_position(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "-bottom-0.5 -right-0.5 w-2.5 h-2.5",
            AvatarSize::Sm => "-bottom-0.5 -right-0.5 w-3 h-3",
            AvatarSize::Md => "-bottom-0.5 -right-0.5 w-3.5 h-3.5",
            AvatarSize::Lg => "-bottom-1 -right-1 w-4 h-4",
            AvatarSize::Xl => "-bottom-1 -right-1 w-4 h-4",
            AvatarSize::Xxl => "-bottom-1 -right-1 w-4.5 h-4.5",
        }
    }

    /// Placement of the verified check
    pub fn verified_position(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "-bottom-1 -right-1 w-3.5 h-3.5",
            AvatarSize::Sm => "-bottom-1 -right-1 w-4 h-4",
            AvatarSize::Md => "-bottom-1 -right-1 w-4.5 h-4.5",
            AvatarSize::Lg => "-bottom-1.5 -right-1.5 w-5 h-5",
            AvatarSize::Xl => "-bottom-1.5 -right-1.5 w-5.5 h-5.5",
            AvatarSize::Xxl => "-bottom-1.5 -right-1.5 w-6 h-6",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarStatus {
    #[default]
    None,
    Online,
    Offline,
    Verified,
}

impl AvatarStatus {
    pub const ALL: [AvatarStatus; 4] = [
        AvatarStatus::None,
        AvatarStatus::Online,
        AvatarStatus::Offline,
        AvatarStatus::Verified,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarType {
    #[default]
    Image,
    Icon,
    Initials,
}

impl AvatarType {
    pub const ALL: [AvatarType; 3] = [AvatarType::Image, AvatarType::Icon, AvatarType::Initials];

    pub fn background(&self) -> &'static str {
        match self {
            AvatarType::Image => "bg-gray-200",
            AvatarType::Icon | AvatarType::Initials => "bg-[#FFECE5]",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Avatar {
    size: AvatarSize,
    avatar_type: AvatarType,
    status: AvatarStatus,
    src: Option<String>,
    initials: Option<String>,
    alt: Option<String>,
    class: String,
    styles: Vec<(String, String)>,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn avatar_type(mut self, avatar_type: AvatarType) -> Self {
        self.avatar_type = avatar_type;
        self
    }

    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = status;
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = Some(initials.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Inline style on the outer wrapper
    pub fn style(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.styles.push((name.into(), value.to_string()));
        self
    }

    fn content(&self) -> Node {
        match self.avatar_type {
            AvatarType::Image => el("img")
                .attr("src", self.src.as_deref().unwrap_or(PLACEHOLDER_SRC))
                .attr("alt", self.alt.as_deref().unwrap_or("Avatar"))
                .class("w-full h-full object-cover")
                .into_node(),
            AvatarType::Icon => div()
                .class("w-full h-full flex items-center justify-center text-gray-700")
                .child(
                    svg(20.0, 20.0)
                        .class("w-1/2 h-1/2")
                        .attr("stroke", "currentColor")
                        .attr("stroke-width", "1.5")
                        .child(path("M16.6667 17.5V15.8333C16.6667 14.9493 16.3155 14.1014 15.6904 13.4763C15.0653 12.8512 14.2174 12.5 13.3334 12.5H6.66671C5.78265 12.5 4.93481 12.8512 4.30968 13.4763C3.68456 14.1014 3.33337 14.9493 3.33337 15.8333V17.5"))
                        .child(path("M10 9.16667C11.841 9.16667 13.3333 7.67428 13.3333 5.83333C13.3333 3.99238 11.841 2.5 10 2.5C8.15905 2.5 6.66667 3.99238 6.66667 5.83333C6.66667 7.67428 8.15905 9.16667 10 9.16667Z")),
                )
                .into_node(),
            AvatarType::Initials => div()
                .class("w-full h-full flex items-center justify-center font-semibold text-gray-900")
                .text(self.initials.as_deref().unwrap_or("UN"))
                .into_node(),
        }
    }

    fn status_indicator(&self) -> Option<Node> {
        match self.status {
            AvatarStatus::None => None,
            AvatarStatus::Verified => Some(
                div()
                    .class(&format!("absolute {}", self.size.verified_position()))
                    .test_id("avatar-verified")
                    .child(
                        svg(16.0, 16.0)
                            .attr("width", "100%")
                            .attr("height", "100%")
                            .child(
                                circle(8.0, 7.0)
                                    .attr("fill", "#1671D9")
                                    .attr("stroke", "white")
                                    .attr("stroke-width", "1"),
                            )
                            .child(
                                path("M11 6L7 10L5 8")
                                    .attr("stroke", "white")
                                    .attr("stroke-width", "1.5"),
                            ),
                    )
                    .into_node(),
            ),
            AvatarStatus::Online | AvatarStatus::Offline => {
                let fill = if self.status == AvatarStatus::Online {
                    "#04802E"
                } else {
                    "#D0D5DD"
                };
                Some(
                    div()
                        .class(&format!("absolute {}", self.size.status_position()))
                        .test_id("avatar-status")
                        .child(
                            svg(10.0, 10.0)
                                .attr("width", "100%")
                                .attr("height", "100%")
                                .child(
                                    circle(5.0, 4.0)
                                        .attr("fill", fill)
                                        .attr("stroke", "white")
                                        .attr("stroke-width", "1"),
                                ),
                        )
                        .into_node(),
                )
            }
        }
    }
}

impl ElementBuilder for Avatar {
    fn build(&self) -> Node {
        let mut outer = div().class(&cx(["relative", self.class.as_str()]));
        for (name, value) in &self.styles {
            outer = outer.style(name.clone(), value);
        }
        outer
            .child(
                div()
                    .class(self.size.classes())
                    .class(self.avatar_type.background())
                    .class("rounded-full overflow-hidden flex items-center justify-center border-2 border-white")
                    .child(self.content()),
            )
            .child_opt(self.status_indicator())
            .into_node()
    }
}

/// Create an image avatar at the default size
pub fn avatar() -> Avatar {
    Avatar::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_default() {
        let node = avatar().avatar_type(AvatarType::Initials).build();
        assert_eq!(node.text_content(), "UN");
        assert!(node.to_html().contains("bg-[#FFECE5]"));
    }

    #[test]
    fn test_image_placeholder() {
        let html = avatar().build().to_html();
        assert!(html.contains(PLACEHOLDER_SRC));
        assert!(html.contains("alt=\"Avatar\""));
        assert!(html.contains("bg-gray-200"));
    }

    #[test]
    fn test_status_indicators() {
        let online = avatar().status(AvatarStatus::Online).build();
        assert!(online.to_html().contains("#04802E"));

        let verified = avatar().size(AvatarSize::Lg).status(AvatarStatus::Verified).build();
        let badge = verified.find_by_test_id("avatar-verified").unwrap();
        assert!(badge.class_list().contains_all("-bottom-1.5 -right-1.5 w-5 h-5"));

        assert!(avatar().build().find_by_test_id("avatar-status").is_none());
    }

    #[test]
    fn test_size_tables_complete() {
        for size in AvatarSize::ALL {
            assert!(!size.classes().is_empty());
            assert!(!size.status_position().is_empty());
            assert!(!size.verified_position().is_empty());
        }
    }
}
