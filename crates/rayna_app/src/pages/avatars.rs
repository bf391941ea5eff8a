//! `/avatars` and `/avatar-groups`

use rayna_cn::prelude::*;
use rayna_core::{div, el, p, span, Element, ElementBuilder, Node};

use super::{demo_page, example, row, section, PageContext};
use crate::error::Result;

const SAMPLE_IMAGES: [&str; 3] = [
    "https://i.pravatar.cc/300?img=1",
    "https://i.pravatar.cc/300?img=2",
    "https://i.pravatar.cc/300?img=3",
];

fn typed(avatar_type: AvatarType) -> Avatar {
    cn::avatar()
        .avatar_type(avatar_type)
        .src(SAMPLE_IMAGES[0])
        .initials("JD")
}

fn sized_row(avatar_type: AvatarType) -> Element {
    row(AvatarSize::ALL.iter().map(|&size| typed(avatar_type).size(size).build()))
}

fn comment(avatar: Avatar, name: &str, text: &str) -> Element {
    div()
        .class("flex gap-3")
        .child(avatar)
        .child(
            div()
                .child(span().class("text-sm font-semibold text-[#101928]").text(name))
                .child(p().class("text-sm text-[#475367]").text(text)),
        )
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let types = row(AvatarType::ALL.iter().map(|&t| typed(t).size(AvatarSize::Lg).build()));
    let sizes = div()
        .class("space-y-6")
        .child(example("Image Avatars", sized_row(AvatarType::Image)))
        .child(example("Icon Avatars", sized_row(AvatarType::Icon)))
        .child(example("Initials Avatars", sized_row(AvatarType::Initials)));
    let statuses = row(
        AvatarStatus::ALL
            .iter()
            .map(|&status| typed(AvatarType::Image).status(status).build()),
    );

    let user_card = div()
        .class("flex items-center gap-4")
        .child(typed(AvatarType::Image).size(AvatarSize::Lg).status(AvatarStatus::Online))
        .child(
            div()
                .child(el("h4").class("font-semibold text-[#101928]").text("John Doe"))
                .child(p().class("text-sm text-[#475367]").text("Product Designer")),
        );
    let thread = div()
        .class("space-y-4")
        .child(comment(
            typed(AvatarType::Image).size(AvatarSize::Sm).status(AvatarStatus::Online),
            "John Doe",
            "This looks great! Ship it.",
        ))
        .child(comment(
            cn::avatar().src(SAMPLE_IMAGES[1]).size(AvatarSize::Sm).status(AvatarStatus::Offline),
            "Jane Smith",
            "One small nit on the spacing.",
        ))
        .child(comment(
            cn::avatar()
                .avatar_type(AvatarType::Initials)
                .initials("AS")
                .size(AvatarSize::Sm)
                .status(AvatarStatus::Verified),
            "Alex Stone",
            "Approved.",
        ));

    Ok(demo_page(
        "Avatar Component",
        [
            section("Avatar Types", types),
            section("Avatar Sizes", sizes),
            section("Status Indicators", statuses),
            section(
                "Application Examples",
                div()
                    .class("space-y-6")
                    .child(example("User Card", user_card))
                    .child(example("Comment Thread", thread)),
            ),
        ],
    ))
}

fn team() -> Vec<Avatar> {
    let mut members: Vec<Avatar> = SAMPLE_IMAGES
        .iter()
        .map(|src| cn::avatar().src(*src).alt("Team member"))
        .collect();
    members.push(cn::avatar().avatar_type(AvatarType::Initials).initials("SJ"));
    members.push(cn::avatar().src("https://i.pravatar.cc/300?img=5"));
    members.push(cn::avatar().avatar_type(AvatarType::Initials).initials("TK"));
    members.push(cn::avatar().src("https://i.pravatar.cc/300?img=7"));
    members
}

pub fn group_page(_cx: &PageContext<'_>) -> Result<Node> {
    let sizes = div().class("space-y-6").children(
        AvatarSize::ALL
            .iter()
            .map(|&size| example(&format!("Size: {}", size.name()), cn::avatar_group(team()).size(size))),
    );

    let variations = div()
        .class("space-y-6")
        .child(example(
            "Different Max Visible",
            div()
                .class("space-y-4")
                .children([3, 4, 6].map(|max| cn::avatar_group(team()).max_visible(max).build())),
        ))
        .child(example(
            "Mixed Avatar Types",
            cn::avatar_group([
                cn::avatar().avatar_type(AvatarType::Initials).initials("JD"),
                cn::avatar().src(SAMPLE_IMAGES[0]),
                cn::avatar().avatar_type(AvatarType::Icon),
                cn::avatar().avatar_type(AvatarType::Initials).initials("SR"),
            ]),
        ))
        .child(example(
            "Custom Spacing",
            div().class("space-y-4").children(
                ["-4px", "-12px"].map(|gap| cn::avatar_group(team()).spacing(Some(gap.to_string())).build()),
            ),
        ));

    let team_card = div()
        .class("flex items-center justify-between")
        .child(
            div()
                .child(el("h4").class("font-semibold text-[#101928]").text("Design Team"))
                .child(p().class("text-sm text-[#475367]").text("7 members")),
        )
        .child(cn::avatar_group(team()).max_visible(4).size(AvatarSize::Sm));

    Ok(demo_page(
        "Avatar Group Component",
        [
            section("Avatar Group Sizes", sizes),
            section("Avatar Group Variations", variations),
            section("Application Examples", example("Team Card", team_card)),
        ],
    ))
}
