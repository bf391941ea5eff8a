//! `/inputs`

use rayna_cn::prelude::*;
use rayna_core::{div, ElementBuilder, Node, State};

use super::{demo_page, section, PageContext};
use crate::error::Result;

fn name_helper(value: &str) -> &'static str {
    if value.is_empty() {
        "Please enter your name"
    } else {
        "Looks good!"
    }
}

fn email_helper(value: &str) -> (&'static str, bool) {
    if value.contains('@') {
        ("Valid email!", true)
    } else {
        ("Enter a valid email", false)
    }
}

fn password_helper(value: &str) -> Option<&'static str> {
    (!value.is_empty() && value.len() < 6).then_some("Password must be at least 6 characters")
}

/// An input whose helper text follows its own value
fn bound(field: Input, value: &State<String>) -> Input {
    let sink = value.clone();
    field.value(value.get()).on_change(move |v| sink.set(v.to_string()))
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let (name, email, password) = (State::<String>::default(), State::<String>::default(), State::<String>::default());

    let (email_text, email_ok) = email_helper(&email.get());
    let password_text = password_helper(&password.get());
    let interactive = div()
        .class("grid grid-cols-1 md:grid-cols-2 gap-6")
        .child(bound(
            cn::input()
                .label("Name")
                .placeholder("Enter your name")
                .test_id("input-name")
                .helper_text(Some(name_helper(&name.get()).to_string())),
            &name,
        ))
        .child(
            cn::input()
                .label("Search")
                .placeholder("Search for anything...")
                .left_icon(Icon::Search)
                .helper_text(None)
                .test_id("input-search"),
        )
        .child(bound(
            cn::input()
                .label("Email")
                .input_type("email")
                .placeholder("Enter your email")
                .test_id("input-email")
                .success(email_ok && !email.get().is_empty())
                .error(!email_ok && !email.get().is_empty())
                .helper_text(Some(email_text.to_string())),
            &email,
        ))
        .child(bound(
            cn::input()
                .label("Password")
                .input_type("password")
                .placeholder("Enter your password")
                .right_icon(Icon::Eye)
                .test_id("input-password")
                .error(password_text.is_some())
                .helper_text(password_text.map(str::to_string)),
            &password,
        ));

    let sizes = div().class("grid grid-cols-1 md:grid-cols-2 gap-6").children(
        [(InputSize::Sm, "Small"), (InputSize::Lg, "Large")].map(|(size, name)| {
            cn::input()
                .size(size)
                .label(format!("{name} input"))
                .placeholder(format!("{name} placeholder"))
                .helper_text(None)
                .build()
        }),
    );

    let states = div().class("grid grid-cols-1 md:grid-cols-2 gap-6").children(
        InputState::ALL.iter().map(|&state| {
            cn::input()
                .state(state)
                .label("Label")
                .placeholder("Placeholder")
                .helper_text(Some(format!("{} state", state.name())))
                .test_id(format!("input-state-{}", state.name()))
                .build()
        }),
    );

    let icons = div()
        .class("grid grid-cols-1 md:grid-cols-2 gap-6")
        .child(cn::input().label("Search").placeholder("Search...").left_icon(Icon::Search))
        .child(
            cn::input()
                .label("Password")
                .input_type("password")
                .placeholder("Enter password")
                .right_icon(Icon::Eye),
        )
        .child(cn::input().label("Date").placeholder("Select date").left_icon(Icon::Calendar))
        .child(
            div()
                .class("space-y-4")
                .child(cn::input().label("Success Input").value("Valid value").success(true))
                .child(
                    cn::input()
                        .label("Error Input")
                        .value("Invalid value")
                        .error(true)
                        .helper_text(Some("This field has an error".to_string())),
                ),
        );

    Ok(demo_page(
        "Input Component",
        [
            section("Interactive Inputs", interactive),
            section("Input Sizes", sizes),
            section("Input States", states),
            section("Input with Icons", icons),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers() {
        assert_eq!(name_helper(""), "Please enter your name");
        assert_eq!(email_helper("a@b.c"), ("Valid email!", true));
        assert_eq!(password_helper("abc"), Some("Password must be at least 6 characters"));
        assert_eq!(password_helper(""), None);
        assert_eq!(password_helper("secret1"), None);
    }
}
