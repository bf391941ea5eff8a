//! `/spinners`

use rayna_cn::prelude::*;
use rayna_core::{div, el, p, span, Element, ElementBuilder, EventKind, Node, State};

use super::{demo_page, section, PageContext};
use crate::error::Result;

const PROGRESS_VALUES: [u32; 4] = [25, 50, 75, 100];
const PROGRESS_STEP: u32 = 5;

/// Next value of the looping progress demo
fn next_progress(prev: u32) -> u32 {
    if prev >= 100 {
        0
    } else {
        prev + PROGRESS_STEP
    }
}

fn panel(title: &str, body: impl ElementBuilder) -> Element {
    div()
        .class("p-4 border border-gray-200 rounded-md")
        .child(el("h3").class("text-lg font-inter font-semibold text-gray-700 mb-4").text(title))
        .child(body)
}

fn labelled(spinner: Spinner, label: String) -> Node {
    div()
        .class("flex flex-col items-center justify-center")
        .child(spinner)
        .child(span().class("mt-2 text-sm text-gray-600").text(label))
        .into_node()
}

fn two_up(left: Element, right: Element) -> Element {
    div().class("grid grid-cols-1 md:grid-cols-2 gap-6").child(left).child(right)
}

fn strip(items: impl IntoIterator<Item = Node>) -> Element {
    div().class("flex flex-wrap gap-8 items-center").children(items)
}

/// Progress ring driven by a range slider and a step button
fn live_progress(progress: &State<u32>) -> Element {
    let value = progress.get();
    let sink = progress.clone();
    let stepper = progress.clone();
    div()
        .class("flex flex-col items-center gap-4")
        .child(
            div()
                .class("flex gap-8 items-center")
                .child(cn::spinner().size(SpinnerSize::Lg).progress(value as f32))
                .child(div().class("text-xl font-semibold text-gray-700").text(format!("{value}%"))),
        )
        .child(
            div().class("w-full max-w-xs").child(
                el("input")
                    .attr("type", "range")
                    .attr("min", "0")
                    .attr("max", "100")
                    .attr("value", value.to_string())
                    .test_id("spinner-live-range")
                    .class("w-full")
                    .on(EventKind::Input, move |ctx| {
                        if let Some(v) = ctx.value.as_deref().and_then(|v| v.parse::<u32>().ok()) {
                            sink.set(v.min(100));
                        }
                    }),
            ),
        )
        .child(
            el("button")
                .class("text-sm text-[#F56630] hover:underline")
                .test_id("spinner-live-step")
                .text(format!("+{PROGRESS_STEP}%"))
                .on_click(move |_| stepper.update(|p| *p = next_progress(*p))),
        )
}

fn loading_button(label: &str, bg: &str, spinner_first: bool) -> Element {
    let spin = cn::spinner().size(SpinnerSize::Sm).indeterminate().class("text-white");
    let text = span().text(label);
    let button = el("button")
        .class("py-2 px-4 text-white rounded-md inline-flex items-center gap-2")
        .class(bg);
    if spinner_first {
        button.child(spin).child(text)
    } else {
        button.child(text).child(spin)
    }
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    let progress = State::new(0u32);

    let indeterminate = two_up(
        panel(
            "Size Variants",
            strip(SpinnerSize::ALL.iter().map(|&size| {
                labelled(cn::spinner().indeterminate().size(size), format!("{size:?}").to_lowercase())
            })),
        ),
        panel(
            "Color Variants",
            strip(SpinnerVariant::ALL.iter().map(|&variant| {
                labelled(cn::spinner().indeterminate().variant(variant), format!("{variant:?}").to_lowercase())
            })),
        ),
    );

    let determinate = two_up(
        panel(
            "Progress Variants",
            strip(PROGRESS_VALUES.iter().map(|&value| {
                labelled(cn::spinner().progress(value as f32).size(SpinnerSize::Lg), format!("{value}%"))
            })),
        ),
        panel("Live Progress Demo", live_progress(&progress)),
    );

    let thickness = div().class("p-4 border border-gray-200 rounded-md").child(
        strip((1..=4).map(|t| {
            labelled(
                cn::spinner().progress(75.0).thickness(t as f32).size(SpinnerSize::Lg),
                format!("Thickness: {t}px"),
            )
        }))
        .class("justify-center"),
    );

    let value = progress.get();
    let upload = div()
        .class("border border-gray-200 rounded-md p-4")
        .child(
            div()
                .class("flex justify-between items-center mb-2")
                .child(span().class("text-sm text-gray-700").text("document.pdf"))
                .child(span().class("text-sm text-gray-500").text(format!("{value}%"))),
        )
        .child(
            div()
                .class("flex items-center gap-4")
                .child(
                    div().class("w-full bg-gray-200 rounded-full h-2.5").child(
                        div()
                            .class("bg-[#F56630] h-2.5 rounded-full")
                            .style("width", format!("{value}%")),
                    ),
                )
                .child(cn::spinner().size(SpinnerSize::Sm).progress(value as f32)),
        );

    let in_context = div()
        .class("grid grid-cols-1 md:grid-cols-2 gap-6")
        .child(panel(
            "Button Loading",
            div()
                .class("flex gap-4")
                .child(loading_button("Loading...", "bg-[#F56630]", true))
                .child(loading_button("Submit", "bg-gray-700", false)),
        ))
        .child(panel(
            "Card Loading",
            div()
                .class("relative p-6 border border-gray-200 rounded-md h-40 flex justify-center items-center")
                .child(
                    div()
                        .class("absolute inset-0 bg-white bg-opacity-75 flex justify-center items-center")
                        .child(cn::spinner().size(SpinnerSize::Lg).indeterminate()),
                )
                .child(p().class("text-gray-400").text("Content loading...")),
        ))
        .child(panel("Upload Progress", upload))
        .child(panel(
            "Form Submission",
            el("form")
                .class("space-y-4")
                .child(cn::input().label("Email").input_type("email").placeholder("Enter your email").helper_text(None))
                .child(
                    cn::input()
                        .label("Password")
                        .input_type("password")
                        .placeholder("Enter your password")
                        .helper_text(None),
                )
                .child(loading_button("Signing in...", "bg-[#F56630] w-full justify-center", true)),
        ));

    Ok(demo_page(
        "Spinner Component Demo",
        [
            section("Indeterminate Spinners (Loading)", indeterminate),
            section("Determinate Spinners (Progress)", determinate),
            section("Custom Thickness", thickness),
            section("Spinner in Context", in_context),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use rayna_core::EventContext;

    use super::*;

    #[test]
    fn test_next_progress_wraps() {
        assert_eq!(next_progress(0), 5);
        assert_eq!(next_progress(95), 100);
        assert_eq!(next_progress(100), 0);
    }

    #[test]
    fn test_live_range_updates_progress() {
        let progress = State::new(0u32);
        let node = live_progress(&progress).into_node();
        assert!(node.dispatch("spinner-live-range", EventContext::input("40")));
        assert_eq!(progress.get(), 40);
        node.dispatch("spinner-live-range", EventContext::input("250"));
        assert_eq!(progress.get(), 100);
        node.dispatch("spinner-live-step", EventContext::click());
        assert_eq!(progress.get(), 0);
    }
}
