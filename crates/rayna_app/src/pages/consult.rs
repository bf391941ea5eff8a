//! `/consult` - the patient dashboard composed from catalog components

use rayna_cn::prelude::*;
use rayna_core::{div, el, p, span, Element, ElementBuilder, Node, State};

use super::PageContext;
use crate::error::Result;

const PATH: &str = "/consult";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Filter {
    Ongoing,
    Closed,
}

fn top_bar() -> Element {
    let search = div()
        .class("relative w-full lg:w-[629px]")
        .child(
            el("input")
                .attr("type", "text")
                .attr("placeholder", "Search here...")
                .test_id("consult-search")
                .class("w-full px-12 py-2.5 border border-gray-300 rounded-md focus:outline-none focus:ring-1 focus:ring-[#EB5017]"),
        )
        .child(Icon::Search.render(20.0, "absolute left-4 top-1/2 transform -translate-y-1/2 w-5 h-5 text-[#667185]"));

    el("header").class("bg-white py-3 px-4 lg:px-9").child(
        div()
            .class("flex items-center justify-between")
            .child(
                div()
                    .class("flex items-center gap-4 lg:gap-10")
                    .child(el("button").class("lg:hidden").child(Icon::Menu.render(24.0, "w-6 h-6")))
                    .child(search),
            )
            .child(
                div()
                    .class("flex items-center gap-3")
                    .child(
                        el("button")
                            .class("p-2.5 bg-gray-100 rounded-full")
                            .attr("aria-label", "Notifications")
                            .child(Icon::Bell.render(20.0, "w-5 h-5")),
                    )
                    .child(
                        cn::avatar()
                            .size(AvatarSize::Md)
                            .src("/images/avatar.jpg")
                            .alt("User"),
                    ),
            ),
    )
}

fn filter_button(filter: Filter, active: &State<Filter>, count: usize) -> Element {
    let selected = active.get() == filter;
    let (label, icon, id) = match filter {
        Filter::Ongoing => ("Ongoing Consultations", Icon::Mail, "consult-ongoing"),
        Filter::Closed => ("Closed Consultations", Icon::History, "consult-closed"),
    };
    let sink = active.clone();
    el("button")
        .test_id(id)
        .attr("aria-pressed", selected.to_string())
        .class("flex items-center gap-2 px-4 py-3 rounded-md")
        .class(if selected {
            "bg-[#FFECE5] text-[#101928]"
        } else {
            "bg-gray-100 text-[#344054]"
        })
        .child(icon.render(20.0, "w-5 h-5"))
        .child(span().text(label))
        .child(
            span()
                .class("px-2 py-0.5 text-xs rounded-full")
                .class(if selected {
                    "bg-[#F56630] text-white"
                } else {
                    "bg-gray-200 text-gray-600"
                })
                .text(count.to_string()),
        )
        .on_click(move |_| sink.set(filter))
}

fn dashboard(active: &State<Filter>) -> Node {
    let table = ConsultationTable::sample();
    let ongoing = table.consultation_count();

    let listing = match active.get() {
        Filter::Ongoing => table.build(),
        Filter::Closed => div()
            .class("bg-white rounded-lg border border-[#E4E7EC] p-12 text-center text-sm text-[#667185]")
            .test_id("consult-empty")
            .text("No closed consultations yet")
            .into_node(),
    };

    let content = div()
        .class("p-4 lg:p-9")
        .child(
            cn::breadcrumb(vec![
                BreadcrumbItem::new("Dashboard", "/dashboard").icon(Icon::Dashboard),
                BreadcrumbItem::new("Consult a Doctor", PATH),
            ])
            .current_path(PATH)
            .class("mb-4"),
        )
        .child(
            div()
                .class("mb-6")
                .child(el("h1").class("text-2xl font-semibold text-[#000000] mb-1").text("Consult a Doctor"))
                .child(p().class("text-[#667185]").text("Check and filter all your medical appointments here")),
        )
        .child(
            cn::button("New Consultation")
                .variant(ButtonVariant::Primary)
                .icon_style(IconStyle::Leading)
                .icon(Icon::Plus)
                .class("mb-6")
                .test_id("consult-new")
                .on_click(|| tracing::info!("new consultation requested")),
        )
        .child(
            div()
                .class("flex flex-wrap gap-3 mb-6")
                .child(filter_button(Filter::Ongoing, active, ongoing))
                .child(filter_button(Filter::Closed, active, 0)),
        )
        .child(listing);

    div()
        .class("flex min-h-screen bg-[#F9FAFB]")
        .child(cn::sidebar().current_path(PATH))
        .child(el("main").class("flex-1").child(top_bar()).child(content))
        .into_node()
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    Ok(dashboard(&State::new(Filter::Ongoing)))
}

#[cfg(test)]
mod tests {
    use rayna_core::EventContext;

    use super::*;

    #[test]
    fn test_sidebar_marks_consult_active() {
        let node = dashboard(&State::new(Filter::Ongoing));
        let link = node.find_by_test_id("sidebar-consult");
        assert_eq!(link.and_then(|e| e.get_attr("aria-current")), Some("page"));
    }

    #[test]
    fn test_filter_switches_listing() {
        let active = State::new(Filter::Ongoing);
        let node = dashboard(&active);
        assert!(node.find_by_test_id("consult-empty").is_none());

        assert!(node.dispatch("consult-closed", EventContext::click()));
        assert_eq!(active.get(), Filter::Closed);
        assert!(dashboard(&active).find_by_test_id("consult-empty").is_some());
    }
}
