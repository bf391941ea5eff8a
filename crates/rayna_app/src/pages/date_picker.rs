//! `/date-picker`

use chrono::NaiveDate;
use rayna_cn::components::month_year_picker::shift_months;
use rayna_cn::prelude::*;
use rayna_core::{div, el, p, span, Element, ElementBuilder, Node, State};

use super::{demo_page, PageContext};
use crate::error::Result;

fn selected_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("Selected: {}", date.format("%-m/%-d/%Y")),
        None => "Selected: None".to_string(),
    }
}

fn demo(title: &str, blurb: &str, picker: DatePicker, value: &State<Option<NaiveDate>>, id: &str) -> Element {
    let sink = value.clone();
    let picker = picker
        .selected(value.get())
        .test_id(id)
        .on_change(move |date| sink.set(Some(date)));

    div()
        .class("space-y-4")
        .child(el("h2").class("text-lg font-semibold").text(title))
        .child(p().class("text-gray-600 mb-4").text(blurb))
        .child(
            div().class("flex items-center gap-4").child(picker).child(
                span()
                    .class("text-gray-500")
                    .test_id(format!("{id}-selected"))
                    .text(selected_label(value.get())),
            ),
        )
}

pub fn page(cx: &PageContext<'_>) -> Result<Node> {
    let today = cx.today;
    let values: [State<Option<NaiveDate>>; 3] = Default::default();

    let demos = [
        demo(
            "Basic Date Picker",
            "A simple date picker with no restrictions.",
            cn::date_picker().today(today),
            &values[0],
            "date-basic",
        ),
        demo(
            "Date Picker with Min/Max Dates",
            "Only allows selecting dates between today and one month from now.",
            cn::date_picker()
                .today(today)
                .min_date(today)
                .max_date(shift_months(today, 1)),
            &values[1],
            "date-range",
        ),
        demo(
            "Date Picker with Last Day Option",
            "Includes an option to select the last day of the selected month.",
            cn::date_picker().today(today).show_last_day(true),
            &values[2],
            "date-last-day",
        ),
    ];

    Ok(demo_page("Date Picker Demo", demos))
}

#[cfg(test)]
mod tests {
    use rayna_core::EventContext;

    use super::*;

    #[test]
    fn test_done_commits_selection() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let value = State::default();
        let node = demo("t", "b", cn::date_picker().today(today).open(true), &value, "dp").into_node();

        assert!(node.dispatch("dp-day-20", EventContext::click()));
        assert_eq!(value.get(), None);
        assert!(node.dispatch("dp-done", EventContext::click()));
        assert_eq!(value.get(), NaiveDate::from_ymd_opt(2024, 5, 20));
    }

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(None), "Selected: None");
        assert_eq!(selected_label(NaiveDate::from_ymd_opt(2024, 5, 3)), "Selected: 5/3/2024");
    }
}
