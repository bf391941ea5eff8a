//! Month and year chooser shown inside the date picker popover
//!
//! Also hosts the calendar arithmetic both pickers share.

use std::rc::Rc;

use chrono::{Datelike, Local, Months, NaiveDate};
use rayna_core::{div, el, span, Element, ElementBuilder, Node};

use crate::icons::Icon;

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December",
];

/// Years offered on either side of the current one
pub const YEAR_SPAN: i32 = 2;

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// Move to `month` (1-based), clamping the day to that month's length
pub fn with_month(date: NaiveDate, month: u32) -> NaiveDate {
    let day = date.day().min(days_in_month(date.year(), month));
    NaiveDate::from_ymd_opt(date.year(), month, day).unwrap_or(date)
}

/// Move to `year`, clamping Feb 29 to Feb 28 when needed
pub fn with_year(date: NaiveDate, year: i32) -> NaiveDate {
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

fn choice_classes(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1.5 rounded-lg text-sm font-medium bg-[#FBF1F1] text-[#475367] border border-[#CC400C]"
    } else {
        "px-3 py-1.5 rounded-lg text-sm font-medium bg-[#F3F5F8] text-[#667185] border border-[#D0D5DD] hover:bg-gray-100"
    }
}

fn section_heading(title: &str) -> Element {
    div()
        .class("flex items-center justify-between")
        .child(span().class("text-xs font-bold text-[#666666]").text(title))
        .child(
            div()
                .class("flex gap-1.5")
                .child(el("button").class("p-1 hover:bg-gray-100 rounded-full").child(Icon::ChevronLeft.render(20.0, "w-5 h-5")))
                .child(el("button").class("p-1 hover:bg-gray-100 rounded-full").child(Icon::ChevronRight.render(20.0, "w-5 h-5"))),
        )
}

#[derive(Clone)]
pub struct MonthYearPicker {
    current: NaiveDate,
    current_year: i32,
    test_id: String,
    on_change: Option<Rc<dyn Fn(NaiveDate)>>,
    on_close: Option<Rc<dyn Fn()>>,
}

impl MonthYearPicker {
    pub fn new(current: NaiveDate) -> Self {
        Self {
            current,
            current_year: Local::now().year(),
            test_id: "month-year".to_string(),
            on_change: None,
            on_close: None,
        }
    }

    /// The year the offered range is centered on
    pub fn current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    pub fn on_change<F: Fn(NaiveDate) + 'static>(mut self, handler: F) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_close<F: Fn() + 'static>(mut self, handler: F) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn years(&self) -> Vec<i32> {
        (self.current_year - YEAR_SPAN..=self.current_year + YEAR_SPAN).collect()
    }

    fn choice(&self, label: String, test_id: String, selected: bool, target: NaiveDate) -> Element {
        let mut button = el("button")
            .test_id(test_id)
            .attr_if(selected, "aria-pressed", "true")
            .class(choice_classes(selected))
            .text(label);
        if let Some(handler) = &self.on_change {
            let handler = Rc::clone(handler);
            button = button.on_click(move |_| handler(target));
        }
        button
    }

    fn close_button(&self, label: &str, suffix: &str, classes: &str) -> Element {
        let mut button = el("button")
            .test_id(format!("{}-{suffix}", self.test_id))
            .class(classes)
            .text(label);
        if let Some(handler) = &self.on_close {
            let handler = Rc::clone(handler);
            button = button.on_click(move |_| handler());
        }
        button
    }
}

impl ElementBuilder for MonthYearPicker {
    fn build(&self) -> Node {
        let months = MONTHS.iter().zip(1u32..).map(|(name, month)| {
            self.choice(
                name.to_string(),
                format!("{}-month-{month}", self.test_id),
                month == self.current.month(),
                with_month(self.current, month),
            )
        });
        let years = self.years().into_iter().map(|year| {
            self.choice(
                year.to_string(),
                format!("{}-year-{year}", self.test_id),
                year == self.current.year(),
                with_year(self.current, year),
            )
        });

        div()
            .class("space-y-8")
            .child(
                div()
                    .class("space-y-4")
                    .child(section_heading("Month"))
                    .child(div().class("flex flex-wrap gap-2").children(months)),
            )
            .child(
                div()
                    .class("space-y-4")
                    .child(section_heading("Year"))
                    .child(div().class("flex flex-wrap gap-2").children(years)),
            )
            .child(
                div()
                    .class("flex gap-4 pt-4")
                    .child(self.close_button("Cancel", "cancel", "flex-1 py-2 text-sm text-gray-500 hover:text-gray-700"))
                    .child(self.close_button(
                        "Done",
                        "done",
                        "flex-1 py-2 text-sm text-white bg-[#EB5017] rounded-lg hover:bg-[#CC400C]",
                    )),
            )
            .into_node()
    }
}

pub fn month_year_picker(current: NaiveDate) -> MonthYearPicker {
    MonthYearPicker::new(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(last_day_of_month(date(2024, 4, 3)), date(2024, 4, 30));
    }

    #[test]
    fn test_day_clamped_on_month_and_year_change() {
        assert_eq!(with_month(date(2024, 1, 31), 2), date(2024, 2, 29));
        assert_eq!(with_year(date(2024, 2, 29), 2025), date(2025, 2, 28));
        assert_eq!(shift_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2024, 12, 15), 1), date(2025, 1, 15));
    }

    #[test]
    fn test_year_range_and_selection() {
        let picker = month_year_picker(date(2025, 6, 1)).current_year(2025);
        assert_eq!(picker.years(), vec![2023, 2024, 2025, 2026, 2027]);

        let node = picker.build();
        let june = node.find_by_test_id("month-year-month-6").map(|e| e.has_class("border-[#CC400C]"));
        assert_eq!(june, Some(true));
        assert!(node.find_by_test_id("month-year-year-2028").is_none());
    }

    #[test]
    fn test_choice_fires_clamped_date() {
        let picked = Rc::new(Cell::new(None));
        let closed = Rc::new(Cell::new(false));
        let (p, c) = (Rc::clone(&picked), Rc::clone(&closed));
        let node = month_year_picker(date(2024, 3, 31))
            .current_year(2024)
            .on_change(move |d| p.set(Some(d)))
            .on_close(move || c.set(true))
            .build();
        assert!(node.dispatch("month-year-month-4", EventContext::click()));
        assert_eq!(picked.get(), Some(date(2024, 4, 30)));
        assert!(node.dispatch("month-year-year-2026", EventContext::click()));
        assert_eq!(picked.get(), Some(date(2026, 3, 31)));
        assert!(node.dispatch("month-year-done", EventContext::click()));
        assert!(closed.get());
    }
}
