//! Popover date picker
//!
//! Day clicks only change the pending selection. `Done` commits it through
//! `on_change`; `Cancel` reverts to the committed date. Both close the
//! popover.

use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate};
use rayna_core::{div, el, Element, ElementBuilder, Node, State};

use super::month_year_picker::{days_in_month, last_day_of_month, month_year_picker, shift_months};
use crate::icons::Icon;

pub const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn format_trigger(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "Select date".to_string(), |d| d.format("%b %d, %Y").to_string())
}

#[derive(Clone)]
pub struct DatePicker {
    selected: Option<NaiveDate>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    show_last_day: bool,
    today: NaiveDate,
    test_id: String,
    open: State<bool>,
    month_year_open: State<bool>,
    displayed: State<NaiveDate>,
    pending: State<Option<NaiveDate>>,
    on_change: Option<Rc<dyn Fn(NaiveDate)>>,
}

impl DatePicker {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            selected: None,
            min_date: None,
            max_date: None,
            show_last_day: false,
            today,
            test_id: "date-picker".to_string(),
            open: State::new(false),
            month_year_open: State::new(false),
            displayed: State::new(today),
            pending: State::new(None),
            on_change: None,
        }
    }

    /// The committed date; also resets the pending one and the displayed month
    pub fn selected(mut self, date: Option<NaiveDate>) -> Self {
        self.selected = date;
        self.pending.set(date);
        if let Some(date) = date {
            self.displayed.set(date);
        }
        self
    }

    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn show_last_day(mut self, show: bool) -> Self {
        self.show_last_day = show;
        self
    }

    /// Override the local date used for highlighting and the initial month
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        if self.selected.is_none() {
            self.displayed.set(today);
        }
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

    pub fn open(self, open: bool) -> Self {
        self.open.set(open);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn pending(&self) -> Option<NaiveDate> {
        self.pending.get()
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed.get()
    }

    pub fn is_disabled(&self, day: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| day < min) || self.max_date.is_some_and(|max| day > max)
    }

    fn day_classes(&self, selected: bool, disabled: bool, today: bool) -> String {
        let mut classes = vec!["w-9 h-9 rounded-lg flex items-center justify-center text-sm"];
        if selected {
            classes.push("bg-[#FBF1F1] text-[#475367] border border-[#CC400C]");
        }
        if disabled {
            classes.push("text-gray-300 cursor-not-allowed");
        } else if !selected {
            classes.push("hover:bg-gray-100 border border-[#F0F2F5]");
        }
        if today {
            classes.push("font-semibold");
        }
        classes.join(" ")
    }

    fn day_grid(&self, month: NaiveDate) -> Element {
        let pending = self.pending();
        let first = month.with_day(1).unwrap_or(month);
        let lead = first.weekday().num_days_from_monday() as usize;
        let blanks = (0..lead).map(|_| div().class("w-9 h-9"));
        let days = (1..=days_in_month(month.year(), month.month()))
            .filter_map(|day| month.with_day(day))
            .map(|day| {
                let selected = pending == Some(day);
                let disabled = self.is_disabled(day);
                let mut button = el("button")
                    .test_id(format!("{}-day-{}", self.test_id, day.day()))
                    .attr_if(disabled, "disabled", "")
                    .class(&self.day_classes(selected, disabled, day == self.today))
                    .text(day.day().to_string());
                if !disabled {
                    let pending = self.pending.clone();
                    button = button.on_click(move |_| pending.set(Some(day)));
                }
                button
            });
        div()
            .class("grid grid-cols-7 gap-2")
            .children(blanks)
            .children(days)
    }

    fn calendar(&self) -> Element {
        let month = self.displayed_month();
        let toggle = self.month_year_open.clone();
        let (prev, next) = (self.displayed.clone(), self.displayed.clone());

        let heading = div()
            .class("flex items-center justify-between")
            .child(
                el("button")
                    .test_id(format!("{}-month-year", self.test_id))
                    .class("flex items-center gap-2 font-semibold text-base")
                    .text(month.format("%B %Y").to_string())
                    .child(Icon::ChevronDown.render(16.0, ""))
                    .on_click(move |_| toggle.set(true)),
            )
            .child(
                div()
                    .class("flex gap-1.5")
                    .child(
                        el("button")
                            .test_id(format!("{}-prev", self.test_id))
                            .class("p-1 hover:bg-gray-100 rounded-full")
                            .child(Icon::ChevronLeft.render(20.0, "w-5 h-5"))
                            .on_click(move |_| prev.update(|d| *d = shift_months(*d, -1))),
                    )
                    .child(
                        el("button")
                            .test_id(format!("{}-next", self.test_id))
                            .class("p-1 hover:bg-gray-100 rounded-full")
                            .child(Icon::ChevronRight.render(20.0, "w-5 h-5"))
                            .on_click(move |_| next.update(|d| *d = shift_months(*d, 1))),
                    ),
            );

        let weekdays = div().class("grid grid-cols-7 gap-0").children(WEEKDAYS.iter().map(|day| {
            div()
                .class("h-10 flex items-center justify-center text-xs font-semibold")
                .text(*day)
        }));

        let last_day = self.show_last_day.then(|| {
            let (pending, displayed) = (self.pending.clone(), self.displayed.clone());
            el("button")
                .test_id(format!("{}-last-day", self.test_id))
                .class("w-full mt-2 py-2 text-sm text-center border rounded-lg hover:bg-gray-50")
                .text("Last Day")
                .on_click(move |_| pending.set(Some(last_day_of_month(displayed.get()))))
        });

        let (cancel_pending, cancel_open, committed) = (self.pending.clone(), self.open.clone(), self.selected);
        let (done_pending, done_open, on_change) = (self.pending.clone(), self.open.clone(), self.on_change.clone());
        let actions = div()
            .class("flex gap-4 mt-8")
            .child(
                el("button")
                    .test_id(format!("{}-cancel", self.test_id))
                    .class("flex-1 py-2 text-sm text-gray-500 hover:text-gray-700")
                    .text("Cancel")
                    .on_click(move |_| {
                        cancel_pending.set(committed);
                        cancel_open.set(false);
                    }),
            )
            .child(
                el("button")
                    .test_id(format!("{}-done", self.test_id))
                    .class("flex-1 py-2 text-sm text-white bg-[#EB5017] rounded-lg hover:bg-[#CC400C]")
                    .text("Done")
                    .on_click(move |_| {
                        if let (Some(date), Some(handler)) = (done_pending.get(), &on_change) {
                            tracing::debug!(%date, "date committed");
                            handler(date);
                        }
                        done_open.set(false);
                    }),
            );

        div()
            .class("space-y-4")
            .child(heading)
            .child(weekdays)
            .child(self.day_grid(month))
            .child_opt(last_day)
            .child(actions)
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for DatePicker {
    fn build(&self) -> Node {
        let open = self.is_open();
        let toggle = self.open.clone();
        let trigger = el("button")
            .test_id(format!("{}-trigger", self.test_id))
            .attr("aria-expanded", open.to_string())
            .class("flex items-center gap-2 px-3 py-2 text-sm border rounded-lg focus:outline-none focus:ring-2 focus:ring-orange-500")
            .text(format_trigger(self.selected))
            .child(if open {
                Icon::ChevronUp.render(16.0, "")
            } else {
                Icon::ChevronDown.render(16.0, "")
            })
            .on_click(move |_| toggle.update(|o| *o = !*o));

        let panel = open.then(|| {
            let body = if self.month_year_open.get() {
                let displayed = self.displayed.clone();
                let close = self.month_year_open.clone();
                month_year_picker(self.displayed_month())
                    .current_year(self.today.year())
                    .test_id(format!("{}-my", self.test_id))
                    .on_change(move |date| displayed.set(date))
                    .on_close(move || close.set(false))
                    .build()
            } else {
                self.calendar().into_node()
            };
            div()
                .class("absolute z-10 mt-2 bg-white rounded-lg shadow-lg p-4 w-[300px]")
                .child(body)
        });

        div()
            .class("relative")
            .child(trigger)
            .child_opt(panel)
            .into_node()
    }
}

pub fn date_picker() -> DatePicker {
    DatePicker::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::Cell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker(committed: Rc<Cell<Option<NaiveDate>>>) -> DatePicker {
        date_picker()
            .today(date(2025, 1, 10))
            .selected(Some(date(2025, 1, 15)))
            .on_change(move |d| committed.set(Some(d)))
            .open(true)
    }

    #[test]
    fn test_trigger_label() {
        assert_eq!(format_trigger(None), "Select date");
        assert_eq!(format_trigger(Some(date(2025, 3, 7))), "Mar 07, 2025");
    }

    #[test]
    fn test_day_click_only_sets_pending() {
        let committed = Rc::new(Cell::new(None));
        let dp = picker(Rc::clone(&committed));
        assert!(dp.build().dispatch("date-picker-day-20", EventContext::click()));
        assert_eq!(dp.pending(), Some(date(2025, 1, 20)));
        assert_eq!(committed.get(), None);
        assert!(dp.is_open());
    }

    #[test]
    fn test_done_commits_pending() {
        let committed = Rc::new(Cell::new(None));
        let dp = picker(Rc::clone(&committed));
        dp.build().dispatch("date-picker-day-20", EventContext::click());
        dp.build().dispatch("date-picker-done", EventContext::click());
        assert_eq!(committed.get(), Some(date(2025, 1, 20)));
        assert!(!dp.is_open());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let committed = Rc::new(Cell::new(None));
        let dp = picker(Rc::clone(&committed));
        dp.build().dispatch("date-picker-day-3", EventContext::click());
        dp.build().dispatch("date-picker-cancel", EventContext::click());
        assert_eq!(dp.pending(), Some(date(2025, 1, 15)));
        assert_eq!(committed.get(), None);
        assert!(!dp.is_open());
    }

    #[test]
    fn test_bounds_disable_days() {
        let dp = picker(Rc::new(Cell::new(None)))
            .min_date(date(2025, 1, 5))
            .max_date(date(2025, 1, 25));
        let node = dp.build();
        assert!(!node.dispatch("date-picker-day-4", EventContext::click()));
        assert!(!node.dispatch("date-picker-day-26", EventContext::click()));
        assert_eq!(dp.pending(), Some(date(2025, 1, 15)));
        let day = node.find_by_test_id("date-picker-day-5").map(|e| e.get_attr("disabled").is_none());
        assert_eq!(day, Some(true));
    }

    #[test]
    fn test_navigation_and_last_day() {
        let dp = picker(Rc::new(Cell::new(None))).show_last_day(true);
        dp.build().dispatch("date-picker-next", EventContext::click());
        assert_eq!(dp.displayed_month().month(), 2);
        let node = dp.build();
        assert!(node.text_content().contains("February 2025"));
        node.dispatch("date-picker-last-day", EventContext::click());
        assert_eq!(dp.pending(), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_grid_aligns_to_weekday() {
        // 2025-01-01 is a Wednesday
        let node = picker(Rc::new(Cell::new(None))).build();
        let grid = node.find(&|e| e.has_class("grid-cols-7") && e.has_class("gap-2"));
        let blanks = grid.map(|g| {
            g.child_nodes()
                .iter()
                .take_while(|n| n.as_element().is_some_and(|e| e.tag() == "div"))
                .count()
        });
        assert_eq!(blanks, Some(2));
    }

    #[test]
    fn test_month_year_switch() {
        let dp = picker(Rc::new(Cell::new(None)));
        dp.build().dispatch("date-picker-month-year", EventContext::click());
        let node = dp.build();
        assert!(node.dispatch("date-picker-my-month-6", EventContext::click()));
        assert_eq!(dp.displayed_month(), date(2025, 6, 15));
        dp.build().dispatch("date-picker-my-done", EventContext::click());
        assert!(dp.build().find_by_test_id("date-picker-day-1").is_some());
    }
}
