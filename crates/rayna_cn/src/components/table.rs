//! Data table
//!
//! The table is controlled: callers own the row order, the selected row ids
//! and the [`SortState`], and update them from `on_sort` / `on_row_select`.

use std::cmp::Ordering;
use std::rc::Rc;

use rayna_core::{cx, div, ElementBuilder, Node};
use serde::Serialize;

use super::table_cell::{table_cell, CellData, ControlType};
use super::table_header::{table_header, SortDirection};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub id: String,
    pub label: String,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl TableColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: false,
            width: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    fn width_class(&self) -> String {
        self.width
            .as_ref()
            .map(|w| format!("w-[{w}]"))
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<CellData>,
}

impl TableRow {
    pub fn new(id: impl Into<String>, cells: Vec<CellData>) -> Self {
        Self {
            id: id.into(),
            cells,
        }
    }

    fn label_at(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |cell| cell.label.as_str())
    }
}

/// Which column the rows are ordered by
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Clicking the sorted column flips direction; any other column starts ascending
    pub fn toggle(&mut self, column: &str) -> SortDirection {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Asc;
        }
        self.direction
    }

    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        (self.column == column).then_some(self.direction)
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Reorder `rows` by the label of the sorted column
///
/// Unknown columns leave the order untouched. The sort is stable.
pub fn sort_rows(rows: &mut [TableRow], columns: &[TableColumn], state: &SortState) {
    let Some(index) = columns.iter().position(|c| c.id == state.column) else {
        tracing::debug!(column = %state.column, "sort on unknown column ignored");
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_labels(a.label_at(index), b.label_at(index));
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[derive(Clone, Default)]
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<TableRow>,
    control: Option<ControlType>,
    selected_rows: Vec<String>,
    sort: Option<SortState>,
    class: String,
    test_id: String,
    on_sort: Option<Rc<dyn Fn(&str)>>,
    on_row_select: Option<Rc<dyn Fn(&str, bool)>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>, rows: Vec<TableRow>) -> Self {
        Self {
            columns,
            rows,
            test_id: "table".to_string(),
            ..Self::default()
        }
    }

    pub fn control(mut self, control: ControlType) -> Self {
        self.control = Some(control);
        self
    }

    pub fn selected_rows(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selected_rows = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    pub fn on_sort<F: Fn(&str) + 'static>(mut self, handler: F) -> Self {
        self.on_sort = Some(Rc::new(handler));
        self
    }

    pub fn on_row_select<F: Fn(&str, bool) + 'static>(mut self, handler: F) -> Self {
        self.on_row_select = Some(Rc::new(handler));
        self
    }

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.selected_rows.iter().any(|id| id == row_id)
    }

    fn header_row(&self) -> rayna_core::Element {
        div().class("flex").children(self.columns.iter().enumerate().map(|(index, column)| {
            let on_sort = match (&self.on_sort, column.sortable) {
                (Some(handler), true) => {
                    let handler = Rc::clone(handler);
                    let id = column.id.clone();
                    Some(Rc::new(move || handler(&id)) as Rc<dyn Fn()>)
                }
                _ => None,
            };
            let header = table_header(column.label.clone())
                .test_id(format!("{}-header-{}", self.test_id, column.id))
                .show_checkbox(index == 0 && self.control == Some(ControlType::Checkbox))
                .show_sort_icon(column.sortable)
                .sort_direction(self.sort.as_ref().and_then(|s| s.direction_for(&column.id)))
                .on_sort_rc(on_sort);
            div()
                .class(&cx(["flex-1", column.width_class().as_str()]))
                .child(header)
        }))
    }

    fn body_row(&self, row: &TableRow) -> rayna_core::Element {
        let selected = self.is_selected(&row.id);
        div().class("flex").test_id(format!("{}-row-{}", self.test_id, row.id)).children(
            row.cells.iter().enumerate().map(|(index, cell)| {
                let width = self.columns.get(index).map(TableColumn::width_class).unwrap_or_default();
                let mut cell_builder = table_cell(cell.clone())
                    .control(if index == 0 { self.control } else { None })
                    .selected(selected)
                    .checked(selected);
                if index == 0 {
                    cell_builder = cell_builder.test_id(format!("{}-select-{}", self.test_id, row.id));
                }
                if let Some(handler) = &self.on_row_select {
                    let handler = Rc::clone(handler);
                    let id = row.id.clone();
                    cell_builder = cell_builder.on_change(move |checked| handler(&id, checked));
                }
                div()
                    .class(&cx([
                        "flex-1",
                        width.as_str(),
                        if selected {
                            "bg-[#FFECE5] first:border-l last:border-r border-[#F56630]"
                        } else {
                            ""
                        },
                    ]))
                    .child(cell_builder)
            }),
        )
    }
}

impl ElementBuilder for Table {
    fn build(&self) -> Node {
        div()
            .test_id(self.test_id.clone())
            .class(&cx([
                "rounded-lg border border-[#E4E7EC] overflow-hidden bg-white",
                self.class.as_str(),
            ]))
            .child(self.header_row())
            .child(div().children(self.rows.iter().map(|row| self.body_row(row))))
            .into_node()
    }
}

pub fn table(columns: Vec<TableColumn>, rows: Vec<TableRow>) -> Table {
    Table::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::RefCell;

    fn columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("name", "Name").sortable(),
            TableColumn::new("status", "Status"),
        ]
    }

    fn rows() -> Vec<TableRow> {
        ["linda Chen", "Sarah Thompson", "James Wilson"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| TableRow::new((i + 1).to_string(), vec![CellData::new(name), CellData::new("Active")]))
            .collect()
    }

    fn names(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|r| r.label_at(0)).collect()
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let mut sort = SortState::new("name");
        assert_eq!(sort.toggle("name"), SortDirection::Desc);
        assert_eq!(sort.toggle("name"), SortDirection::Asc);
        sort.toggle("name");
        assert_eq!(sort.toggle("team"), SortDirection::Asc);
        assert_eq!(sort.column, "team");
        assert_eq!(sort.direction_for("name"), None);
    }

    #[test]
    fn test_sort_rows_case_insensitive() {
        let cols = columns();
        let mut data = rows();
        let mut sort = SortState::new("name");
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(names(&data), vec!["James Wilson", "linda Chen", "Sarah Thompson"]);
        sort.toggle("name");
        sort_rows(&mut data, &cols, &sort);
        assert_eq!(names(&data), vec!["Sarah Thompson", "linda Chen", "James Wilson"]);

        let before = data.clone();
        sort_rows(&mut data, &cols, &SortState::new("missing"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_checkbox_only_in_first_header_for_checkbox_tables() {
        let checkbox = table(columns(), rows()).control(ControlType::Checkbox).build();
        assert!(checkbox.find_by_test_id("table-header-name-checkbox").is_some());
        assert!(checkbox.find_by_test_id("table-header-status-checkbox").is_none());

        let radio = table(columns(), rows()).control(ControlType::Radio).build();
        assert!(radio.find_by_test_id("table-header-name-checkbox").is_none());
    }

    #[test]
    fn test_callbacks_report_ids() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        let node = table(columns(), rows())
            .control(ControlType::Radio)
            .sort(SortState::new("name"))
            .on_sort(move |col| a.borrow_mut().push(format!("sort:{col}")))
            .on_row_select(move |row, on| b.borrow_mut().push(format!("select:{row}:{on}")))
            .build();
        assert!(node.dispatch("table-header-name-sort", EventContext::click()));
        assert!(!node.dispatch("table-header-status-sort", EventContext::click()));
        assert!(node.dispatch("table-select-2", EventContext::checked(true)));
        assert_eq!(*log.borrow(), vec!["sort:name".to_string(), "select:2:true".to_string()]);
    }

    #[test]
    fn test_selected_row_background() {
        let node = table(columns(), rows()).selected_rows(["1"]).build();
        let highlighted = node.find_all(&|e| e.has_class("border-[#F56630]") && e.has_class("bg-[#FFECE5]"));
        assert_eq!(highlighted.len(), 2);
    }
}
