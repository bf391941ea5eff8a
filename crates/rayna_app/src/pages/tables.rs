//! `/table-headers`, `/table-cells` and `/tables`

use rayna_cn::prelude::*;
use rayna_core::{div, el, Element, ElementBuilder, Node, State};

use super::PageContext;
use crate::error::Result;

const ICON_URL: &str = "/images/icon-3d.svg";
const AVATAR_URL: &str = "https://i.pravatar.cc/300";

fn sheet(title: &str, max_width: &str, body: impl ElementBuilder) -> Node {
    div()
        .class("p-8 bg-gray-50 min-h-screen")
        .child(
            div()
                .class("mx-auto")
                .class(max_width)
                .child(el("h1").class("text-2xl font-semibold text-gray-900 mb-8").text(title))
                .child(body),
        )
        .into_node()
}

fn heading(text: &str) -> Element {
    el("h2").class("text-sm font-medium text-gray-900 mb-4").text(text)
}

// ---------------------------------------------------------------------------
// Table headers
// ---------------------------------------------------------------------------

/// Unsorted, then ascending, then descending, then unsorted again
fn cycle_sort(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

struct HeaderDemo {
    sort: State<Option<SortDirection>>,
    selected: State<bool>,
}

impl HeaderDemo {
    fn interactive(&self, id: &str, checkbox: bool, sort: bool) -> TableHeader {
        let mut header = cn::table_header("Column Name").test_id(id).show_checkbox(checkbox);
        if checkbox {
            let selected = self.selected.clone();
            header = header
                .selected(self.selected.get())
                .on_checkbox_change(move |checked| selected.set(checked));
        }
        if sort {
            let direction = self.sort.clone();
            header = header
                .show_sort_icon(true)
                .sort_direction(self.sort.get())
                .on_sort(move || direction.update(|d| *d = cycle_sort(*d)));
        }
        header
    }

    fn render(&self) -> Node {
        let feature = |title: &str, header: TableHeader| {
            div()
                .class("space-y-4 p-6")
                .child(el("h2").class("text-sm font-medium text-gray-900").text(title))
                .child(header)
        };
        let state = |title: &str, header: TableHeader| {
            div()
                .child(el("h3").class("text-xs font-medium text-gray-500 mb-2").text(title))
                .child(header)
        };
        let full = || cn::table_header("Column Name").show_checkbox(true).show_sort_icon(true);

        let body = div()
            .class("bg-white rounded-lg shadow-sm overflow-hidden")
            .child(
                div()
                    .class("grid grid-cols-4 divide-x divide-[#E4E7EC]")
                    .child(feature("Basic Header", cn::table_header("Column Name").test_id("th-basic")))
                    .child(feature("With Checkbox", self.interactive("th-checkbox", true, false)))
                    .child(feature("With Sort", self.interactive("th-sort", false, true)))
                    .child(feature("All Features", self.interactive("th-all", true, true))),
            )
            .child(
                div()
                    .class("p-6 border-t border-[#E4E7EC]")
                    .child(heading("States"))
                    .child(
                        div()
                            .class("space-y-8")
                            .child(state("Default", full().test_id("th-state-default")))
                            .child(state("Hover (Mouse over to see)", full().test_id("th-state-hover")))
                            .child(state("Selected", full().selected(true).test_id("th-state-selected")))
                            .child(state(
                                "Without Separator",
                                full().show_separator(false).test_id("th-state-plain"),
                            )),
                    ),
            );
        sheet("Table Header Demo", "max-w-4xl", body)
    }
}

pub fn header_page(_cx: &PageContext<'_>) -> Result<Node> {
    let demo = HeaderDemo {
        sort: State::new(None),
        selected: State::new(false),
    };
    Ok(demo.render())
}

// ---------------------------------------------------------------------------
// Table cells
// ---------------------------------------------------------------------------

fn cell(label: &str, description: &str) -> CellData {
    CellData::new(label).description(description)
}

fn bound_cell(data: CellData, control: ControlType, value: &State<bool>, id: &str) -> TableCell {
    let sink = value.clone();
    cn::table_cell(data)
        .control(Some(control))
        .checked(value.get())
        .test_id(id)
        .on_change(move |checked| sink.set(checked))
}

fn cell_group(title: &str, cells: impl IntoIterator<Item = Element>, last: bool) -> Element {
    div().class(if last { "" } else { "border-b border-[#E4E7EC]" }).child(
        div()
            .class("p-6")
            .child(heading(title))
            .child(div().class("space-y-4 divide-y divide-[#E4E7EC]").children(cells)),
    )
}

fn cell_demo(radio: &State<bool>, checkbox: &State<bool>, toggle: &State<bool>) -> Node {
    let wrap = |cell: TableCell| div().child(cell);

    let basic = cell_group(
        "Basic Examples",
        [
            wrap(cn::table_cell(cell("Text Only", "Simple text cell without any controls or media"))),
            wrap(cn::table_cell(cell("With Icon", "Cell with an icon").media(MediaType::Icon, ICON_URL))),
            wrap(cn::table_cell(
                cell("With Avatar", "Cell with an avatar").media(MediaType::Avatar, AVATAR_URL),
            )),
        ],
        false,
    );

    let controls = cell_group(
        "Control Types",
        [
            wrap(bound_cell(
                cell("Radio Button", "Cell with radio button control").media(MediaType::Icon, ICON_URL),
                ControlType::Radio,
                radio,
                "cell-radio",
            )),
            wrap(bound_cell(
                cell("Checkbox", "Cell with checkbox control").media(MediaType::Avatar, AVATAR_URL),
                ControlType::Checkbox,
                checkbox,
                "cell-checkbox",
            )),
            wrap(bound_cell(
                cell("Toggle", "Cell with toggle control").media(MediaType::Icon, ICON_URL),
                ControlType::Toggle,
                toggle,
                "cell-toggle",
            )),
        ],
        false,
    );

    let states = cell_group(
        "States",
        [
            wrap(
                cn::table_cell(cell("Default State", "Normal cell appearance").media(MediaType::Icon, ICON_URL))
                    .control(Some(ControlType::Radio)),
            ),
            wrap(
                cn::table_cell(cell("Selected State", "Cell in selected state").media(MediaType::Icon, ICON_URL))
                    .control(Some(ControlType::Radio))
                    .selected(true)
                    .checked(true),
            ),
            wrap(
                cn::table_cell(
                    cell(
                        "Cell with Very Long Text That Should Truncate",
                        "This is a very long description that should also truncate when it reaches the end of the container width to prevent text overflow and maintain clean layout",
                    )
                    .media(MediaType::Avatar, AVATAR_URL),
                )
                .control(Some(ControlType::Checkbox)),
            )
            .class("max-w-[300px]"),
        ],
        true,
    );

    let body = div()
        .class("bg-white rounded-lg shadow-sm overflow-hidden")
        .child(basic)
        .child(controls)
        .child(states);
    sheet("Table Cell Demo", "max-w-4xl", body)
}

pub fn cell_page(_cx: &PageContext<'_>) -> Result<Node> {
    let (radio, checkbox, toggle) = (State::new(false), State::new(false), State::new(false));
    Ok(cell_demo(&radio, &checkbox, &toggle))
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("role", "Role").sortable(),
        TableColumn::new("status", "Status"),
        TableColumn::new("team", "Team").sortable(),
    ]
}

fn person(id: &str, name: &str, email: &str, img: u8, role: [&str; 2], status: [&str; 2], team: [&str; 2]) -> TableRow {
    TableRow::new(
        id,
        vec![
            cell(name, email).media(MediaType::Avatar, format!("{AVATAR_URL}?img={img}")),
            cell(role[0], role[1]),
            cell(status[0], status[1]),
            cell(team[0], team[1]).media(MediaType::Icon, ICON_URL),
        ],
    )
}

fn initial_rows() -> Vec<TableRow> {
    vec![
        person(
            "1",
            "Sarah Thompson",
            "sarah.t@example.com",
            1,
            ["Product Designer", "Design Team"],
            ["Active", "Last seen recently"],
            ["Design", "San Francisco"],
        ),
        person(
            "2",
            "James Wilson",
            "james.w@example.com",
            2,
            ["Frontend Developer", "Engineering"],
            ["In Meeting", "Until 3:30 PM"],
            ["Engineering", "London"],
        ),
        person(
            "3",
            "Linda Chen",
            "linda.c@example.com",
            3,
            ["Product Manager", "Product Team"],
            ["Offline", "Returns tomorrow"],
            ["Product", "Singapore"],
        ),
    ]
}

/// Rows, sort and selection shared by the three demo tables
#[derive(Clone)]
struct TableDemo {
    columns: Vec<TableColumn>,
    rows: State<Vec<TableRow>>,
    sort: State<SortState>,
    selected: State<Vec<String>>,
}

impl TableDemo {
    fn new() -> Self {
        Self {
            columns: columns(),
            rows: State::new(initial_rows()),
            sort: State::new(SortState::new("name")),
            selected: State::new(Vec::new()),
        }
    }

    fn sort_by(&self, column: &str) {
        let direction = self.sort.update(|s| s.toggle(column));
        let state = self.sort.get();
        self.rows.update(|rows| sort_rows(rows, &self.columns, &state));
        tracing::debug!(column, ?direction, "table sorted");
    }

    /// Radio tables hold one row at most; checkbox tables accumulate
    fn select(&self, control: ControlType, row: &str, selected: bool) {
        self.selected.update(|ids| {
            ids.retain(|id| id != row);
            if selected {
                if control == ControlType::Radio {
                    ids.clear();
                }
                ids.push(row.to_string());
            }
        });
    }

    fn table(&self, control: Option<ControlType>, id: &str) -> Table {
        let sorter = self.clone();
        let mut table = cn::table(self.columns.clone(), self.rows.get())
            .sort(self.sort.get())
            .selected_rows(self.selected.get())
            .test_id(id)
            .on_sort(move |column| sorter.sort_by(column));
        if let Some(control) = control {
            let selector = self.clone();
            table = table
                .control(control)
                .on_row_select(move |row, selected| selector.select(control, row, selected));
        }
        table
    }

    fn render(&self) -> Node {
        let block = |title: &str, table: Table| div().child(heading(title)).child(table);
        let body = div()
            .class("space-y-8")
            .child(block("Radio Selection", self.table(Some(ControlType::Radio), "table-radio")))
            .child(block("Checkbox Selection", self.table(Some(ControlType::Checkbox), "table-checkbox")))
            .child(block("No Selection", self.table(None, "table-plain")));
        sheet("Table Demo", "max-w-6xl", body)
    }
}

pub fn page(_cx: &PageContext<'_>) -> Result<Node> {
    Ok(TableDemo::new().render())
}

#[cfg(test)]
mod tests {
    use rayna_core::EventContext;

    use super::*;

    fn names(demo: &TableDemo) -> Vec<String> {
        demo.rows.get().iter().map(|r| r.cells[0].label.clone()).collect()
    }

    #[test]
    fn test_cycle_sort() {
        assert_eq!(cycle_sort(None), Some(SortDirection::Asc));
        assert_eq!(cycle_sort(Some(SortDirection::Asc)), Some(SortDirection::Desc));
        assert_eq!(cycle_sort(Some(SortDirection::Desc)), None);
    }

    #[test]
    fn test_header_sort_cycles() {
        let demo = HeaderDemo {
            sort: State::new(None),
            selected: State::new(false),
        };
        demo.render().dispatch("th-sort-sort", EventContext::click());
        assert_eq!(demo.sort.get(), Some(SortDirection::Asc));
        demo.render().dispatch("th-all-checkbox", EventContext::checked(true));
        assert!(demo.selected.get());
    }

    #[test]
    fn test_sorting_by_name_flips() {
        let demo = TableDemo::new();
        // "name" starts ascending, so the first click flips to descending
        assert!(demo.render().dispatch("table-plain-header-name-sort", EventContext::click()));
        assert_eq!(names(&demo), ["Sarah Thompson", "Linda Chen", "James Wilson"]);

        demo.render().dispatch("table-plain-header-role-sort", EventContext::click());
        assert_eq!(demo.sort.get().direction, SortDirection::Asc);
        assert_eq!(names(&demo), ["James Wilson", "Sarah Thompson", "Linda Chen"]);
    }

    #[test]
    fn test_status_column_not_sortable() {
        let demo = TableDemo::new();
        let node = demo.render();
        assert!(!node.dispatch("table-plain-header-status-sort", EventContext::click()));
        assert_eq!(demo.sort.get(), SortState::new("name"));
    }

    #[test]
    fn test_radio_selection_is_exclusive() {
        let demo = TableDemo::new();
        demo.select(ControlType::Radio, "1", true);
        demo.select(ControlType::Radio, "2", true);
        assert_eq!(demo.selected.get(), ["2"]);

        demo.select(ControlType::Checkbox, "3", true);
        assert_eq!(demo.selected.get(), ["2", "3"]);
        demo.select(ControlType::Checkbox, "2", false);
        assert_eq!(demo.selected.get(), ["3"]);
    }

    #[test]
    fn test_checkbox_row_select() {
        let demo = TableDemo::new();
        let node = demo.render();
        assert!(node.dispatch("table-checkbox-select-2", EventContext::checked(true)));
        assert_eq!(demo.selected.get(), ["2"]);
    }

    #[test]
    fn test_cell_controls_bound() {
        let (radio, checkbox, toggle) = (State::new(false), State::new(false), State::new(false));
        let node = cell_demo(&radio, &checkbox, &toggle);
        assert!(node.dispatch("cell-toggle", EventContext::checked(true)));
        assert!(toggle.get());
        assert!(!radio.get());
    }
}
