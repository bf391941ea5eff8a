//! Route table mapping paths to demo pages

use std::fmt;

use rayna_core::{Error, Node};
use serde::Serialize;

use crate::error::Result;
use crate::pages::{self, PageContext};

/// Renders one page body
pub type PageFn = fn(&PageContext<'_>) -> Result<Node>;

#[derive(Clone, Copy, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub title: &'static str,
    /// Listed in the shell's navigation bar
    pub in_nav: bool,
    #[serde(skip)]
    pub render: PageFn,
}

impl Route {
    const fn nav(path: &'static str, title: &'static str, render: PageFn) -> Self {
        Self {
            path,
            title,
            in_nav: true,
            render,
        }
    }

    /// File name used when exporting, e.g. `/avatar-groups` -> `avatar-groups.html`
    pub fn file_name(&self) -> String {
        match self.path.trim_matches('/') {
            "" => format!("{}.html", self.title.to_lowercase().replace(' ', "-")),
            slug => format!("{slug}.html"),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("title", &self.title)
            .field("in_nav", &self.in_nav)
            .finish()
    }
}

pub static ROUTES: [Route; 21] = [
    Route::nav("/", "Buttons", pages::buttons::page),
    Route::nav("/avatars", "Avatars", pages::avatars::page),
    Route::nav("/avatar-groups", "Avatar Groups", pages::avatars::group_page),
    Route::nav("/badges", "Badges", pages::badges::page),
    Route::nav("/chips", "Chips", pages::chips::page),
    Route::nav("/inputs", "Inputs", pages::inputs::page),
    Route::nav("/spinners", "Spinners", pages::spinners::page),
    Route::nav("/tabs", "Tabs", pages::tabs::page),
    Route::nav("/breadcrumbs", "Breadcrumbs", pages::breadcrumbs::page),
    Route::nav("/toasts", "Toasts", pages::toasts::page),
    Route::nav("/small-file-upload", "Small File Upload", pages::uploads::small_page),
    Route::nav("/big-file-upload", "Big File Upload", pages::uploads::big_page),
    Route::nav("/multi-file-upload", "Multi-File Upload", pages::uploads::multi_page),
    Route::nav("/date-picker", "Date Picker", pages::date_picker::page),
    Route::nav("/dropdowns", "Dropdowns", pages::dropdowns::page),
    Route::nav("/headers", "Headers", pages::headers::page),
    Route::nav("/sidebars", "Sidebars", pages::sidebars::page),
    Route::nav("/table-headers", "Table Headers", pages::tables::header_page),
    Route::nav("/table-cells", "Table Cells", pages::tables::cell_page),
    Route::nav("/tables", "Tables", pages::tables::page),
    Route {
        path: "/consult",
        title: "Consult a Doctor",
        in_nav: false,
        render: pages::consult::page,
    },
];

/// Look up a route by exact path
pub fn find(path: &str) -> rayna_core::Result<&'static Route> {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .ok_or_else(|| Error::RouteNotFound(path.to_string()))
}

pub fn nav_routes() -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().filter(|route| route.in_nav)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_table() {
        assert_eq!(nav_routes().count(), 20);
        assert_eq!(find("/multi-file-upload").map(|r| r.title).ok(), Some("Multi-File Upload"));
        assert!(find("/consult").is_ok_and(|r| !r.in_nav));
        assert!(matches!(find("/nope"), Err(Error::RouteNotFound(p)) if p == "/nope"));
    }

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<String> = ROUTES.iter().map(Route::file_name).collect();
        assert_eq!(names.len(), ROUTES.len());
        assert!(names.contains("buttons.html"));
        assert!(!names.contains("index.html"));
    }

    #[test]
    fn test_route_metadata_serializes() {
        let json = serde_json::to_value(&ROUTES[1]).unwrap();
        assert_eq!(json["path"], "/avatars");
        assert_eq!(json["title"], "Avatars");
        assert!(json.get("render").is_none());
    }
}
