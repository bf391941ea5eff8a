//! The `DesignSystem` shell: brand bar, route navigation and the page slot

use rayna_core::node::escape;
use rayna_core::{div, el, span, ElementBuilder, Node};
use rayna_theme::{ColorToken, RaynaTheme};

use crate::routes::{nav_routes, Route};

pub const BRAND_TITLE: &str = "Rayna UI Design System";

const NAV_LINK: &str = "px-4 py-2 text-sm text-gray-800 font-inter font-medium hover:text-[#EB5017] hover:bg-[#FFECE5] rounded-md transition-colors duration-200 whitespace-nowrap";

/// How navigation links address pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Router paths such as `/avatars`
    #[default]
    Path,
    /// Exported file names such as `avatars.html`
    File,
}

impl LinkMode {
    pub fn href(&self, route: &Route) -> String {
        match self {
            LinkMode::Path => route.path.to_string(),
            LinkMode::File => route.file_name(),
        }
    }
}

/// Wrap a page body in the navigation shell
pub fn design_system(current_path: &str, body: impl ElementBuilder, links: LinkMode) -> Node {
    let nav_links = nav_routes().map(|route| {
        let active = route.path == current_path;
        el("a")
            .attr("href", links.href(route))
            .attr_if(active, "aria-current", "page")
            .class(NAV_LINK)
            .class_if(active, "text-[#EB5017] bg-[#FFECE5]")
            .text(route.title)
    });

    div()
        .class("h-screen flex flex-col")
        .child(
            el("nav")
                .class("bg-gray-50 py-4 px-6 border-b border-gray-200 flex-none")
                .child(
                    div().class("max-w-7xl mx-auto").child(
                        div()
                            .class("flex items-center justify-between")
                            .child(
                                span()
                                    .class("text-[#EB5017] font-inter font-semibold text-xl")
                                    .text(BRAND_TITLE),
                            )
                            .child(div().class("flex items-center gap-1 overflow-x-auto").children(nav_links)),
                    ),
                ),
        )
        .child(div().class("flex-1 flex overflow-hidden").child(body))
        .into_node()
}

/// A standalone HTML document around rendered markup
pub fn document(title: &str, markup: &str) -> String {
    let theme = RaynaTheme::light();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <meta name=\"theme-color\" content=\"{brand}\">\n\
         <title>{title} | Rayna UI</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n</head>\n\
         <body style=\"font-family: {font}, sans-serif\">\n{markup}\n</body>\n</html>\n",
        brand = theme.color(ColorToken::Primary).to_hex(),
        title = escape(title),
        font = theme.typography.font_sans,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::text;

    #[test]
    fn test_nav_lists_routes_and_marks_active() {
        let node = design_system("/badges", text("body"), LinkMode::Path);
        let links = node.find_all(&|e| e.tag() == "a");
        assert_eq!(links.len(), 20);
        let active: Vec<_> = node.find_all(&|e| e.get_attr("aria-current") == Some("page"));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attr("href"), Some("/badges"));
        assert!(node.text_content().contains(BRAND_TITLE));
    }

    #[test]
    fn test_file_links() {
        let node = design_system("/", text(""), LinkMode::File);
        let first = node.find(&|e| e.tag() == "a").and_then(|e| e.get_attr("href"));
        assert_eq!(first, Some("buttons.html"));
    }

    #[test]
    fn test_document_wraps_markup() {
        let html = document("Tabs & more", "<div></div>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tabs &amp; more | Rayna UI</title>"));
        assert!(html.contains("#EB5017"));
    }
}
