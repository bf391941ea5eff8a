//! Breadcrumb trail
//!
//! There is no router here, so the current path is passed in. The item whose
//! path matches it is highlighted.

use rayna_core::{cx, el, span, ElementBuilder, Node};

use crate::icons::Icon;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub path: String,
    pub icon: Option<Icon>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
    current_path: String,
    class: String,
}

impl Breadcrumb {
    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn is_active(&self, item: &BreadcrumbItem) -> bool {
        item.path == self.current_path
    }
}

impl ElementBuilder for Breadcrumb {
    fn build(&self) -> Node {
        let last = self.items.len().saturating_sub(1);
        let mut nav = el("nav")
            .class(&cx(["flex items-center", self.class.as_str()]))
            .attr("aria-label", "Breadcrumb");

        for (index, item) in self.items.iter().enumerate() {
            let active = self.is_active(item);
            let color = if active {
                "text-[#EB5017]"
            } else {
                "text-[#667185] hover:text-[#F77A4A]"
            };
            let link = el("a")
                .attr("href", item.path.clone())
                .attr_if(active, "aria-current", "page")
                .class("inline-flex items-center gap-1 px-2 py-1.5 rounded transition-colors duration-200")
                .class(color)
                .child_opt(item.icon.map(|icon| {
                    span()
                        .class(if active {
                            "text-[#EB5017]"
                        } else {
                            "text-[#667185] group-hover:text-[#F77A4A]"
                        })
                        .child(icon.render(16.0, "w-4 h-4"))
                }))
                .child(span().class("text-sm font-medium").text(item.label.clone()));
            nav = nav.child(link);
            if index != last {
                nav = nav.child(span().class("text-[#98A2B3] mx-2 select-none").text("/"));
            }
        }
        nav.into_node()
    }
}

pub fn breadcrumb(items: Vec<BreadcrumbItem>) -> Breadcrumb {
    Breadcrumb::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> Breadcrumb {
        breadcrumb(vec![
            BreadcrumbItem::new("Home", "/").icon(Icon::Home),
            BreadcrumbItem::new("Patients", "/patients"),
            BreadcrumbItem::new("Consult", "/consult"),
        ])
    }

    #[test]
    fn test_separators_between_items() {
        let node = trail().build();
        assert_eq!(node.text_content(), "Home/Patients/Consult");
        let seps = node.find_all(&|e| e.has_class("select-none"));
        assert_eq!(seps.len(), 2);
    }

    #[test]
    fn test_active_item() {
        let node = trail().current_path("/patients").build();
        let active = node.find(&|e| e.get_attr("aria-current") == Some("page")).unwrap();
        assert_eq!(active.get_attr("href"), Some("/patients"));
        assert!(active.has_class("text-[#EB5017]"));
    }
}
