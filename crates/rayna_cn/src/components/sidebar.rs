//! Application sidebar with primary and secondary navigation and a user card

use std::rc::Rc;

use rayna_core::{cx, div, el, p, span, Element, ElementBuilder, Node};

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const TOP_NAV: [NavItem; 5] = [
    NavItem { name: "Dashboard", href: "/dashboard", icon: Icon::Home },
    NavItem { name: "Consult a Doctor", href: "/consult", icon: Icon::Stethoscope },
    NavItem { name: "Appointments", href: "/appointments", icon: Icon::Calendar },
    NavItem { name: "Medical History", href: "/history", icon: Icon::History },
    NavItem { name: "My Hospitals", href: "/hospitals", icon: Icon::Hospital },
];

pub const BOTTOM_NAV: [NavItem; 3] = [
    NavItem { name: "Settings", href: "/settings", icon: Icon::Settings },
    NavItem { name: "Help Center", href: "/help", icon: Icon::Help },
    NavItem { name: "Refer family & friends", href: "/refer", icon: Icon::Gift },
];

pub const LOGOUT_PATH: &str = "/logout";

#[derive(Clone, Default)]
pub struct Sidebar {
    current_path: String,
    class: String,
    on_navigate: Option<Rc<dyn Fn(&str)>>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn on_navigate<F: Fn(&str) + 'static>(mut self, handler: F) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    pub fn is_active(&self, href: &str) -> bool {
        self.current_path == href
    }

    fn navigate_to(&self, element: Element, href: &'static str) -> Element {
        match &self.on_navigate {
            Some(handler) => {
                let handler = Rc::clone(handler);
                element.on_click(move |_| handler(href))
            }
            None => element,
        }
    }

    fn nav_link(&self, item: &NavItem) -> Element {
        let active = self.is_active(item.href);
        let link = el("a")
            .attr("href", item.href)
            .test_id(format!("sidebar-{}", item.href.trim_start_matches('/')))
            .attr_if(active, "aria-current", "page")
            .class("flex items-center px-4 py-3 rounded-md gap-3 transition-colors")
            .class(if active {
                "bg-[#FFECE5] text-[#F56630] font-medium"
            } else {
                "text-[#667185] hover:bg-gray-50"
            })
            .child(item.icon.render(20.0, "w-5 h-5"))
            .child(span().class("text-sm").text(item.name));
        self.navigate_to(link, item.href)
    }

    fn nav(&self, items: &[NavItem]) -> Element {
        el("nav")
            .class("space-y-1")
            .children(items.iter().map(|item| self.nav_link(item)))
    }

    fn user_card(&self) -> Element {
        let avatar = div()
            .class("relative")
            .child(
                div()
                    .class("w-10 h-10 rounded-full border-[1.5px] border-white overflow-hidden")
                    .child(
                        el("img")
                            .attr("src", "/images/avatar.png")
                            .attr("alt", "User Avatar")
                            .class("w-full h-full object-cover"),
                    ),
            )
            .child(div().class(
                "absolute bottom-0 right-0 w-2.5 h-2.5 bg-[#04802E] border-2 border-white rounded-full",
            ));
        let logout = el("button")
            .test_id("sidebar-logout")
            .attr("aria-label", "Sign Out")
            .class("p-2 hover:bg-gray-100 rounded-md transition-colors")
            .child(Icon::Logout.render(20.0, "w-5 h-5 text-[#667185]"));

        div().class("border-t border-[#F0F2F5] p-6").child(
            div()
                .class("flex items-center justify-between")
                .child(
                    div()
                        .class("flex items-center gap-3")
                        .child(avatar)
                        .child(
                            div()
                                .child(p().class("text-sm font-semibold text-[#101928]").text("David Fayemi"))
                                .child(p().class("text-sm text-[#475367]").text("David@rayna.ui")),
                        ),
                )
                .child(self.navigate_to(logout, LOGOUT_PATH)),
        )
    }
}

impl ElementBuilder for Sidebar {
    fn build(&self) -> Node {
        el("aside")
            .class(&cx([
                "w-[272px] bg-white border-r border-[#E4E7EC] flex flex-col h-screen",
                self.class.as_str(),
            ]))
            .child(
                div().class("px-6 py-2").child(
                    el("a")
                        .attr("href", "/")
                        .class("block")
                        .child(el("img").attr("src", "/logo.svg").attr("alt", "Rayna Logo").class("h-8")),
                ),
            )
            .child(
                div()
                    .class("px-2 mt-3 flex-1")
                    .child(self.nav(&TOP_NAV))
                    .child(div().class("h-px bg-[#F0F2F5] my-4 mx-2"))
                    .child(self.nav(&BOTTOM_NAV)),
            )
            .child(self.user_card())
            .into_node()
    }
}

pub fn sidebar() -> Sidebar {
    Sidebar::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::EventContext;
    use std::cell::RefCell;

    #[test]
    fn test_active_item_highlighted() {
        let node = sidebar().current_path("/consult").build();
        let consult = node.find_by_test_id("sidebar-consult").map(|e| e.has_class("bg-[#FFECE5]"));
        assert_eq!(consult, Some(true));
        let settings = node.find_by_test_id("sidebar-settings").map(|e| e.has_class("text-[#667185]"));
        assert_eq!(settings, Some(true));
        assert_eq!(node.find_all(&|e| e.get_attr("aria-current").is_some()).len(), 1);
    }

    #[test]
    fn test_navigate_and_logout() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visited);
        let node = sidebar()
            .on_navigate(move |path| sink.borrow_mut().push(path.to_string()))
            .build();
        assert!(node.dispatch("sidebar-appointments", EventContext::click()));
        assert!(node.dispatch("sidebar-logout", EventContext::click()));
        assert_eq!(*visited.borrow(), vec!["/appointments".to_string(), "/logout".to_string()]);
    }

    #[test]
    fn test_without_handler_links_are_inert() {
        let node = sidebar().build();
        assert!(!node.dispatch("sidebar-dashboard", EventContext::click()));
        assert_eq!(node.find_all(&|e| e.tag() == "a" && e.get_attr("href") != Some("/")).len(), 8);
    }
}
