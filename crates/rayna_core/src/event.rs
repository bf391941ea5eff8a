//! Event handler storage for elements
//!
//! Handlers are attached while building an element tree and invoked through
//! [`Node::dispatch`](crate::node::Node::dispatch). The UI is single-threaded,
//! so callbacks are `Rc` rather than `Arc`.

use std::fmt;
use std::rc::Rc;

/// The kinds of events an element can listen for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Focus,
    Blur,
    MouseEnter,
    MouseLeave,
    DragOver,
    DragLeave,
    Drop,
}

impl EventKind {
    /// The DOM attribute name used when annotating rendered markup
    pub fn attr_name(&self) -> &'static str {
        match self {
            EventKind::Click => "onclick",
            EventKind::Input => "oninput",
            EventKind::Change => "onchange",
            EventKind::Focus => "onfocus",
            EventKind::Blur => "onblur",
            EventKind::MouseEnter => "onmouseenter",
            EventKind::MouseLeave => "onmouseleave",
            EventKind::DragOver => "ondragover",
            EventKind::DragLeave => "ondragleave",
            EventKind::Drop => "ondrop",
        }
    }
}

/// A file handed to a picker or drop zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type, e.g. `image/png`
    pub mime: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }
}

/// Context passed to event handlers
#[derive(Clone, Debug)]
pub struct EventContext {
    pub kind: EventKind,
    /// Text value for INPUT / CHANGE events
    pub value: Option<String>,
    /// Checked state for checkbox / radio / toggle CHANGE events
    pub checked: Option<bool>,
    /// Files for CHANGE (file inputs) and DROP events
    pub files: Vec<FileInfo>,
}

impl EventContext {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            value: None,
            checked: None,
            files: Vec::new(),
        }
    }

    pub fn click() -> Self {
        Self::new(EventKind::Click)
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self::new(EventKind::Input).with_value(value)
    }

    pub fn checked(checked: bool) -> Self {
        let mut ctx = Self::new(EventKind::Change);
        ctx.checked = Some(checked);
        ctx
    }

    pub fn files(kind: EventKind, files: Vec<FileInfo>) -> Self {
        let mut ctx = Self::new(kind);
        ctx.files = files;
        ctx
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Callback for handling events
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Handlers registered on a single element
#[derive(Clone, Default)]
pub struct EventHandlers {
    handlers: Vec<(EventKind, EventCallback)>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.push((kind, Rc::new(handler)));
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.iter().any(|(k, _)| *k == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.handlers.iter().map(|(k, _)| *k)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke every handler for `ctx.kind`, returning how many ran
    pub fn dispatch(&self, ctx: &EventContext) -> usize {
        let matching: Vec<EventCallback> = self
            .handlers
            .iter()
            .filter(|(k, _)| *k == ctx.kind)
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in &matching {
            callback(ctx);
        }
        matching.len()
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_only_matching_kind() {
        let clicks = Rc::new(Cell::new(0));
        let mut handlers = EventHandlers::new();
        let c = Rc::clone(&clicks);
        handlers.on(EventKind::Click, move |_| c.set(c.get() + 1));
        handlers.on(EventKind::Focus, |_| panic!("focus should not fire"));

        assert_eq!(handlers.dispatch(&EventContext::click()), 1);
        assert_eq!(clicks.get(), 1);
        assert!(handlers.has_handler(EventKind::Focus));
        assert!(!handlers.has_handler(EventKind::Drop));
    }

    #[test]
    fn test_event_payloads() {
        let ctx = EventContext::input("hello");
        assert_eq!(ctx.value.as_deref(), Some("hello"));

        let file = FileInfo::new("a.png", 10, "image/png");
        let ctx = EventContext::files(EventKind::Drop, vec![file.clone()]);
        assert_eq!(ctx.files, vec![file]);
        assert_eq!(EventContext::checked(true).checked, Some(true));
    }
}
