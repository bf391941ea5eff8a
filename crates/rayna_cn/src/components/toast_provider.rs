//! Toast queue scoped to a provider
//!
//! A [`ToastProvider`] is installed into a [`Context`]; anything holding that
//! context gets a [`ToastHandle`] through [`use_toast`]. Each toast has an
//! auto-dismiss timer (unless its duration is 0) and, once dismissed, an exit
//! timer that removes it after the slide-out animation. Dropping the provider
//! clears both.
//!
//! ```ignore
//! let mut ctx = Context::new();
//! ToastProvider::install(&mut ctx, scheduler.handle());
//!
//! let toasts = use_toast(&ctx)?;
//! let id = toasts.show_toast(ToastOptions::new("Saved").toast_type(ToastType::Success));
//! toasts.dismiss(id);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rayna_core::{div, Context, ElementBuilder, Node, Result, SchedulerHandle, TimerId};

use super::toast::{Toast, ToastType};

/// How long an exiting toast stays mounted for its slide-out
pub const EXIT_DELAY: Duration = Duration::from_millis(400);

/// Auto-dismiss delay when none is given
pub const DEFAULT_DURATION_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Arguments to [`ToastHandle::show_toast`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    /// Milliseconds until auto-dismiss; 0 keeps the toast until dismissed
    pub duration_ms: u64,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            toast_type: ToastType::default(),
            title: title.into(),
            message: None,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = toast_type;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// A toast currently in the queue
#[derive(Clone, Debug)]
pub struct ToastEntry {
    pub id: ToastId,
    pub options: ToastOptions,
    /// Dismissed and waiting for the exit delay
    pub exiting: bool,
    dismiss_timer: Option<TimerId>,
    exit_timer: Option<TimerId>,
}

#[derive(Default)]
struct ToastRegistry {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastRegistry {
    fn entry_mut(&mut self, id: ToastId) -> Option<&mut ToastEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

/// Mark `id` as exiting and schedule its removal
fn begin_dismiss(registry: &Rc<RefCell<ToastRegistry>>, scheduler: &SchedulerHandle, id: ToastId) -> bool {
    let pending = {
        let mut reg = registry.borrow_mut();
        let Some(entry) = reg.entry_mut(id) else {
            tracing::debug!(%id, "dismiss for unknown toast");
            return false;
        };
        if entry.exiting {
            return false;
        }
        entry.exiting = true;
        entry.dismiss_timer.take()
    };
    if let Some(timer) = pending {
        scheduler.clear(timer);
    }

    let weak = Rc::downgrade(registry);
    let exit_timer = scheduler.set_timeout(EXIT_DELAY, move || {
        if let Some(registry) = weak.upgrade() {
            registry.borrow_mut().entries.retain(|e| e.id != id);
            tracing::debug!(%id, "toast removed");
        }
    });
    if let Some(entry) = registry.borrow_mut().entry_mut(id) {
        entry.exit_timer = exit_timer;
    }
    tracing::debug!(%id, "toast exiting");
    true
}

/// Owns the toast queue for one UI tree
pub struct ToastProvider {
    registry: Rc<RefCell<ToastRegistry>>,
    scheduler: SchedulerHandle,
}

impl ToastProvider {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            registry: Rc::new(RefCell::new(ToastRegistry::default())),
            scheduler,
        }
    }

    /// Create a provider and make it available to [`use_toast`] on `ctx`
    pub fn install(ctx: &mut Context, scheduler: SchedulerHandle) -> Rc<ToastProvider> {
        ctx.provide(Self::new(scheduler))
    }

    pub fn show_toast(&self, options: ToastOptions) -> ToastId {
        let duration = options.duration_ms;
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = ToastId(reg.next_id);
            reg.next_id += 1;
            reg.entries.push(ToastEntry {
                id,
                options,
                exiting: false,
                dismiss_timer: None,
                exit_timer: None,
            });
            id
        };

        if duration > 0 {
            let weak: Weak<RefCell<ToastRegistry>> = Rc::downgrade(&self.registry);
            let scheduler = self.scheduler.clone();
            let timer = self
                .scheduler
                .set_timeout(Duration::from_millis(duration), move || {
                    if let Some(registry) = weak.upgrade() {
                        begin_dismiss(&registry, &scheduler, id);
                    }
                });
            if let Some(entry) = self.registry.borrow_mut().entry_mut(id) {
                entry.dismiss_timer = timer;
            }
        }

        tracing::debug!(%id, duration_ms = duration, "toast shown");
        id
    }

    /// Start the exit animation for `id`
    ///
    /// Returns `false` for unknown or already-exiting toasts.
    pub fn dismiss(&self, id: ToastId) -> bool {
        begin_dismiss(&self.registry, &self.scheduler, id)
    }

    /// Snapshot of the queue in insertion order
    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.registry.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().entries.is_empty()
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        let reg = self.registry.borrow();
        for entry in &reg.entries {
            for timer in [entry.dismiss_timer, entry.exit_timer].into_iter().flatten() {
                self.scheduler.clear(timer);
            }
        }
        tracing::debug!(remaining = reg.entries.len(), "toast provider dropped");
    }
}

impl ElementBuilder for ToastProvider {
    /// The fixed top-right stack of active toasts
    fn build(&self) -> Node {
        let items: Vec<_> = self
            .toasts()
            .into_iter()
            .map(|entry| {
                let weak = Rc::downgrade(&self.registry);
                let scheduler = self.scheduler.clone();
                let id = entry.id;
                div()
                    .class("transform-gpu")
                    .class(if entry.exiting {
                        "animate-slide-out"
                    } else {
                        "animate-slide-in"
                    })
                    .attr("data-toast-id", id.to_string())
                    .style("will-change", "transform, opacity")
                    .child(
                        Toast::new(entry.options.title)
                            .toast_type(entry.options.toast_type)
                            .message(entry.options.message)
                            .close_test_id(format!("{id}-close"))
                            .on_close(move || {
                                if let Some(registry) = weak.upgrade() {
                                    begin_dismiss(&registry, &scheduler, id);
                                }
                            }),
                    )
            })
            .collect();

        div()
            .class("fixed top-4 right-4 z-50 flex flex-col items-end gap-3")
            .style("max-height", "100vh")
            .style("max-width", "100vw")
            .style("overflow", "hidden")
            .children(items)
            .into_node()
    }
}

/// Access to the nearest [`ToastProvider`]
#[derive(Clone)]
pub struct ToastHandle {
    provider: Rc<ToastProvider>,
}

impl ToastHandle {
    pub fn show_toast(&self, options: ToastOptions) -> ToastId {
        self.provider.show_toast(options)
    }

    pub fn dismiss(&self, id: ToastId) -> bool {
        self.provider.dismiss(id)
    }

    pub fn toasts(&self) -> Vec<ToastEntry> {
        self.provider.toasts()
    }
}

/// Fails with `MissingProvider` when no [`ToastProvider`] was installed
pub fn use_toast(ctx: &Context) -> Result<ToastHandle> {
    let provider = ctx.require::<ToastProvider>("useToast", "ToastProvider")?;
    Ok(ToastHandle { provider })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_core::{Error, EventContext, ManualClock, Scheduler};

    fn setup() -> (Scheduler, Context) {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let mut ctx = Context::new();
        ToastProvider::install(&mut ctx, scheduler.handle());
        (scheduler, ctx)
    }

    fn titles(handle: &ToastHandle) -> Vec<String> {
        handle.toasts().into_iter().map(|t| t.options.title).collect()
    }

    #[test]
    fn test_missing_provider() {
        let ctx = Context::new();
        let err = use_toast(&ctx).err().unwrap();
        assert!(matches!(err, Error::MissingProvider { .. }));
        assert_eq!(err.to_string(), "useToast must be used within a ToastProvider");
    }

    #[test]
    fn test_insertion_order() {
        let (_scheduler, ctx) = setup();
        let toasts = use_toast(&ctx).unwrap();
        for title in ["a", "b", "c"] {
            toasts.show_toast(ToastOptions::new(title));
        }
        assert_eq!(titles(&toasts), vec!["a", "b", "c"]);
        assert_eq!(toasts.toasts()[0].options.toast_type, ToastType::Information);
    }

    #[test]
    fn test_dismiss_removes_only_target_after_exit_delay() {
        let (scheduler, ctx) = setup();
        let toasts = use_toast(&ctx).unwrap();
        toasts.show_toast(ToastOptions::new("a").duration_ms(0));
        let b = toasts.show_toast(ToastOptions::new("b").duration_ms(0));

        assert!(toasts.dismiss(b));
        assert!(!toasts.dismiss(b));
        assert!(toasts.toasts()[1].exiting);

        scheduler.advance(Duration::from_millis(399));
        assert_eq!(titles(&toasts), vec!["a", "b"]);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(titles(&toasts), vec!["a"]);
    }

    #[test]
    fn test_auto_dismiss() {
        let (scheduler, ctx) = setup();
        let toasts = use_toast(&ctx).unwrap();
        toasts.show_toast(ToastOptions::new("auto"));

        scheduler.advance(Duration::from_millis(4999));
        assert!(!toasts.toasts()[0].exiting);
        scheduler.advance(Duration::from_millis(1));
        assert!(toasts.toasts()[0].exiting);
        scheduler.advance(EXIT_DELAY);
        assert!(toasts.toasts().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_zero_duration_persists() {
        let (scheduler, ctx) = setup();
        let toasts = use_toast(&ctx).unwrap();
        toasts.show_toast(ToastOptions::new("sticky").duration_ms(0));
        assert_eq!(scheduler.pending_count(), 0);
        scheduler.advance(Duration::from_secs(60));
        assert_eq!(toasts.toasts().len(), 1);
    }

    #[test]
    fn test_manual_dismiss_cancels_auto_timer() {
        let (scheduler, ctx) = setup();
        let toasts = use_toast(&ctx).unwrap();
        let id = toasts.show_toast(ToastOptions::new("x"));
        toasts.dismiss(id);
        // only the exit timer is left
        assert_eq!(scheduler.pending_count(), 1);
        scheduler.advance(EXIT_DELAY);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!toasts.dismiss(id));
    }

    #[test]
    fn test_close_button_dismisses() {
        let (_scheduler, ctx) = setup();
        let provider = ctx.get::<ToastProvider>().unwrap();
        let id = provider.show_toast(ToastOptions::new("closable"));

        let node = provider.build();
        assert!(node.to_html().contains("animate-slide-in"));
        assert!(node.dispatch(&format!("{id}-close"), EventContext::click()));
        assert!(provider.build().to_html().contains("animate-slide-out"));
    }

    #[test]
    fn test_drop_clears_timers() {
        let (scheduler, ctx) = setup();
        {
            let toasts = use_toast(&ctx).unwrap();
            toasts.show_toast(ToastOptions::new("a"));
            let b = toasts.show_toast(ToastOptions::new("b"));
            toasts.dismiss(b);
        }
        assert_eq!(scheduler.pending_count(), 2);
        drop(ctx);
        assert_eq!(scheduler.pending_count(), 0);
    }
}
