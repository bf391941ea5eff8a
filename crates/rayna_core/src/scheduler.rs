//! Timer scheduler
//!
//! Every time-based behavior in the catalog (simulated upload progress, toast
//! auto-dismiss, exit animations) runs on a `Scheduler` rather than on ad-hoc
//! threads or sleeps. The scheduler reads time from an injectable [`Clock`]:
//!
//! - [`SystemClock`] follows wall time; a host loop calls [`Scheduler::tick`]
//! - [`ManualClock`] is virtual; tests call [`Scheduler::advance`] to move it
//!
//! Timers fire in deadline order (ties in insertion order). A timer fired
//! during `tick` sees the scheduler's time pinned to its own deadline, so a
//! callback that schedules a follow-up timer gets a deterministic deadline.
//!
//! ```ignore
//! let clock = ManualClock::new();
//! let scheduler = Scheduler::with_clock(clock.clone());
//! let handle = scheduler.handle();
//!
//! handle.set_timeout(Duration::from_millis(400), || println!("done"));
//! scheduler.advance(Duration::from_millis(400));
//! ```

use slotmap::{new_key_type, SlotMap};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Shortest allowed interval period
const MIN_PERIOD: Duration = Duration::from_millis(1);

// ============================================================================
// Clocks
// ============================================================================

/// A monotonic time source measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since the clock was created
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual time that only moves when told to
///
/// Clones share the same underlying time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ============================================================================
// Scheduler
// ============================================================================

new_key_type! {
    /// Handle to a pending timer
    pub struct TimerId;
}

type TimerCallback = Box<dyn FnMut()>;

struct Timer {
    deadline: Duration,
    period: Option<Duration>,
    seq: u64,
    /// Taken out while the callback runs
    callback: Option<TimerCallback>,
}

/// Internal state of the scheduler
struct SchedulerInner {
    timers: SlotMap<TimerId, Timer>,
    clock: Rc<dyn Clock>,
    next_seq: u64,
    /// Deadline of the timer currently firing, if any
    firing_at: Option<Duration>,
}

impl SchedulerInner {
    fn now(&self) -> Duration {
        self.firing_at.unwrap_or_else(|| self.clock.now())
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, callback: TimerCallback) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = self.now() + delay;
        self.timers.insert(Timer {
            deadline,
            period,
            seq,
            callback: Some(callback),
        })
    }
}

/// Owns every pending timer for one UI tree
///
/// Components never hold the scheduler itself; they get a weak
/// [`SchedulerHandle`] so dropping the scheduler stops all timers.
pub struct Scheduler {
    inner: Rc<RefCell<SchedulerInner>>,
    manual: Option<ManualClock>,
}

impl Scheduler {
    /// Scheduler driven by wall time
    pub fn new() -> Self {
        Self::from_clock(Rc::new(SystemClock::new()), None)
    }

    /// Scheduler driven by a virtual clock
    pub fn with_clock(clock: ManualClock) -> Self {
        Self::from_clock(Rc::new(clock.clone()), Some(clock))
    }

    /// Scheduler driven by any clock implementation
    pub fn with_custom_clock(clock: impl Clock + 'static) -> Self {
        Self::from_clock(Rc::new(clock), None)
    }

    fn from_clock(clock: Rc<dyn Clock>, manual: Option<ManualClock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                timers: SlotMap::with_key(),
                clock,
                next_seq: 0,
                firing_at: None,
            })),
            manual,
        }
    }

    /// Weak handle for components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now()
    }

    pub fn set_timeout<F: FnMut() + 'static>(&self, delay: Duration, callback: F) -> TimerId {
        self.inner
            .borrow_mut()
            .insert(delay, None, Box::new(callback))
    }

    pub fn set_interval<F: FnMut() + 'static>(&self, period: Duration, callback: F) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.inner
            .borrow_mut()
            .insert(period, Some(period), Box::new(callback))
    }

    /// Cancel a timer; returns `false` when it already fired or was cleared
    pub fn clear(&self, id: TimerId) -> bool {
        self.inner.borrow_mut().timers.remove(id).is_some()
    }

    pub fn clear_all(&self) {
        self.inner.borrow_mut().timers.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(id)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner
            .borrow()
            .timers
            .values()
            .map(|t| t.deadline)
            .min()
    }

    /// Fire every timer that is due at the clock's current time
    ///
    /// Returns the number of callbacks run. Interval timers that fell behind
    /// fire once per elapsed period.
    pub fn tick(&self) -> usize {
        let now = self.inner.borrow().clock.now();
        let mut fired = 0;

        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .timers
                    .iter()
                    .filter(|(_, t)| t.deadline <= now && t.callback.is_some())
                    .min_by_key(|(_, t)| (t.deadline, t.seq))
                    .map(|(id, t)| (id, t.deadline))
            };
            let Some((id, deadline)) = next else {
                break;
            };

            let mut callback = {
                let mut inner = self.inner.borrow_mut();
                inner.firing_at = Some(deadline);
                inner.timers.get_mut(id).and_then(|t| t.callback.take())
            };

            tracing::trace!(?id, deadline_ms = deadline.as_millis() as u64, "timer fired");
            if let Some(cb) = callback.as_mut() {
                cb();
            }
            fired += 1;

            let mut inner = self.inner.borrow_mut();
            let seq = inner.next_seq;
            inner.next_seq += 1;
            // The callback may have cleared its own timer
            let finished = match inner.timers.get_mut(id) {
                Some(timer) => match timer.period {
                    Some(period) => {
                        timer.deadline = deadline + period;
                        timer.seq = seq;
                        timer.callback = callback;
                        false
                    }
                    None => true,
                },
                None => false,
            };
            if finished {
                inner.timers.remove(id);
            }
        }

        self.inner.borrow_mut().firing_at = None;
        fired
    }

    /// Move a manual clock forward and fire whatever became due
    ///
    /// With a non-manual clock this is equivalent to [`tick`](Self::tick).
    pub fn advance(&self, dt: Duration) -> usize {
        match &self.manual {
            Some(clock) => clock.advance(dt),
            None => tracing::warn!("advance() called on a scheduler without a manual clock"),
        }
        self.tick()
    }

    /// Advance until no timers remain or `limit` of virtual time passes
    pub fn run_until_idle(&self, limit: Duration) -> usize {
        let start = self.now();
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            if deadline > start + limit {
                break;
            }
            let dt = deadline.saturating_sub(self.now());
            fired += self.advance(dt);
        }
        fired
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the scheduler
///
/// Scheduling through a handle whose scheduler is gone is a no-op that
/// returns `None`.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle that is never alive
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn set_timeout<F: FnMut() + 'static>(&self, delay: Duration, callback: F) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().insert(delay, None, Box::new(callback)))
    }

    pub fn set_interval<F: FnMut() + 'static>(&self, period: Duration, callback: F) -> Option<TimerId> {
        let period = period.max(MIN_PERIOD);
        self.inner.upgrade().map(|inner| {
            inner
                .borrow_mut()
                .insert(period, Some(period), Box::new(callback))
        })
    }

    pub fn clear(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().timers.remove(id).is_some())
            .unwrap_or(false)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow().timers.contains_key(id))
            .unwrap_or(false)
    }

    pub fn now(&self) -> Option<Duration> {
        self.inner.upgrade().map(|inner| inner.borrow().now())
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn manual() -> (Scheduler, ManualClock) {
        let clock = ManualClock::new();
        (Scheduler::with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_timeout_fires_once_at_deadline() {
        let (scheduler, _) = manual();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        scheduler.set_timeout(ms(400), move || h.set(h.get() + 1));

        assert_eq!(scheduler.advance(ms(399)), 0);
        assert_eq!(scheduler.advance(ms(1)), 1);
        assert_eq!(scheduler.advance(ms(1000)), 0);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_interval_catches_up() {
        let (scheduler, _) = manual();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = scheduler.set_interval(ms(100), move || h.set(h.get() + 1));

        assert_eq!(scheduler.advance(ms(350)), 3);
        assert_eq!(hits.get(), 3);
        assert!(scheduler.is_pending(id));
        assert!(scheduler.clear(id));
        assert_eq!(scheduler.advance(ms(500)), 0);
    }

    #[test]
    fn test_fires_in_deadline_then_insertion_order() {
        let (scheduler, _) = manual();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, delay) in [("b", 200), ("a", 100), ("c", 200)] {
            let o = Rc::clone(&order);
            scheduler.set_timeout(ms(delay), move || o.borrow_mut().push(label));
        }
        scheduler.advance(ms(500));
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_callback_can_schedule_follow_up() {
        let (scheduler, _) = manual();
        let handle = scheduler.handle();
        let fired_at = Rc::new(Cell::new(Duration::ZERO));

        let f = Rc::clone(&fired_at);
        let h = handle.clone();
        scheduler.set_timeout(ms(100), move || {
            let f = Rc::clone(&f);
            let inner = h.clone();
            h.set_timeout(ms(400), move || {
                f.set(inner.now().unwrap_or_default());
            });
        });

        // Follow-up deadline is 100 + 400 = 500, within this advance
        scheduler.advance(ms(600));
        assert_eq!(fired_at.get(), ms(500));
    }

    #[test]
    fn test_interval_can_clear_itself() {
        let (scheduler, _) = manual();
        let handle = scheduler.handle();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));

        let c = Rc::clone(&count);
        let s = Rc::clone(&slot);
        let h = handle.clone();
        let id = scheduler.set_interval(ms(10), move || {
            c.set(c.get() + 1);
            if c.get() == 3 {
                if let Some(id) = s.get() {
                    h.clear(id);
                }
            }
        });
        slot.set(Some(id));

        scheduler.advance(ms(100));
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_dead_handle_is_noop() {
        let handle = {
            let (scheduler, _) = manual();
            scheduler.handle()
        };
        assert!(!handle.is_alive());
        assert!(handle.set_timeout(ms(1), || {}).is_none());
        assert!(SchedulerHandle::detached().now().is_none());
    }

    #[test]
    fn test_run_until_idle() {
        let (scheduler, clock) = manual();
        scheduler.set_timeout(ms(250), || {});
        scheduler.set_timeout(ms(900), || {});
        assert_eq!(scheduler.run_until_idle(Duration::from_secs(5)), 2);
        assert_eq!(clock.now(), ms(900));
    }
}
