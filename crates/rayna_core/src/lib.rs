//! Rayna Core
//!
//! The runtime pieces shared by every Rayna component:
//!
//! - **Element tree**: [`Node`]/[`Element`] with classes, styles, handlers and
//!   HTML serialization
//! - **Events**: [`EventContext`] dispatch for simulated interactions
//! - **Provider context**: typed, explicitly passed provider scopes
//! - **Scheduler**: timers on an injectable clock, virtual in tests
//! - **State**: shared mutable state for interactive components
//! - **Colors** and **class lists** used by the design tokens

pub mod class;
pub mod color;
pub mod context;
pub mod error;
pub mod event;
pub mod node;
pub mod scheduler;
pub mod state;

pub use class::{cx, ClassList};
pub use color::Color;
pub use context::Context;
pub use error::{Error, Result};
pub use event::{EventCallback, EventContext, EventHandlers, EventKind, FileInfo};
pub use node::{circle, div, el, p, path, raw, span, svg, text, Element, ElementBuilder, Node};
pub use scheduler::{Clock, ManualClock, Scheduler, SchedulerHandle, SystemClock, TimerId};
pub use state::State;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::class::{cx, ClassList};
    pub use crate::color::Color;
    pub use crate::context::Context;
    pub use crate::event::{EventContext, EventKind, FileInfo};
    pub use crate::node::{
        circle, div, el, p, path, raw, span, svg, text, Element, ElementBuilder, Node,
    };
    pub use crate::scheduler::{ManualClock, Scheduler, SchedulerHandle};
    pub use crate::state::State;
}
