//! # Rayna Component Catalog (rayna_cn)
//!
//! The Rayna design-system widgets, built on `rayna_core` primitives.
//!
//! - **Primitives**: `rayna_core` provides the element tree, events, state and timers
//! - **Theme Tokens**: `rayna_theme` provides the color ramps and typography
//! - **Components**: `rayna_cn` bakes those tokens into utility-class strings
//!
//! ## Example
//!
//! ```ignore
//! use rayna_cn::prelude::*;
//!
//! cn::button("Save")
//!     .variant(ButtonVariant::Primary)
//!     .size(ButtonSize::Lg)
//!
//! cn::badge("Active").color(BadgeColor::Success)
//! ```
//!
//! Upload widgets and the toast provider need a [`rayna_core::SchedulerHandle`];
//! everything else is a plain builder.

pub mod components;
pub mod icons;

pub use components::*;
pub use icons::Icon;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::avatar::avatar;
    pub use crate::components::avatar_group::avatar_group;
    pub use crate::components::badge::badge;
    pub use crate::components::breadcrumb::breadcrumb;
    pub use crate::components::button::button;
    pub use crate::components::chip::chip;
    pub use crate::components::consultation_table::consultation_table;
    pub use crate::components::date_picker::date_picker;
    pub use crate::components::dropdown::dropdown;
    pub use crate::components::header::header;
    pub use crate::components::input::input;
    pub use crate::components::month_year_picker::month_year_picker;
    pub use crate::components::sidebar::sidebar;
    pub use crate::components::spinner::spinner;
    pub use crate::components::table::table;
    pub use crate::components::table_cell::table_cell;
    pub use crate::components::table_header::table_header;
    pub use crate::components::tabs::tabs;
    pub use crate::components::toast::toast;
    pub use crate::components::upload::{big_file_upload, file_upload, multi_file_upload};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::*;
    pub use crate::icons::Icon;
    pub use rayna_theme::{ColorToken, RaynaTheme};
}
