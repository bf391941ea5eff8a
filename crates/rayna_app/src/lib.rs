//! Rayna Demo Application
//!
//! The catalog of demo pages behind a route table, rendered inside the
//! design-system shell.
//!
//! # Example
//!
//! ```ignore
//! use rayna_app::prelude::*;
//!
//! let app = RaynaApp::new(AppSettings::default());
//! let html = app.render_html("/badges", true, LinkMode::Path)?;
//!
//! app.export(Path::new("dist"), false)?;
//! ```

mod app;
mod error;
pub mod pages;
pub mod routes;
pub mod shell;

pub use app::{AppSettings, RaynaApp};
pub use error::{AppError, Result};
pub use routes::{Route, ROUTES};
pub use shell::{LinkMode, BRAND_TITLE};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{AppSettings, RaynaApp};
    pub use crate::error::{AppError, Result};
    pub use crate::routes::{nav_routes, Route, ROUTES};
    pub use crate::shell::LinkMode;
}
