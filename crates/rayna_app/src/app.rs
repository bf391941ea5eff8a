//! The catalog application: scheduler, provider context and rendering

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use rayna_cn::components::toast_provider::DEFAULT_DURATION_MS;
use rayna_cn::upload::MAX_UPLOAD_SIZE;
use rayna_cn::ToastProvider;
use rayna_core::{div, el, Context, ElementBuilder, Node, Scheduler};

use crate::error::{AppError, Result};
use crate::pages::PageContext;
use crate::routes::{self, ROUTES};
use crate::shell::{design_system, document, LinkMode, BRAND_TITLE};

/// Knobs the host (usually the CLI config) passes down to the pages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSettings {
    /// Upload size limit in bytes
    pub max_upload_size: u64,
    /// Auto-dismiss delay for toasts shown by the demos
    pub toast_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            max_upload_size: MAX_UPLOAD_SIZE,
            toast_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Owns the timer scheduler and the provider context for one catalog instance
pub struct RaynaApp {
    settings: AppSettings,
    today: NaiveDate,
    toasts: Rc<ToastProvider>,
    context: Context,
    scheduler: Scheduler,
}

impl RaynaApp {
    /// Application on wall-clock time
    pub fn new(settings: AppSettings) -> Self {
        Self::with_scheduler(Scheduler::new(), settings)
    }

    /// Application on a caller-supplied scheduler (virtual time in tests)
    pub fn with_scheduler(scheduler: Scheduler, settings: AppSettings) -> Self {
        let mut context = Context::new();
        let toasts = ToastProvider::install(&mut context, scheduler.handle());
        Self {
            settings,
            today: Local::now().date_naive(),
            toasts,
            context,
            scheduler,
        }
    }

    /// Pin the date the date-picker demos treat as today
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn toasts(&self) -> &Rc<ToastProvider> {
        &self.toasts
    }

    fn page_context(&self) -> PageContext<'_> {
        PageContext {
            context: &self.context,
            scheduler: self.scheduler.handle(),
            settings: &self.settings,
            today: self.today,
        }
    }

    /// Render the body of the page at `path`
    pub fn render(&self, path: &str) -> Result<Node> {
        let route = routes::find(path)?;
        tracing::debug!(path, title = route.title, "rendering page");
        (route.render)(&self.page_context())
    }

    /// Render the page inside the shell, with the live toast stack on top
    pub fn render_page(&self, path: &str, links: LinkMode) -> Result<Node> {
        let body = self.render(path)?;
        Ok(div()
            .child(design_system(path, body, links))
            .child(self.toasts.build())
            .into_node())
    }

    /// Full HTML document for the page at `path`
    pub fn render_html(&self, path: &str, pretty: bool, links: LinkMode) -> Result<String> {
        let route = routes::find(path)?;
        let node = self.render_page(path, links)?;
        let markup = if pretty { node.to_html_pretty() } else { node.to_html() };
        Ok(document(route.title, &markup))
    }

    /// Index listing every route
    pub fn render_index(&self, links: LinkMode) -> Node {
        let list = el("ul").class("space-y-2 p-8").children(ROUTES.iter().map(|route| {
            el("li").child(
                el("a")
                    .attr("href", links.href(route))
                    .class("text-sm font-medium text-[#101928] hover:text-[#EB5017]")
                    .text(route.title),
            )
        }));
        design_system("", list, links)
    }

    /// Write one HTML file per route plus `index.html` into `dir`
    pub fn export(&self, dir: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
        create_dir(dir)?;
        let mut written = Vec::with_capacity(ROUTES.len() + 1);
        for route in ROUTES.iter() {
            let html = self.render_html(route.path, pretty, LinkMode::File)?;
            written.push(write_file(&dir.join(route.file_name()), &html)?);
        }

        let index = self.render_index(LinkMode::File);
        let markup = if pretty { index.to_html_pretty() } else { index.to_html() };
        written.push(write_file(&dir.join("index.html"), &document(BRAND_TITLE, &markup))?);
        tracing::info!(dir = %dir.display(), files = written.len(), "catalog exported");
        Ok(written)
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AppError::Export {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf> {
    fs::write(path, contents).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "page written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayna_cn::ToastOptions;
    use rayna_core::ManualClock;
    use std::time::Duration;

    fn app() -> RaynaApp {
        RaynaApp::with_scheduler(Scheduler::with_clock(ManualClock::new()), AppSettings::default())
            .today(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
    }

    #[test]
    fn test_every_route_renders() {
        let app = app();
        for route in ROUTES.iter() {
            let html = app.render_html(route.path, false, LinkMode::Path).unwrap();
            assert!(html.len() > 500, "{} rendered too little", route.path);
            assert!(html.contains(BRAND_TITLE));
        }
    }

    #[test]
    fn test_unknown_route() {
        let err = app().render("/missing").unwrap_err();
        assert!(err.is_route_not_found());
        assert_eq!(err.to_string(), "no route registered for `/missing`");
    }

    #[test]
    fn test_toast_stack_in_page() {
        let app = app();
        app.toasts().show_toast(ToastOptions::new("Saved").duration_ms(1000));
        let html = app.render_html("/toasts", false, LinkMode::Path).unwrap();
        assert!(html.contains("Saved"));
        app.scheduler().advance(Duration::from_millis(1500));
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn test_drop_releases_scheduler() {
        let scheduler = Scheduler::with_clock(ManualClock::new());
        let handle = scheduler.handle();
        let app = RaynaApp::with_scheduler(scheduler, AppSettings::default());
        app.toasts().show_toast(ToastOptions::new("Bye"));
        assert_eq!(app.scheduler().pending_count(), 1);
        drop(app);
        assert!(!handle.is_alive());
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = std::env::temp_dir().join(format!("rayna-export-{}", std::process::id()));
        let written = app().export(&dir, true).unwrap();
        assert_eq!(written.len(), ROUTES.len() + 1);
        assert!(dir.join("index.html").exists());
        assert!(dir.join("avatar-groups.html").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
