//! Provider context
//!
//! A `Context` is a typed map of provider values handed down explicitly to
//! everything rendered beneath a provider. There is no global registry, so two
//! independent trees (for example two tests) never observe each other's
//! providers.
//!
//! ```ignore
//! let mut ctx = Context::new();
//! ctx.provide(ToastProvider::new(scheduler.handle()));
//!
//! let toasts = ctx.require::<ToastProvider>("useToast", "ToastProvider")?;
//! ```

use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A scope of provider values keyed by type
#[derive(Clone, Default)]
pub struct Context {
    providers: FxHashMap<TypeId, Rc<dyn Any>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a provider, replacing any previous value of the same type
    pub fn provide<T: 'static>(&mut self, value: T) -> Rc<T> {
        let value = Rc::new(value);
        self.provide_rc(Rc::clone(&value));
        value
    }

    /// Install an already shared provider
    pub fn provide_rc<T: 'static>(&mut self, value: Rc<T>) {
        self.providers.insert(TypeId::of::<T>(), value);
    }

    /// Create a nested scope; providers installed on it shadow the parent's
    pub fn scope(&self) -> Context {
        self.clone()
    }

    pub fn get<T: 'static>(&self) -> Option<Rc<T>> {
        self.providers
            .get(&TypeId::of::<T>())
            .and_then(|value| Rc::clone(value).downcast::<T>().ok())
    }

    /// Fetch a provider or fail with [`Error::MissingProvider`]
    pub fn require<T: 'static>(&self, hook: &'static str, provider: &'static str) -> Result<Rc<T>> {
        self.get::<T>()
            .ok_or(Error::MissingProvider { hook, provider })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.providers.contains_key(&TypeId::of::<T>())
    }

    /// Remove a provider, returning it when present
    pub fn remove<T: 'static>(&mut self) -> Option<Rc<T>> {
        self.providers
            .remove(&TypeId::of::<T>())
            .and_then(|value| value.downcast::<T>().ok())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Theme(&'static str);

    #[test]
    fn test_provide_and_get() {
        let mut ctx = Context::new();
        ctx.provide(Theme("light"));
        assert_eq!(ctx.get::<Theme>().as_deref(), Some(&Theme("light")));
        assert!(ctx.get::<u32>().is_none());
    }

    #[test]
    fn test_require_missing_provider() {
        let ctx = Context::new();
        let err = ctx.require::<Theme>("useTheme", "ThemeProvider").unwrap_err();
        assert_eq!(err.to_string(), "useTheme must be used within a ThemeProvider");
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut root = Context::new();
        root.provide(Theme("light"));

        let mut nested = root.scope();
        nested.provide(Theme("dark"));

        assert_eq!(root.get::<Theme>().map(|t| t.0), Some("light"));
        assert_eq!(nested.get::<Theme>().map(|t| t.0), Some("dark"));
    }

    #[test]
    fn test_remove() {
        let mut ctx = Context::new();
        ctx.provide(7u32);
        assert_eq!(ctx.remove::<u32>().as_deref(), Some(&7));
        assert!(ctx.is_empty());
    }
}
