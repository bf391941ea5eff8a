//! Utility-class lists
//!
//! Components compose their styling out of static lookup-table strings such as
//! `"px-4 py-2 text-sm"`. `ClassList` splits those strings into individual
//! tokens, drops duplicates and empty fragments, and keeps insertion order so
//! the rendered `class` attribute is stable.
//!
//! ```ignore
//! let classes = ClassList::new()
//!     .with("flex items-center")
//!     .with_if(disabled, "cursor-not-allowed");
//! ```

use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; 8]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class string
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.push(classes);
        list
    }

    /// Append every token in `classes`, skipping ones already present
    pub fn push(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    pub fn with(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    pub fn with_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    pub fn extend(&mut self, other: &ClassList) {
        for token in &other.tokens {
            if !self.contains(token) {
                self.tokens.push(token.clone());
            }
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// True when every token of `classes` is present
    pub fn contains_all(&self, classes: &str) -> bool {
        classes.split_whitespace().all(|t| self.contains(t))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

/// Join class fragments into a single normalized string
pub fn cx<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut list = ClassList::new();
    for part in parts {
        list.push(part);
    }
    list.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_whitespace() {
        let list = ClassList::parse("  flex   items-center\n gap-2 ");
        assert_eq!(list.to_string(), "flex items-center gap-2");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let list = ClassList::new().with("p-2 text-sm").with("text-sm rounded");
        assert_eq!(list.to_string(), "p-2 text-sm rounded");
    }

    #[test]
    fn test_conditional_classes() {
        let list = ClassList::new()
            .with("btn")
            .with_if(false, "hidden")
            .with_if(true, "active");
        assert!(list.contains("active"));
        assert!(!list.contains("hidden"));
        assert!(list.contains_all("btn active"));
    }

    #[test]
    fn test_cx_joins() {
        assert_eq!(cx(["a b", "", "b c"]), "a b c");
    }
}
