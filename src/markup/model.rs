//! Markup data model

use std::collections::HashMap;

/// Attribute name to value mapping of one element
pub type Attributes = HashMap<String, String>;

/// Parsed markup tree
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub root: Element,
}

/// Markup element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attributes,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl Tree {
    pub const fn new(root: Element) -> Self {
        Self { root }
    }
}
