//! Query data model

use std::fmt;

/// A parsed path query.
///
/// A chain of zero or more [`Query::TagStep`] links ending in exactly one
/// [`Query::AttrLookup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Descend into the first child tagged `tag`, then continue with `next`
    TagStep { tag: String, next: Box<Query> },
    /// Read attribute `attr` of the current element
    AttrLookup { attr: String },
}

impl Query {
    pub fn tag_step(tag: impl Into<String>, next: Self) -> Self {
        Self::TagStep {
            tag: tag.into(),
            next: Box::new(next),
        }
    }

    pub fn attr_lookup(attr: impl Into<String>) -> Self {
        Self::AttrLookup { attr: attr.into() }
    }

    /// Number of tag steps before the attribute lookup
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut step = self;
        while let Self::TagStep { next, .. } = step {
            depth += 1;
            step = next.as_ref();
        }
        depth
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagStep { tag, next } => match next.as_ref() {
                Self::AttrLookup { attr } => write!(f, "{tag}~{attr}"),
                Self::TagStep { .. } => write!(f, "{tag}.{next}"),
            },
            Self::AttrLookup { attr } => write!(f, "~{attr}"),
        }
    }
}
