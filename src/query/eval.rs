//! Query evaluation against a markup tree
//!
//! A miss at any step, whether a missing child or a missing attribute, ends
//! the walk with `None`.

use tracing::{instrument, trace};

use crate::markup::model::{Attributes, Element, Tree};
use crate::query::model::Query;

/// Tag of the wrapper element placed above the tree root during evaluation
pub const SYNTHETIC_ROOT_TAG: &str = "root";

/// Borrowed view of an element.
///
/// Lets the synthetic root hold the real root as its only child without
/// copying the tree.
#[derive(Clone, Copy, Debug)]
struct Node<'t> {
    tag: &'t str,
    attrs: Option<&'t Attributes>,
    children: &'t [Element],
}

impl<'t> Node<'t> {
    fn synthetic_root(root: &'t Element) -> Self {
        Self {
            tag: SYNTHETIC_ROOT_TAG,
            attrs: None,
            children: std::slice::from_ref(root),
        }
    }
}

impl<'t> From<&'t Element> for Node<'t> {
    fn from(element: &'t Element) -> Self {
        Self {
            tag: &element.tag,
            attrs: Some(&element.attrs),
            children: &element.children,
        }
    }
}

fn walk<'t>(node: Node<'t>, query: &Query) -> Option<&'t str> {
    match query {
        Query::AttrLookup { attr } => {
            let value = node.attrs.and_then(|attrs| attrs.get(attr));
            if value.is_none() {
                trace!(element = node.tag, %attr, "attribute not found");
            }
            value.map(String::as_str)
        }
        Query::TagStep { tag, next } => match node.children.iter().find(|c| c.tag == *tag) {
            Some(child) => walk(child.into(), next),
            None => {
                trace!(parent = node.tag, %tag, "child not found");
                None
            }
        },
    }
}

/// Evaluate `query` starting at `element` itself
pub fn evaluate<'t>(element: &'t Element, query: &Query) -> Option<&'t str> {
    walk(element.into(), query)
}

/// Evaluate `query` against a whole tree.
///
/// The first tag step must name the tree's root element.
#[instrument(level = "debug", skip_all, fields(query = %query))]
pub fn evaluate_tree<'t>(tree: &'t Tree, query: &Query) -> Option<&'t str> {
    walk(Node::synthetic_root(&tree.root), query)
}

impl Tree {
    /// Shorthand for [`evaluate_tree`]
    pub fn query(&self, query: &Query) -> Option<&str> {
        evaluate_tree(self, query)
    }
}
