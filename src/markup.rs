//! Tagged markup: element tree model and its parser

pub mod model;
pub mod parser;

pub use model::{Attributes, Element, Tree};
pub use parser::MarkupParser;
