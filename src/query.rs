//! Path queries: model, parser and evaluator

pub mod eval;
pub mod model;
pub mod parser;

pub use eval::{evaluate, evaluate_tree};
pub use model::Query;
pub use parser::QueryParser;
