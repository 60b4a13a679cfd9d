use crate::error::{Error, ErrorKind, Pos, Result};

/// Default limit on element nesting and query chain length
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth for elements and query steps
    pub max_depth: usize,
    /// Reject end tags whose name differs from the start tag
    pub strict_end_tags: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_end_tags: false,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict_end_tags(mut self, strict: bool) -> Self {
        self.strict_end_tags = strict;
        self
    }

    /// Fails once `depth` goes past the configured limit
    pub fn check_depth(&self, depth: usize, pos: Pos) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded {
                    max: self.max_depth,
                },
                pos,
            ));
        }
        Ok(())
    }
}
