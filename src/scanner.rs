//! Character scanner shared by the markup and query parsers
//!
//! The scanner only moves forward. Its single character of lookahead is
//! [`Scanner::current`]; nothing is ever pushed back.

use crate::error::{Error, ErrorKind, Pos, Result};

/// Forward-only cursor over text with position tracking
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `input`
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current character without consuming
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the current character
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Consume one character, failing unless it is `expected`
    pub fn expect_char(&mut self, expected: char) -> Result<()> {
        let pos = self.position();
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(found) => Err(Error::new(
                ErrorKind::UnexpectedChar { expected, found },
                pos,
            )),
            None => Err(Error::eof(format!("{expected:?}"), pos)),
        }
    }

    /// Consume everything up to, not including, the next character in `delims`.
    ///
    /// Running out of input before a delimiter shows up is an error.
    pub fn read_until(&mut self, delims: &[char]) -> Result<&'a str> {
        let start = self.pos;
        loop {
            match self.current() {
                Some(c) if delims.contains(&c) => return Ok(self.slice_from(start)),
                Some(_) => {
                    self.advance();
                }
                None => return Err(Error::eof(describe(delims), self.position())),
            }
        }
    }

    /// Consume the longest run of characters found in `set`
    pub fn read_while(&mut self, set: &[char]) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !set.contains(&c) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    /// Skip whitespace, then consume the following run of non-whitespace
    pub fn read_token(&mut self) -> Result<&'a str> {
        self.skip_whitespace();
        if self.is_eof() {
            return Err(Error::eof("a token", self.position()));
        }

        let start = self.pos;
        while let Some(c) = self.current() {
            if c.is_whitespace() {
                break;
            }
            self.advance();
        }
        Ok(self.slice_from(start))
    }

    /// Skip whitespace
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get the unconsumed input
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

fn describe(delims: &[char]) -> String {
    match delims {
        [single] => format!("{single:?}"),
        _ => format!("one of {delims:?}"),
    }
}
