//! Reader for the s-expression syntax printed by [`Term`]'s `Display`.
//!
//! `,x` is the variable `x`, `()` is nil, `(a b . c)` is an improper
//! list and every other run of non-delimiter characters is a symbol.

use crate::core::term::Term;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("variable marker at offset {offset} is not followed by a name")]
    EmptyVariable { offset: usize },

    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

/// Parse a single term from `input`.
pub fn parse(input: &str) -> Result<Term, ParseError> {
    let mut reader = Reader { src: input, pos: 0 };
    let term = reader.term()?;
    reader.skip_whitespace();
    match reader.peek() {
        None => Ok(term),
        Some(_) => Err(ParseError::TrailingInput { offset: reader.pos }),
    }
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    /// A `.` only separates a list tail when it stands alone.
    fn at_dot(&self) -> bool {
        self.peek() == Some('.')
            && self
                .peek_second()
                .map_or(true, |c| c.is_whitespace() || c == '(' || c == ')')
    }

    fn atom(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '(' || c == ')' || c == ',' {
                break;
            }
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        self.skip_whitespace();
        let offset = self.pos;
        match self.peek() {
            None => Err(ParseError::UnexpectedEof),
            Some('(') => {
                self.bump();
                self.list()
            }
            Some(c) if c == ')' || self.at_dot() => Err(ParseError::Unexpected { found: c, offset }),
            Some(',') => {
                self.bump();
                match self.atom() {
                    "" => Err(ParseError::EmptyVariable { offset }),
                    name => Ok(Term::var(name)),
                }
            }
            Some(_) => Ok(Term::symbol(self.atom())),
        }
    }

    fn list(&mut self) -> Result<Term, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            let offset = self.pos;
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof),
                Some(')') => {
                    self.bump();
                    return Ok(Term::list(items));
                }
                Some('.') if self.at_dot() => {
                    if items.is_empty() {
                        return Err(ParseError::Unexpected { found: '.', offset });
                    }
                    self.bump();
                    let tail = self.term()?;
                    self.skip_whitespace();
                    return match self.peek() {
                        None => Err(ParseError::UnexpectedEof),
                        Some(')') => {
                            self.bump();
                            Ok(Term::list_with_tail(items, tail))
                        }
                        Some(found) => Err(ParseError::Unexpected {
                            found,
                            offset: self.pos,
                        }),
                    };
                }
                Some(_) => items.push(self.term()?),
            }
        }
    }
}
