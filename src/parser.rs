//! Recursive descent JSON parser.
//!
//! Each grammar rule is one method that pulls tokens from the session's
//! lexer with a single token of lookahead. A [`Parser`] owns all of its
//! state (cursor, current token, interner, depth counter), so independent
//! parses never interfere with one another.

use crate::error::{ParseError, ParseResult};
use crate::intern::Interner;
use crate::lexer::{Lexer, Token};
use crate::limits::Limits;
use crate::value::Value;

/// Parse session over one in-memory document.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    interner: Interner,
    current: Token,
    /// Byte offset of `current`.
    offset: usize,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a parser for the given input.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input, &limits)?;
        let mut interner = Interner::new(limits.max_interned_strings);
        let current = lexer.next_token(&mut interner)?;
        let offset = lexer.token_start();
        Ok(Self {
            lexer,
            interner,
            current,
            offset,
            limits,
            depth: 0,
        })
    }

    /// Parse the document and return the root value.
    ///
    /// Any JSON value is accepted at the root. Content after the root that
    /// is not whitespace fails with [`ParseError::TrailingData`].
    pub fn parse(&mut self) -> ParseResult<Value> {
        let value = self.parse_value()?;

        if self.current != Token::Eof {
            return Err(ParseError::TrailingData {
                offset: self.offset,
            });
        }

        Ok(value)
    }

    /// Number of distinct strings interned during this session.
    pub fn interned_strings(&self) -> usize {
        self.interner.len()
    }

    /// Advance to the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lexer.next_token(&mut self.interner)?;
        self.offset = self.lexer.token_start();
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.describe(),
            offset: self.offset,
        }
    }

    /// Parse a single value, dispatching on the current token.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match &self.current {
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            Token::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::String(s) => {
                let value = Value::String(s.clone());
                self.advance()?;
                Ok(value)
            }
            Token::Number(n) => {
                let value = Value::Number(*n);
                self.advance()?;
                Ok(value)
            }
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Parse an object; the current token is `{`.
    fn parse_object(&mut self) -> ParseResult<Value> {
        self.enter()?;
        self.advance()?;

        let mut pairs = Vec::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Object(pairs));
        }

        loop {
            let key_offset = self.offset;
            let key = match &self.current {
                Token::String(s) => s.clone(),
                _ => return Err(self.unexpected("a string key")),
            };
            self.advance()?;

            // Keys are interned, so a repeat is handle-equal to its first
            // occurrence.
            if pairs
                .iter()
                .any(|(existing, _)| std::sync::Arc::ptr_eq(existing, &key))
            {
                return Err(ParseError::DuplicateKey {
                    key: key.to_string(),
                    offset: key_offset,
                });
            }

            if self.current != Token::Colon {
                return Err(self.unexpected("`:`"));
            }
            self.advance()?;

            let value = self.parse_value()?;
            pairs.push((key, value));

            match &self.current {
                Token::Comma => {
                    let comma_offset = self.offset;
                    self.advance()?;
                    if self.current == Token::RightBrace {
                        return Err(ParseError::TrailingComma {
                            offset: comma_offset,
                        });
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("`,` or `}`")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(pairs))
    }

    /// Parse an array; the current token is `[`.
    fn parse_array(&mut self) -> ParseResult<Value> {
        self.enter()?;
        self.advance()?;

        let mut items = Vec::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match &self.current {
                Token::Comma => {
                    let comma_offset = self.offset;
                    self.advance()?;
                    if self.current == Token::RightBracket {
                        return Err(ParseError::TrailingComma {
                            offset: comma_offset,
                        });
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("`,` or `]`")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Track one level of nesting, failing before the recursion happens.
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::MaxDepthExceeded {
                depth: self.depth,
                max: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }
}

/// Parse a JSON document with default limits.
pub fn parse(input: &[u8]) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &[u8], limits: Limits) -> ParseResult<Value> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}

/// Parse a JSON document from a string slice with default limits.
pub fn parse_str(input: &str) -> ParseResult<Value> {
    parse(input.as_bytes())
}
