//! Recursive-descent reader for literal notation.
//!
//! # Grammar
//!
//! ```text
//! document := value EOF
//! value    := list | tuple | atom
//! list     := '[' items? ']'
//! tuple    := '(' ')' | '(' value ')' | '(' value ',' items? ')'
//! items    := value (',' value)* ','?
//! ```
//!
//! A parenthesized value without a comma is grouping, not a tuple: `(1)`
//! reads as `1` and `(1,)` as a one-element tuple.

#[cfg(test)]
mod tests;

use nest_ir::{ensure_sufficient_stack, Atom, NestedValue};

use crate::error::{ParseError, Span};
use crate::lexer::{tokenize, Spanned, Token};

/// Cursor over the token stream of one document.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Spanned>,
    pos: usize,
}

impl<'src> Parser<'src> {
    /// Tokenize `source` and position the cursor at its start.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        Ok(Parser {
            source,
            tokens: tokenize(source)?,
            pos: 0,
        })
    }

    /// Read exactly one value and require the input to end after it.
    pub fn parse_document(mut self) -> Result<NestedValue<Atom>, ParseError> {
        let value = self.parse_value()?;
        match self.peek() {
            None => Ok(value),
            Some(next) => Err(ParseError::TrailingInput {
                span: next.span.clone(),
            }),
        }
    }

    fn parse_value(&mut self) -> Result<NestedValue<Atom>, ParseError> {
        ensure_sufficient_stack(|| {
            let Some(Spanned { token, span }) = self.bump() else {
                return Err(self.unexpected_end("a value"));
            };

            match token {
                Token::LBracket => self
                    .parse_items(&Token::RBracket, "`,` or `]`")
                    .map(NestedValue::list),
                Token::LParen => self.parse_paren(),
                Token::LBrace => Err(ParseError::MappingUnsupported { span }),
                Token::Int(n) => Ok(NestedValue::Leaf(Atom::Int(n))),
                Token::Float(x) => Ok(NestedValue::Leaf(Atom::Float(x))),
                Token::Str(s) => Ok(NestedValue::Leaf(Atom::Str(s))),
                Token::Word(w) => Ok(NestedValue::Leaf(Atom::Word(w))),
                Token::True => Ok(NestedValue::Leaf(Atom::Bool(true))),
                Token::False => Ok(NestedValue::Leaf(Atom::Bool(false))),
                Token::Null => Ok(NestedValue::Leaf(Atom::None)),
                Token::RBracket | Token::RParen | Token::RBrace | Token::Comma | Token::Colon => {
                    Err(self.unexpected("a value", span))
                }
            }
        })
    }

    /// Parse the rest of a parenthesized form after `(`.
    fn parse_paren(&mut self) -> Result<NestedValue<Atom>, ParseError> {
        if self.eat(&Token::RParen) {
            return Ok(NestedValue::tuple(Vec::new()));
        }

        let first = self.parse_value()?;
        if self.eat(&Token::RParen) {
            return Ok(first);
        }
        self.expect(&Token::Comma, "`,` or `)`")?;

        let mut items = vec![first];
        items.extend(self.parse_items(&Token::RParen, "`,` or `)`")?);
        Ok(NestedValue::tuple(items))
    }

    /// Parse comma-separated values up to and including `close`.
    fn parse_items(
        &mut self,
        close: &Token,
        expected: &'static str,
    ) -> Result<Vec<NestedValue<Atom>>, ParseError> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.parse_value()?);
            if self.eat(close) {
                return Ok(items);
            }
            self.expect(&Token::Comma, expected)?;
        }
    }

    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Spanned> {
        let next = self.tokens.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    /// Consume the next token if it is `token`.
    fn eat(&mut self, token: &Token) -> bool {
        if self.peek().is_some_and(|next| next.token == *token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(token) {
            return Ok(());
        }
        match self.peek() {
            Some(next) => Err(self.unexpected(expected, next.span.clone())),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn unexpected(&self, expected: &'static str, span: Span) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.source[span.clone()].to_owned(),
            span,
        }
    }

    fn unexpected_end(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedEnd {
            expected,
            offset: self.source.len(),
        }
    }
}
