//! Parser state and low-level token operations.

use std::ops::Range;

use super::ast::Expr;
use super::lexer::{Token, TokenKind};
use crate::error::{PatternError, PatternErrorKind};

/// Maximum depth of nested groups.
pub const MAX_NESTING: usize = 256;

pub(super) struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    /// Spans of `(` tokens whose group is still open, innermost last.
    pub(super) open_groups: Vec<Range<usize>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            open_groups: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Result<Expr, PatternError> {
        if self.tokens.is_empty() {
            return Err(PatternError::new(PatternErrorKind::EmptyPattern, 0..0));
        }

        let expr = self.parse_expression()?;

        if let Some(token) = self.current() {
            // The expression loop only stops early at a `)`.
            return Err(PatternError::new(
                PatternErrorKind::UnmatchedCloseParen,
                token.span.clone(),
            ));
        }

        Ok(expr)
    }

    pub(super) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(super) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the current token unconditionally.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    /// Consume the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.currently_is(kind).then(|| self.bump())
    }

    pub(super) fn eof_offset(&self) -> usize {
        self.source.len()
    }
}
