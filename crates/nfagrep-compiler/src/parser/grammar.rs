//! Grammar productions, lowest precedence first.

use super::ast::{Expr, Quantifier};
use super::core::{MAX_NESTING, Parser};
use super::lexer::{Token, TokenKind, token_char};
use crate::error::{PatternError, PatternErrorKind};

impl Parser<'_> {
    /// `term ('|' term)*`
    pub(super) fn parse_expression(&mut self) -> Result<Expr, PatternError> {
        let mut alternatives = vec![self.parse_term(None)?];

        while let Some(pipe) = self.eat(TokenKind::Pipe) {
            alternatives.push(self.parse_term(Some(&pipe))?);
        }

        Ok(if alternatives.len() == 1 {
            alternatives.pop().expect("one alternative")
        } else {
            Expr::Alt(alternatives)
        })
    }

    /// `factor+`, stopping before `|` or `)`.
    fn parse_term(&mut self, after_pipe: Option<&Token>) -> Result<Expr, PatternError> {
        let mut factors = Vec::new();

        while let Some(kind) = self.current_kind() {
            if matches!(kind, TokenKind::Pipe | TokenKind::ParenClose) {
                break;
            }
            factors.push(self.parse_factor()?);
        }

        match factors.len() {
            0 => Err(self.empty_term(after_pipe)),
            1 => Ok(factors.pop().expect("one factor")),
            _ => Ok(Expr::Concat(factors)),
        }
    }

    /// `atom ('*' | '+' | '?')?`
    fn parse_factor(&mut self) -> Result<Expr, PatternError> {
        let atom = self.parse_atom()?;

        let quantifier = match self.current_kind() {
            Some(TokenKind::Star) => Quantifier::ZeroOrMore,
            Some(TokenKind::Plus) => Quantifier::OneOrMore,
            Some(TokenKind::Question) => Quantifier::Optional,
            _ => return Ok(atom),
        };
        let op = self.bump();

        Ok(Expr::Repeat {
            span: atom.span().start..op.span.end,
            inner: Box::new(atom),
            quantifier,
        })
    }

    /// `literal | '.' | '\' any | '(' expression ')'`
    fn parse_atom(&mut self) -> Result<Expr, PatternError> {
        let Some(kind) = self.current_kind() else {
            return Err(self.empty_term(None));
        };

        match kind {
            TokenKind::ParenOpen => self.parse_group(),
            TokenKind::Dot => {
                let token = self.bump();
                Ok(Expr::Wildcard { span: token.span })
            }
            TokenKind::Char | TokenKind::Escaped => self.parse_literal(),
            TokenKind::Star | TokenKind::Plus | TokenKind::Question => {
                let token = self.bump();
                let text = &self.source[token.span.clone()];
                Err(
                    PatternError::new(PatternErrorKind::NothingToRepeat, token.span)
                        .message(format!("'{text}' has nothing to repeat (escape it as '\\{text}')")),
                )
            }
            TokenKind::Pipe | TokenKind::ParenClose => Err(self.empty_term(None)),
        }
    }

    fn parse_literal(&mut self) -> Result<Expr, PatternError> {
        let token = self.bump();
        let ch = token_char(self.source, &token).expect("literal tokens carry a character");

        if matches!(ch, '\n' | '\r') {
            return Err(PatternError::new(PatternErrorKind::LineBreak, token.span));
        }

        Ok(Expr::Literal {
            ch,
            span: token.span,
        })
    }

    fn parse_group(&mut self) -> Result<Expr, PatternError> {
        let open = self.bump();

        if self.open_groups.len() >= MAX_NESTING {
            return Err(PatternError::new(PatternErrorKind::NestingTooDeep, open.span)
                .message(format!("groups are nested more than {MAX_NESTING} deep")));
        }

        self.open_groups.push(open.span.clone());
        let inner = self.parse_expression()?;
        self.open_groups.pop();

        let Some(close) = self.eat(TokenKind::ParenClose) else {
            return Err(unclosed(open.span, self.eof_offset()));
        };

        Ok(Expr::Group {
            inner: Box::new(inner),
            span: open.span.start..close.span.end,
        })
    }

    /// Pick the most specific error for a term with no factors.
    fn empty_term(&self, after_pipe: Option<&Token>) -> PatternError {
        let current = self.current();
        let innermost = self.open_groups.last();

        match (current, after_pipe, innermost) {
            (Some(tok), _, None) if tok.kind == TokenKind::ParenClose => {
                PatternError::new(PatternErrorKind::UnmatchedCloseParen, tok.span.clone())
            }
            (None, None, Some(open)) => unclosed(open.clone(), self.eof_offset()),
            (_, Some(pipe), _) => {
                PatternError::new(PatternErrorKind::EmptyAlternative, pipe.span.clone())
            }
            (Some(tok), None, _) if tok.kind == TokenKind::Pipe => {
                PatternError::new(PatternErrorKind::EmptyAlternative, tok.span.clone())
            }
            (Some(tok), None, Some(open)) if tok.kind == TokenKind::ParenClose => {
                PatternError::new(PatternErrorKind::EmptyGroup, open.start..tok.span.end)
            }
            _ => PatternError::new(PatternErrorKind::EmptyPattern, 0..0),
        }
    }
}

fn unclosed(open: std::ops::Range<usize>, eof: usize) -> PatternError {
    PatternError::new(PatternErrorKind::UnmatchedOpenParen, open)
        .related_to(eof..eof, "expected ')' before the end of the pattern")
}
