//! Lexer for patterns.
//!
//! Produces span-based tokens without storing text; characters are sliced
//! from the source when the parser needs them.
//!
//! The only input the lexer rejects is a backslash with nothing after it.

use std::ops::Range;

use logos::Logos;

use crate::error::{PatternError, PatternErrorKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(".")]
    Dot,

    /// Backslash followed by any character, metacharacters included.
    #[regex(r"\\(.|\n)")]
    Escaped,

    /// Any character that is not a metacharacter.
    #[regex(r"[^|*+?().\\]")]
    Char,
}

impl TokenKind {
    pub fn is_quantifier(self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Plus | TokenKind::Question)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern into a vector of span-based tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.span())),
            Err(()) => {
                return Err(PatternError::new(
                    PatternErrorKind::TrailingBackslash,
                    lexer.span(),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[token.span.clone()]
}

/// The character a literal or escaped token stands for.
pub fn token_char(source: &str, token: &Token) -> Option<char> {
    let mut chars = token_text(source, token).chars();
    match token.kind {
        TokenKind::Char => chars.next(),
        TokenKind::Escaped => chars.nth(1),
        _ => None,
    }
}
