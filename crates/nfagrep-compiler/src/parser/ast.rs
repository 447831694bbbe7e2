//! Expression tree produced by the parser.

use std::fmt;
use std::ops::Range;

/// Byte range into the pattern source.
pub type Span = Range<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    Optional,
}

impl Quantifier {
    pub fn symbol(self) -> char {
        match self {
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
            Quantifier::Optional => '?',
        }
    }
}

/// A parsed pattern.
///
/// `Concat` and `Alt` always hold at least two children; single-element
/// sequences are unwrapped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal {
        ch: char,
        span: Span,
    },
    Wildcard {
        span: Span,
    },
    Concat(Vec<Expr>),
    Alt(Vec<Expr>),
    Group {
        inner: Box<Expr>,
        span: Span,
    },
    Repeat {
        inner: Box<Expr>,
        quantifier: Quantifier,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. }
            | Expr::Wildcard { span }
            | Expr::Group { span, .. }
            | Expr::Repeat { span, .. } => span.clone(),
            Expr::Concat(items) | Expr::Alt(items) => {
                let start = items.first().map_or(0, |e| e.span().start);
                let end = items.last().map_or(0, |e| e.span().end);
                start..end
            }
        }
    }
}

/// S-expression rendering, used for AST dumps and tests.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { ch, .. } => write!(f, "{:?}", ch),
            Expr::Wildcard { .. } => f.write_str("any"),
            Expr::Concat(items) => write_list(f, "cat", items),
            Expr::Alt(items) => write_list(f, "alt", items),
            Expr::Group { inner, .. } => write!(f, "(group {inner})"),
            Expr::Repeat {
                inner, quantifier, ..
            } => write!(f, "({} {inner})", quantifier.symbol()),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, head: &str, items: &[Expr]) -> fmt::Result {
    write!(f, "({head}")?;
    for item in items {
        write!(f, " {item}")?;
    }
    f.write_str(")")
}
