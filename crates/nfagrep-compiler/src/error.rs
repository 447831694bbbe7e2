//! Pattern errors and rendering utilities.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    EmptyPattern,
    /// `|` with nothing on one side, e.g. `|a`, `a|`, `a||b`.
    EmptyAlternative,
    /// `()`
    EmptyGroup,
    UnmatchedOpenParen,
    UnmatchedCloseParen,
    TrailingBackslash,
    /// Quantifier with no atom before it, e.g. `*a` or `a**`.
    NothingToRepeat,
    /// A line break can never occur inside a searched line.
    LineBreak,
    NestingTooDeep,
}

impl PatternErrorKind {
    pub fn default_message(self) -> &'static str {
        match self {
            Self::EmptyPattern => "pattern is empty",
            Self::EmptyAlternative => "alternation has an empty side",
            Self::EmptyGroup => "group is empty",
            Self::UnmatchedOpenParen => "unmatched '('",
            Self::UnmatchedCloseParen => "unmatched ')'",
            Self::TrailingBackslash => "trailing backslash escapes nothing",
            Self::NothingToRepeat => "quantifier has nothing to repeat",
            Self::LineBreak => "line breaks cannot be matched",
            Self::NestingTooDeep => "groups are nested too deeply",
        }
    }
}

/// Related location for an error, e.g. where an unclosed group began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub span: Range<usize>,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A pattern syntax error with its byte span in the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {}", .span.start)]
pub struct PatternError {
    pub kind: PatternErrorKind,
    pub span: Range<usize>,
    pub message: String,
    pub related: Option<RelatedInfo>,
}

impl PatternError {
    pub fn new(kind: PatternErrorKind, span: Range<usize>) -> Self {
        Self {
            kind,
            span,
            message: kind.default_message().to_string(),
            related: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn related_to(mut self, span: Range<usize>, message: impl Into<String>) -> Self {
        self.related = Some(RelatedInfo::new(span, message));
        self
    }

    /// Builder for an annotated rendering against the pattern source.
    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ErrorPrinter<'e, 's> {
        ErrorPrinter::new(self, source)
    }
}

/// Builder-pattern printer for rendering a pattern error as a source snippet.
pub struct ErrorPrinter<'e, 's> {
    error: &'e PatternError,
    source: &'s str,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e PatternError, source: &'s str) -> Self {
        Self {
            error,
            source,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let error = self.error;
        if self.source.is_empty() {
            return writeln!(w, "error: {}", error.message);
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(&error.span, self.source))
                .label(&error.message),
        );
        if let Some(related) = &error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(&related.span, self.source))
                    .label(&related.message),
            );
        }

        let report = vec![Level::ERROR.primary_title(&error.message).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }
}

/// Widen empty spans to the nearest character so the caret is visible.
fn adjust_range(range: &Range<usize>, source: &str) -> Range<usize> {
    if range.start != range.end {
        return range.clone();
    }
    let at = range.start.min(source.len());
    match source[at..].chars().next() {
        Some(c) => at..at + c.len_utf8(),
        None => source[..at]
            .char_indices()
            .next_back()
            .map_or(at..at, |(i, c)| i..i + c.len_utf8()),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
