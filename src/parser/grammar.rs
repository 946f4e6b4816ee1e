//! Parser implementation using chumsky
//!
//! The grammar is small: one or more row declarations (a quoted sequence of
//! cell names followed by a track size), then a single column clause
//! introduced by `/` with one track size per column.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse a template string into an AST
///
/// Shape validation (ragged rows, column-count mismatch) happens later in the
/// layout engine; the parser only enforces the textual grammar.
pub fn parse(input: &str) -> Result<TemplateAst, Vec<crate::ParseError>> {
    let len = input.len();

    let mut tokens = Vec::new();
    let mut lex_errors = Vec::new();
    for (tok, span) in crate::parser::lexer::lex(input) {
        match tok {
            Ok(t) => tokens.push((t, SimpleSpan::from(span))),
            Err(()) => lex_errors.push(lex_error(input, span)),
        }
    }
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    // Turn the token list into a stream that chumsky can use
    let token_stream = Stream::from_iter(tokens.into_iter())
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    template_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Turn a span the lexer could not tokenize into a syntax error
///
/// A pure digit run that still failed to lex is a track size that overflowed
/// `f64`; everything else is a character outside the grammar.
fn lex_error(input: &str, span: std::ops::Range<usize>) -> crate::ParseError {
    let slice = &input[span.clone()];
    let message = if slice.chars().all(|c| c.is_ascii_digit() || c == '.') {
        format!("track size '{}' is not a finite number", slice)
    } else {
        format!("unrecognized token '{}'", slice)
    };
    crate::ParseError::Syntax {
        span,
        message,
        expected: Vec::new(),
    }
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

/// Split the inner text of a quoted row into spanned cells
///
/// `span` is the span of the quoted token including the quotes, so cell
/// offsets inside the string are shifted by one for the opening quote.
fn split_cells<'a>(
    text: &str,
    span: SimpleSpan,
) -> Result<Vec<Spanned<Cell>>, Rich<'a, Token>> {
    let base = span.into_range().start + 1;
    let mut cells = Vec::new();

    let mut rest = text;
    let mut offset = 0usize;
    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        let tail = &rest[start..];
        let len = tail
            .find(|c: char| c.is_whitespace())
            .unwrap_or(tail.len());
        let word = &tail[..len];
        let word_span = base + offset + start..base + offset + start + len;

        let cell = if word == "." {
            Cell::Empty
        } else if is_valid_region_name(word) {
            Cell::Named(Identifier::new(word))
        } else {
            return Err(Rich::custom(
                word_span.into(),
                format!(
                    "invalid cell name '{}' (expected an identifier or '.')",
                    word
                ),
            ));
        };
        cells.push(Spanned::new(cell, word_span));

        offset += start + len;
        rest = &text[offset..];
    }

    if cells.is_empty() {
        return Err(Rich::custom(span, "row declares no cells"));
    }
    Ok(cells)
}

/// Region names follow identifier rules: letters, digits, underscore,
/// starting with a letter or underscore
fn is_valid_region_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn template_parser<'a, I>() -> impl Parser<'a, I, TemplateAst, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let track_size = choice((
        select! { Token::Number(n) => TrackSize::Px(n) },
        just(Token::Auto).to(TrackSize::Auto),
    ))
    .map_with(|ts, e| Spanned::new(ts, span_range(&e.span())))
    .labelled("track size");

    let row_cells = select! { Token::Quoted(s) => s }
        .try_map(|s: String, span: SimpleSpan| split_cells(&s, span));

    let row_decl = row_cells
        .then(track_size.clone())
        .map_with(|(cells, size), e| {
            Spanned::new(RowDecl { cells, size }, span_range(&e.span()))
        });

    let column_clause = just(Token::Slash)
        .ignore_then(track_size.repeated().at_least(1).collect::<Vec<_>>())
        .labelled("column clause");

    row_decl
        .repeated()
        .at_least(1)
        .collect()
        .then(column_clause)
        .then_ignore(end())
        .map(|(rows, columns)| TemplateAst { rows, columns })
}
