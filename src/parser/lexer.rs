//! Lexer for grid template strings using logos
//!
//! A template looks like:
//!
//! ```text
//! "title title" 40
//! "y_axis chart" auto
//! / 40 auto
//! ```
//!
//! Row cells live inside quoted strings and are split into names by the
//! parser; the lexer only distinguishes quoted rows, size tokens, and the
//! column-clause separator.

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    /// Quoted row of cell names, e.g. `"title . chart"`
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Quoted(String),

    /// Track size keyword
    #[token("auto")]
    Auto,

    /// Column clause separator
    #[token("/")]
    Slash,

    /// Non-negative track size in pixels
    ///
    /// A digit run long enough to overflow `f64` parses to infinity; the
    /// filter turns it into a lex error instead of an infinite track.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
    })]
    Number(f64),

    // Only produced by malformed input (sizes must be non-negative); kept as
    // a token so the parser can point at the sign rather than the whole span.
    #[token("-")]
    Minus,
}

/// Lex input string into tokens with spans
///
/// Spans of input the lexer cannot tokenize come through as `Err(())`; the
/// parser reports them as syntax errors rather than dropping them.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
