//! Lexer for VTML markup using logos

use logos::Logos;
use tracing::warn;

/// Top-level markup tokens
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A complete `<...>` span, brackets included
    #[regex(r"<[^>]*>", |lex| lex.slice())]
    Tag(&'src str),

    /// Text up to the next `<`
    #[regex(r"[^<]+", |lex| lex.slice())]
    Text(&'src str),
}

impl<'src> Token<'src> {
    /// Tag body without the angle brackets
    pub fn tag_body(&self) -> Option<&'src str> {
        match self {
            Token::Tag(raw) => Some(&raw[1..raw.len() - 1]),
            Token::Text(_) => None,
        }
    }
}

/// Tokenize markup.
///
/// A `<` with no later `>` cannot start a tag; it and everything after it
/// come back as a single trailing `Text` token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let start = lexer.span().start;
                warn!(pos = start, "Unterminated tag, rendering remainder as text");
                tokens.push(Token::Text(&source[start..]));
                break;
            }
        }
    }

    tokens
}
