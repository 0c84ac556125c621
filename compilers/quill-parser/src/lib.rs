pub mod document;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod profile;
pub mod source;

pub use document::{Document, Phrase, Sentence};
pub use error::{ParseError, ProfileError, ProfileFormatError, SourceError};
pub use lexer::Lexer;
pub use parser::Parser;
pub use profile::{load_profile, load_profiles, parse_profile_record, render_profile_record};
pub use source::read_source;

use quill_protocol::Token;

/// Lexes `input` completely, including the final `END_OF_INPUT` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::from_text(input);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(lexer.next_token());
    tokens
}
