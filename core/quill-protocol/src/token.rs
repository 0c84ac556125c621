use alloc::string::{String, ToString};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Text carried by the end-of-input token.
pub const END_OF_INPUT_TEXT: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    /// Lower-cased word: a letter followed by letters, digits, `'` or `-`
    Word,
    /// `.`, `?` or `!`
    SentenceEnd,
    /// `,`, `:` or `;`
    PhraseEnd,
    EndOfInput,
    /// A single decimal digit outside of a word
    Digit,
    /// Any other single character
    Unknown,
}

impl TokenKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::SentenceEnd => "SENTENCE_END",
            TokenKind::PhraseEnd => "PHRASE_END",
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Digit => "DIGIT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// True for the kinds that close a phrase.
    pub const fn ends_phrase(self) -> bool {
        matches!(
            self,
            TokenKind::PhraseEnd | TokenKind::SentenceEnd | TokenKind::EndOfInput
        )
    }

    /// True for the kinds that close a sentence.
    pub const fn ends_sentence(self) -> bool {
        matches!(self, TokenKind::SentenceEnd | TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable `(kind, text)` pair produced by the lexer.
///
/// Equality compares both kind and text, which is what the parser's
/// consumption check relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Single-character token (terminators, digits, unknown characters).
    pub fn from_char(kind: TokenKind, c: char) -> Self {
        Self { kind, text: c.to_string() }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, END_OF_INPUT_TEXT)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Character length of the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_token_display() {
        let word = Token::new(TokenKind::Word, "sentences");
        assert_eq!(format!("{}", word), "(WORD) sentences");
        assert_eq!(format!("{}", Token::end_of_input()), "(END_OF_INPUT) END");
    }

    #[test]
    fn test_equality_is_kind_and_text() {
        let comma = Token::from_char(TokenKind::PhraseEnd, ',');
        assert_eq!(comma, Token::new(TokenKind::PhraseEnd, ","));
        assert_ne!(comma, Token::from_char(TokenKind::PhraseEnd, ';'));
        assert_ne!(comma, Token::from_char(TokenKind::Unknown, ','));
    }

    #[test]
    fn test_terminator_kinds() {
        assert!(TokenKind::PhraseEnd.ends_phrase());
        assert!(TokenKind::SentenceEnd.ends_phrase());
        assert!(TokenKind::EndOfInput.ends_phrase());
        assert!(!TokenKind::Word.ends_phrase());
        assert!(!TokenKind::Digit.ends_phrase());

        assert!(!TokenKind::PhraseEnd.ends_sentence());
        assert!(TokenKind::SentenceEnd.ends_sentence());
        assert!(TokenKind::EndOfInput.ends_sentence());
    }
}
