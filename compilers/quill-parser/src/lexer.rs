use std::iter::FusedIterator;
use std::str::Chars;

use quill_protocol::{CharClass, Token, TokenKind};
use tracing::trace;

/// Character-level scanner with exactly one character of lookahead.
///
/// `next_token` is total: unrecognised characters become `UNKNOWN` tokens,
/// and once the input is exhausted every call returns `END_OF_INPUT`.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: I,
    current: Option<char>,
}

impl<'a> Lexer<Chars<'a>> {
    pub fn from_text(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(mut chars: I) -> Self {
        let current = chars.next();
        Self { chars, current }
    }

    /// True while unread characters remain. Trailing whitespace still
    /// counts, so a `true` answer may be followed by `END_OF_INPUT`.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(token = %token, "lexed");
        token
    }

    // Only ever called with a character in hand, so an exhausted source is
    // never polled again.
    fn advance(&mut self) {
        self.current = self.chars.next();
    }

    fn scan(&mut self) -> Token {
        let c = loop {
            match self.current {
                None => return Token::end_of_input(),
                Some(c) if CharClass::of(c).is_whitespace() => self.advance(),
                Some(c) => break c,
            }
        };

        let class = CharClass::of(c);
        let kind = if class.contains(CharClass::DIGIT) {
            TokenKind::Digit
        } else if class.contains(CharClass::PHRASE_END) {
            TokenKind::PhraseEnd
        } else if class.contains(CharClass::SENTENCE_END) {
            TokenKind::SentenceEnd
        } else if class.starts_word() {
            return self.scan_word();
        } else {
            TokenKind::Unknown
        };

        self.advance();
        Token::from_char(kind, c)
    }

    /// Consumes a word; the terminating character stays as lookahead.
    fn scan_word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(c) = self.current.filter(|&c| CharClass::of(c).continues_word()) {
            word.push(c.to_ascii_lowercase());
            self.advance();
        }
        Token::new(TokenKind::Word, word)
    }
}

/// Yields every token before `END_OF_INPUT`, then `None`.
impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end_of_input()).then_some(token)
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Lexer<I> {}
