use std::mem;

use quill_protocol::{Token, TokenKind};
use tracing::{debug, trace};

use crate::document::{Document, Phrase, Sentence};
use crate::error::ParseError;
use crate::lexer::Lexer;

/// Recursive-descent parser over the lexer's token stream.
///
/// Grammar:
///
/// ```text
/// Document := Sentence* END_OF_INPUT
/// Sentence := Phrase (PHRASE_END Phrase)* (SENTENCE_END | END_OF_INPUT)
/// Phrase   := WORD*
/// ```
///
/// The parser owns its lexer and holds one token of lookahead. Every
/// advance goes through [`Parser::eat`], which checks the caller's
/// expectation against the lookahead.
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    current: Token,
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(mut lexer: Lexer<I>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// The lookahead token.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the lookahead if it equals `expected` (kind and text) and
    /// returns it.
    pub fn eat(&mut self, expected: &Token) -> Result<Token, ParseError> {
        if self.current != *expected {
            return Err(ParseError::Mismatch {
                expected: expected.clone(),
                found: self.current.clone(),
            });
        }
        let next = self.lexer.next_token();
        Ok(mem::replace(&mut self.current, next))
    }

    fn eat_current(&mut self) -> Result<Token, ParseError> {
        let expected = self.current.clone();
        self.eat(&expected)
    }

    /// Collects words up to the next phrase, sentence or input terminator,
    /// which is left as lookahead. Digits and unknown characters are
    /// consumed and dropped.
    pub fn parse_phrase(&mut self) -> Result<Phrase, ParseError> {
        let mut phrase = Phrase::new();
        while !self.current.kind().ends_phrase() {
            let token = self.eat_current()?;
            if token.is_word() {
                phrase.push(token);
            }
        }
        Ok(phrase)
    }

    /// Parses phrases until a sentence terminator or end of input, which is
    /// left as lookahead.
    pub fn parse_sentence(&mut self) -> Result<Sentence, ParseError> {
        let mut sentence = Sentence::new();
        while !self.current.kind().ends_sentence() {
            sentence.push(self.parse_phrase()?);
            if self.current.kind() == TokenKind::PhraseEnd {
                self.eat_current()?;
            }
        }
        trace!(phrases = sentence.len(), words = sentence.word_count(), "sentence");
        Ok(sentence)
    }

    /// Parses sentences until end of input, consuming the terminator after
    /// each one.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        let mut sentences = Vec::new();
        while !self.current.is_end_of_input() {
            sentences.push(self.parse_sentence()?);
            self.eat_current()?;
        }
        let document = Document::from_sentences(sentences);
        debug!(
            sentences = document.len(),
            words = document.word_count(),
            "parsed document"
        );
        Ok(document)
    }
}
