use std::fmt;

use quill_protocol::Token;

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Run of words between phrase terminators or sentence boundaries.
///
/// Only `WORD` tokens are ever stored; everything else the parser meets
/// inside a phrase is consumed and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<Token>,
}

impl Phrase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, word: Token) {
        debug_assert!(word.is_word(), "phrases hold words only, got {word}");
        self.words.push(word);
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.words.iter()
    }

    /// Owned copy of the words.
    pub fn to_vec(&self) -> Vec<Token> {
        self.words.clone()
    }
}

impl<'a> IntoIterator for &'a Phrase {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{} ", word)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    phrases: Vec<Phrase>,
}

impl Sentence {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, phrase: Phrase) {
        self.phrases.push(phrase);
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.phrases.iter().map(Phrase::len).sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> + '_ {
        self.phrases.iter().flat_map(Phrase::iter)
    }

    /// Deep copy of the phrases; changes to it never reach this sentence.
    pub fn to_phrases(&self) -> Vec<Phrase> {
        self.phrases.clone()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phrase in &self.phrases {
            write!(f, "{}", phrase)?;
        }
        Ok(())
    }
}

/// A fully parsed text: sentences of phrases of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub(crate) fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Drives `lexer` to exhaustion and returns the resulting structure.
    pub fn parse<I: Iterator<Item = char>>(lexer: Lexer<I>) -> Result<Self, ParseError> {
        Parser::new(lexer).parse_document()
    }

    pub fn from_text(input: &str) -> Result<Self, ParseError> {
        Self::parse(Lexer::from_text(input))
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::word_count).sum()
    }

    pub fn phrase_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Every word in document order.
    pub fn words(&self) -> impl Iterator<Item = &Token> + '_ {
        self.sentences.iter().flat_map(Sentence::words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "This is a document, collection of sentences. \
        Does this throw out the correct things? \
        Testing for the separation of sentences! This works.";

    const HAMLET: &str = "To be, or not to be, that is the question\u{00e2}\u{20ac}\u{201d} \
        Whether 'tis Nobler in the mind to suffer \
        The Slings and Arrows of outrageous Fortune,\
        Or to take Arms against a Sea of troubles, \
        And by opposing, end them?";

    fn texts(phrase: &Phrase) -> Vec<&str> {
        phrase.iter().map(Token::text).collect()
    }

    #[test]
    fn test_sentences_and_phrases() {
        let doc = Document::from_text(FIXTURE).unwrap();

        assert_eq!(doc.len(), 4);
        let shape: Vec<usize> = doc.sentences().iter().map(Sentence::len).collect();
        assert_eq!(shape, vec![2, 1, 1, 1]);

        let first = &doc.sentences()[0];
        assert_eq!(texts(&first.phrases()[0]), vec!["this", "is", "a", "document"]);
        assert_eq!(texts(&first.phrases()[1]), vec!["collection", "of", "sentences"]);
        assert_eq!(doc.word_count(), 22);
        assert_eq!(doc.phrase_count(), 5);
    }

    #[test]
    fn test_single_long_sentence() {
        let doc = Document::from_text(HAMLET).unwrap();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.phrase_count(), 6);
        assert_eq!(doc.word_count(), 39);

        let phrases = doc.sentences()[0].phrases();
        assert_eq!(texts(&phrases[0]), vec!["to", "be"]);
        assert_eq!(texts(&phrases[5]), vec!["end", "them"]);
        // Mis-encoded dash is dropped, "'tis" loses its apostrophe
        assert!(phrases[2].iter().any(|w| w.text() == "question"));
        assert!(phrases[2].iter().any(|w| w.text() == "tis"));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(Document::from_text("").unwrap().is_empty());
        assert!(Document::from_text("   \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_missing_final_terminator() {
        let doc = Document::from_text("One sentence. And another").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[1].word_count(), 2);
    }

    #[test]
    fn test_adjacent_terminators() {
        // "!" and "." each close a sentence, the second one empty
        let doc = Document::from_text("Wait!.").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sentences()[0].word_count(), 1);
        assert!(doc.sentences()[1].is_empty());

        let doc = Document::from_text("a,,b").unwrap();
        let phrases = doc.sentences()[0].phrases();
        assert_eq!(phrases.len(), 3);
        assert!(phrases[1].is_empty());

        // A phrase terminator right before the sentence end opens nothing
        let doc = Document::from_text("a, b,.").unwrap();
        assert_eq!(doc.sentences()[0].len(), 2);
    }

    #[test]
    fn test_digits_and_unknowns_are_dropped() {
        let doc = Document::from_text("Chapter 12 # begins & ends.").unwrap();
        let words: Vec<&str> = doc.words().map(Token::text).collect();
        assert_eq!(words, vec!["chapter", "begins", "ends"]);
    }

    #[test]
    fn test_copies_are_independent() {
        let doc = Document::from_text(FIXTURE).unwrap();
        let sentence = &doc.sentences()[0];

        let mut phrases = sentence.to_phrases();
        phrases.pop();
        phrases[0] = Phrase::new();
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence.phrases()[0].len(), 4);

        let mut words = sentence.phrases()[1].to_vec();
        words.clear();
        assert_eq!(sentence.phrases()[1].len(), 3);

        let mut copy = doc.clone();
        copy.sentences.clear();
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_display() {
        let doc = Document::from_text("Hello there, friend.").unwrap();
        assert_eq!(
            doc.sentences()[0].to_string(),
            "(WORD) hello (WORD) there (WORD) friend "
        );
    }
}
