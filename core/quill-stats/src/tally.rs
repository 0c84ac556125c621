use quill_parser::Document;
use rustc_hash::FxHashMap;
use tracing::debug;

/// How often a distinct word has been seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    Once,
    Repeated,
}

/// Document-wide counts the five metrics are derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordTally {
    pub words: usize,
    /// Sum of word lengths in characters.
    pub characters: usize,
    pub sentences: usize,
    pub phrases: usize,
    pub distinct: usize,
    /// Distinct words seen exactly once.
    pub hapax: usize,
}

impl WordTally {
    /// Single pass over every word of `document`.
    pub fn of(document: &Document) -> Self {
        let mut seen: FxHashMap<&str, Occurrence> = FxHashMap::default();
        let mut tally = WordTally {
            sentences: document.len(),
            phrases: document.phrase_count(),
            ..Self::default()
        };

        for word in document.words() {
            tally.words += 1;
            tally.characters += word.char_len();

            // Word tokens are already case-folded by the lexer
            seen.entry(word.text())
                .and_modify(|o| *o = Occurrence::Repeated)
                .or_insert(Occurrence::Once);
        }

        tally.distinct = seen.len();
        tally.hapax = seen.values().filter(|&&o| o == Occurrence::Once).count();

        debug!(
            words = tally.words,
            distinct = tally.distinct,
            hapax = tally.hapax,
            sentences = tally.sentences,
            phrases = tally.phrases,
            "tallied document"
        );
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_category_changes() {
        let doc = Document::from_text("the cat saw the other cat, then the dog.").unwrap();
        let tally = WordTally::of(&doc);

        assert_eq!(tally.words, 9);
        assert_eq!(tally.distinct, 6); // the, cat, saw, other, then, dog
        assert_eq!(tally.hapax, 4); // saw, other, then, dog
        assert_eq!(tally.sentences, 1);
        assert_eq!(tally.phrases, 2);
    }

    #[test]
    fn test_case_folding() {
        let doc = Document::from_text("Word word WORD wOrD.").unwrap();
        let tally = WordTally::of(&doc);

        assert_eq!(tally.words, 4);
        assert_eq!(tally.distinct, 1);
        assert_eq!(tally.hapax, 0);
        assert_eq!(tally.characters, 16);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from_text("").unwrap();
        assert_eq!(WordTally::of(&doc), WordTally::default());
    }
}
