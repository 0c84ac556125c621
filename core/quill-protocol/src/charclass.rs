use bitflags::bitflags;

bitflags! {
    /// Lexical classes of a single input character.
    ///
    /// A character may belong to more than one class: letters and digits
    /// are also part of [`CharClass::WORD_BODY`]. Characters outside every
    /// class become `UNKNOWN` tokens.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CharClass: u8 {
        const WHITESPACE = 1;
        const LETTER = 2;
        const DIGIT = 4;
        /// Apostrophe and hyphen, allowed inside a word but never first.
        const JOINER = 8;
        const PHRASE_END = 16;
        const SENTENCE_END = 32;

        const WORD_BODY = Self::LETTER.bits() | Self::DIGIT.bits() | Self::JOINER.bits();
    }
}

impl CharClass {
    /// Classifies `c` using plain ASCII range checks.
    pub const fn of(c: char) -> Self {
        match c {
            'a'..='z' | 'A'..='Z' => Self::LETTER,
            '0'..='9' => Self::DIGIT,
            '\'' | '-' => Self::JOINER,
            ',' | ':' | ';' => Self::PHRASE_END,
            '.' | '?' | '!' => Self::SENTENCE_END,
            ' ' | '\t' | '\n' | '\r' | '\x0C' => Self::WHITESPACE,
            _ => Self::empty(),
        }
    }

    #[inline]
    pub const fn is_whitespace(self) -> bool {
        self.contains(Self::WHITESPACE)
    }

    #[inline]
    pub const fn starts_word(self) -> bool {
        self.contains(Self::LETTER)
    }

    #[inline]
    pub const fn continues_word(self) -> bool {
        self.intersects(Self::WORD_BODY)
    }
}
