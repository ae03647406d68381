use crate::parser::{Lexeme, LexemeKind, ParserError};


/// Read cursor over a lexeme sequence produced by [`crate::tokenize`].
///
/// The sequence always ends with [`LexemeKind::End`]. Fetching past it keeps
/// returning the END lexeme and the cursor stops at one-past-END.
#[derive(Debug)]
pub(crate) struct LexemeBuffer {
    lexemes: Vec<Lexeme>,
    position: usize,
}

impl LexemeBuffer {
    pub fn new(mut lexemes: Vec<Lexeme>) -> Self {
        if lexemes.last().map(Lexeme::kind) != Some(LexemeKind::End) {
            let offset = lexemes.last().map_or(0, |l| l.offset() + l.text().chars().count());
            lexemes.push(Lexeme::new(LexemeKind::End, "", offset));
        }

        Self { lexemes, position: 0 }
    }

    /// Returns the lexeme under the cursor and advances past it.
    pub fn next(&mut self) -> &Lexeme {
        let index = self.position.min(self.lexemes.len() - 1);
        self.position = index + 1;
        &self.lexemes[index]
    }

    /// Unreads the last fetched lexeme.
    ///
    /// Only valid directly after [`LexemeBuffer::next`]; the grammar never steps back twice.
    pub fn back(&mut self) {
        debug_assert!(self.position > 0, "stepped back before the first lexeme");
        self.position = self.position.saturating_sub(1);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Builds an [`ParserError::UnexpectedLexeme`] for the last fetched lexeme
    /// at the current cursor position.
    pub fn unexpected(&self) -> ParserError {
        let index = self.position.saturating_sub(1).min(self.lexemes.len() - 1);
        ParserError::unexpected(self.lexemes[index].text(), self.position())
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }
}
