use log::trace;
use crate::parser::error::*;


/// Classification of a [`Lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeKind {
    /// Numeric literal, possibly malformed (see [`Lexer`]).
    Number,
    /// `(`
    OpenBracket,
    /// `)`
    ClosingBracket,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/` or `÷`
    Div,
    /// Terminates every lexeme sequence, its text is empty.
    End,
}


/// A classified fragment of the input together with its literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    kind: LexemeKind,
    text: String,
    offset: usize,
}

impl Lexeme {
    pub(crate) fn new(kind: LexemeKind, text: impl Into<String>, offset: usize) -> Self {
        Self { kind, text: text.into(), offset }
    }

    /// Kind of this lexeme.
    pub fn kind(&self) -> LexemeKind {
        self.kind
    }

    /// Literal text as it appeared in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 0-based character offset of the first character of this lexeme.
    /// For [`LexemeKind::End`] this is the length of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}


/// Single left-to-right scanner over the input characters.
///
/// Number literals are scanned leniently: any run of ASCII digits, `.`, `e` and `E`
/// becomes one [`LexemeKind::Number`], so `1.2.3` or `e` are valid lexemes here and
/// only fail once the parser converts them to `f64`.
#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_lexeme(&mut self) -> Result<Lexeme> {
        self.skip_whitespace();

        let start = self.position;
        let Some(&ch) = self.input.get(start) else {
            return Ok(Lexeme::new(LexemeKind::End, "", start));
        };

        let kind = match ch {
            '(' => LexemeKind::OpenBracket,
            ')' => LexemeKind::ClosingBracket,
            '+' => LexemeKind::Plus,
            '-' => LexemeKind::Minus,
            '*' => LexemeKind::Mul,
            '/' | '÷' => LexemeKind::Div,
            c if is_number_char(c) => return Ok(self.read_number()),
            _ => return Err(ParserError::UnexpectedCharacter { character: ch, position: start })
        };

        self.position += 1;
        Ok(Lexeme::new(kind, ch, start))
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> Lexeme {
        let start = self.position;
        while self.position < self.input.len() && is_number_char(self.input[self.position]) {
            self.position += 1;
        }

        let text: String = self.input[start..self.position].iter().collect();
        Lexeme::new(LexemeKind::Number, text, start)
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E')
}


/// Splits `input` into lexemes, always terminated by a single [`LexemeKind::End`].
///
/// # Errors
/// Returns [`ParserError::UnexpectedCharacter`] for the first character that is not
/// part of the calculator alphabet. No partial sequence is returned.
///
/// # Examples
/// ```
/// use calc_rocks::{tokenize, LexemeKind};
///
/// let lexemes = tokenize("3(4 - 1.5e2)").unwrap();
/// let kinds: Vec<_> = lexemes.iter().map(|l| l.kind()).collect();
///
/// assert_eq!(kinds, vec![
///     LexemeKind::Number, LexemeKind::OpenBracket, LexemeKind::Number,
///     LexemeKind::Minus, LexemeKind::Number, LexemeKind::ClosingBracket,
///     LexemeKind::End,
/// ]);
/// assert_eq!(lexemes[4].text(), "1.5e2");
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>> {
    let mut lexer = Lexer::new(input);
    let mut lexemes = Vec::new();

    loop {
        let lexeme = lexer.next_lexeme()?;
        trace!("lexeme {:?} {:?} at {}", lexeme.kind, lexeme.text, lexeme.offset);

        let end = lexeme.kind == LexemeKind::End;
        lexemes.push(lexeme);

        if end {
            return Ok(lexemes);
        }
    }
}
