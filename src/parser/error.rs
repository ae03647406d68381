use std::num::ParseFloatError;


/// Errors raised while lexing or evaluating an expression.
/// The first error aborts the evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// A character outside the calculator alphabet, `position` counts characters.
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// Offending character.
        character: char,
        /// 0-based character offset in the input.
        position: usize,
    },

    /// A lexeme that does not fit the grammar. `position` is the cursor position
    /// right after the offending lexeme, an empty `literal` means end of input.
    #[error("Unexpected lexeme {} at position {position}", describe_literal(.literal))]
    UnexpectedLexeme {
        /// Literal text of the lexeme.
        literal: String,
        /// Cursor position in the lexeme sequence.
        position: usize,
    },

    /// A number run such as `1.2.3` that is not a valid `f64`.
    #[error("Invalid number: \"{literal}\" - {source}")]
    InvalidNumericLiteral {
        /// The number run as scanned.
        literal: String,
        /// Conversion failure.
        source: ParseFloatError,
    },

    /// Brackets nested deeper than the configured limit.
    #[error("Parentheses nested deeper than {limit}")]
    NestingTooDeep {
        /// Configured maximum depth.
        limit: usize,
    },
}

impl ParserError {
    /// Position carried by the error, if any.
    pub fn pos(&self) -> Option<usize> {
        match self {
            ParserError::UnexpectedCharacter { position, .. }
            | ParserError::UnexpectedLexeme { position, .. } => Some(*position),
            _ => None
        }
    }

    pub(crate) fn unexpected(literal: &str, position: usize) -> Self {
        ParserError::UnexpectedLexeme { literal: literal.into(), position }
    }
}

fn describe_literal(literal: &str) -> String {
    if literal.is_empty() {
        "end of input".into()
    } else {
        format!("\"{literal}\"")
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
