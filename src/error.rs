use crate::parser::ParserError;


/// Crate-level error covering evaluator configuration and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Tolerance given to [`crate::EvaluatorBuilder::epsilon`] is negative, infinite or NaN.
    #[error("Invalid epsilon: {0}, expected a finite non-negative value")]
    InvalidEpsilon(f64),

    /// [`crate::EvaluatorBuilder::max_depth`] was set to 0.
    #[error("Nesting depth limit must be at least 1")]
    ZeroDepth,

    /// Lexing or evaluation failed.
    #[error("Parser error - {0}")]
    ParserError(#[from] ParserError)
}
