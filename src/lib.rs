#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Evaluator for calculator-style arithmetic expressions.
//!
//! Supports decimal and exponent literals, `+ - * /` (and `÷`), unary minus,
//! brackets and implicit multiplication by a bracket (`3(4-1)`).
//!
//! ```
//! use calc_rocks::{evaluate, Number};
//!
//! assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Number::Integer(20));
//! assert_eq!(evaluate("10 - 2 - 3").unwrap(), Number::Integer(5));
//! assert_eq!(evaluate("5/2").unwrap(), Number::Float(2.5));
//! ```

mod error;
mod number;
mod parser;

pub use error::Error;
pub use number::{Number, DEFAULT_EPSILON, DEFAULT_MAX_DEPTH};
pub use parser::{
    ParserError,
    Lexeme, LexemeKind, tokenize,
    Evaluator, EvaluatorBuilder,
    evaluate, evaluate_f64
};
