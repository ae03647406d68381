#[cfg(test)]
mod str_test_strategies;

mod error;
mod lexer;
mod buffer;
mod parse;

pub use error::ParserError;
pub use lexer::{Lexeme, LexemeKind, tokenize};
pub(crate) use buffer::LexemeBuffer;
pub use parse::{Evaluator, EvaluatorBuilder, evaluate, evaluate_f64};
