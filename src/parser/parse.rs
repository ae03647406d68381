use log::debug;
use crate::{Error, Number};
use crate::number::{DEFAULT_EPSILON, DEFAULT_MAX_DEPTH};
use crate::parser::error::*;
use crate::parser::{LexemeBuffer, LexemeKind, tokenize};


/// Evaluation settings for calculator expressions.
///
/// An `Evaluator` holds no state between calls, one instance can be shared
/// freely between threads.
///
/// Grammar, lowest to highest precedence:
/// ```text
/// expression := ε | sum
/// sum        := product ( ('+' | '-') product )*
/// product    := factor ( ('*' | '/') factor | '(' expression ')' )*
/// factor     := '-'? ( NUMBER | '(' expression ')' )
/// ```
/// A bracket directly after a factor multiplies it, so `3(4-1)` is `9`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    epsilon: f64,
    max_depth: usize
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Evaluator {
    /// Creates a new [`EvaluatorBuilder`] starting from the default settings.
    ///
    /// # Examples
    /// ```
    /// use calc_rocks::{Evaluator, Number};
    ///
    /// let evaluator = Evaluator::builder()
    ///     .epsilon(1e-6)
    ///     .max_depth(16)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(evaluator.evaluate("1/3*3").unwrap(), Number::Integer(1));
    /// ```
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Tolerance of the integer-collapse rule.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Maximum bracket nesting.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Tokenizes and evaluates `input`, collapsing near-integral results to
    /// [`Number::Integer`].
    ///
    /// # Errors
    /// Returns the first [`ParserError`] met while lexing or parsing; there is no
    /// partial result. Division by zero is not an error and yields an infinite or NaN
    /// [`Number::Float`].
    pub fn evaluate(&self, input: &str) -> Result<Number> {
        let value = self.evaluate_f64(input)?;
        let number = Number::collapse(value, self.epsilon);

        debug!("evaluated {input:?} = {number}");
        Ok(number)
    }

    /// Like [`Evaluator::evaluate`] but returns the raw `f64` result.
    ///
    /// # Errors
    /// Same as [`Evaluator::evaluate`].
    pub fn evaluate_f64(&self, input: &str) -> Result<f64> {
        let lexemes = LexemeBuffer::new(tokenize(input)?);
        debug!("evaluating {input:?} over {} lexemes", lexemes.len());

        let mut parser = Parser { lexemes, max_depth: self.max_depth, depth: 0 };
        parser.parse()
    }
}


/// Builder for [`Evaluator`], see [`Evaluator::builder()`].
#[derive(Debug, Clone)]
pub struct EvaluatorBuilder {
    epsilon: f64,
    max_depth: usize
}

impl EvaluatorBuilder {
    fn new() -> Self {
        Self { epsilon: DEFAULT_EPSILON, max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Sets the tolerance used to report results as integers.
    /// `0.0` disables the collapse entirely.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Limits how deeply brackets may nest, [`DEFAULT_MAX_DEPTH`] unless set.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// - Returns `Err(Error::InvalidEpsilon)` if `epsilon` is negative, infinite or NaN.
    /// - Returns `Err(Error::ZeroDepth)` if `max_depth` was set to 0.
    ///
    /// # Examples
    /// ```
    /// use calc_rocks::{Evaluator, Error};
    ///
    /// assert!(Evaluator::builder().build().is_ok());
    /// assert_eq!(Evaluator::builder().max_depth(0).build(), Err(Error::ZeroDepth));
    /// assert!(matches!(Evaluator::builder().epsilon(-1.0).build(), Err(Error::InvalidEpsilon(_))));
    /// ```
    pub fn build(self) -> std::result::Result<Evaluator, Error> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidEpsilon(self.epsilon));
        }

        if self.max_depth == 0 {
            return Err(Error::ZeroDepth);
        }

        Ok(Evaluator { epsilon: self.epsilon, max_depth: self.max_depth })
    }
}


/// Recursive-descent evaluator over one lexeme sequence.
/// Every grammar level computes its value directly, no tree is built.
#[derive(Debug)]
struct Parser {
    lexemes: LexemeBuffer,
    max_depth: usize,
    depth: usize
}

impl Parser {
    fn parse(&mut self) -> Result<f64> {
        let value = self.expression()?;

        if self.lexemes.next().kind() != LexemeKind::End {
            return Err(self.lexemes.unexpected());
        }

        Ok(value)
    }

    fn expression(&mut self) -> Result<f64> {
        let kind = self.lexemes.next().kind();
        self.lexemes.back();

        if kind == LexemeKind::End {
            return Ok(0.0);
        }

        self.sum()
    }

    fn sum(&mut self) -> Result<f64> {
        let mut result = self.product()?;

        loop {
            match self.lexemes.next().kind() {
                LexemeKind::Plus => result += self.product()?,
                LexemeKind::Minus => result -= self.product()?,
                _ => {
                    self.lexemes.back();
                    return Ok(result);
                }
            }
        }
    }

    fn product(&mut self) -> Result<f64> {
        let mut result = self.factor()?;

        loop {
            match self.lexemes.next().kind() {
                LexemeKind::Mul => result *= self.factor()?,
                LexemeKind::Div => result /= self.factor()?,
                LexemeKind::OpenBracket => result *= self.bracketed()?,
                _ => {
                    self.lexemes.back();
                    return Ok(result);
                }
            }
        }
    }

    fn factor(&mut self) -> Result<f64> {
        let mut sign = 1.0;
        let mut lexeme = self.lexemes.next();

        if lexeme.kind() == LexemeKind::Minus {
            sign = -1.0;
            lexeme = self.lexemes.next();
        }

        match lexeme.kind() {
            LexemeKind::Number => {
                let value = lexeme.text().parse::<f64>()
                    .map_err(|source| ParserError::InvalidNumericLiteral {
                        literal: lexeme.text().into(),
                        source
                    })?;

                Ok(sign * value)
            },

            LexemeKind::OpenBracket => Ok(sign * self.bracketed()?),

            _ => Err(self.lexemes.unexpected())
        }
    }

    /// Evaluates the inside of a bracket whose `(` was already consumed,
    /// then consumes the matching `)`.
    fn bracketed(&mut self) -> Result<f64> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParserError::NestingTooDeep { limit: self.max_depth });
        }

        let value = self.expression()?;

        if self.lexemes.next().kind() != LexemeKind::ClosingBracket {
            return Err(self.lexemes.unexpected());
        }

        self.depth -= 1;
        Ok(value)
    }
}


/// Evaluates a calculator expression with the default [`Evaluator`].
///
/// # Errors
/// - [`ParserError::UnexpectedCharacter`] for a character outside the calculator alphabet.
/// - [`ParserError::UnexpectedLexeme`] for unbalanced brackets, misplaced operators
///   or anything left over after a complete expression.
/// - [`ParserError::InvalidNumericLiteral`] for number runs such as `1.2.3` that are
///   not valid floats.
///
/// # Examples
/// ```
/// use calc_rocks::{evaluate, Number, ParserError};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
/// assert_eq!(evaluate("3(4 - 1)").unwrap(), Number::Integer(9));
/// assert_eq!(evaluate("5 ÷ 2").unwrap(), Number::Float(2.5));
/// assert_eq!(evaluate("").unwrap(), Number::Integer(0));
///
/// let err = evaluate("2&3").unwrap_err();
/// assert_eq!(err, ParserError::UnexpectedCharacter { character: '&', position: 1 });
/// ```
pub fn evaluate(input: &str) -> Result<Number> {
    Evaluator::default().evaluate(input)
}


/// Evaluates a calculator expression with the default [`Evaluator`] and returns
/// the raw `f64`, without collapsing it to an integer.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use calc_rocks::evaluate_f64;
///
/// assert_eq!(evaluate_f64("4/2").unwrap(), 2.0);
/// assert!(evaluate_f64("1/0").unwrap().is_infinite());
/// ```
pub fn evaluate_f64(input: &str) -> Result<f64> {
    Evaluator::default().evaluate_f64(input)
}
