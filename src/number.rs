use std::fmt::Display;


/// Default tolerance used by [`Number::collapse`] through [`crate::evaluate`].
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Default bracket nesting limit of [`crate::Evaluator`].
/// Every bracket level is a few stack frames of recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;


/// Result of an evaluation.
///
/// Values that lie within the evaluator's tolerance of a whole number are reported
/// as [`Number::Integer`], everything else (including infinities and NaN) as
/// [`Number::Float`]. This is a display convenience, not a precision guarantee.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Integral result.
    Integer(i64),
    /// Non-integral or non-finite result.
    Float(f64)
}

impl Number {
    /// Applies the integer-collapse rule to a raw evaluation result.
    ///
    /// `value` becomes [`Number::Integer`] when `|value - round(value)| < epsilon`
    /// and the rounded value fits in an `i64`.
    ///
    /// # Examples
    /// ```
    /// use calc_rocks::Number;
    ///
    /// assert_eq!(Number::collapse(2.0, 1e-12), Number::Integer(2));
    /// assert_eq!(Number::collapse(0.1 + 0.2, 1e-12), Number::Float(0.1 + 0.2));
    /// assert_eq!(Number::collapse(0.1 + 0.2, 1e-3), Number::Float(0.1 + 0.2));
    /// assert_eq!(Number::collapse(2.9999, 1e-3), Number::Integer(3));
    /// ```
    pub fn collapse(value: f64, epsilon: f64) -> Self {
        let rounded = value.round();

        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if (value - rounded).abs() < epsilon && rounded.abs() < i64::MAX as f64 {
            Number::Integer(rounded as i64)
        } else {
            Number::Float(value)
        }
    }

    /// The value as `f64`, integers are converted losslessly up to 2^53.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(value) => value as f64,
            Number::Float(value) => value
        }
    }

    /// If the number is [`Number::Integer`] returns `Some(i64)`, else `None`.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Integer(value) => Some(value),
            Number::Float(_) => None
        }
    }

    /// `true` for [`Number::Integer`].
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.as_f64()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}")
        }
    }
}
