//! Error types for prime field, extension field and discrete logarithm operations.

use std::fmt;

/// Errors that can occur while building fields or computing with their elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The defining polynomial is unusable: empty, constant or with a zero leading coefficient.
    InvalidPolynomial {
        /// Description of what is wrong with the polynomial.
        reason: &'static str,
    },

    /// A polynomial of degree 2 or 3 has a root in F_p and therefore factors.
    NotIrreducible {
        /// The root that was found.
        root: u64,
    },

    /// The number of coefficients of an element does not match the degree of its field.
    DegreeMismatch {
        /// Number of coefficients the field expects.
        expected: usize,
        /// Number of coefficients that were provided.
        found: usize,
    },

    /// The operands live in different fields (different `p` or different `f(x)`).
    IncompatibleField,

    /// The operand is not of the algebraic type the operation expects.
    WrongOperandType {
        /// The operand kind the operation accepts.
        expected: &'static str,
        /// The operand kind that was supplied.
        found: &'static str,
    },

    /// Division by, or inversion of, the zero element.
    DivisionByZero,

    /// `gcd(value, modulus) != 1`, so no modular inverse exists.
    NoInverse {
        /// The value that could not be inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },

    /// An exponent that is not an integer.
    InvalidExponent {
        /// The rejected input.
        input: String,
    },

    /// The order search went past the size of the field.
    OrderTooLarge {
        /// The iteration bound `p^n`.
        bound: u64,
    },

    /// The random generator search used up its attempt budget.
    GeneratorNotFound {
        /// Number of candidates that were tested.
        attempts: u64,
    },

    /// A prime field value outside `[0, p)`.
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// The modulus.
        modulus: u64,
    },

    /// The modulus of an extension field is not a prime.
    InvalidModulus {
        /// The rejected modulus.
        modulus: u64,
    },

    /// `p^n` does not fit in 64 bits.
    FieldTooLarge {
        /// The prime.
        p: u64,
        /// The extension degree.
        n: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidPolynomial { reason } => {
                write!(f, "invalid polynomial: {}", reason)
            }
            FieldError::NotIrreducible { root } => {
                write!(f, "f(x) is not irreducible: x = {} is a root", root)
            }
            FieldError::DegreeMismatch { expected, found } => write!(
                f,
                "element has {} coefficients but the field expects {}",
                found, expected
            ),
            FieldError::IncompatibleField => {
                write!(f, "cannot combine elements of different fields")
            }
            FieldError::WrongOperandType { expected, found } => {
                write!(f, "expected {} operand, found {}", expected, found)
            }
            FieldError::DivisionByZero => write!(f, "division by zero"),
            FieldError::NoInverse { value, modulus } => {
                write!(f, "{} has no inverse modulo {}", value, modulus)
            }
            FieldError::InvalidExponent { input } => {
                write!(f, "exponent must be an integer, got '{}'", input)
            }
            FieldError::OrderTooLarge { bound } => {
                write!(f, "multiplicative order exceeds the field size {}", bound)
            }
            FieldError::GeneratorNotFound { attempts } => write!(
                f,
                "no generator of the multiplicative group found after {} attempts",
                attempts
            ),
            FieldError::OutOfRange { value, modulus } => {
                write!(f, "{} is not in the prime field of {}", value, modulus)
            }
            FieldError::InvalidModulus { modulus } => {
                write!(f, "{} is not a prime modulus", modulus)
            }
            FieldError::FieldTooLarge { p, n } => {
                write!(f, "field of size {}^{} does not fit in 64 bits", p, n)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
