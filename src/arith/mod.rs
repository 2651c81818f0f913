pub mod finite_field;
pub mod finite_field_element;
pub mod matrices;
pub mod modular;
pub mod prime_field;

use finite_field_element::FiniteFieldElement;
use prime_field::PrimeFieldElement;

use crate::error::{FieldError, Result};

/// Right-hand side of a field operation.
///
/// Raw integers are lifted into the prime field of the left-hand side. Extension field elements
/// are borrowed, so an operation never takes ownership of its operand.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    Integer(i64),
    Prime(PrimeFieldElement),
    Extension(&'a FiniteFieldElement<'a>),
}

impl Operand<'_> {
    /// Human readable kind, used in [`crate::FieldError::WrongOperandType`].
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Prime(_) => "prime field element",
            Operand::Extension(_) => "extension field element",
        }
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<PrimeFieldElement> for Operand<'_> {
    fn from(value: PrimeFieldElement) -> Self {
        Operand::Prime(value)
    }
}

impl From<&PrimeFieldElement> for Operand<'_> {
    fn from(value: &PrimeFieldElement) -> Self {
        Operand::Prime(*value)
    }
}

impl<'a, 'f: 'a> From<&'a FiniteFieldElement<'f>> for Operand<'a> {
    fn from(value: &'a FiniteFieldElement<'f>) -> Self {
        Operand::Extension(value)
    }
}

/// Parse an exponent given as text.
///
/// Integers are accepted as is, decimals only when they have no fractional part (`"3.0"`).
pub fn parse_exponent(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if let Ok(exponent) = trimmed.parse::<i64>() {
        return Ok(exponent);
    }
    match trimmed.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(FieldError::InvalidExponent {
            input: input.to_string(),
        }),
    }
}
