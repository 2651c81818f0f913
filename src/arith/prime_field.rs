// Prime field F_p operations

use std::fmt::{self, Debug, Display};

use super::modular::{add_mod, inverse_mod, mul_mod, pow_mod, reduce, sub_mod};
use super::Operand;
use crate::error::{FieldError, Result};

/// An element of the prime field `F_p`, i.e. an integer in `[0, p)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeFieldElement {
    value: u64,
    modulus: u64,
}

impl PrimeFieldElement {
    /// Create an element of `F_p`. Fails with [`FieldError::OutOfRange`] unless `0 <= value < p`.
    pub fn new(value: i64, p: u64) -> Result<Self> {
        if value < 0 || value as u64 >= p {
            return Err(FieldError::OutOfRange { value, modulus: p });
        }
        Ok(PrimeFieldElement {
            value: value as u64,
            modulus: p,
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.lift(rhs.into())?;
        Ok(self.with_value(add_mod(self.value, rhs, self.modulus)))
    }

    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.lift(rhs.into())?;
        Ok(self.with_value(sub_mod(self.value, rhs, self.modulus)))
    }

    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.lift(rhs.into())?;
        Ok(self.with_value(mul_mod(self.value, rhs, self.modulus)))
    }

    /// Divide by `rhs`, i.e. multiply with its inverse.
    ///
    /// A raw integer divisor must already be a field value in `[0, p)`.
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let divisor = match rhs.into() {
            Operand::Integer(value) => Self::new(value, self.modulus)?,
            other => self.with_value(self.lift(other)?),
        };
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        self.mul(divisor.inverse()?)
    }

    pub fn neg(&self) -> Self {
        self.with_value(sub_mod(0, self.value, self.modulus))
    }

    /// Multiplicative inverse using the extended Euclidean algorithm.
    pub fn inverse(&self) -> Result<Self> {
        Ok(self.with_value(inverse_mod(self.value, self.modulus)?))
    }

    /// `self ^ exponent`. Negative exponents invert first.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        if exponent == 0 {
            return Ok(self.with_value(1 % self.modulus));
        }
        if exponent < 0 {
            return self.inverse()?.pow_unsigned(exponent.unsigned_abs());
        }
        self.pow_unsigned(exponent as u64)
    }

    /// `self ^ exponent` where the exponent is given by another element's value.
    pub fn pow_element(&self, exponent: &PrimeFieldElement) -> Result<Self> {
        self.pow_unsigned(exponent.value)
    }

    fn pow_unsigned(&self, exponent: u64) -> Result<Self> {
        Ok(self.with_value(pow_mod(self.value, exponent, self.modulus)))
    }

    /// Resolve an operand to a value in `[0, p)`.
    fn lift(&self, rhs: Operand<'_>) -> Result<u64> {
        match rhs {
            Operand::Integer(value) => Ok(reduce(value, self.modulus)),
            Operand::Prime(other) if other.modulus == self.modulus => Ok(other.value),
            Operand::Prime(_) => Err(FieldError::IncompatibleField),
            other => Err(FieldError::WrongOperandType {
                expected: "integer or prime field element",
                found: other.kind(),
            }),
        }
    }

    fn with_value(&self, value: u64) -> Self {
        PrimeFieldElement {
            value,
            modulus: self.modulus,
        }
    }
}

impl Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Debug for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

// Macro to create an element of F_p in tests
#[cfg(test)]
macro_rules! fp {
    ($val:expr, $p:expr) => {
        PrimeFieldElement::new($val, $p).unwrap()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::finite_field::FiniteField;
    use crate::arith::finite_field_element::FiniteFieldElement;

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(fp!(3, 7).value(), 3);
        assert_eq!(
            PrimeFieldElement::new(7, 7),
            Err(FieldError::OutOfRange {
                value: 7,
                modulus: 7
            })
        );
        assert_eq!(
            PrimeFieldElement::new(-1, 7),
            Err(FieldError::OutOfRange {
                value: -1,
                modulus: 7
            })
        );
    }

    #[test]
    fn test_arith_with_elements() {
        let a = fp!(5, 7);
        let b = fp!(4, 7);

        assert_eq!(a.add(b).unwrap(), fp!(2, 7));
        assert_eq!(a.sub(b).unwrap(), fp!(1, 7));
        assert_eq!(b.sub(a).unwrap(), fp!(6, 7));
        assert_eq!(a.mul(b).unwrap(), fp!(6, 7));
        assert_eq!(a.div(b).unwrap().mul(b).unwrap(), a);
        assert_eq!(a.neg(), fp!(2, 7));
        assert_eq!(fp!(0, 7).neg(), fp!(0, 7));
    }

    #[test]
    fn test_arith_with_integers() {
        let a = fp!(5, 7);

        assert_eq!(a.add(4_i64).unwrap(), fp!(2, 7));
        assert_eq!(a.add(-6_i64).unwrap(), fp!(6, 7));
        assert_eq!(a.sub(12_i64).unwrap(), fp!(0, 7));
        assert_eq!(a.mul(3_i64).unwrap(), fp!(1, 7));
        assert_eq!(a.div(5_i64).unwrap(), fp!(1, 7));
        assert_eq!(
            a.div(9_i64),
            Err(FieldError::OutOfRange {
                value: 9,
                modulus: 7
            })
        );
    }

    #[test]
    fn test_incompatible_moduli() {
        let a = fp!(1, 7);
        let b = fp!(1, 5);
        assert_eq!(a.add(b), Err(FieldError::IncompatibleField));
        assert_eq!(a.sub(b), Err(FieldError::IncompatibleField));
        assert_eq!(a.mul(b), Err(FieldError::IncompatibleField));
        assert_eq!(a.div(b), Err(FieldError::IncompatibleField));
    }

    #[test]
    fn test_wrong_operand_type() {
        let field = FiniteField::new(7, &[3, 1, 1]).unwrap();
        let alpha = FiniteFieldElement::new(&[1, 1], &field).unwrap();
        assert_eq!(
            fp!(1, 7).add(&alpha),
            Err(FieldError::WrongOperandType {
                expected: "integer or prime field element",
                found: "extension field element"
            })
        );
    }

    #[test]
    fn test_division_by_zero() {
        let a = fp!(3, 7);
        assert_eq!(a.div(fp!(0, 7)), Err(FieldError::DivisionByZero));
        assert_eq!(a.div(0_i64), Err(FieldError::DivisionByZero));
        assert_eq!(fp!(0, 7).inverse(), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_inverse_all_elements() {
        for p in [2_u64, 3, 5, 7, 11, 13, 47, 251] {
            for a in 1..p as i64 {
                let inv = fp!(a, p).inverse().unwrap();
                assert_eq!(
                    (inv.value() * a as u64) % p,
                    1,
                    "Failed for a: {}, p: {}",
                    a,
                    p
                );
            }
        }
    }

    #[test]
    fn test_inverse_non_prime_modulus() {
        assert_eq!(
            fp!(2, 4).inverse(),
            Err(FieldError::NoInverse {
                value: 2,
                modulus: 4
            })
        );
    }

    #[test]
    fn test_pow() {
        let a = fp!(3, 7);
        assert_eq!(a.pow(0).unwrap(), fp!(1, 7));
        assert_eq!(a.pow(1).unwrap(), a);
        assert_eq!(a.pow(2).unwrap(), fp!(2, 7));
        assert_eq!(a.pow(6).unwrap(), fp!(1, 7));
        assert_eq!(a.pow(-1).unwrap(), a.inverse().unwrap());
        assert_eq!(a.pow(-2).unwrap(), a.pow(2).unwrap().inverse().unwrap());
        assert_eq!(a.pow_element(&fp!(2, 7)).unwrap(), fp!(2, 7));
        assert_eq!(fp!(0, 7).pow(0).unwrap(), fp!(1, 7));
        assert_eq!(fp!(0, 7).pow(-1), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_display() {
        assert_eq!(fp!(3, 7).to_string(), "3");
        assert_eq!(format!("{:?}", fp!(3, 7)), "3 (mod 7)");
    }
}
