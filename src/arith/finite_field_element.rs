// Elements of `F_p^n = F_p[x] / <f(x)>` and their matrix representation

use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

use super::finite_field::FiniteField;
use super::matrices::Matrix;
use super::modular::{add_mod, mul_mod, reduce};
use super::Operand;
use crate::error::{FieldError, Result};

/// An element `a(x) = a_0 + a_1 x + ... + a_{n-1} x^{n-1}` of a [`FiniteField`].
///
/// Besides its coefficients the element keeps its regular representation: the `n x n` matrix of
/// the linear map `b(x) -> a(x) b(x)`. Row `i` holds the coefficients of `x^i a(x)`, so row 0 is
/// the element itself and products of elements are products of matrices.
#[derive(Clone)]
pub struct FiniteFieldElement<'f> {
    coeffs: Vec<u64>,
    field: &'f FiniteField,
    matrix: Matrix,
}

impl<'f> FiniteFieldElement<'f> {
    /// Create an element from its `n` coefficients, lowest degree first. Coefficients are reduced
    /// modulo `p`.
    pub fn new(coeffs: &[i64], field: &'f FiniteField) -> Result<Self> {
        if coeffs.len() != field.n() {
            return Err(FieldError::DegreeMismatch {
                expected: field.n(),
                found: coeffs.len(),
            });
        }
        let coeffs = coeffs.iter().map(|c| reduce(*c, field.p())).collect();
        Ok(Self::from_reduced(coeffs, field))
    }

    /// Coefficients must be in `[0, p)` and there must be exactly `n` of them.
    pub(crate) fn from_reduced(coeffs: Vec<u64>, field: &'f FiniteField) -> Self {
        debug_assert_eq!(coeffs.len(), field.n());
        let matrix = regular_representation(&coeffs, field);
        FiniteFieldElement {
            coeffs,
            field,
            matrix,
        }
    }

    /// Wrap a matrix that is already the regular representation of some element.
    fn from_matrix(&self, matrix: Matrix) -> Self {
        FiniteFieldElement {
            coeffs: matrix.row(0).to_vec(),
            field: self.field,
            matrix,
        }
    }

    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    pub fn field(&self) -> &'f FiniteField {
        self.field
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Recompute the regular representation from the coefficients.
    pub fn to_matrix(&self) -> Matrix {
        regular_representation(&self.coeffs, self.field)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0)
    }

    /// Check that `other` lives in the same field: same `p` and same `f(x)`.
    pub fn is_compatible(&self, other: &FiniteFieldElement<'_>) -> Result<()> {
        if self.field.p() != other.field.p() || self.field.f_coeffs() != other.field.f_coeffs() {
            return Err(FieldError::IncompatibleField);
        }
        Ok(())
    }

    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.extension_operand(rhs.into())?;
        Ok(self.from_matrix(self.matrix.add_mod(&rhs.matrix, self.field.p())))
    }

    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.extension_operand(rhs.into())?;
        Ok(self.from_matrix(self.matrix.sub_mod(&rhs.matrix, self.field.p())))
    }

    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.extension_operand(rhs.into())?;
        Ok(self.from_matrix(self.matrix.mul_mod(&rhs.matrix, self.field.p())))
    }

    /// `self * rhs^-1`
    pub fn div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        let rhs = self.extension_operand(rhs.into())?;
        let inverse = rhs.inverse()?;
        self.mul(&inverse)
    }

    pub fn neg(&self) -> Self {
        let zero = Matrix::zero(self.field.n());
        self.from_matrix(zero.sub_mod(&self.matrix, self.field.p()))
    }

    /// `self ^ exponent`. Zero gives the identity, negative exponents invert first.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        if exponent == 0 {
            return Ok(self.field.one());
        }
        if exponent < 0 {
            return Ok(self.inverse()?.pow_unsigned(exponent.unsigned_abs()));
        }
        Ok(self.pow_unsigned(exponent as u64))
    }

    pub(crate) fn pow_unsigned(&self, exponent: u64) -> Self {
        self.from_matrix(self.matrix.pow_mod(exponent, self.field.p()))
    }

    /// Multiplicative inverse `self^(ord(self) - 1)`.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let order = self.mult_order()?;
        Ok(self.pow_unsigned(order - 1))
    }

    /// Smallest `k >= 1` with `self^k = 1`, found by repeated multiplication.
    ///
    /// Fails with [`FieldError::OrderTooLarge`] if no such `k <= p^n` exists, which is the case for
    /// zero and, when `f(x)` is reducible, for every zero divisor.
    pub fn mult_order(&self) -> Result<u64> {
        let bound = self.field.order();
        if self.is_zero() {
            return Err(FieldError::OrderTooLarge { bound });
        }

        let p = self.field.p();
        let identity = self.field.identity();
        let mut power = self.matrix.clone();
        let mut order = 1_u64;
        while power != *identity {
            if order >= bound {
                return Err(FieldError::OrderTooLarge { bound });
            }
            power = power.mul_mod(&self.matrix, p);
            order += 1;
        }
        Ok(order)
    }

    fn extension_operand<'a>(&self, rhs: Operand<'a>) -> Result<&'a FiniteFieldElement<'a>> {
        match rhs {
            Operand::Extension(element) => {
                self.is_compatible(element)?;
                Ok(element)
            }
            other => Err(FieldError::WrongOperandType {
                expected: "extension field element",
                found: other.kind(),
            }),
        }
    }
}

/// Matrix of multiplication by `a(x)` in `F_p[x] / <f(x)>`.
///
/// Row `i` of an `n x (2n - 1)` scratch matrix starts as the coefficients of `a(x)` shifted right
/// by `i`, i.e. `x^i a(x)` before reduction. Columns `2n - 2` down to `n` are then folded back
/// with `x^n = residue`: column `c` contributes `residue[j] * column[c]` to column `c - n + j`.
/// Folding from the highest column down means every column is final once it is reached.
fn regular_representation(coeffs: &[u64], field: &FiniteField) -> Matrix {
    let n = field.n();
    let p = field.p();
    let residue = field.residue();
    let width = 2 * n - 1;

    let mut helper = vec![vec![0_u64; width]; n];
    for (i, row) in helper.iter_mut().enumerate() {
        row[i..i + n].copy_from_slice(coeffs);
    }

    for column in (n..width).rev() {
        for row in helper.iter_mut() {
            let carry = row[column];
            if carry == 0 {
                continue;
            }
            for (j, r) in residue.iter().enumerate() {
                let target = column - n + j;
                row[target] = add_mod(row[target], mul_mod(*r, carry, p), p);
            }
            row[column] = 0;
        }
    }

    let rows: Vec<Vec<u64>> = helper.into_iter().map(|row| row[..n].to_vec()).collect();
    Matrix::from_rows(&rows)
}

impl PartialEq for FiniteFieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs && *self.field == *other.field
    }
}

impl Eq for FiniteFieldElement<'_> {}

impl Hash for FiniteFieldElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl Display for FiniteFieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| **c != 0)
            .map(|(power, c)| match (power, *c) {
                (0, c) => format!("{}", c),
                (1, 1) => "x".to_string(),
                (1, c) => format!("{}x", c),
                (power, 1) => format!("x^{}", power),
                (power, c) => format!("{}x^{}", c, power),
            })
            .collect();

        if terms.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", terms.join(" + "))
    }
}

impl Debug for FiniteFieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteFieldElement")
            .field("coeffs", &self.coeffs)
            .field("p", &self.field.p())
            .field("f", &self.field.f_coeffs())
            .finish()
    }
}
