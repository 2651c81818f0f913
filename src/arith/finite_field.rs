// Field extension `F_p^n = F_p[x] / <f(x)>`

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, trace};

use super::finite_field_element::FiniteFieldElement;
use super::matrices::Matrix;
use super::modular::{
    ceil_sqrt, evaluate_polynomial, inverse_mod, is_prime, mul_mod, reduce, sub_mod,
};
use crate::error::{FieldError, Result};

/// The field `F_p[x] / <f(x)>` for a prime `p` and a monic polynomial `f` of degree `n`.
///
/// Immutable once built. Elements borrow the field, so a single `FiniteField` is shared by every
/// [`FiniteFieldElement`] created over it.
#[derive(Clone, Debug)]
pub struct FiniteField {
    p: u64,
    /// Coefficients of `f(x)`, lowest degree first, normalised so that the last one is 1.
    f_coeffs: Vec<u64>,
    n: usize,
    /// `x^n = residue[0] + residue[1] x + ... + residue[n-1] x^(n-1)` in the quotient ring.
    residue: Vec<u64>,
    identity: Matrix,
    /// Whether `f(x)` was checked for roots. Only done for degrees 2 and 3.
    validated: bool,
    /// `p^n`
    order: u64,
}

impl FiniteField {
    /// Build `F_p[x] / <f(x)>` from `f`'s coefficients `[a_0, ..., a_n]`.
    ///
    /// The coefficients are reduced modulo `p` and divided by `a_n` so that `f` is monic. For
    /// degrees 2 and 3 the polynomial must not have a root in `F_p`, otherwise construction fails
    /// with [`FieldError::NotIrreducible`]. Higher degrees are accepted without an
    /// irreducibility check, see [`FiniteField::validated`].
    pub fn new(p: u64, f_coeffs: &[i64]) -> Result<Self> {
        if !is_prime(p) {
            return Err(FieldError::InvalidModulus { modulus: p });
        }
        if f_coeffs.len() < 2 {
            return Err(FieldError::InvalidPolynomial {
                reason: "f(x) must have degree at least 1",
            });
        }

        let mut coeffs: Vec<u64> = f_coeffs.iter().map(|c| reduce(*c, p)).collect();
        let n = coeffs.len() - 1;

        let leading = coeffs[n];
        if leading == 0 {
            return Err(FieldError::InvalidPolynomial {
                reason: "last coefficient of f(x) cannot be 0",
            });
        }

        let order = u32::try_from(n)
            .ok()
            .and_then(|exp| p.checked_pow(exp))
            .ok_or(FieldError::FieldTooLarge { p, n })?;

        // We want the leading coefficient to be 1
        if leading != 1 {
            let leading_inverse = inverse_mod(leading, p)?;
            for coeff in coeffs.iter_mut() {
                *coeff = mul_mod(*coeff, leading_inverse, p);
            }
        }

        let residue = coeffs[..n].iter().map(|c| sub_mod(0, *c, p)).collect();

        let validated = n == 2 || n == 3;
        if validated {
            if let Some(root) = (0..p).find(|x| evaluate_polynomial(&coeffs, *x, p) == 0) {
                return Err(FieldError::NotIrreducible { root });
            }
        }

        debug!(p, n, validated, "constructed finite field");

        Ok(FiniteField {
            p,
            f_coeffs: coeffs,
            n,
            residue,
            identity: Matrix::identity(n),
            validated,
            order,
        })
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn f_coeffs(&self) -> &[u64] {
        &self.f_coeffs
    }

    /// Degree of the extension.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn residue(&self) -> &[u64] {
        &self.residue
    }

    pub fn identity(&self) -> &Matrix {
        &self.identity
    }

    /// `true` if `f(x)` is known to be irreducible. `false` means it was not checked.
    pub fn validated(&self) -> bool {
        self.validated
    }

    /// Number of elements `p^n`.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Order `p^n - 1` of the multiplicative group.
    pub fn group_order(&self) -> u64 {
        self.order - 1
    }

    /// The additive identity.
    pub fn zero(&self) -> FiniteFieldElement<'_> {
        FiniteFieldElement::from_reduced(vec![0; self.n], self)
    }

    /// The multiplicative identity, i.e. the first row of [`FiniteField::identity`].
    pub fn one(&self) -> FiniteFieldElement<'_> {
        FiniteFieldElement::from_reduced(self.identity.row(0).to_vec(), self)
    }

    /// Shorthand for [`FiniteFieldElement::new`].
    pub fn element(&self, coeffs: &[i64]) -> Result<FiniteFieldElement<'_>> {
        FiniteFieldElement::new(coeffs, self)
    }

    /// Find a generator of the cyclic group `(F_p^n)*` by random search, using the thread rng.
    pub fn multiplicative_group(&self) -> Result<FiniteFieldElement<'_>> {
        self.multiplicative_group_with_rng(&mut rand::thread_rng())
    }

    /// Find a generator of the cyclic group `(F_p^n)*` by random search.
    ///
    /// Uniformly random non-zero coefficient vectors are drawn, never the same one twice, and
    /// the first one whose multiplicative order is `p^n - 1` is returned. At most
    /// `ceil(sqrt(p^n))` candidates are tried.
    pub fn multiplicative_group_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<FiniteFieldElement<'_>> {
        let group_order = self.group_order();
        let max_attempts = ceil_sqrt(self.order).min(group_order);
        let mut history: HashSet<Vec<u64>> = HashSet::new();

        for attempt in 1..=max_attempts {
            let coeffs = loop {
                let candidate: Vec<u64> = (0..self.n).map(|_| rng.gen_range(0..self.p)).collect();
                if candidate.iter().any(|c| *c != 0) && !history.contains(&candidate) {
                    break candidate;
                }
            };
            history.insert(coeffs.clone());

            let alpha = FiniteFieldElement::from_reduced(coeffs, self);
            match alpha.mult_order() {
                Ok(order) if order == group_order => {
                    debug!(attempt, generator = %alpha, "found generator");
                    return Ok(alpha);
                }
                Ok(order) => trace!(attempt, candidate = %alpha, order, "not a generator"),
                // Only zero divisors have no order, which happens when f(x) is reducible.
                Err(FieldError::OrderTooLarge { .. }) => {
                    trace!(attempt, candidate = %alpha, "candidate is not invertible")
                }
                Err(e) => return Err(e),
            }
        }

        debug!(attempts = max_attempts, "generator search exhausted");
        Err(FieldError::GeneratorNotFound {
            attempts: max_attempts,
        })
    }
}

impl PartialEq for FiniteField {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p && self.f_coeffs == other.f_coeffs
    }
}

impl Eq for FiniteField {}
