//! Discrete logarithms in the multiplicative group of an extension field.

use std::collections::HashMap;

use tracing::debug;

use crate::arith::finite_field_element::FiniteFieldElement;
use crate::arith::modular::ceil_sqrt;
use crate::error::{FieldError, Result};

/// Baby-step giant-step: find `k` in `[0, p^n - 1)` with `g^k = h`.
///
/// With `N = p^n - 1` and `m = ceil(sqrt(N))` the giant steps `h * g^(-m*i)` for `i < m` are stored
/// in a table, then the baby steps `g^j` for `j < m` are looked up in it. A hit gives
/// `k = j + i*m mod N`. Runs in `O(sqrt(N))` time and space.
///
/// Returns `Ok(None)` when no baby step hits the table. This does not prove that no solution
/// exists: `g` may not generate a subgroup containing `h`.
///
/// If `f(x)` was not checked for irreducibility the quotient ring may not be a field. The
/// returned `k` then still satisfies `g^k = h` but is not reduced below `N`, and a base that is a
/// zero divisor fails with [`FieldError::OrderTooLarge`].
pub fn bsgs<'f>(g: &FiniteFieldElement<'f>, h: &FiniteFieldElement<'f>) -> Result<Option<u64>> {
    g.is_compatible(h)?;
    if g.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let field = g.field();
    let group_order = field.group_order();
    let m = ceil_sqrt(group_order);

    // In a field g^N = 1, so g^-m = g^(N-m) without searching for the order of g. An unchecked
    // f(x) may give a ring where that fails, there the true inverse is needed.
    let giant_factor = if field.validated() {
        g.pow_unsigned(group_order - m)
    } else {
        g.inverse()?.pow_unsigned(m)
    };

    let mut table: HashMap<FiniteFieldElement<'f>, u64> = HashMap::with_capacity(m as usize);
    let mut giant = h.clone();
    for i in 0..m {
        let next = giant.mul(&giant_factor)?;
        // Later insertions overwrite earlier ones; any stored index gives a valid answer.
        table.insert(giant, i);
        giant = next;
    }
    debug!(group_order, m, entries = table.len(), "bsgs giant steps stored");

    let mut baby = field.one();
    for j in 0..m {
        if let Some(i) = table.get(&baby) {
            let exponent = j as u128 + *i as u128 * m as u128;
            // Reducing mod N needs g^N = 1, which only holds in a field.
            let k = if field.validated() {
                (exponent % group_order as u128) as u64
            } else {
                exponent as u64
            };
            debug!(j, i, k, "bsgs baby step hit");
            return Ok(Some(k));
        }
        baby = baby.mul(g)?;
    }

    debug!(group_order, "bsgs found no match");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::finite_field::FiniteField;

    #[test]
    fn test_bsgs_small_field() {
        // x + 1 generates F_9^*
        let field = FiniteField::new(3, &[1, 0, 1]).unwrap();
        let g = field.element(&[1, 1]).unwrap();
        for k in 0..8 {
            let h = g.pow(k).unwrap();
            assert_eq!(bsgs(&g, &h), Ok(Some(k as u64)), "Failed for k: {}", k);
        }
    }

    #[test]
    fn test_bsgs_of_generator_is_one() {
        let field = FiniteField::new(7, &[3, 1, 1]).unwrap();
        let g = field.element(&[0, 1]).unwrap();
        assert_eq!(bsgs(&g, &g), Ok(Some(1)));
        assert_eq!(bsgs(&g, &field.one()), Ok(Some(0)));
    }

    #[test]
    fn test_bsgs_cubic_field() {
        // x generates the group of order 103822
        let field = FiniteField::new(47, &[42, 3, 0, 1]).unwrap();
        let g = field.element(&[0, 1, 0]).unwrap();
        for k in [0_i64, 1, 2, 322, 323, 324, 51_911, 99_999, 103_821] {
            let h = g.pow(k).unwrap();
            assert_eq!(bsgs(&g, &h), Ok(Some(k as u64)), "Failed for k: {}", k);
        }
        // -1 = x^(N/2)
        let minus_one = field.element(&[46, 0, 0]).unwrap();
        assert_eq!(bsgs(&g, &minus_one), Ok(Some(51_911)));
    }

    #[test]
    fn test_bsgs_not_found() {
        // x has order 4 in F_9^*, so x + 1 (order 8) is not in <x>
        let field = FiniteField::new(3, &[1, 0, 1]).unwrap();
        let g = field.element(&[0, 1]).unwrap();
        let h = field.element(&[1, 1]).unwrap();
        assert_eq!(bsgs(&g, &h), Ok(None));
    }

    #[test]
    fn test_bsgs_errors() {
        let f9 = FiniteField::new(3, &[1, 0, 1]).unwrap();
        let f49 = FiniteField::new(7, &[3, 1, 1]).unwrap();
        let g = f9.element(&[1, 1]).unwrap();
        let h = f49.element(&[1, 1]).unwrap();
        assert_eq!(bsgs(&g, &h), Err(FieldError::IncompatibleField));
        assert_eq!(bsgs(&f9.zero(), &g), Err(FieldError::DivisionByZero));
        assert_eq!(bsgs(&g, &f9.zero()), Ok(None));
    }

    #[test]
    fn test_bsgs_unchecked_ring() {
        // x^4 + x^2 + 1 = (x^2 + x + 1)^2 over F_2, x has order 6 which does not divide 15
        let ring = FiniteField::new(2, &[1, 0, 1, 0, 1]).unwrap();
        assert!(!ring.validated());
        let g = ring.element(&[0, 1, 0, 0]).unwrap();
        assert_eq!(g.mult_order(), Ok(6));

        for k in 0..6 {
            let h = g.pow(k).unwrap();
            let found = bsgs(&g, &h).unwrap().unwrap();
            assert_eq!(g.pow_unsigned(found), h, "Failed for k: {}, found: {}", k, found);
        }

        // x^2 + x + 1 is a zero divisor
        let zero_divisor = ring.element(&[1, 1, 1, 0]).unwrap();
        assert_eq!(bsgs(&zero_divisor, &g), Err(FieldError::OrderTooLarge { bound: 16 }));
    }
}
