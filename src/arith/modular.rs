use crate::error::{FieldError, Result};

/// Reduces a signed integer into the canonical range `[0, modulus)`.
pub fn reduce(value: i64, modulus: u64) -> u64 {
    (value as i128).rem_euclid(modulus as i128) as u64
}

/// Computes `lhs + rhs mod modulus` for already reduced operands
pub fn add_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((lhs as u128 + rhs as u128) % modulus as u128) as u64
}

/// Computes `lhs - rhs mod modulus` for already reduced operands
pub fn sub_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((lhs as u128 + modulus as u128 - rhs as u128) % modulus as u128) as u64
}

/// Computes `lhs * rhs mod modulus`
pub fn mul_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    ((lhs as u128 * rhs as u128) % modulus as u128) as u64
}

/// Computes `base ^ exponent mod modulus` by square-and-multiply
pub fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut acc = 1 % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    acc
}

/// Extended Euclidean algorithm. Returns `(gcd, x, y)` with `a*x + b*y = gcd`.
///
/// The Bézout coefficients are carried along with the remainders, so no recursion is needed.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    let (mut old_t, mut t) = (0_i128, 1_i128);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
        (old_t, t) = (t, old_t - quotient * t);
    }

    if old_r < 0 {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Computes `value^-1 mod modulus` with the extended Euclidean algorithm.
pub fn inverse_mod(value: u64, modulus: u64) -> Result<u64> {
    let value = value % modulus;
    if value == 0 {
        return Err(FieldError::DivisionByZero);
    }
    let (gcd, x, _) = extended_gcd(value as i128, modulus as i128);
    if gcd != 1 {
        return Err(FieldError::NoInverse { value, modulus });
    }
    Ok(x.rem_euclid(modulus as i128) as u64)
}

/// Evaluate a polynomial (lowest degree first) at `x` using Horner's method.
pub fn evaluate_polynomial(coeffs: &[u64], x: u64, modulus: u64) -> u64 {
    coeffs
        .iter()
        .rev()
        .fold(0, |acc, coeff| add_mod(mul_mod(acc, x, modulus), *coeff, modulus))
}

/// Trial division. Moduli in this crate are small, so this is sufficient.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3_u64;
    while (d as u128) * (d as u128) <= n as u128 {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest `m` with `m * m >= n`.
pub fn ceil_sqrt(n: u64) -> u64 {
    let mut m = (n as f64).sqrt() as u64;
    while (m as u128) * (m as u128) < n as u128 {
        m += 1;
    }
    while m > 0 && ((m - 1) as u128) * ((m - 1) as u128) >= n as u128 {
        m -= 1;
    }
    m
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(-1, 7), 6);
        assert_eq!(reduce(-15, 7), 6);
        assert_eq!(reduce(15, 7), 1);
        assert_eq!(reduce(i64::MIN, 3), (i64::MIN as i128).rem_euclid(3) as u64);
    }

    #[test]
    fn test_mul_mod() {
        let a = 7_u64;
        let b = 3_u64;
        let c = 5_u64;

        assert_eq!(mul_mod(a, b, c), (a * b) % c);
        assert_eq!(mul_mod(c, a, b), (c * a) % b);
        assert_eq!(mul_mod(b, c, a), (b * c) % a);
        assert_eq!(mul_mod(u64::MAX - 1, u64::MAX - 1, u64::MAX), 1);
    }

    #[test]
    fn test_add_sub_mod() {
        assert_eq!(add_mod(5, 4, 7), 2);
        assert_eq!(sub_mod(2, 4, 7), 5);
        assert_eq!(sub_mod(4, 4, 7), 0);
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(2, 4, 23), 16);
        assert_eq!(pow_mod(2, 0, 23), 1);
        assert_eq!(pow_mod(5, 22, 23), 1);
        assert_eq!(pow_mod(0, 0, 1), 0);
    }

    #[test]
    fn test_extended_gcd() {
        let (gcd, x, y) = extended_gcd(3, 7);
        assert_eq!(gcd, 1);
        assert_eq!(3 * x + 7 * y, 1);
        assert_eq!(x.rem_euclid(7), 5);

        let (gcd, x, y) = extended_gcd(240, 46);
        assert_eq!(gcd, 2);
        assert_eq!(240 * x + 46 * y, 2);

        assert_eq!(extended_gcd(0, 9).0, 9);
    }

    #[test]
    fn test_inverse_mod() {
        assert_eq!(inverse_mod(3, 7), Ok(5));
        assert_eq!(inverse_mod(1, 2), Ok(1));
        for a in 1..47 {
            let inv = inverse_mod(a, 47).unwrap();
            assert_eq!(mul_mod(a, inv, 47), 1, "Failed for a: {}", a);
        }
        assert_eq!(inverse_mod(0, 7), Err(FieldError::DivisionByZero));
        assert_eq!(
            inverse_mod(2, 4),
            Err(FieldError::NoInverse {
                value: 2,
                modulus: 4
            })
        );
    }

    #[test]
    fn test_evaluate_polynomial() {
        // f(x) = 1 + 2x + 3x^2
        // f(2) mod 5 = 1 + 2*2 + 3*2^2 mod 5 = 2
        assert_eq!(evaluate_polynomial(&[1, 2, 3], 2, 5), 2);
        assert_eq!(evaluate_polynomial(&[], 2, 5), 0);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(8), 3);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
        assert_eq!(ceil_sqrt(103_822), 323);
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }
}
