use super::modular::{add_mod, mul_mod, sub_mod};

/// Square `n x n` matrix over `Z_p`, stored row-major.
///
/// ```text
/// | 1 2 |
/// | 3 4 | = [1, 2, 3, 4]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    n: usize,
    entries: Vec<u64>,
}

impl Matrix {
    /// The `n x n` zero matrix.
    pub fn zero(n: usize) -> Self {
        Matrix {
            n,
            entries: vec![0; n * n],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zero(n);
        for i in 0..n {
            matrix.entries[i * n + i] = 1;
        }
        matrix
    }

    /// Build a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if a row does not have length `rows.len()`.
    pub fn from_rows(rows: &[Vec<u64>]) -> Self {
        let n = rows.len();
        let mut entries = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "Matrix must be square");
            entries.extend_from_slice(row);
        }
        Matrix { n, entries }
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.entries[row * self.n..(row + 1) * self.n]
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|e| *e == 0)
    }

    /// Elementwise `self + rhs mod p`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ. The same holds for [`Matrix::sub_mod`] and
    /// [`Matrix::mul_mod`].
    pub fn add_mod(&self, rhs: &Matrix, p: u64) -> Matrix {
        self.zip_with(rhs, |a, b| add_mod(a, b, p))
    }

    /// Elementwise `self - rhs mod p`.
    pub fn sub_mod(&self, rhs: &Matrix, p: u64) -> Matrix {
        self.zip_with(rhs, |a, b| sub_mod(a, b, p))
    }

    /// Matrix product `self * rhs mod p`.
    pub fn mul_mod(&self, rhs: &Matrix, p: u64) -> Matrix {
        assert_eq!(self.n, rhs.n, "Matrix dimensions must agree");
        let n = self.n;
        let mut out = Matrix::zero(n);
        for i in 0..n {
            for k in 0..n {
                let lhs = self.entries[i * n + k];
                if lhs == 0 {
                    continue;
                }
                for j in 0..n {
                    let idx = i * n + j;
                    out.entries[idx] =
                        add_mod(out.entries[idx], mul_mod(lhs, rhs.entries[k * n + j], p), p);
                }
            }
        }
        out
    }

    /// `self ^ exponent mod p` by square-and-multiply.
    pub fn pow_mod(&self, mut exponent: u64, p: u64) -> Matrix {
        let mut base = self.clone();
        let mut acc = Matrix::identity(self.n);
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc.mul_mod(&base, p);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul_mod(&base, p);
            }
        }
        acc
    }

    fn zip_with(&self, rhs: &Matrix, op: impl Fn(u64, u64) -> u64) -> Matrix {
        assert_eq!(self.n, rhs.n, "Matrix dimensions must agree");
        Matrix {
            n: self.n,
            entries: self
                .entries
                .iter()
                .zip(rhs.entries.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}
