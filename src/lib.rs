//! Arithmetic in prime fields `F_p` and extension fields `F_p[x] / <f(x)>`.
//!
//! Extension field elements carry their matrix representation, so multiplication, powers and
//! inverses are matrix operations. On top of that the crate searches for generators of the
//! multiplicative group and solves discrete logarithms with baby-step giant-step.

pub mod arith;
pub mod dlog;
pub mod error;

pub use arith::finite_field::FiniteField;
pub use arith::finite_field_element::FiniteFieldElement;
pub use arith::prime_field::PrimeFieldElement;
pub use arith::{parse_exponent, Operand};
pub use dlog::bsgs;
pub use error::{FieldError, Result};
