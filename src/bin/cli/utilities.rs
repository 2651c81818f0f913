//! Utility functions

use clap::{Args, Error};
use colored::Colorize as _;

use galois::{FiniteField, FiniteFieldElement};

macro_rules! clap_err_result {
    ($e:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, e)),
        }
    };

    ($e:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw(clap::error::ErrorKind::InvalidValue, e)),
        }
    };
}
pub(super) use clap_err_result;

macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}", $m, e))),
        }
    };

    ($e:expr, $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

/// The field every extension field command works in.
#[derive(Args)]
pub struct FieldArgs {
    /// Characteristic p of the field
    #[arg(short, long("prime"))]
    pub p: u64,

    /// Coefficients of f(x), lowest degree first, e.g. "42,3,0,1"
    #[arg(short, long("poly"), allow_hyphen_values = true)]
    pub f: String,
}

impl FieldArgs {
    pub fn build(&self) -> Result<FiniteField, Error> {
        let coeffs = parse_coeffs(&self.f)?;
        clap_err_result_msg!(
            FiniteField::new(self.p, &coeffs),
            "Could not construct the field"
        )
    }
}

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Prints a labelled result: the label on stderr, the value on stdout.
pub(super) fn print_result(label: &str, value: impl std::fmt::Display) {
    eprint!("{}", format!("{}: ", label).blue());
    println!("{}", value);
}

/// Parses a comma separated list of integer coefficients.
pub(super) fn parse_coeffs(input: &str) -> Result<Vec<i64>, Error> {
    let mut coeffs = Vec::new();
    for part in input.split(',') {
        let coeff = clap_err_result_msg!(
            part.trim().parse::<i64>(),
            format!("Invalid coefficient '{}'", part.trim())
        )?;
        coeffs.push(coeff);
    }
    Ok(coeffs)
}

/// Parses an element of `field` from its comma separated coefficients.
pub(super) fn parse_element<'f>(
    input: &str,
    field: &'f FiniteField,
) -> Result<FiniteFieldElement<'f>, Error> {
    let coeffs = parse_coeffs(input)?;
    clap_err_result_msg!(
        field.element(&coeffs),
        format!("Invalid element '{}'", input)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coeffs() {
        assert_eq!(parse_coeffs("42, 3,0,1").unwrap(), vec![42, 3, 0, 1]);
        assert_eq!(parse_coeffs("-1,2").unwrap(), vec![-1, 2]);
        assert!(parse_coeffs("1,,2").is_err());
        assert!(parse_coeffs("a").is_err());
    }

    #[test]
    fn test_parse_element() {
        let field = FiniteField::new(3, &[1, 0, 1]).unwrap();
        assert_eq!(parse_element("1,1", &field).unwrap().coeffs(), &[1, 1]);
        assert!(parse_element("1,1,1", &field).is_err());
    }
}
