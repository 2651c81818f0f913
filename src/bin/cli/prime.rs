use clap::{Error, Parser};

use galois::{parse_exponent, PrimeFieldElement};

use crate::calc::Operation;
use crate::utilities::{clap_err_result, clap_err_result_msg, print_result, print_title};

#[derive(Parser)]
#[command(version, about("Prime field -- arithmetic on two elements of F_p"), long_about = None)]
pub struct Prime {
    /// Modulus p
    #[arg(short, long("prime"))]
    p: u64,

    /// Left operand in [0, p)
    lhs: i64,

    #[arg(value_enum)]
    op: Operation,

    /// Right operand, or the exponent for `pow`
    #[arg(allow_hyphen_values = true)]
    rhs: String,
}

impl Prime {
    pub fn calculate(&self) -> Result<(), Error> {
        let lhs = clap_err_result!(PrimeFieldElement::new(self.lhs, self.p))?;
        print_title(&format!("Computing {} {:?} {} (mod {})", lhs, self.op, self.rhs, self.p));

        let result = if self.op == Operation::Pow {
            let exponent = clap_err_result!(parse_exponent(&self.rhs))?;
            lhs.pow(exponent)
        } else {
            let value = clap_err_result_msg!(
                self.rhs.trim().parse::<i64>(),
                format!("Invalid operand '{}'", self.rhs)
            )?;
            let rhs = clap_err_result!(PrimeFieldElement::new(value, self.p))?;
            match self.op {
                Operation::Add => lhs.add(rhs),
                Operation::Sub => lhs.sub(rhs),
                Operation::Mul => lhs.mul(rhs),
                _ => lhs.div(rhs),
            }
        };

        print_result("Result", clap_err_result!(result)?);
        Ok(())
    }
}
