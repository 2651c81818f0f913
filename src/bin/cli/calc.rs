use clap::{Error, Parser, ValueEnum};

use galois::{parse_exponent, FiniteFieldElement};

use crate::utilities::{
    clap_err_result, clap_err_result_msg, parse_element, print_result, print_title, FieldArgs,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    /// Raise the left operand to an integer exponent
    Pow,
}

#[derive(Parser)]
#[command(version, about("Extension field -- arithmetic on two elements"), long_about = None)]
pub struct Calc {
    #[command(flatten)]
    field: FieldArgs,

    /// Left operand, comma separated coefficients
    #[arg(allow_hyphen_values = true)]
    lhs: String,

    #[arg(value_enum)]
    op: Operation,

    /// Right operand, or the exponent for `pow`
    #[arg(allow_hyphen_values = true)]
    rhs: String,
}

impl Calc {
    pub fn calculate(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let lhs = parse_element(&self.lhs, &field)?;
        print_title(&format!("Computing ({}) {:?} {}", lhs, self.op, self.rhs));

        let result = if self.op == Operation::Pow {
            let exponent = clap_err_result!(parse_exponent(&self.rhs))?;
            clap_err_result!(lhs.pow(exponent))?
        } else {
            let rhs = parse_element(&self.rhs, &field)?;
            let result = match self.op {
                Operation::Add => lhs.add(&rhs),
                Operation::Sub => lhs.sub(&rhs),
                Operation::Mul => lhs.mul(&rhs),
                _ => lhs.div(&rhs),
            };
            clap_err_result!(result)?
        };

        print_element(&result);
        Ok(())
    }
}

#[derive(Parser)]
#[command(version, about("Extension field -- multiplicative order of an element"), long_about = None)]
pub struct Order {
    #[command(flatten)]
    field: FieldArgs,

    /// Element, comma separated coefficients
    #[arg(allow_hyphen_values = true)]
    element: String,
}

impl Order {
    pub fn print_order(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let element = parse_element(&self.element, &field)?;
        print_title(&format!("Order of {}", element));

        let order = clap_err_result!(element.mult_order())?;
        print_result("Order", order);
        if order == field.group_order() {
            print_result("Generator", true);
        }
        Ok(())
    }
}

#[derive(Parser)]
#[command(version, about("Extension field -- multiplicative inverse of an element"), long_about = None)]
pub struct Inverse {
    #[command(flatten)]
    field: FieldArgs,

    /// Element, comma separated coefficients
    #[arg(allow_hyphen_values = true)]
    element: String,
}

impl Inverse {
    pub fn print_inverse(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let element = parse_element(&self.element, &field)?;
        print_title(&format!("Inverse of {}", element));

        let inverse = clap_err_result_msg!(element.inverse(), "Element is not invertible")?;
        print_element(&inverse);
        Ok(())
    }
}

fn print_element(element: &FiniteFieldElement<'_>) {
    print_result("Result", element);
    print_result("Coefficients", format!("{:?}", element.coeffs()));
}
