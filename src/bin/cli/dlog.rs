use clap::{Error, Parser};
use colored::Colorize as _;

use galois::bsgs;

use crate::utilities::{clap_err_result, parse_element, print_result, print_title, FieldArgs};

#[derive(Parser)]
#[command(version, about("Extension field -- discrete logarithm with baby-step giant-step"), long_about = None)]
pub struct Dlog {
    #[command(flatten)]
    field: FieldArgs,

    /// Base g, comma separated coefficients
    #[arg(allow_hyphen_values = true)]
    g: String,

    /// Target h, comma separated coefficients
    #[arg(allow_hyphen_values = true)]
    h: String,
}

impl Dlog {
    pub fn solve(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        let g = parse_element(&self.g, &field)?;
        let h = parse_element(&self.h, &field)?;
        print_title(&format!("Solving ({})^k = {}", g, h));

        match clap_err_result!(bsgs(&g, &h))? {
            Some(k) => print_result("k", k),
            None => eprintln!("{}", "No solution found, g may not be a generator".red()),
        }
        Ok(())
    }
}
