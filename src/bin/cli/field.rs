use clap::{Error, Parser};
use colored::Colorize as _;
use rand::{rngs::StdRng, SeedableRng};

use crate::utilities::{clap_err_result_msg, print_result, print_title, FieldArgs};

#[derive(Parser)]
#[command(version, about("Extension field -- print field information"), long_about = None)]
pub struct FieldInfo {
    #[command(flatten)]
    field: FieldArgs,
}

impl FieldInfo {
    pub fn print_info(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        print_title("Extension field F_p[x] / <f(x)>");

        print_result("p", field.p());
        print_result("n", field.n());
        print_result("f (monic)", format!("{:?}", field.f_coeffs()));
        print_result("x^n", format!("{:?}", field.residue()));
        print_result("Field order", field.order());
        print_result("Group order", field.group_order());

        if field.validated() {
            eprintln!("{}", "f(x) has no roots in F_p and is irreducible".green());
        } else {
            eprintln!(
                "{}",
                "Irreducibility of f(x) is only checked for degree 2 and 3".yellow()
            );
        }
        Ok(())
    }
}

#[derive(Parser)]
#[command(version, about("Extension field -- find a generator of the multiplicative group"), long_about = None)]
pub struct Generator {
    #[command(flatten)]
    field: FieldArgs,

    /// Seed for the random search
    #[arg(short, long, env = "GALOIS_SEED")]
    seed: Option<u64>,
}

impl Generator {
    pub fn find_generator(&self) -> Result<(), Error> {
        let field = self.field.build()?;
        print_title("Searching for a generator.");

        let generator = match self.seed {
            Some(seed) => {
                eprintln!("{}: {}", "Seed".blue(), seed);
                let mut rng = StdRng::seed_from_u64(seed);
                field.multiplicative_group_with_rng(&mut rng)
            }
            None => field.multiplicative_group(),
        };
        let generator = clap_err_result_msg!(generator, "Generator search failed")?;

        print_result("Generator", &generator);
        print_result("Coefficients", format!("{:?}", generator.coeffs()));
        Ok(())
    }
}
