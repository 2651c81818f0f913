//! # Galois Field Command Line Interface
//!
//! ```
//! Usage: galois [OPTIONS] [COMMAND]
//!
//! Commands:
//!   field      Extension field -- print field information
//!   calc       Extension field -- arithmetic on two elements
//!   order      Extension field -- multiplicative order of an element
//!   inverse    Extension field -- multiplicative inverse of an element
//!   generator  Extension field -- find a generator of the multiplicative group
//!   dlog       Extension field -- discrete logarithm with baby-step giant-step
//!   prime      Prime field -- arithmetic on two elements of F_p
//!   help       Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose...  Increase logging verbosity
//!   -h, --help        Print help
//!   -V, --version     Print version
//! ```
//!
//! Elements and polynomials are comma separated coefficients, lowest degree first.
//!
//! ## Field
//!
//! ```
//! $ galois field -p 47 -f 42,3,0,1
//! Extension field F_p[x] / <f(x)>
//! p: 47
//! n: 3
//! f (monic): [42, 3, 0, 1]
//! x^n: [5, 44, 0]
//! Field order: 103823
//! Group order: 103822
//! f(x) has no roots in F_p and is irreducible
//! ```
//!
//! ## Arithmetic
//!
//! ```
//! $ galois calc -p 47 -f 42,3,0,1 3,10,1 mul 0,45,40
//! Computing (x^2 + 10x + 3) Mul 0,45,40
//! Result: 27x^2 + 34x + 16
//! Coefficients: [16, 34, 27]
//! ```
//!
//! ## Discrete logarithm
//!
//! ```
//! $ galois dlog -p 3 -f 1,0,1 1,1 0,2
//! Solving (x + 1)^k = 2x
//! k: 2
//! ```
//!
//! Log output goes to stderr and is controlled with `-v` or `RUST_LOG`.

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calc::{Calc, Inverse, Order};
use dlog::Dlog;
use field::{FieldInfo, Generator};
use prime::Prime;

mod calc;
mod dlog;
mod field;
mod prime;
mod utilities;

#[derive(Parser)]
#[command(version, about("Arithmetic in prime and extension fields"))]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Field(FieldInfo),
    Calc(Calc),
    Order(Order),
    Inverse(Inverse),
    Generator(Generator),
    Dlog(Dlog),
    Prime(Prime),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Field(field)) => field.print_info(),
        Some(Commands::Calc(calc)) => calc.calculate(),
        Some(Commands::Order(order)) => order.print_order(),
        Some(Commands::Inverse(inverse)) => inverse.print_inverse(),
        Some(Commands::Generator(generator)) => generator.find_generator(),
        Some(Commands::Dlog(dlog)) => dlog.solve(),
        Some(Commands::Prime(prime)) => prime.calculate(),
        // Print help
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = res {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }

    std::process::exit(0);
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`, default level is WARN.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
