//! Solves `f(x) = 0` for an expression given on the command line.
//!
//! ```text
//! cargo run --example solve -- "x^2 - 4" --x0 3
//! cargo run --example solve -- "cos(t) - t" --x0 1 --trace
//! ```

use std::{error::Error, process::ExitCode};

use clap::Parser;
use raphson_core::Variable;
use raphson_solve::equation::newton::{self, Action, Config, Event};
use raphson_symbolic::{Expr, Interpreter};

#[derive(Debug, Parser)]
#[command(about = "Find a root of an expression with Newton-Raphson iteration")]
struct Args {
    /// Expression to solve, e.g. "x^2 - 4".
    expr: String,

    /// Initial guess.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    x0: f64,

    /// Convergence threshold on successive estimates.
    #[arg(long, default_value_t = Config::DEFAULT_TOL)]
    tol: f64,

    /// Maximum number of iterations.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Independent variable (defaults to the first one in the expression).
    #[arg(long)]
    var: Option<String>,

    /// Print every iteration as it happens.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let expr: Expr = args.expr.parse()?;
    let config = Config::new(args.tol, args.max_iters)?;
    let var = args
        .var
        .as_deref()
        .map_or_else(|| newton::select_variable(&expr), Variable::from);

    let trace = args.trace;
    let observer = |event: &Event| -> Option<Action> {
        if trace {
            println!(
                "iter {:>3}: x = {:<24} f(x) = {:<24} f'(x) = {:<24} step = {}",
                event.iter,
                event.x,
                event.value,
                event.derivative,
                event.step(),
            );
        }
        None
    };

    let iterates = newton::find_root_in(&Interpreter, &expr, &var, args.x0, &config, observer)?;

    println!("f({var}) = {expr}");
    for (i, x) in iterates.iter().enumerate() {
        println!("  {var}{i} = {x}");
    }
    println!(
        "root ≈ {} after {} iterations",
        iterates.root(),
        iterates.iters()
    );

    Ok(())
}
