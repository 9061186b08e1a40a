//! Shows how the tolerance changes the trajectory for f(x) = x² - 4 from x0 = 3.

use raphson_solve::equation::newton::{Config, find_root_unobserved};
use raphson_symbolic::{Expr, Interpreter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let expr: Expr = "x^2 - 4".parse()?;

    for tol in [1e0, 1e-2, 1e-8, 1e-12] {
        let config = Config::new(tol, 200)?;
        let iterates = find_root_unobserved(&Interpreter, &expr, 3.0, &config)?;

        println!(
            "tol = {tol:e}: {} iterations, root = {}, error = {:e}",
            iterates.iters(),
            iterates.root(),
            (iterates.root() - 2.0).abs(),
        );
        println!("  {:?}", iterates.as_slice());
    }

    Ok(())
}
