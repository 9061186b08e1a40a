use raphson_core::Variable;

use crate::expr::{Expr, Func};

/// Returns the exact derivative of `expr` with respect to `var`.
///
/// The result is built directly from the differentiation rules and is not
/// simplified, so `d/dx (3 * x)` is `0 * x + 3 * 1`.
///
/// Any subexpression that does not depend on `var`, and any power with a
/// literal zero exponent, differentiates to a literal `0`. Constant parts
/// therefore evaluate to an exact zero even where the original term is
/// undefined, such as `x^0` at `x = 0`.
pub(crate) fn derivative(expr: &Expr, var: &Variable) -> Expr {
    if !expr.contains(var) {
        return Expr::num(0.0);
    }

    match expr {
        Expr::Num(_) => Expr::num(0.0),
        Expr::Var(v) => Expr::num(if v == var { 1.0 } else { 0.0 }),
        Expr::Neg(a) => -derivative(a, var),
        Expr::Add(a, b) => derivative(a, var) + derivative(b, var),
        Expr::Sub(a, b) => derivative(a, var) - derivative(b, var),
        Expr::Mul(a, b) => {
            derivative(a, var) * b.as_ref().clone() + a.as_ref().clone() * derivative(b, var)
        }
        Expr::Div(a, b) => {
            let numerator =
                derivative(a, var) * b.as_ref().clone() - a.as_ref().clone() * derivative(b, var);
            numerator / b.as_ref().clone().pow(2.0)
        }
        Expr::Pow(base, exponent) => power(base, exponent, var),
        Expr::Call(func, arg) => outer(*func, arg) * derivative(arg, var),
    }
}

/// Derivative of `base ^ exponent`.
#[allow(clippy::float_cmp)]
fn power(base: &Expr, exponent: &Expr, var: &Variable) -> Expr {
    let base = base.clone();
    let exponent = exponent.clone();

    match (base.contains(var), exponent.contains(var)) {
        (_, false) if matches!(exponent, Expr::Num(n) if n == 0.0) => Expr::num(0.0),
        (false, false) => Expr::num(0.0),
        // Power rule: n * u^(n - 1) * u'
        (_, false) => {
            let du = derivative(&base, var);
            exponent.clone() * base.pow(exponent - 1.0) * du
        }
        // Exponential rule: a^v * ln(a) * v'
        (false, true) => {
            let dv = derivative(&exponent, var);
            base.clone().pow(exponent) * Expr::call(Func::Ln, base) * dv
        }
        // u^v * (v' * ln(u) + v * u' / u)
        (true, true) => {
            let du = derivative(&base, var);
            let dv = derivative(&exponent, var);
            let inner =
                dv * Expr::call(Func::Ln, base.clone()) + exponent.clone() * du / base.clone();
            base.pow(exponent) * inner
        }
    }
}

/// Derivative of `func` evaluated at `arg`, before the chain-rule factor.
fn outer(func: Func, arg: &Expr) -> Expr {
    let arg = arg.clone();
    match func {
        Func::Sin => Expr::call(Func::Cos, arg),
        Func::Cos => -Expr::call(Func::Sin, arg),
        Func::Tan => Expr::num(1.0) / Expr::call(Func::Cos, arg).pow(2.0),
        Func::Exp => Expr::call(Func::Exp, arg),
        Func::Ln => Expr::num(1.0) / arg,
        Func::Sqrt => Expr::num(1.0) / (Expr::num(2.0) * Expr::call(Func::Sqrt, arg)),
    }
}
