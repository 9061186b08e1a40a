use std::fmt;

use crate::expr::Expr;

// Binding strength, loosest first.
const SUM: u8 = 1;
const PRODUCT: u8 = 2;
const UNARY: u8 = 3;
const POWER: u8 = 4;
const ATOM: u8 = 5;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Num(n) if !n.is_finite() => PRODUCT,
            Expr::Num(n) if n.is_sign_negative() => UNARY,
            Expr::Num(_) | Expr::Var(_) | Expr::Call(..) => ATOM,
            Expr::Add(..) | Expr::Sub(..) => SUM,
            Expr::Mul(..) | Expr::Div(..) => PRODUCT,
            Expr::Neg(_) => UNARY,
            Expr::Pow(..) => POWER,
        }
    }
}

/// Writes `expr`, parenthesized if it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Writes a left-associative binary operation.
fn write_binary(
    f: &mut fmt::Formatter<'_>,
    left: &Expr,
    op: &str,
    right: &Expr,
    level: u8,
) -> fmt::Result {
    write_operand(f, left, level)?;
    write!(f, " {op} ")?;
    write_operand(f, right, level + 1)
}

/// Prints expressions in the syntax accepted by [`parse`](crate::parse).
///
/// Parsed expressions print back to text that parses to the same tree.
/// Negative literals print with a leading sign, which parses as a negation,
/// and non-finite literals print as `1 / 0`, `-1 / 0`, or `0 / 0`; the
/// reparsed tree has the same variables and values.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) if n.is_nan() => f.write_str("0 / 0"),
            Expr::Num(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "1 / 0" } else { "-1 / 0" })
            }
            Expr::Num(n) => write!(f, "{n}"),
            Expr::Var(v) => write!(f, "{v}"),
            Expr::Neg(a) => {
                f.write_str("-")?;
                write_operand(f, a, UNARY)
            }
            Expr::Add(a, b) => write_binary(f, a, "+", b, SUM),
            Expr::Sub(a, b) => write_binary(f, a, "-", b, SUM),
            Expr::Mul(a, b) => write_binary(f, a, "*", b, PRODUCT),
            Expr::Div(a, b) => write_binary(f, a, "/", b, PRODUCT),
            Expr::Pow(a, b) => {
                write_operand(f, a, ATOM)?;
                f.write_str("^")?;
                write_operand(f, b, UNARY)
            }
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}
