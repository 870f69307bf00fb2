use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Type alias for builtin function handlers.
///
/// A builtin receives its single evaluated argument and returns the computed
/// value wrapped in `EvalResult`.
type BuiltinFn = fn(f64) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry pairs a string name with a handler. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ( $( $name:literal => $func:expr ),* $(,)? ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every function callable from an expression.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => |x| Ok(x.sin()),
    "cos"  => |x| Ok(x.cos()),
    "tan"  => |x| Ok(x.tan()),
    "sqrt" => sqrt,
    "abs"  => |x| Ok(x.abs()),
    "log"  => log,
    "ln"   => ln,
}

/// Applies a named builtin to a single argument.
///
/// Lookup is by exact (case-sensitive) name against the compile-time table;
/// the trigonometric builtins interpret their argument in radians.
///
/// # Errors
/// - `RuntimeError::UnknownFunction` when no builtin carries the name.
/// - `RuntimeError::DomainError` from the handler, for arguments outside a
///   function's domain.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::function::apply_function;
///
/// assert_eq!(apply_function("sqrt", 9.0).unwrap(), 3.0);
/// assert_eq!(apply_function("abs", -5.0).unwrap(), 5.0);
/// assert!(apply_function("foo", 1.0).is_err());
/// ```
pub fn apply_function(name: &str, value: f64) -> EvalResult<f64> {
    match BUILTIN_TABLE.iter().find(|builtin| builtin.name == name) {
        Some(builtin) => (builtin.func)(value),
        None => Err(RuntimeError::UnknownFunction { name: name.to_owned() }),
    }
}

/// Computes the real square root; negative input has no real result.
fn sqrt(value: f64) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(RuntimeError::DomainError { details: "sqrt of negative".to_owned() });
    }
    Ok(value.sqrt())
}

/// Computes the base-10 logarithm over the positive reals.
fn log(value: f64) -> EvalResult<f64> {
    if value <= 0.0 {
        return Err(RuntimeError::DomainError { details: "log of non-positive".to_owned() });
    }
    Ok(value.log10())
}

/// Computes the natural logarithm over the positive reals.
fn ln(value: f64) -> EvalResult<f64> {
    if value <= 0.0 {
        return Err(RuntimeError::DomainError { details: "ln of non-positive".to_owned() });
    }
    Ok(value.ln())
}
