/// Numeric helpers for presenting results.
///
/// This module provides the display policy for evaluation results and the
/// checked float-to-integer conversion backing it.
///
/// # Responsibilities
/// - Render near-integer results in integer form, everything else as the
///   raw floating-point value.
/// - Convert between `f64` and `i64` without silent data loss.
pub mod num;
