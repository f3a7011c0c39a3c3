//! Formatting primitives shared by the report generators.
//!
//! Rounding, percentage conversion and rule-list condensing. All of these
//! are pure functions over borrowed data.

use crate::error::RowError;
use crate::types::{Cell, DerivabilityResult};
use std::collections::HashSet;

/// Digits used for ordinary non-integer cells
pub const DEFAULT_PRECISION: usize = 2;

/// Digits used for derivability timings
pub const TIMING_PRECISION: usize = 3;

/// Sentinel for values that have no finite representation (e.g. 0/0)
pub const NOT_AVAILABLE: &str = "n/a";

/// Separator between lines inside a single cell
pub const LINE_BREAK: &str = "\n";

const FORWARD: &str = " ==> ";

/// Whether `value` lies exactly halfway between two `precision`-digit decimals.
///
/// Writing the double as `odd * 2^exp`, `value * 10^precision` equals
/// `odd * 5^precision * 2^(exp + precision)`, which ends in exactly `.5` only
/// when `exp + precision == -1`.
fn is_decimal_tie(value: f64, precision: usize) -> bool {
    if value == 0.0 || !value.is_finite() {
        return false;
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 { (fraction, -1074) } else { (fraction | (1u64 << 52), biased - 1075) };

    exp + i64::from(mantissa.trailing_zeros()) + precision as i64 == -1
}

/// Round `value` to `precision` decimals, ties away from zero.
///
/// Rounding works on the exact binary value, so `0.615` (stored as
/// `0.61499…`) rounds down while `4.125` (stored exactly) rounds up.
fn round_half_up(value: f64, precision: usize) -> f64 {
    if is_decimal_tie(value, precision) {
        // An exact tie survives scaling without error
        let scale = 10f64.powi(precision as i32);
        return (value * scale).round() / scale;
    }
    // Fixed-precision formatting is correctly rounded for non-ties
    format!("{:.*}", precision, value).parse().unwrap_or(value)
}

/// Fixed-decimal rendering with ties rounded away from zero (`4.125` -> `"4.13"`).
pub fn to_fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, round_half_up(value, precision))
}

/// Round a cell for display.
///
/// Whole numbers come back unchanged, other finite numbers become fixed-decimal
/// text with `precision` digits, non-finite numbers become [`NOT_AVAILABLE`],
/// and text passes through.
pub fn round_maybe(value: Cell, precision: usize) -> Cell {
    match value {
        Cell::Number(n) if !n.is_finite() => Cell::Text(NOT_AVAILABLE.to_string()),
        Cell::Number(n) if n.fract() == 0.0 => Cell::Number(n),
        Cell::Number(n) => Cell::Text(to_fixed(n, precision)),
        other => other,
    }
}

/// `numerator / denominator` as a percentage string with `decimals` digits.
///
/// The ratio is first rounded to `decimals + 2` places so that the
/// percentage digits are exact. A zero denominator yields [`NOT_AVAILABLE`].
pub fn to_percentage(numerator: f64, denominator: f64, decimals: usize) -> String {
    if denominator == 0.0 {
        return NOT_AVAILABLE.to_string();
    }

    let ratio = numerator / denominator;
    if !ratio.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = round_half_up(ratio, decimals + 2);
    format!("{:.*}%", decimals, rounded * 100.0)
}

/// Share of derivable rules, one decimal (`2 of 3` -> `"66.7%"`).
pub fn derivability_percentage(result: &DerivabilityResult) -> String {
    to_percentage(result.can.len() as f64, result.total() as f64, 1)
}

/// Split `"<lhs> ==> <rhs>"` into its two sides.
pub fn split_rule(rule: &str) -> Result<(&str, &str), RowError> {
    rule.split_once(FORWARD).ok_or_else(|| RowError::MalformedRule { rule: rule.to_string() })
}

/// Collapse forward/backward rule pairs into single bidirectional lines.
///
/// A rule whose reverse is also listed is emitted once as `"<lhs> <=> <rhs>"`
/// at the position of whichever direction comes first; the other direction is
/// discarded. Everything else is emitted as `"<lhs> ==> <rhs>"`. A rule that
/// is its own reverse has no partner, and repeated entries are emitted once.
pub fn format_rule_list<S: AsRef<str>>(rules: &[S]) -> Result<Vec<String>, RowError> {
    let parsed = rules.iter().map(|r| split_rule(r.as_ref())).collect::<Result<Vec<_>, _>>()?;
    let present: HashSet<(&str, &str)> = parsed.iter().copied().collect();

    let mut discarded: HashSet<(&str, &str)> = HashSet::with_capacity(parsed.len());
    let mut lines = Vec::with_capacity(parsed.len());

    for &(lhs, rhs) in &parsed {
        if !discarded.insert((lhs, rhs)) {
            continue;
        }

        if lhs != rhs && present.contains(&(rhs, lhs)) && discarded.insert((rhs, lhs)) {
            lines.push(format!("{} <=> {}", lhs, rhs));
        } else {
            lines.push(format!("{}{}{}", lhs, FORWARD, rhs));
        }
    }

    Ok(lines)
}
