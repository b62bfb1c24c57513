//! Floor-based integer helpers.
//!
//! Every division in the calendar formulas rounds toward negative infinity.
//! Rust's `/` and `%` truncate toward zero, which gives wrong results for
//! negative operands, so the formulas go through these helpers instead.

/// Integer division rounded toward negative infinity.
///
/// # Example
///
/// ```
/// use amlich::math::floor_div;
///
/// assert_eq!(-2, floor_div(-7, 4));
/// assert_eq!(1, floor_div(7, 4));
/// ```
pub fn floor_div(a: i32, b: i32) -> i32 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Remainder taking the sign of the divisor, paired with [`floor_div`] so
/// that `floor_div(a, b) * b + floor_mod(a, b) == a`.
///
/// # Example
///
/// ```
/// use amlich::math::floor_mod;
///
/// assert_eq!(1, floor_mod(-7, 4));
/// assert_eq!(-3, floor_mod(7, -5));
/// ```
pub fn floor_mod(a: i32, b: i32) -> i32 {
    a - b * floor_div(a, b)
}

/// The largest integer not greater than `x`.
pub fn int_floor(x: f64) -> i32 {
    x.floor() as i32
}
