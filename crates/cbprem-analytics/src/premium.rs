//! Conversion value and premium rate math.
//!
//! Floating-point throughout; no rounding is applied here. Display
//! formatting belongs to the presentation layer.

/// Economic value of the equity shares obtainable by converting one bond
/// unit (face 100), at the given equity price.
///
/// `conversion_price` must be positive: non-positive conversion price
/// events are rejected when schedules are built, so a zero here is a data
/// error upstream, not a legitimate edge, and is deliberately not guarded.
#[must_use]
pub fn conversion_value(equity_price: f64, conversion_price: f64) -> f64 {
    (equity_price / conversion_price) * 100.0
}

/// Premium of the bond's market price over its conversion value, in
/// percent.
///
/// A zero conversion value (equity price of zero) short-circuits to `0`
/// rather than dividing: the legitimate-edge guard. Contrast with a zero
/// `conversion_price`, which is an impossible input by construction and is
/// not masked here.
#[must_use]
pub fn premium_rate(bond_price: f64, equity_price: f64, conversion_price: f64) -> f64 {
    let value = conversion_value(equity_price, conversion_price);
    if value == 0.0 {
        return 0.0;
    }
    (bond_price - value) / value * 100.0
}
