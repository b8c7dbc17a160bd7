//! Yield measures: current yield and yield to maturity.
//!
//! The yield-to-maturity solver runs Newton-Raphson on the periodic yield in
//! `f64` and converts back to `Decimal` at the boundary. Whole coupon periods
//! are summed at integer exponents while the face redemption is discounted at
//! the exact fractional period count, so stub maturities pull the redemption
//! leg without inventing a stub coupon.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use tenor_core::types::Frequency;

/// Configuration for the yield solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of Newton-Raphson iterations.
    pub max_iterations: u32,
    /// Absolute present-value tolerance for convergence.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-4,
        }
    }
}

impl SolverConfig {
    /// Creates a config with the given maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Creates a config with the given tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Current yield: annual coupon income over price, as a percentage.
///
/// Returns zero for a non-positive price. The division is exact `Decimal`
/// arithmetic and is not rounded.
#[must_use]
pub fn current_yield(annual_coupon: Decimal, price: Decimal) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    annual_coupon / price * dec!(100)
}

/// Yield to maturity as an annual percentage.
///
/// Zero-coupon securities use the closed form
/// `(face / price)^(1 / years) - 1`, returned unrounded; `None` when the
/// price or the remaining term is non-positive.
///
/// Coupon bonds solve for the periodic yield with Newton-Raphson, seeded
/// with the standard approximation
/// `(coupon + (face - price) / periods) / ((face + price) / 2)`, then
/// annualize and round to 4 decimal places. Returns `None` when the
/// derivative vanishes or the iteration budget is exhausted; both are
/// ordinary no-result outcomes, reported at debug level.
#[must_use]
pub fn yield_to_maturity(
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: Frequency,
    years_to_maturity: Decimal,
    price: Decimal,
    config: &SolverConfig,
) -> Option<Decimal> {
    let freq = frequency.periods_per_year();
    if freq == 0 {
        return zero_coupon_yield(face_value, years_to_maturity, price);
    }

    let face = face_value.to_f64().unwrap_or(0.0);
    let price = price.to_f64().unwrap_or(0.0);
    let coupon = face * coupon_rate.to_f64().unwrap_or(0.0) / 100.0 / f64::from(freq);
    let periods = years_to_maturity.to_f64().unwrap_or(0.0) * f64::from(freq);

    let mut y = (coupon + (face - price) / periods) / ((face + price) / 2.0);

    for _ in 0..config.max_iterations {
        let mut pv = 0.0;
        let mut dpv = 0.0;

        for t in 1..=(periods as i64) {
            let t = t as f64;
            pv += coupon / (1.0 + y).powf(t);
            dpv += -t * coupon / (1.0 + y).powf(t + 1.0);
        }

        pv += face / (1.0 + y).powf(periods);
        dpv += -periods * face / (1.0 + y).powf(periods + 1.0);

        // Convergence is checked before the derivative guard so a flat
        // derivative at the root still reports the solution
        let diff = pv - price;
        if diff.abs() < config.tolerance {
            let annual = y * f64::from(freq) * 100.0;
            return Some(
                Decimal::from_f64_retain(annual)
                    .unwrap_or_default()
                    .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero),
            );
        }

        if dpv == 0.0 {
            debug!("ytm solver: derivative vanished at y = {y}");
            return None;
        }

        y -= diff / dpv;

        // A periodic yield at or below -100% would blow up the discount
        // factors; restart from a small positive yield
        if y < -0.99 {
            y = 0.01;
        }
    }

    debug!(
        "ytm solver: no convergence after {} iterations",
        config.max_iterations
    );
    None
}

/// Closed-form yield for zero-coupon securities, as an unrounded percentage.
fn zero_coupon_yield(
    face_value: Decimal,
    years_to_maturity: Decimal,
    price: Decimal,
) -> Option<Decimal> {
    if price <= Decimal::ZERO || years_to_maturity <= Decimal::ZERO {
        debug!("zero-coupon ytm: non-positive price or term");
        return None;
    }

    let face = face_value.to_f64().unwrap_or(0.0);
    let price = price.to_f64().unwrap_or(0.0);
    let years = years_to_maturity.to_f64().unwrap_or(0.0);

    let ytm = (face / price).powf(1.0 / years) - 1.0;
    Decimal::from_f64_retain(ytm * 100.0)
}
