//! Interest-rate risk measures: duration and convexity.
//!
//! Both measures discount cash flows exactly as the yield solver does:
//! coupons at whole periods, the face redemption at the exact fractional
//! period count.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use tenor_core::types::Frequency;

/// Macaulay and modified duration, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    /// PV-weighted average time to cash flows.
    pub macaulay: Decimal,
    /// Price sensitivity per unit yield change: macaulay / (1 + y).
    pub modified: Decimal,
}

/// Macaulay and modified duration for a bond at a given yield.
///
/// `ytm` is the annual yield as a percentage (e.g. `dec!(5)` for 5%).
///
/// Zero-coupon securities have Macaulay duration exactly equal to their
/// remaining term, and modified duration `years / (1 + ytm / 100)`; neither
/// is rounded. Coupon bonds compute the PV-weighted mean payment time over
/// whole periods plus the fractional-period redemption, both rounded to 4
/// decimal places. Returns `None` when the total present value is zero.
#[must_use]
pub fn duration(
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: Frequency,
    years_to_maturity: Decimal,
    ytm: Decimal,
) -> Option<Duration> {
    let freq = frequency.periods_per_year();
    if freq == 0 {
        let macaulay = years_to_maturity;
        let modified = macaulay / (Decimal::ONE + ytm / Decimal::ONE_HUNDRED);
        return Some(Duration { macaulay, modified });
    }

    let face = face_value.to_f64().unwrap_or(0.0);
    let freq_f = f64::from(freq);
    let coupon = face * coupon_rate.to_f64().unwrap_or(0.0) / 100.0 / freq_f;
    let periods = years_to_maturity.to_f64().unwrap_or(0.0) * freq_f;
    let y = ytm.to_f64().unwrap_or(0.0) / 100.0 / freq_f;

    let mut weighted_pv = 0.0;
    let mut total_pv = 0.0;

    for t in 1..=(periods as i64) {
        let t = t as f64;
        let pv = coupon / (1.0 + y).powf(t);
        weighted_pv += (t / freq_f) * pv;
        total_pv += pv;
    }

    let face_pv = face / (1.0 + y).powf(periods);
    weighted_pv += (periods / freq_f) * face_pv;
    total_pv += face_pv;

    if total_pv == 0.0 {
        debug!("duration: total present value is zero");
        return None;
    }

    let macaulay = weighted_pv / total_pv;
    let modified = macaulay / (1.0 + y);

    Some(Duration {
        macaulay: round4(macaulay),
        modified: round4(modified),
    })
}

/// Bond convexity at a given yield.
///
/// `ytm` is the annual yield as a percentage. Zero-coupon securities use the
/// closed form `n(n + 1) / (1 + y)^2` with `n` equal to the remaining years.
/// Coupon bonds weight each cash flow by `t(t + 1)` and normalize by
/// `total PV x freq^2 x (1 + y)^2`. Rounded to 4 decimal places; `None` when
/// the total present value is zero.
#[must_use]
pub fn convexity(
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: Frequency,
    years_to_maturity: Decimal,
    ytm: Decimal,
) -> Option<Decimal> {
    let freq = frequency.periods_per_year();
    if freq == 0 {
        let y = ytm.to_f64().unwrap_or(0.0) / 100.0;
        let n = years_to_maturity.to_f64().unwrap_or(0.0);
        return Some(round4(n * (n + 1.0) / (1.0 + y).powi(2)));
    }

    let face = face_value.to_f64().unwrap_or(0.0);
    let freq_f = f64::from(freq);
    let coupon = face * coupon_rate.to_f64().unwrap_or(0.0) / 100.0 / freq_f;
    let periods = years_to_maturity.to_f64().unwrap_or(0.0) * freq_f;
    let y = ytm.to_f64().unwrap_or(0.0) / 100.0 / freq_f;

    let mut weighted_pv = 0.0;
    let mut total_pv = 0.0;

    for t in 1..=(periods as i64) {
        let t = t as f64;
        let pv = coupon / (1.0 + y).powf(t);
        weighted_pv += t * (t + 1.0) * pv;
        total_pv += pv;
    }

    let face_pv = face / (1.0 + y).powf(periods);
    weighted_pv += periods * (periods + 1.0) * face_pv;
    total_pv += face_pv;

    if total_pv == 0.0 {
        debug!("convexity: total present value is zero");
        return None;
    }

    Some(round4(
        weighted_pv / (total_pv * freq_f.powi(2) * (1.0 + y).powi(2)),
    ))
}

fn round4(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}
