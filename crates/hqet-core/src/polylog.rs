//! Real dilogarithm.

use std::f64::consts::PI;

const PI2_6: f64 = PI * PI / 6.0;
const PI2_3: f64 = PI * PI / 3.0;

/// Coefficients `B_{2k} / (2k + 1)!` of the Bernoulli series, k = 1..=11.
const BERNOULLI: [f64; 11] = [
    1.0 / 36.0,
    -1.0 / 3600.0,
    1.0 / 211680.0,
    -1.0 / 10886400.0,
    1.0 / 526901760.0,
    -4.064761645144226e-11,
    8.921691020456453e-13,
    -1.993929586072108e-14,
    4.518980029619918e-16,
    -1.035651761218125e-17,
    2.395218621026187e-19,
];

/// Real part of `Li2(x)` for any real `x`.
///
/// Arguments are first mapped into `[-1, 1/2]` with the reflection and
/// inversion identities. There the series in `u = -ln(1 - x)` converges fast
/// because `|u| <= ln 2`.
pub fn dilog(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 1.0 {
        return PI2_6;
    }
    if x > 1.0 {
        let ln = x.ln();
        return PI2_3 - 0.5 * ln * ln - dilog(1.0 / x);
    }
    if x < -1.0 {
        let ln = (-x).ln();
        return -PI2_6 - 0.5 * ln * ln - dilog(1.0 / x);
    }
    if x > 0.5 {
        return PI2_6 - x.ln() * (1.0 - x).ln() - bernoulli_series(1.0 - x);
    }
    bernoulli_series(x)
}

fn bernoulli_series(x: f64) -> f64 {
    let u = -(1.0 - x).ln();
    let u2 = u * u;
    let tail = BERNOULLI
        .iter()
        .rev()
        .fold(0.0, |acc, &coefficient| coefficient + u2 * acc);
    u - 0.25 * u2 + u * u2 * tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(dilog(0.0), 0.0);
        assert!((dilog(1.0) - PI2_6).abs() < 1e-15);
        assert!((dilog(-1.0) + PI * PI / 12.0).abs() < 1e-15);
        let ln2 = 2f64.ln();
        assert!((dilog(0.5) - (PI * PI / 12.0 - 0.5 * ln2 * ln2)).abs() < 1e-15);
    }
}
