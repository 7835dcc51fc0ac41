//! Survival functions for the drift estimators' null distributions.

use std::f64::consts::SQRT_2;

/// Survival function of the two-sided Kolmogorov limiting distribution for a
/// two-sample KS statistic `d` at effective sample size `en`, using the
/// classic small-sample correction on the series argument.
pub fn kolmogorov_sf(d: f64, en: f64) -> f64 {
    if d <= 0.0 || en <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }
    let sqrt_en = en.sqrt();
    let lambda = (sqrt_en + 0.12 + 0.11 / sqrt_en) * d;
    // P(D > d) ~= 2 * sum_{k>=1} (-1)^{k-1} * exp(-2 * k^2 * lambda^2)
    let mut sum = 0.0;
    for k in 1..=100 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * f64::from(k * k) * lambda * lambda).exp();
        sum += term;
        if term.abs() < 1e-10 {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}

/// Survival function of the Chi-Squared distribution via the Wilson-Hilferty
/// normal transform. An infinite statistic has zero survival probability.
pub fn chi_squared_sf(statistic: f64, degrees_of_freedom: u64) -> f64 {
    if statistic.is_infinite() {
        return 0.0;
    }
    if statistic <= 0.0 || degrees_of_freedom == 0 {
        return 1.0;
    }
    let k = degrees_of_freedom as f64;
    let z = ((statistic / k).powf(1.0 / 3.0) - (1.0 - 2.0 / (9.0 * k))) / (2.0 / (9.0 * k)).sqrt();
    (0.5 * (1.0 - erf(z / SQRT_2))).clamp(0.0, 1.0)
}

/// Abramowitz-Stegun 7.1.26 error function approximation.
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}
