//! Internal numeric approximations.

/// Error function approximation.
///
/// Abramowitz & Stegun formula 7.1.26, maximum absolute error 1.5e-7.
/// Evaluated in f64 to keep the Horner form stable, returned as f32.
pub(crate) fn erf(x: f32) -> f32 {
    let a1 = 0.254_829_592;
    let a2 = -0.284_496_736;
    let a3 = 1.421_413_741;
    let a4 = -1.453_152_027;
    let a5 = 1.061_405_429;
    let p = 0.327_591_1;

    let x = f64::from(x);
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    (sign * y) as f32
}
