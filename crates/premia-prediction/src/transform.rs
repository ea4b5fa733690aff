//! Matched forward/inverse transform for right-skewed quantities.
//!
//! The model was trained on `log1p(children)` and `log1p(charges)`, so inputs
//! go through [`log1p`] and outputs come back through [`expm1`]. Both use the
//! precise library forms rather than `ln(1 + x)` / `exp(x) - 1`, which lose
//! digits near zero.

#[inline]
pub fn log1p(x: f64) -> f64 {
    x.ln_1p()
}

#[inline]
pub fn expm1(x: f64) -> f64 {
    x.exp_m1()
}
