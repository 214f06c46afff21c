/// Floating point type used for populations, constants, and time.
pub type Real = f64;

/// One tolerance for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// If `value` is a whole multiple of `base` (within tolerance), return the
/// multiplier. `base` must be nonzero; zero is a multiple of everything.
pub fn whole_multiple(value: Real, base: Real, tol: Tolerances) -> Option<i64> {
    if base == 0.0 || !value.is_finite() || !base.is_finite() {
        return None;
    }
    let ratio = value / base;
    let rounded = ratio.round();
    if nearly_equal(ratio, rounded, tol) {
        Some(rounded as i64)
    } else {
        None
    }
}
