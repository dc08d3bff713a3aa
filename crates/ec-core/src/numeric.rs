use crate::ConvertError;

/// Floating point type used throughout the converter
pub type Real = f64;

/// One tolerance for everything
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

/// Reject NaN and infinities before they reach the factor arithmetic.
pub fn ensure_finite(v: Real) -> Result<Real, ConvertError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConvertError::InvalidValue { value: v })
    }
}
