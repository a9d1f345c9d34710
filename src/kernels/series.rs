//! Triangular series sums.
//!
//! [`series_sum`] is the closed form n·(n+1)/2. [`fold_series_sum`] folds
//! 1..=n through the generic [`Scanner`] and exists as an independent
//! reference for cross-checking the formula in tests and the probe binary.

use crate::error::InputError;
use crate::scanner::Scanner;
use crate::traits::ScanKernel;

/// Sum of the series 1 + 2 + ... + n.
///
/// Both operands are widened to `i64` before the multiply, so the result is
/// exact for every `i32` input. Input is assumed non-negative; use
/// [`checked_series_sum`] to reject negative lengths instead.
#[inline]
pub fn series_sum(n: i32) -> i64 {
    let n = i64::from(n);
    n * (n + 1) / 2
}

/// Validating variant of [`series_sum`].
///
/// # Errors
/// [`InputError::NegativeLength`] when `n < 0`.
pub fn checked_series_sum(n: i32) -> Result<i64, InputError> {
    if n < 0 {
        return Err(InputError::NegativeLength(n));
    }
    Ok(series_sum(n))
}

/// Fold kernel accumulating a plain sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumFold;

impl ScanKernel<i64> for SumFold {
    type Acc = i64;
    type Output = i64;

    fn init(&self) -> Self::Acc {
        0
    }

    fn step(&self, item: i64, acc: &mut Self::Acc) {
        *acc += item;
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

/// Reference implementation: fold 1..=n instead of using the closed form.
pub fn fold_series_sum(n: i32) -> i64 {
    Scanner::new(SumFold).run(1..=i64::from(n))
}
