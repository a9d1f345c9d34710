//! Quota-window cost maximisation.
//!
//! The input is a sequence of (cost, label) pairs scanned in order. A "day"
//! is the maximal run of items ending at the item whose `"legal"` label
//! brings the running legal count up to the quota; at that point the day's
//! accumulated cost is folded into the running maximum and both accumulators
//! reset. Items after the last completed day never contribute, even when
//! their partial sum would exceed the maximum.
//!
//! Label matching is exact: only the literal `"legal"` qualifies, so case
//! variants such as `"Legal"` do not count toward the quota.

use crate::error::InputError;
use crate::scanner::Scanner;
use crate::traits::ScanKernel;

/// Label value that counts toward the day quota.
pub const LEGAL_LABEL: &str = "legal";

/// Quota-window scan kernel.
///
/// Holds only the configured quota; every scan owns its accumulator.
#[derive(Debug, Clone, Copy)]
pub struct QuotaWindow {
    quota: usize,
}

/// Accumulator for one quota-window scan.
#[derive(Debug, Clone, Default)]
pub struct DayAcc {
    /// Cost accumulated since the last day boundary.
    pub current_cost: i64,
    /// Qualifying labels seen since the last day boundary.
    pub legal_count: usize,
    /// Largest completed-day cost so far.
    pub best: i64,
}

impl QuotaWindow {
    /// Kernel with the given day quota.
    ///
    /// A zero quota is accepted and reproduces the degenerate closing
    /// behavior of the unchecked scan; use [`checked_max_window_cost`] to
    /// reject it instead.
    pub fn new(quota: usize) -> Self {
        Self { quota }
    }

    /// The configured quota.
    pub fn quota(&self) -> usize {
        self.quota
    }
}

impl<'a> ScanKernel<(i64, &'a str)> for QuotaWindow {
    type Acc = DayAcc;
    type Output = i64;

    fn init(&self) -> Self::Acc {
        DayAcc::default()
    }

    fn step(&self, (cost, label): (i64, &'a str), acc: &mut Self::Acc) {
        acc.current_cost += cost;
        if label == LEGAL_LABEL {
            acc.legal_count += 1;
        }
        if acc.legal_count == self.quota {
            #[cfg(feature = "tracing")]
            tracing::trace!(day_cost = acc.current_cost, "day closed");
            acc.best = acc.best.max(acc.current_cost);
            acc.current_cost = 0;
            acc.legal_count = 0;
        }
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        // Whatever remains in current_cost belongs to an incomplete day.
        acc.best
    }
}

/// Largest completed-day cost over the scan; 0 when no day completes.
///
/// Malformed input is tolerated rather than rejected: sequences of different
/// lengths are zipped (only the common prefix is scanned) and any quota is
/// accepted.
pub fn max_window_cost<S: AsRef<str>>(costs: &[i64], labels: &[S], quota: usize) -> i64 {
    Scanner::new(QuotaWindow::new(quota))
        .run(costs.iter().copied().zip(labels.iter().map(AsRef::as_ref)))
}

/// Validating variant of [`max_window_cost`].
///
/// # Errors
/// [`InputError::LengthMismatch`] when the sequences differ in length,
/// [`InputError::ZeroQuota`] when `quota == 0`.
pub fn checked_max_window_cost<S: AsRef<str>>(
    costs: &[i64],
    labels: &[S],
    quota: usize,
) -> Result<i64, InputError> {
    if costs.len() != labels.len() {
        return Err(InputError::LengthMismatch {
            costs: costs.len(),
            labels: labels.len(),
        });
    }
    if quota == 0 {
        return Err(InputError::ZeroQuota);
    }
    Ok(max_window_cost(costs, labels, quota))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_legal_quota_keeps_only_completed_day() {
        let costs = [2, 5, 3, 11, 1];
        let labels = ["legal", "illegal", "legal", "illegal", "legal"];
        // Day 1 closes at index 2 with cost 10; indices 3-4 only reach one
        // legal item and are discarded.
        assert_eq!(max_window_cost(&costs, &labels, 2), 10);
    }

    #[test]
    fn three_legal_quota_closes_at_third_label() {
        let costs = [3, 6, 2, 4, 1, 10, 5];
        let labels = [
            "legal", "legal", "illegal", "legal", "legal", "illegal", "legal",
        ];
        // The third legal item lands at index 3; 3+6+2+4 = 15. The tail only
        // accumulates two more legal items.
        assert_eq!(max_window_cost(&costs, &labels, 3), 15);
    }

    #[test]
    fn later_days_can_raise_the_maximum() {
        let costs = [4, 3, 2, 1, 5, 6, 9, 10, 8];
        let labels = [
            "legal", "illegal", "legal", "illegal", "legal", "legal", "legal", "legal", "legal",
        ];
        // Days close at indices 2, 5 and 7 with sums 9, 12 and 19.
        assert_eq!(max_window_cost(&costs, &labels, 2), 19);
    }

    #[test]
    fn returns_zero_when_quota_never_met() {
        let costs = [7, 9, 11];
        let labels = ["illegal", "legal", "illegal"];
        assert_eq!(max_window_cost(&costs, &labels, 2), 0);
        assert_eq!(max_window_cost::<&str>(&[], &[], 1), 0);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let costs = [4, 4];
        let labels = ["Legal", "LEGAL"];
        assert_eq!(max_window_cost(&costs, &labels, 1), 0);
    }

    #[test]
    fn trailing_partial_day_is_discarded() {
        let costs = [1, 100];
        let labels = ["legal", "illegal"];
        // The 100-cost tail never completes a day.
        assert_eq!(max_window_cost(&costs, &labels, 1), 1);
    }

    #[test]
    fn mismatched_lengths_scan_the_common_prefix() {
        let costs = [5, 6, 7, 8];
        let labels = ["legal", "legal"];
        assert_eq!(max_window_cost(&costs, &labels, 2), 11);
    }

    #[test]
    fn zero_quota_degenerate_closing() {
        // With a zero quota every item before the first legal one closes a
        // single-item day; after a legal item the count never returns to zero.
        let costs = [5, 7, 3];
        let labels = ["illegal", "illegal", "illegal"];
        assert_eq!(max_window_cost(&costs, &labels, 0), 7);

        let costs = [5, 7];
        let labels = ["legal", "illegal"];
        assert_eq!(max_window_cost(&costs, &labels, 0), 0);
    }

    #[test]
    fn checked_variant_validates_input() {
        let costs = [2, 5, 3];
        let labels = ["legal", "illegal", "legal"];
        assert_eq!(checked_max_window_cost(&costs, &labels, 2), Ok(10));
        assert_eq!(
            checked_max_window_cost(&costs, &labels[..2], 2),
            Err(InputError::LengthMismatch { costs: 3, labels: 2 })
        );
        assert_eq!(
            checked_max_window_cost(&costs, &labels, 0),
            Err(InputError::ZeroQuota)
        );
    }

    #[test]
    fn negative_costs_fold_into_day_sums() {
        let costs = [10, -4, 2];
        let labels = ["illegal", "legal", "legal"];
        assert_eq!(max_window_cost(&costs, &labels, 2), 8);
    }
}
