//! Generic runner for one-pass scan kernels.
//!
//! [`Scanner`] drives a [`ScanKernel`] over any iterator of items, in input
//! order, and returns the kernel's output. It is deliberately small: the
//! interesting behavior lives in the kernels.

use crate::traits::ScanKernel;

/// Runner for a scan kernel `K`.
///
/// Typical usage:
/// ```
/// use scanfold::{kernels::quota_window::QuotaWindow, Scanner};
///
/// let costs = [2i64, 5, 3, 11, 1];
/// let labels = ["legal", "illegal", "legal", "illegal", "legal"];
/// let scanner = Scanner::new(QuotaWindow::new(2));
/// let best = scanner.run(costs.iter().copied().zip(labels.iter().copied()));
/// assert_eq!(best, 10);
/// ```
pub struct Scanner<K> {
    kernel: K,
}

impl<K> Scanner<K> {
    /// Wrap a kernel in a runner.
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Expose immutable reference to the underlying kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Fold `items` through the kernel and return its output.
    ///
    /// Items are consumed strictly in iteration order; the accumulator lives
    /// on this call's stack frame and is dropped into `finish` at the end.
    pub fn run<Item, I>(&self, items: I) -> K::Output
    where
        K: ScanKernel<Item>,
        I: IntoIterator<Item = Item>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("scan_run");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut acc = self.kernel.init();
        for item in items {
            self.kernel.step(item, &mut acc);
        }
        self.kernel.finish(acc)
    }
}
