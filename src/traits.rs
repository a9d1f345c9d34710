//! Core trait definition for one-pass scan kernels.
//!
//! To plug a scan into the generic [`Scanner`](crate::Scanner), implement
//! [`ScanKernel`] for a struct that captures the scan's configuration
//! (a quota, or nothing at all).
//!
//! The trait encodes a strict left fold:
//! - `init` produces the call-local accumulator,
//! - `step` consumes one item and updates the accumulator in place,
//! - `finish` turns the final accumulator into the scan's output.
//!
//! Kernels hold no mutable state of their own. Every invocation owns its
//! accumulator on the call stack, which is what makes the shipped kernels
//! safe to share across threads.

/// A single left-to-right pass over a sequence of items.
///
/// `Item` is a type parameter rather than an associated type so that one
/// kernel can accept several item representations (e.g. both `&str` and
/// `String` words).
pub trait ScanKernel<Item> {
    /// Accumulator owned by one scan invocation.
    type Acc;

    /// Final output extracted from the accumulator.
    type Output;

    /// Fresh accumulator for a new scan.
    fn init(&self) -> Self::Acc;

    /// Consume one item, updating the accumulator in place.
    ///
    /// Called exactly once per item, in input order.
    fn step(&self, item: Item, acc: &mut Self::Acc);

    /// Turn the final accumulator into the scan output.
    fn finish(&self, acc: Self::Acc) -> Self::Output;
}
