//! Single-pass scan/fold kernels.
//!
//! This crate packages a family of small sequence-scan algorithms behind one
//! fold-style interface:
//! 1. Model your scan as a left fold with call-local state.
//! 2. Implement the [`ScanKernel`] trait for that fold.
//! 3. Let [`Scanner`] drive the kernel over the input in order.
//!
//! Every kernel is a pure computation: one invocation owns its accumulator,
//! so a kernel value can serve any number of concurrent scans without
//! coordination.
//!
//! ## Quick start
//! ```
//! use scanfold::max_window_cost;
//!
//! let costs = [2, 5, 3, 11, 1];
//! let labels = ["legal", "illegal", "legal", "illegal", "legal"];
//! // Two "legal" items close a day; only completed days count.
//! assert_eq!(max_window_cost(&costs, &labels, 2), 10);
//! ```
//!
//! ## Built-in kernels
//! The `kernels` module contains the shipped scans:
//! - quota-window cost maximisation over labeled cost sequences
//! - anagram frequency counting against a fixed dictionary
//! - triangular series sums (closed form plus a fold reference)
//!
//! These are ready to use and double as templates for writing further
//! one-pass kernels.

pub mod builder;
pub mod canonical;
pub mod error;
pub mod kernels;
pub mod scanner;
pub mod table;
pub mod traits;

pub use crate::builder::AnagramIndexBuilder;
pub use crate::error::InputError;
pub use crate::kernels::anagram::{count_anagrams, AnagramIndex};
pub use crate::kernels::quota_window::{checked_max_window_cost, max_window_cost};
pub use crate::kernels::series::{checked_series_sum, fold_series_sum, series_sum};
pub use crate::scanner::Scanner;
pub use crate::traits::ScanKernel;
