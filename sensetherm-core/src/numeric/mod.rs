//! Generic numeric helpers used around the sensor models.
//!
//! - [`sort_indices`]: stable argsort in either direction
//! - [`linear_fit`]: least-squares straight line with correlation
//! - [`linear_interpolate`]: piecewise-linear lookup over unsorted samples
//!
//! These allocate one index `Vec` per call and so need `std` or `alloc`.

mod interpolate;
mod regression;
mod sort;

pub use interpolate::linear_interpolate;
pub use regression::{linear_fit, LinearFit};
pub use sort::{sort_indices, SortOrder};
