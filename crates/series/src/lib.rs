//! ecodash's series library.
//!
//! Merges a user's date-keyed activity series with a comparison (average)
//! series onto a single date axis, so both can be plotted side by side.
//!
//! ```
//! use ecodash_series::axis::UnifiedDateAxis;
//! use ecodash_series::align::align_to_axis;
//! use ecodash_series::observation::Metric;
//! use ecodash_series::observation::RawObservation;
//!
//! let user = vec![
//!     RawObservation::steps("2024-01-01", 100.0),
//!     RawObservation::steps("2024-01-03", 300.0),
//! ];
//! let avg = vec![RawObservation::steps("2024-01-02", 150.0)];
//!
//! let axis = UnifiedDateAxis::build(&user, &avg);
//! let aligned = align_to_axis(&axis, &user, Metric::Steps);
//! let ys: Vec<f64> = aligned.iter().map(|p| p.y).collect();
//!
//! assert_eq!(ys, vec![100.0, 0.0, 300.0]);
//! ```

#![warn(missing_docs)]

pub mod activity;
pub mod align;
pub mod axis;
pub mod error;
pub mod merge;
pub mod mode;
pub mod observation;
pub mod range;

#[cfg(test)]
mod properties;
