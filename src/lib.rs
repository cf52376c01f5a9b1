//! # peakfit-rs
//!
//! `peakfit-rs` is the signal-analysis and parameter-fitting toolkit of a
//! diffraction-pattern simulator: general-purpose numerical machinery for
//! working with ordered 1-D measurement curves.
//!
//! The library provides:
//! - Validated `(x, y)` datasets in three ownership variants, with interval
//!   slicing, interpolation and peak extraction
//! - A selectivity/threshold detector for significant local extrema in
//!   noisy sequences
//! - Boxcar and Gaussian convolution kernels with boundary renormalization
//! - A generic simulated-annealing optimizer with restarts and an injected
//!   random source
//!
//! ## Basic Usage
//!
//! ```
//! use peakfit_rs::{Curve, Dataset, Extrema};
//!
//! let pattern = Dataset::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![0.1, 2.0, 0.2, 1.5, 0.0],
//! )?;
//!
//! let peaks = pattern.find_peaks(0.1, 0.0, Extrema::Maxima)?;
//! assert_eq!(peaks.len(), 2);
//! # Ok::<(), peakfit_rs::PeakFitError>(())
//! ```

// Public modules
pub mod error;

pub mod dataset;

pub mod signal;

pub mod optimize;

// Re-exports for convenience
pub use error::{PeakFitError, Result};

pub use dataset::{Curve, Dataset, DatasetMut, DatasetView, Point};

pub use signal::{Extrema, Kernel1d, Peak, PeakFinder};

pub use optimize::{AnnealingProblem, SimulatedAnnealer};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_pipeline() {
        let noisy = Dataset::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        )
        .unwrap();

        let smoothed = Kernel1d::boxcar(1).apply(&noisy.y().to_vec());
        assert_eq!(smoothed.len(), noisy.len());

        let peaks = noisy.find_peaks(0.1, 0.0, Extrema::Maxima).unwrap();
        assert_eq!(peaks.len(), 2);
    }
}
