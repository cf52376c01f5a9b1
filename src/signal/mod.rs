//! Signal-level algorithms operating on raw numeric sequences: peak
//! detection and convolution smoothing.

pub mod convolution;
pub mod peak_finder;

pub use convolution::Kernel1d;
pub use peak_finder::{find_peak_indices, find_peaks, Extrema, Peak, PeakFinder};
