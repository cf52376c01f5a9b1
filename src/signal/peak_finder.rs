//! Detection of significant local extrema in noisy 1-D sequences.
//!
//! Port of the selectivity/threshold peak finder popularized by the MATLAB
//! `peakfinder(x0, sel, thresh, extrema, includeEndpoints, interpolate)`
//! routine: candidate extrema are the sign changes of the first difference,
//! and a left-to-right scan confirms a candidate as a peak only once the
//! signal has dropped at least `selectivity` below it. The scan is written
//! as an explicit two-state machine (seeking peak / seeking valley) over the
//! candidate array so that the endpoint special cases stay testable.

use serde::{Deserialize, Serialize};

/// Which kind of extremum to search for.
///
/// Minima are found by negating the input and scanning for maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extrema {
    Maxima,
    Minima,
}

/// A detected peak at dataset level: `x` position and `y` magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// The `x` coordinate of the peak sample.
    pub position: f64,
    /// The `y` value of the peak sample.
    pub magnitude: f64,
}

/// Peak-finder options carrying the reference defaults.
///
/// `relative_selectivity` is the minimum prominence between a candidate peak
/// and the preceding local minimum, as a fraction of the sequence's value
/// range; `threshold` is an absolute magnitude cutoff applied after
/// confirmation.
#[derive(Debug, Clone)]
pub struct PeakFinder {
    pub relative_selectivity: f64,
    pub threshold: f64,
    pub extrema: Extrema,
    pub include_endpoints: bool,
}

impl Default for PeakFinder {
    fn default() -> Self {
        Self {
            relative_selectivity: 0.25,
            threshold: 0.0,
            extrema: Extrema::Maxima,
            include_endpoints: false,
        }
    }
}

impl PeakFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of the significant extrema of `values`, ascending.
    pub fn find_indices(&self, values: &[f64]) -> Vec<usize> {
        find_peak_indices(
            values,
            self.relative_selectivity,
            self.threshold,
            self.extrema,
            self.include_endpoints,
        )
    }

    /// `(index, magnitude)` pairs of the significant extrema of `values`.
    pub fn find(&self, values: &[f64]) -> Vec<(usize, f64)> {
        self.find_indices(values)
            .into_iter()
            .map(|i| (i, values[i]))
            .collect()
    }
}

/// `(index, magnitude)` pairs of the significant extrema of `values`.
///
/// Magnitudes are taken from the original sequence, for minima as well.
pub fn find_peaks(
    values: &[f64],
    relative_selectivity: f64,
    threshold: f64,
    extrema: Extrema,
    include_endpoints: bool,
) -> Vec<(usize, f64)> {
    find_peak_indices(
        values,
        relative_selectivity,
        threshold,
        extrema,
        include_endpoints,
    )
    .into_iter()
    .map(|i| (i, values[i]))
    .collect()
}

/// Indices of the significant extrema of `values`, ascending.
///
/// Fully deterministic; degenerate inputs (fewer than two samples, monotone
/// sequences) yield empty or single-element results instead of errors.
pub fn find_peak_indices(
    values: &[f64],
    relative_selectivity: f64,
    threshold: f64,
    extrema: Extrema,
    include_endpoints: bool,
) -> Vec<usize> {
    if values.len() < 2 {
        return Vec::new();
    }

    // operate on a maxima-oriented copy; adjust the threshold to match
    let signal: Vec<f64> = match extrema {
        Extrema::Maxima => values.to_vec(),
        Extrema::Minima => values.iter().map(|v| -v).collect(),
    };
    let threshold = match extrema {
        Extrema::Maxima => threshold,
        Extrema::Minima => -threshold,
    };

    let lo = signal.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = signal.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let selectivity = (hi - lo) * relative_selectivity;

    // first differences; exact zeros are nudged negative so plateaus still
    // produce a sign change
    let mut dx: Vec<f64> = signal.windows(2).map(|w| w[1] - w[0]).collect();
    for d in dx.iter_mut() {
        if *d == 0.0 {
            *d = -f64::EPSILON;
        }
    }

    // candidate extrema: positions where the derivative flips sign
    let mut candidates: Vec<usize> = (0..dx.len().saturating_sub(1))
        .filter(|&i| dx[i] * dx[i + 1] < 0.0)
        .map(|i| i + 1)
        .collect();

    let min_mag;
    let left_min;
    if include_endpoints {
        candidates.insert(0, 0);
        candidates.push(signal.len() - 1);
        min_mag = candidates
            .iter()
            .map(|&i| signal[i])
            .fold(f64::INFINITY, f64::min);
        left_min = min_mag;
    } else {
        if candidates.is_empty() {
            return Vec::new();
        }
        min_mag = candidates
            .iter()
            .map(|&i| signal[i])
            .fold(f64::INFINITY, f64::min);
        // the excluded left endpoint still seeds the running minimum
        left_min = signal[candidates[0]].min(signal[0]);
    }

    let mut peaks: Vec<usize>;
    if candidates.len() > 2 {
        if include_endpoints {
            drop_redundant_endpoint_candidate(&signal, &mut candidates);
        }

        // always begin the scan on a rising edge
        let start = if signal[candidates[0]] >= signal[candidates[1]] {
            0
        } else {
            1
        };

        peaks = scan_candidates(
            &signal,
            &candidates,
            start,
            selectivity,
            min_mag,
            left_min,
            include_endpoints,
        );
    } else {
        // monotone sequence: the only possible peak is the larger end value
        peaks = Vec::new();
        if include_endpoints {
            let mut best = candidates[0];
            for &c in &candidates[1..] {
                if signal[c] > signal[best] {
                    best = c;
                }
            }
            if signal[best] > min_mag + selectivity {
                peaks.push(best);
            }
        }
    }

    // absolute magnitude cutoff, in the maxima-oriented domain
    peaks.retain(|&i| signal[i] > threshold);
    peaks
}

/// The artificially added first endpoint need not alternate in derivative
/// sign with its neighbours; when the first two candidate-to-candidate
/// differences agree in sign, one of the first two candidates is redundant.
fn drop_redundant_endpoint_candidate(signal: &[f64], candidates: &mut Vec<usize>) {
    let d0 = signal[candidates[1]] - signal[candidates[0]];
    let d1 = signal[candidates[2]] - signal[candidates[1]];
    if sign(d0) == sign(d1) {
        if sign(d0) <= 0 {
            candidates.remove(1);
        } else {
            candidates.remove(0);
        }
    }
}

/// The alternating peak/valley scan over the candidate array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SeekingPeak,
    SeekingValley,
}

/// Scan candidates left to right, confirming a tentative peak once the
/// signal comes down `selectivity` below it; the confirming valley resets
/// the running left minimum. Returns confirmed indices into `signal`.
fn scan_candidates(
    signal: &[f64],
    candidates: &[usize],
    start: usize,
    selectivity: f64,
    min_mag: f64,
    mut left_min: f64,
    include_endpoints: bool,
) -> Vec<usize> {
    let value = |ci: usize| signal[candidates[ci]];

    let mut confirmed: Vec<usize> = Vec::with_capacity(candidates.len() / 2 + 1);
    let mut temp_loc = 0usize;
    let mut temp_mag = min_mag;
    let mut found_peak = false;
    let mut phase = Phase::SeekingPeak;

    let mut ci = start;
    while ci < candidates.len() {
        match phase {
            Phase::SeekingPeak => {
                if found_peak {
                    // the previous peak is confirmed; start over for the next
                    temp_mag = min_mag;
                    found_peak = false;
                }
                let v = value(ci);
                if v > temp_mag && v > left_min + selectivity {
                    temp_loc = ci;
                    temp_mag = v;
                }
                phase = Phase::SeekingValley;
            }
            Phase::SeekingValley => {
                let v = value(ci);
                if temp_mag > selectivity + v {
                    // came down far enough: the tentative peak is real
                    found_peak = true;
                    left_min = v;
                    confirmed.push(temp_loc);
                } else if v < left_min {
                    left_min = v;
                }
                phase = Phase::SeekingPeak;
            }
        }
        ci += 1;
    }

    // trailing candidate: in-loop confirmation always lags one valley behind
    let last = candidates.len() - 1;
    let last_val = value(last);
    if last_val > temp_mag && last_val > left_min + selectivity {
        confirmed.push(last);
        found_peak = true;
    }
    if !found_peak {
        let qualifies = if include_endpoints {
            temp_mag > min_mag
        } else {
            // compare against whichever tail is lower, candidate or sample
            temp_mag > last_val.min(signal[signal.len() - 1]) + selectivity
        };
        if qualifies {
            confirmed.push(temp_loc);
        }
    }

    confirmed.into_iter().map(|ci| candidates[ci]).collect()
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
