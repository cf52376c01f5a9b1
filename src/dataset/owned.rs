//! The owning dataset variant.

use ndarray::{s, Array1, ArrayView1, ArrayViewMut1};

use super::view::{DatasetMut, DatasetView};
use super::{interval_indices, validate, Curve};
use crate::error::{PeakFitError, Result};

/// An ordered `(x, y)` curve that owns its backing storage.
///
/// This is the only variant that accepts unsorted input: construction
/// permutes both sequences jointly by ascending `x` before validating.
/// `x` is read-only after construction; `y` values may be rewritten in
/// place through [`Dataset::y_mut`] or a [`DatasetMut`] borrow.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Build a dataset from raw coordinate sequences.
    ///
    /// Already-sorted input is stored as-is; otherwise both sequences are
    /// permuted together by ascending `x` (stable, so each `y` stays paired
    /// with its original `x`).
    ///
    /// # Errors
    ///
    /// [`PeakFitError::ShapeMismatch`] if the lengths differ,
    /// [`PeakFitError::DuplicateKey`] if two samples share an `x` value,
    /// [`PeakFitError::UnsortedInput`] if a strict ordering cannot be
    /// established (NaN coordinates).
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PeakFitError::ShapeMismatch(format!(
                "x and y have different sizes ({} != {})",
                x.len(),
                y.len()
            )));
        }

        let (x, y) = if x.windows(2).all(|w| w[0] <= w[1]) {
            (x, y)
        } else {
            let mut order: Vec<usize> = (0..x.len()).collect();
            order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
            let sorted_x = order.iter().map(|&i| x[i]).collect();
            let sorted_y = order.iter().map(|&i| y[i]).collect();
            (sorted_x, sorted_y)
        };

        let x = Array1::from_vec(x);
        let y = Array1::from_vec(y);
        validate(&x.view(), &y.view())?;

        Ok(Self { x, y })
    }

    /// Deep-copy any dataset variant into an owning one.
    pub fn from_curve(curve: &impl Curve) -> Self {
        Self {
            x: curve.x().to_owned(),
            y: curve.y().to_owned(),
        }
    }

    /// Mutable access to the `y` values.
    pub fn y_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.y.view_mut()
    }

    /// Cheap read-only view of the whole dataset.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView::from_views(self.x.view(), self.y.view())
    }

    /// Mutable borrowed view over the internal storage.
    pub fn as_mut(&mut self) -> DatasetMut<'_> {
        DatasetMut::from_views(self.x.view(), self.y.view_mut())
    }

    /// Read-only sub-view covering the samples with `x` in the closed band
    /// `[x_min, x_max]` (bounds are order-normalized first).
    ///
    /// # Errors
    ///
    /// [`PeakFitError::InvalidInterval`] if the band is degenerate or
    /// contains no samples.
    pub fn slice(&self, x_min: f64, x_max: f64) -> Result<DatasetView<'_>> {
        let (start, len) = interval_indices(&self.x.view(), x_min, x_max)?;
        Ok(DatasetView::from_views(
            self.x.slice(s![start..start + len]),
            self.y.slice(s![start..start + len]),
        ))
    }

    /// Like [`Dataset::slice`], but the sub-view allows `y` mutation in the
    /// internal storage.
    pub fn slice_mut(&mut self, x_min: f64, x_max: f64) -> Result<DatasetMut<'_>> {
        let (start, len) = interval_indices(&self.x.view(), x_min, x_max)?;
        Ok(DatasetMut::from_views(
            self.x.slice(s![start..start + len]),
            self.y.slice_mut(s![start..start + len]),
        ))
    }
}

impl Curve for Dataset {
    fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_sorts_jointly() {
        let dataset = Dataset::new(vec![3.0, 1.0, 2.0], vec![9.0, 1.0, 4.0]).unwrap();

        assert_eq!(dataset.x().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(dataset.y().to_vec(), vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_construction_rejects_bad_input() {
        assert!(matches!(
            Dataset::new(vec![1.0, 2.0], vec![1.0]),
            Err(PeakFitError::ShapeMismatch(_))
        ));
        assert!(matches!(
            Dataset::new(vec![1.0, 2.0, 2.0], vec![0.0, 0.0, 0.0]),
            Err(PeakFitError::DuplicateKey(_))
        ));
        assert!(Dataset::new(vec![1.0, f64::NAN], vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn test_y_mutation_in_place() {
        let mut dataset = Dataset::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        dataset.y_mut().mapv_inplace(|v| v * 10.0);

        assert_eq!(dataset.y().to_vec(), vec![0.0, 10.0, 20.0]);
        // x is untouched
        assert_eq!(dataset.x().to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_slice_mut_writes_through() {
        let mut dataset =
            Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();

        {
            let mut band = dataset.slice_mut(1.0, 2.0).unwrap();
            assert_eq!(band.len(), 2);
            band.y_mut().fill(0.0);
        }

        assert_eq!(dataset.y().to_vec(), vec![0.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn test_from_curve_copies() {
        let dataset = Dataset::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap();
        let copy = Dataset::from_curve(&dataset.view());

        assert_eq!(copy.x().to_vec(), dataset.x().to_vec());
        assert_eq!(copy.y().to_vec(), dataset.y().to_vec());
    }
}
