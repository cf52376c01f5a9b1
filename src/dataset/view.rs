//! Borrowed dataset variants.
//!
//! Both views hold non-owning references into caller-owned storage; the
//! caller keeps the backing sequences alive and refrains from mutating them
//! for the view's lifetime (single-writer-or-many-readers discipline).

use ndarray::{s, ArrayView1, ArrayViewMut1};

use super::{interval_indices, validate, Curve};
use crate::error::Result;

/// A read-only borrowed view of an ordered `(x, y)` curve.
///
/// The cheapest variant to construct; validated slices and query results are
/// handed out as views.
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    x: ArrayView1<'a, f64>,
    y: ArrayView1<'a, f64>,
}

impl<'a> DatasetView<'a> {
    /// Wrap caller-owned storage, validating the dataset invariant.
    ///
    /// Borrowed variants never sort: out-of-order input is an error the
    /// caller must fix by re-supplying data.
    ///
    /// # Errors
    ///
    /// [`crate::PeakFitError::ShapeMismatch`],
    /// [`crate::PeakFitError::UnsortedInput`] or
    /// [`crate::PeakFitError::DuplicateKey`].
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self> {
        let x = ArrayView1::from(x);
        let y = ArrayView1::from(y);
        validate(&x, &y)?;
        Ok(Self { x, y })
    }

    pub(crate) fn from_views(x: ArrayView1<'a, f64>, y: ArrayView1<'a, f64>) -> Self {
        Self { x, y }
    }

    /// Sub-view over the closed band `[x_min, x_max]`, sharing this view's
    /// backing storage and lifetime.
    ///
    /// # Errors
    ///
    /// [`crate::PeakFitError::InvalidInterval`] if the band is degenerate or
    /// contains no samples.
    pub fn slice(&self, x_min: f64, x_max: f64) -> Result<DatasetView<'a>> {
        let (start, len) = interval_indices(&self.x, x_min, x_max)?;
        let x = self.x;
        let y = self.y;
        Ok(DatasetView {
            x: x.slice_move(s![start..start + len]),
            y: y.slice_move(s![start..start + len]),
        })
    }
}

impl Curve for DatasetView<'_> {
    fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

/// A mutable borrowed view of an ordered `(x, y)` curve.
///
/// Shares the read contract of every variant and additionally allows `y`
/// values to be rewritten in the caller's storage; `x` stays read-only.
#[derive(Debug)]
pub struct DatasetMut<'a> {
    x: ArrayView1<'a, f64>,
    y: ArrayViewMut1<'a, f64>,
}

impl<'a> DatasetMut<'a> {
    /// Wrap caller-owned storage, validating the dataset invariant.
    ///
    /// # Errors
    ///
    /// Same as [`DatasetView::new`]; borrowed variants never sort.
    pub fn new(x: &'a [f64], y: &'a mut [f64]) -> Result<Self> {
        let x = ArrayView1::from(x);
        let y = ArrayViewMut1::from(y);
        validate(&x, &y.view())?;
        Ok(Self { x, y })
    }

    pub(crate) fn from_views(x: ArrayView1<'a, f64>, y: ArrayViewMut1<'a, f64>) -> Self {
        Self { x, y }
    }

    /// Mutable access to the `y` values.
    pub fn y_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.y.view_mut()
    }

    /// Reborrow as a read-only view.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView::from_views(self.x.view(), self.y.view())
    }

    /// Read-only sub-view over the closed band `[x_min, x_max]`.
    ///
    /// # Errors
    ///
    /// [`crate::PeakFitError::InvalidInterval`] if the band is degenerate or
    /// contains no samples.
    pub fn slice(&self, x_min: f64, x_max: f64) -> Result<DatasetView<'_>> {
        let (start, len) = interval_indices(&self.x, x_min, x_max)?;
        Ok(DatasetView::from_views(
            self.x.slice(s![start..start + len]),
            self.y.slice(s![start..start + len]),
        ))
    }

    /// Mutable sub-view over the closed band `[x_min, x_max]`.
    ///
    /// # Errors
    ///
    /// [`crate::PeakFitError::InvalidInterval`] if the band is degenerate or
    /// contains no samples.
    pub fn slice_mut(&mut self, x_min: f64, x_max: f64) -> Result<DatasetMut<'_>> {
        let (start, len) = interval_indices(&self.x, x_min, x_max)?;
        Ok(DatasetMut::from_views(
            self.x.slice(s![start..start + len]),
            self.y.slice_mut(s![start..start + len]),
        ))
    }
}

impl Curve for DatasetMut<'_> {
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
    use crate::error::PeakFitError;

    #[test]
    fn test_view_over_caller_storage() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 4.0, 9.0];
        let view = DatasetView::new(&x, &y).unwrap();

        assert_eq!(view.len(), 4);
        assert_eq!(view.point(2).y, 4.0);
        assert_eq!(view.arithmetic_mean(), 3.5);
    }

    #[test]
    fn test_view_rejects_unsorted_borrow() {
        let x = [1.0, 0.0];
        let y = [0.0, 0.0];
        assert!(matches!(
            DatasetView::new(&x, &y),
            Err(PeakFitError::UnsortedInput(_))
        ));
    }

    #[test]
    fn test_view_slice_keeps_lifetime() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 4.0, 9.0];

        let band = {
            let view = DatasetView::new(&x, &y).unwrap();
            // the sub-view outlives the wrapper, bounded only by the storage
            view.slice(1.0, 2.0).unwrap()
        };

        let points: Vec<_> = band.points().map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(1.0, 1.0), (2.0, 4.0)]);
    }

    #[test]
    fn test_mut_view_writes_to_caller_storage() {
        let x = [0.0, 1.0, 2.0];
        let mut y = [1.0, 2.0, 3.0];

        {
            let mut span = DatasetMut::new(&x, &mut y).unwrap();
            span.y_mut()[1] = 20.0;
        }

        assert_eq!(y, [1.0, 20.0, 3.0]);
    }

    #[test]
    fn test_mut_view_nested_slice() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0, 1.0, 2.0, 3.0, 4.0];

        {
            let mut span = DatasetMut::new(&x, &mut y).unwrap();
            let mut band = span.slice_mut(1.0, 3.0).unwrap();
            assert_eq!(band.len(), 3);
            band.y_mut().fill(7.0);
        }

        assert_eq!(y, [0.0, 7.0, 7.0, 7.0, 4.0]);
    }
}
