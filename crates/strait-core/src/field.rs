//! Gridded model fields and anomalies
//!
//! A [`Field`] is one variable of one scenario: an n-dimensional array with
//! named coordinate axes and a unit. Missing cells are NaN. Fields are
//! immutable once built; the pipeline only borrows them.

use ndarray::ArrayD;
use strait_stats::Sample;

use crate::error::{StraitError, StraitResult};

/// A named coordinate axis aligned with one array dimension
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAxis {
    /// Axis name, e.g. "lat" or "zt"
    pub name: String,
    /// Coordinate values, one per grid cell along this dimension
    pub values: Vec<f64>,
}

impl CoordinateAxis {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A gridded measurement with coordinate axes and a unit
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    units: String,
    data: ArrayD<f64>,
    axes: Vec<CoordinateAxis>,
}

impl Field {
    /// Build a field, checking axes against the array shape
    ///
    /// Axes align positionally with array dimensions: `axes[0]` labels the
    /// rows of a 2D grid, `axes[1]` the columns.
    ///
    /// # Errors
    ///
    /// [`StraitError::AxisCount`] if the number of axes differs from the
    /// number of dimensions, [`StraitError::AxisMismatch`] if any axis
    /// length differs from its dimension size.
    pub fn new(
        name: impl Into<String>,
        units: impl Into<String>,
        data: ArrayD<f64>,
        axes: Vec<CoordinateAxis>,
    ) -> StraitResult<Self> {
        if axes.len() != data.ndim() {
            return Err(StraitError::AxisCount {
                dims: data.ndim(),
                axes: axes.len(),
            });
        }
        for (dim, axis) in axes.iter().enumerate() {
            let dim_len = data.shape()[dim];
            if axis.values.len() != dim_len {
                return Err(StraitError::AxisMismatch {
                    axis: axis.name.clone(),
                    axis_len: axis.values.len(),
                    dim,
                    dim_len,
                });
            }
        }

        Ok(Self {
            name: name.into(),
            units: units.into(),
            data,
            axes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn axes(&self) -> &[CoordinateAxis] {
        &self.axes
    }

    /// The axis labeling dimension `dim`, if present
    pub fn axis(&self, dim: usize) -> Option<&CoordinateAxis> {
        self.axes.get(dim)
    }

    /// Flatten and clean the grid into a statistical sample
    ///
    /// Missing cells (NaN) are dropped; an all-missing field yields an
    /// empty sample.
    pub fn sample(&self) -> Sample {
        Sample::clean(self.data.iter().copied())
    }

    /// Elementwise difference `self - baseline` on an identical grid
    ///
    /// Cells missing in either input stay missing in the anomaly. The
    /// result reuses this field's axes and units.
    ///
    /// # Errors
    ///
    /// [`StraitError::ShapeMismatch`] if the grid shapes differ.
    pub fn anomaly(&self, baseline: &Field) -> StraitResult<Field> {
        if self.shape() != baseline.shape() {
            return Err(StraitError::ShapeMismatch {
                expected: self.shape().to_vec(),
                actual: baseline.shape().to_vec(),
            });
        }

        Ok(Field {
            name: format!("{} anomaly", self.name),
            units: self.units.clone(),
            data: &self.data - &baseline.data,
            axes: self.axes.clone(),
        })
    }
}
