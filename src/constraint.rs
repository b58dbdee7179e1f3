use std::fmt;

use crate::error::GridError;

/// One axis of the constraint table: the extent (number of valid positions)
/// and the stride used to fold a position on this axis into a flat offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConstraint {
    pub extent: usize,
    pub stride: usize,
}

/// Constraint table = mapping from coordinates → linear offset
///
/// Ordered per-axis (extent, stride) pairs for a rank-`R` grid, fixed at
/// construction. Strides accumulate in declaration order: axis 0 has
/// stride 1 and each later axis multiplies in the extent before it, so
/// axis 0 varies fastest in flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintTable<const R: usize> {
    axes: Vec<AxisConstraint>,
    size: usize,
}

impl<const R: usize> ConstraintTable<R> {
    /// Validate `extents` and derive the stride table.
    ///
    /// Fails with [`GridError::DimensionCountMismatch`] when the slice
    /// length is not `R`, and with [`GridError::ZeroExtent`] when any
    /// extent is 0. On failure nothing is retained.
    pub fn new(extents: &[usize]) -> Result<Self, GridError> {
        if extents.len() != R {
            return Err(GridError::DimensionCountMismatch {
                expected: R,
                got: extents.len(),
            });
        }

        let mut axes = Vec::with_capacity(R);
        let mut stride = 1usize;
        for (axis, &extent) in extents.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::ZeroExtent { axis });
            }
            axes.push(AxisConstraint { extent, stride });
            stride *= extent;
        }

        // After the loop `stride` is the product of all extents.
        Ok(Self { axes, size: stride })
    }

    pub const fn rank(&self) -> usize {
        R
    }

    /// Total number of addressable elements (product of all extents).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of axes currently in the table: `R`, or 0 after `clear`.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn extent(&self, axis: usize) -> usize {
        self.axes[axis].extent
    }

    pub fn stride(&self, axis: usize) -> usize {
        self.axes[axis].stride
    }

    pub fn axes(&self) -> &[AxisConstraint] {
        &self.axes
    }

    /// Extents in axis order.
    pub fn extents(&self) -> [usize; R] {
        let mut out = [0; R];
        for (axis, a) in self.axes.iter().enumerate() {
            out[axis] = a.extent;
        }
        out
    }

    /// Coordinate → flat offset: `Σ coord[i] * stride[i]`.
    ///
    /// No range validation: an out-of-range position yields an
    /// out-of-range offset, and avoiding that is the caller's job.
    #[inline(always)]
    pub fn offset_of(&self, coord: &[usize; R]) -> usize {
        coord
            .iter()
            .zip(self.axes.iter())
            .map(|(c, a)| c * a.stride)
            .sum()
    }

    /// Checked form of [`offset_of`](Self::offset_of): `None` when any
    /// axis position is outside its extent (or the table was cleared).
    pub fn checked_offset_of(&self, coord: &[usize; R]) -> Option<usize> {
        if self.axes.len() != R {
            return None;
        }
        let mut offset = 0;
        for (c, a) in coord.iter().zip(self.axes.iter()) {
            if *c >= a.extent {
                return None;
            }
            offset += c * a.stride;
        }
        Some(offset)
    }

    /// Flat offset → coordinate, the inverse of [`offset_of`](Self::offset_of).
    ///
    /// Each axis digit is recovered independently as
    /// `(offset / stride) % extent`, so no shared accumulator is involved.
    pub fn coord_of(&self, offset: usize) -> [usize; R] {
        let mut coord = [0; R];
        for (axis, a) in self.axes.iter().enumerate() {
            coord[axis] = (offset / a.stride) % a.extent;
        }
        coord
    }

    /// Empty the table. Used by `DenseGrid::erase`; the table holds no
    /// axes afterwards and every checked lookup fails.
    pub(crate) fn clear(&mut self) {
        self.axes.clear();
        self.size = 0;
    }
}

/// Prints the extents tuple, e.g. `(2,3,4)`.
impl<const R: usize> fmt::Display for ConstraintTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.axes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", a.extent)?;
        }
        write!(f, ")")
    }
}
