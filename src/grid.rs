use std::ops::{Index, IndexMut};

use crate::constraint::ConstraintTable;
use crate::error::GridError;
use crate::odometer::{AxisCursor, Odometer};

/* ========================= DenseGrid ========================= */

/// Fixed-rank dense multi-dimensional array.
///
/// The rank `R` is a type-level constant; the extent of each axis is
/// chosen at construction and fixed for the life of the value. Elements
/// live in one contiguous buffer of length `Π extent`, addressed through
/// the constraint table's coordinate↔offset codec.
///
/// Accessors do not validate per-axis positions: an out-of-range
/// coordinate maps to a wrong (possibly out-of-range) offset. This is a
/// deliberate trade for speed; use [`try_get`](Self::try_get) and
/// [`try_get_mut`](Self::try_get_mut) when validation is wanted.
#[derive(Debug, Clone)]
pub struct DenseGrid<T, const R: usize> {
    table: ConstraintTable<R>,
    data: Vec<T>,
}

impl<T, const R: usize> DenseGrid<T, R> {
    /// Build a grid with every element default-initialized.
    ///
    /// `extents` must contain exactly `R` positive values; see
    /// [`ConstraintTable::new`] for the failure cases.
    pub fn new(extents: &[usize]) -> Result<Self, GridError>
    where
        T: Default + Clone,
    {
        let table = ConstraintTable::new(extents)?;
        let data = vec![T::default(); table.size()];
        Ok(Self { table, data })
    }

    /// Build a grid and populate it in one pass.
    ///
    /// Equivalent to [`new`](Self::new) followed by
    /// [`fill_with`](Self::fill_with), but without the `Default` bound.
    pub fn with_fill<F>(extents: &[usize], mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(&[AxisCursor]) -> T,
    {
        let table = ConstraintTable::new(extents)?;
        let mut odo = Odometer::new(table.extents());
        let mut data = Vec::with_capacity(table.size());
        for _ in 0..table.size() {
            data.push(f(odo.cursors()));
            odo.advance();
        }
        Ok(Self { table, data })
    }

    pub const fn rank(&self) -> usize {
        R
    }

    /// Extent of one axis.
    pub fn extent(&self, axis: usize) -> usize {
        self.table.extent(axis)
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn table(&self) -> &ConstraintTable<R> {
        &self.table
    }

    /// Elements in flat storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /* ---------- element access ---------- */

    /// Reference to the element at `coord`. Positions are not validated.
    #[inline(always)]
    pub fn get(&self, coord: &[usize; R]) -> &T {
        &self.data[self.table.offset_of(coord)]
    }

    /// Mutable reference to the element at `coord`. Positions are not
    /// validated; the caller may read and write through the handle.
    #[inline(always)]
    pub fn get_mut(&mut self, coord: &[usize; R]) -> &mut T {
        let offset = self.table.offset_of(coord);
        &mut self.data[offset]
    }

    /// Overwrite the element at `coord`.
    #[inline(always)]
    pub fn set(&mut self, coord: &[usize; R], value: T) {
        let offset = self.table.offset_of(coord);
        self.data[offset] = value;
    }

    /// Checked access: `None` when any position is outside its extent or
    /// the grid has been erased.
    pub fn try_get(&self, coord: &[usize; R]) -> Option<&T> {
        let offset = self.table.checked_offset_of(coord)?;
        self.data.get(offset)
    }

    /// Checked mutable access.
    pub fn try_get_mut(&mut self, coord: &[usize; R]) -> Option<&mut T> {
        let offset = self.table.checked_offset_of(coord)?;
        self.data.get_mut(offset)
    }

    /// Reference to the element at `coord`, skipping the storage bounds
    /// check as well.
    ///
    /// # Safety
    /// Every position in `coord` must be within its axis's extent and the
    /// grid must not have been erased.
    pub unsafe fn get_unchecked(&self, coord: &[usize; R]) -> &T {
        self.data.get_unchecked(self.table.offset_of(coord))
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// Same requirements as [`get_unchecked`](Self::get_unchecked).
    pub unsafe fn get_unchecked_mut(&mut self, coord: &[usize; R]) -> &mut T {
        let offset = self.table.offset_of(coord);
        self.data.get_unchecked_mut(offset)
    }

    /* ---------- traversal fill ---------- */

    /// Repopulate every element by walking all coordinates once, axis 0
    /// fastest, in flat storage order.
    ///
    /// The callback sees the current per-axis `(position, extent)` cursors
    /// before each slot is written and is invoked exactly `len()` times.
    /// It cannot mutate the traversal state.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&[AxisCursor]) -> T,
    {
        let mut odo = Odometer::new(self.table.extents());
        for slot in self.data.iter_mut() {
            *slot = f(odo.cursors());
            odo.advance();
        }
    }

    /* ---------- lifecycle ---------- */

    /// Drop all constraints and storage. The grid keeps its type-level
    /// rank but holds no axes and no elements; accessing it afterwards
    /// without repopulating is the caller's responsibility.
    pub fn erase(&mut self) {
        self.table.clear();
        self.data.clear();
    }
}

impl<T, const R: usize> Index<[usize; R]> for DenseGrid<T, R> {
    type Output = T;

    #[inline(always)]
    fn index(&self, coord: [usize; R]) -> &T {
        self.get(&coord)
    }
}

impl<T, const R: usize> IndexMut<[usize; R]> for DenseGrid<T, R> {
    #[inline(always)]
    fn index_mut(&mut self, coord: [usize; R]) -> &mut T {
        self.get_mut(&coord)
    }
}

/* ========================= Tests ========================= */


#[cfg(test)]
mod randomized {
    use super::*;
    use rand::Rng;

    #[test]
    fn roundtrip_randomized() {
        let mut rng = rand::rng();

        for _ in 0..20 {
            let extents = [
                rng.random_range(1..6),
                rng.random_range(1..6),
                rng.random_range(1..6),
            ];
            let g = DenseGrid::<usize, 3>::with_fill(&extents, |cursors| {
                cursors.iter().map(|c| c.position).sum()
            })
            .unwrap();

            assert_eq!(g.len(), extents.iter().product::<usize>());

            for coord in Odometer::new(extents) {
                let offset = g.table().offset_of(&coord);
                assert_eq!(g.table().coord_of(offset), coord);
                assert_eq!(*g.get(&coord), coord.iter().sum::<usize>());
            }
        }
    }

    #[test]
    fn random_writes_land_where_expected() {
        let mut rng = rand::rng();
        let mut g = DenseGrid::<u64, 2>::new(&[8, 8]).unwrap();

        for _ in 0..100 {
            let coord = [rng.random_range(0..8), rng.random_range(0..8)];
            let value = rng.random::<u64>();
            g.set(&coord, value);
            assert_eq!(*g.get(&coord), value);
            assert_eq!(g.as_slice()[g.table().offset_of(&coord)], value);
        }
    }
}
