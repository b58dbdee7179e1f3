/// Per-axis traversal state: the current position and the extent at which
/// it wraps back to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCursor {
    pub position: usize,
    pub extent: usize,
}

/// Odometer over every coordinate of a rank-`R` grid, axis 0 fastest.
///
/// Each cursor starts at `(0, extent)` and is incremented independently
/// with carry: when axis k wraps it resets to 0 and axis k+1 advances.
/// The visit order matches flat storage order (offset 0, 1, 2, ...).
#[derive(Debug, Clone)]
pub struct Odometer<const R: usize> {
    cursors: [AxisCursor; R],
    exhausted: bool,
}

impl<const R: usize> Odometer<R> {
    pub fn new(extents: [usize; R]) -> Self {
        let mut cursors = [AxisCursor {
            position: 0,
            extent: 0,
        }; R];
        // Each axis gets its own cursor slot; initializing them all at a
        // single index would collapse the odometer to one dimension.
        for (axis, cursor) in cursors.iter_mut().enumerate() {
            cursor.extent = extents[axis];
        }
        let exhausted = cursors.iter().any(|c| c.extent == 0);
        Self { cursors, exhausted }
    }

    /// Current state of every axis, in axis order.
    pub fn cursors(&self) -> &[AxisCursor] {
        &self.cursors
    }

    /// Current coordinate.
    pub fn coordinate(&self) -> [usize; R] {
        let mut out = [0; R];
        for (axis, cursor) in self.cursors.iter().enumerate() {
            out[axis] = cursor.position;
        }
        out
    }

    /// Step to the next coordinate. Returns `false` once every axis has
    /// wrapped, i.e. all coordinates have been visited.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for cursor in self.cursors.iter_mut() {
            cursor.position += 1;
            if cursor.position < cursor.extent {
                return true;
            }
            cursor.position = 0;
        }
        self.exhausted = true;
        false
    }
}

impl<const R: usize> Iterator for Odometer<R> {
    type Item = [usize; R];

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let coord = self.coordinate();
        self.advance();
        Some(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_initialized_per_axis() {
        let odo = Odometer::new([2, 3, 4]);
        let extents: Vec<usize> = odo.cursors().iter().map(|c| c.extent).collect();
        assert_eq!(extents, vec![2, 3, 4]);
        assert!(odo.cursors().iter().all(|c| c.position == 0));
    }

    #[test]
    fn axis_zero_advances_fastest() {
        let coords: Vec<[usize; 2]> = Odometer::new([2, 3]).collect();
        assert_eq!(
            coords,
            vec![[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2]]
        );
    }

    #[test]
    fn visits_every_coordinate_once() {
        let coords: Vec<[usize; 3]> = Odometer::new([2, 3, 4]).collect();
        assert_eq!(coords.len(), 24);
        let mut dedup = coords.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 24);
    }

    #[test]
    fn advance_carries_and_terminates() {
        let mut odo = Odometer::new([2, 2]);
        assert_eq!(odo.coordinate(), [0, 0]);
        assert!(odo.advance());
        assert_eq!(odo.coordinate(), [1, 0]);
        assert!(odo.advance());
        assert_eq!(odo.coordinate(), [0, 1]);
        assert!(odo.advance());
        assert_eq!(odo.coordinate(), [1, 1]);
        assert!(!odo.advance());
        assert!(!odo.advance());
    }

    #[test]
    fn rank_one_counts_up() {
        let coords: Vec<[usize; 1]> = Odometer::new([4]).collect();
        assert_eq!(coords, vec![[0], [1], [2], [3]]);
    }

    #[test]
    fn zero_extent_yields_nothing() {
        let coords: Vec<[usize; 2]> = Odometer::new([2, 0]).collect();
        assert!(coords.is_empty());
    }
}
