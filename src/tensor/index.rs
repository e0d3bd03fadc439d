//! Odometer iteration over a multi-index space

use super::layout::MultiIndex;
use smallvec::smallvec;

/// Iterator over every multi-index of a shape in row-major order
///
/// The last dimension is incremented first and carries into the more
/// significant ones, so the n-th item is the multi-index of flat offset n.
/// Works for any rank without recursion.
#[derive(Debug, Clone)]
pub struct MultiIndexIter<'a> {
    shape: &'a [usize],
    current: MultiIndex,
    done: bool,
}

impl<'a> MultiIndexIter<'a> {
    /// Start at the all-zero index of `shape`
    pub fn new(shape: &'a [usize]) -> Self {
        Self {
            shape,
            current: smallvec![0; shape.len()],
            done: shape.is_empty() || shape.contains(&0),
        }
    }

    /// Advance the odometer by one step. Returns false once it wraps around.
    fn step(&mut self) -> bool {
        for d in (0..self.shape.len()).rev() {
            self.current[d] += 1;
            if self.current[d] < self.shape[d] {
                return true;
            }
            self.current[d] = 0;
        }
        false
    }
}

impl Iterator for MultiIndexIter<'_> {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.current.clone();
        self.done = !self.step();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::unravel;

    #[test]
    fn test_odometer_order() {
        let items: Vec<Vec<usize>> = MultiIndexIter::new(&[2, 3])
            .map(|i| i.to_vec())
            .collect();
        assert_eq!(
            items,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2]
            ]
        );
    }

    #[test]
    fn test_matches_unravel() {
        let shape = [3, 1, 2, 4];
        for (flat, idx) in MultiIndexIter::new(&shape).enumerate() {
            assert_eq!(idx, unravel(flat, &shape).unwrap());
        }
        assert_eq!(MultiIndexIter::new(&shape).count(), 24);
    }

    #[test]
    fn test_empty_shape_yields_nothing() {
        assert_eq!(MultiIndexIter::new(&[]).count(), 0);
    }
}
