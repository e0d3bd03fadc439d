//! Property-based tests for the index mapping and shape transforms
//!
//! Uses proptest to check the algebraic laws the engine relies on across
//! randomly generated shapes.

use gla::ops::concat_permutation;
use gla::prelude::*;
use proptest::prelude::*;

// Strategy for generating valid tensor shapes (1-4D, small sizes, unit dims included)
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..6, 1..=4)
}

// A shape plus an axis inside it
fn shape_and_axis() -> impl Strategy<Value = (Vec<usize>, usize)> {
    shape_strategy().prop_flat_map(|shape| {
        let ndim = shape.len();
        (Just(shape), 0..ndim)
    })
}

// A shape plus two (possibly equal) axes inside it
fn shape_and_two_axes() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
    shape_strategy().prop_flat_map(|shape| {
        let ndim = shape.len();
        (Just(shape), 0..ndim, 0..ndim)
    })
}

proptest! {
    #[test]
    fn prop_unravel_round_trip(shape in shape_strategy()) {
        let count: usize = shape.iter().product();
        for f in 0..count {
            let idx = unravel(f, &shape).unwrap();
            prop_assert_eq!(flat_offset(&idx, &shape).unwrap(), f);
        }
    }

    #[test]
    fn prop_reshape_preserves_data(shape in shape_strategy()) {
        let a = Tensor::arange(&shape).unwrap();
        let flat = a.reshape(&[a.len()]).unwrap();
        prop_assert_eq!(flat.data(), a.data());

        let mut reversed = shape.clone();
        reversed.reverse();
        let r = a.reshape(&reversed).unwrap();
        prop_assert_eq!(r.data(), a.data());
        prop_assert_eq!(r.shape().as_slice(), reversed.as_slice());
    }

    #[test]
    fn prop_swap_transpose_is_involution((shape, i, j) in shape_and_two_axes()) {
        let a = Tensor::arange(&shape).unwrap();
        let mut p: Vec<usize> = (0..shape.len()).collect();
        p.swap(i, j);

        let once = a.transpose(&p).unwrap();
        let mut swapped = shape.clone();
        swapped.swap(i, j);
        prop_assert_eq!(once.shape().as_slice(), swapped.as_slice());

        let twice = once.transpose(&p).unwrap();
        prop_assert_eq!(twice, a);
    }

    #[test]
    fn prop_concat_matches_transpose_path((shape, axis) in shape_and_axis(), extra in 1usize..4) {
        let a = Tensor::arange(&shape).unwrap();
        let mut b_shape = shape.clone();
        b_shape[axis] = extra;
        let b = Tensor::full(&b_shape, -1.0).unwrap();

        let p = concat_permutation(shape.len(), axis);
        let manual = a.transpose(&p).unwrap()
            .concat(&b.transpose(&p).unwrap(), 0).unwrap()
            .transpose(&p).unwrap();
        let direct = a.concat(&b, axis).unwrap();

        prop_assert_eq!(direct.shape().as_slice()[axis], shape[axis] + extra);
        prop_assert_eq!(direct, manual);
    }

    #[test]
    fn prop_element_count_invariant((shape, axis) in shape_and_axis(), n in 1usize..4) {
        let a = Tensor::arange(&shape).unwrap();
        let mut reversed: Vec<usize> = (0..shape.len()).collect();
        reversed.reverse();

        let results = [
            a.transpose(&reversed).unwrap(),
            a.concat(&a, axis).unwrap(),
            a.extend(n).unwrap(),
            a.partial(&SliceSpec::new(shape.iter().map(|&d| SliceRange::start_at(d / 2)))).unwrap(),
        ];
        for t in &results {
            prop_assert_eq!(t.data().len(), t.shape().iter().product::<usize>());
        }
    }
}
