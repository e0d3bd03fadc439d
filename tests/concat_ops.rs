//! Integration tests for concat and augment_matrix

mod common;

use common::{assert_consistent, tensor};
use gla::ops::concat_permutation;
use gla::prelude::*;

#[test]
fn test_concat_dim0() {
    let a = tensor(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = tensor(&[5.0, 6.0, 7.0, 8.0], &[2, 2]);

    let result = a.concat(&b, 0).unwrap();

    assert_eq!(result.shape().as_slice(), &[4, 2]);
    assert_eq!(result.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn test_concat_dim1() {
    let a = tensor(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = tensor(&[5.0, 6.0, 7.0, 8.0], &[2, 2]);

    let result = a.concat(&b, 1).unwrap();

    assert_eq!(result.shape().as_slice(), &[2, 4]);
    assert_eq!(result.data(), &[1.0, 2.0, 5.0, 6.0, 3.0, 4.0, 7.0, 8.0]);
}

#[test]
fn test_concat_3d_middle_axis() {
    // Shape [2, 2, 2]
    let a = tensor(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], &[2, 2, 2]);
    let b = tensor(&[9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0], &[2, 2, 2]);

    let result = a.concat(&b, 1).unwrap();

    assert_eq!(result.shape().as_slice(), &[2, 4, 2]);
    assert_eq!(
        result.data(),
        &[
            1.0, 2.0, 3.0, 4.0, 9.0, 10.0, 11.0, 12.0, 5.0, 6.0, 7.0, 8.0, 13.0, 14.0, 15.0,
            16.0
        ]
    );
    assert_consistent(&result);
}

#[test]
fn test_concat_uneven_sizes_last_axis() {
    let a = Tensor::arange(&[2, 3, 2]).unwrap();
    let b = Tensor::full(&[2, 3, 3], 100.0).unwrap();

    let result = a.concat(&b, 2).unwrap();

    assert_eq!(result.shape().as_slice(), &[2, 3, 5]);
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..5 {
                let expected = if k < 2 {
                    a.get(&[i, j, k]).unwrap()
                } else {
                    100.0
                };
                assert_eq!(result.get(&[i, j, k]).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_general_axis_matches_manual_transpose_path() {
    let a = Tensor::arange(&[3, 2, 4]).unwrap();
    let b = Tensor::arange(&[3, 5, 4]).unwrap();
    let axes = concat_permutation(3, 1);

    let manual = a
        .transpose(&axes)
        .unwrap()
        .concat(&b.transpose(&axes).unwrap(), 0)
        .unwrap()
        .transpose(&axes)
        .unwrap();
    let direct = a.concat(&b, 1).unwrap();

    assert_eq!(direct, manual);
}

#[test]
fn test_concat_errors() {
    let a = Tensor::arange(&[2, 2]).unwrap();
    let b = Tensor::arange(&[2]).unwrap();
    let c = Tensor::arange(&[3, 3]).unwrap();

    assert!(matches!(a.concat(&b, 0), Err(Error::RankMismatch { .. })));
    assert!(matches!(a.concat(&a, 5), Err(Error::InvalidAxis { axis: 5, .. })));
    assert!(matches!(a.concat(&c, 0), Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_augment_matrix() {
    let a = tensor(&[2.0, 1.0, 1.0, 3.0], &[2, 2]);
    let rhs = tensor(&[5.0, 10.0], &[2, 1]);

    let aug = augment_matrix(&a, &rhs).unwrap();

    assert_eq!(aug.shape().as_slice(), &[2, 3]);
    assert_eq!(aug.data(), &[2.0, 1.0, 5.0, 1.0, 3.0, 10.0]);
    assert!(matches!(
        augment_matrix(&a, &Tensor::arange(&[2, 1, 1]).unwrap()),
        Err(Error::Rank { .. })
    ));
}
