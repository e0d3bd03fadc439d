//! Common test utilities
#![allow(dead_code)]

use gla::prelude::*;

/// Build a tensor from literal data, panicking on a bad shape
pub fn tensor(data: &[f64], shape: &[usize]) -> Tensor {
    Tensor::from_vec(data.to_vec(), shape).expect("valid test tensor")
}

/// Assert the element-count invariant holds
pub fn assert_consistent(t: &Tensor) {
    assert_eq!(
        t.data().len(),
        t.shape().iter().product::<usize>(),
        "element count does not match shape {}",
        t.shape()
    );
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Naive triple-loop matrix product used as a reference
pub fn reference_matmul(a: &Tensor, b: &Tensor) -> Vec<f64> {
    let (m, k, n) = (a.shape()[0], a.shape()[1], b.shape()[1]);
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            for kk in 0..k {
                out[i * n + j] += a.get(&[i, kk]).unwrap() * b.get(&[kk, j]).unwrap();
            }
        }
    }
    out
}
